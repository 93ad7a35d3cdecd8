//
//  jiratool
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Rendering of command results on stdout:
//!
//! - **Table format**: human-readable output for interactive use
//! - **JSON format**: machine-readable output for scripting
//!
//! Status messages of the per-project loop are not written here; they go
//! through `tracing` to stderr.
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the available output formats
//! - [`OutputWriter`]: writes values in the selected format
//! - [`TableOutput`]: types that know how to render themselves for humans

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables and sentences.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes values in the selected [`OutputFormat`].
///
/// # Example
///
/// ```rust,ignore
/// use jiratool::output::{OutputFormat, OutputWriter};
///
/// let writer = OutputWriter::new(OutputFormat::Json);
/// writer.write(&project)?;
/// ```
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer for `format`, detecting color support from the
    /// terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    /// Writes a single value to stdout.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", self.render(value)?);
        Ok(())
    }

    /// Renders a value without printing it.
    pub fn render<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<String> {
        match self.format {
            OutputFormat::Json => to_json_pretty(value),
            OutputFormat::Table => Ok(value.render_table(self.color)),
        }
    }
}

/// Types that can be rendered for human readers.
pub trait TableOutput {
    /// Renders the value as text, with ANSI colors if `color` is set.
    fn render_table(&self, color: bool) -> String;
}

/// Formats a `key: value` line, dimming the key when colors are enabled.
pub fn format_field(key: &str, value: &str, color: bool) -> String {
    use console::style;
    if color {
        format!("{}: {}", style(key).dim(), value)
    } else {
        format!("{}: {}", key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
    }

    impl TableOutput for Sample {
        fn render_table(&self, color: bool) -> String {
            format_field("Name", &self.name, color)
        }
    }

    #[test]
    fn test_render_by_format() {
        let sample = Sample {
            name: "2021-02".to_string(),
        };

        let table = OutputWriter {
            format: OutputFormat::Table,
            color: false,
        };
        assert_eq!(table.render(&sample).unwrap(), "Name: 2021-02");

        let json = OutputWriter {
            format: OutputFormat::Json,
            color: false,
        };
        assert_eq!(
            json.render(&sample).unwrap(),
            "{\n  \"name\": \"2021-02\"\n}"
        );
    }

    #[test]
    fn test_default_format() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
