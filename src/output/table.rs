//
//  jiratool
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tabular output using the `comfy_table` crate, plus the human-readable
//! rendering of a [`Project`] and its versions.
//!
//! ## Example
//!
//! ```rust,ignore
//! use jiratool::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .headers(["Name", "Released"])
//!     .row(["2021-01", "Ja"])
//!     .build();
//! println!("{table}");
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use super::{format_field, TableOutput};
use crate::api::Project;

/// Creates a table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are colored cyan when color is enabled.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    /// Creates an empty builder.
    ///
    /// Color follows [`console::colors_enabled`] until overridden with
    /// [`TableBuilder::color`].
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides terminal color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row.
    ///
    /// # Parameters
    ///
    /// * `headers` - Column titles, left to right
    ///
    /// # Notes
    ///
    /// Call this after [`TableBuilder::color`]; the color decision is taken
    /// when the header cells are created.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    /// Appends a data row.
    ///
    /// # Parameters
    ///
    /// * `cells` - Cell contents, one per column. Rows shorter than the
    ///   header leave the remaining cells empty.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Finishes the builder.
    ///
    /// # Returns
    ///
    /// The `comfy_table::Table`, ready to be printed with `to_string()`.
    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a boolean as Ja/Nein.
pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Ja").green().to_string()
        } else {
            style("Nein").dim().to_string()
        }
    } else if value {
        "Ja".to_string()
    } else {
        "Nein".to_string()
    }
}

impl TableOutput for Project {
    fn render_table(&self, color: bool) -> String {
        let mut lines = vec![
            format_field("Projekt", &self.key, color),
            format_field("Id", &self.id, color),
        ];
        if !self.description.is_empty() {
            lines.push(format_field("Beschreibung", &self.description, color));
        }

        if self.versions.is_empty() {
            lines.push("Keine Versionen vorhanden".to_string());
            return lines.join("\n");
        }

        let table = self
            .versions
            .iter()
            .fold(
                TableBuilder::new()
                    .color(color)
                    .headers(["Id", "Name", "Archiviert", "Released", "Release Datum"]),
                |table, version| {
                    table.row([
                        version.id.clone(),
                        version.name.clone(),
                        format_bool(version.archived, color),
                        format_bool(version.released, color),
                        version.release_date.clone().unwrap_or_default(),
                    ])
                },
            )
            .build();
        lines.push(table.to_string());
        lines.join("\n")
    }
}
