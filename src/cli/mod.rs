//
//  jiratool
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;

pub use completion::{CompletionCommand, CompletionSubcommand};

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::parse_release_date;
use crate::runner::Action;

/// jiratool - Manage Jira Cloud project versions from the command line
#[derive(Parser, Debug)]
#[command(
    name = "jiratool",
    version,
    about = "Manage Jira Cloud project versions from the command line",
    long_about = "jiratool creates, releases and inspects versions of one or more \
                  Jira Cloud projects.\n\n\
                  Without a command the projects are only checked for existence.",
    propagate_version = true,
    after_help = "Use 'jiratool <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Jira username
    #[arg(long, short = 'u', global = true, env = "JIRA_USER")]
    pub user: Option<String>,

    /// Jira API key
    #[arg(long, short = 'a', global = true, env = "JIRA_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Jira Cloud alias (https://<ALIAS>.atlassian.net)
    #[arg(long, short = 'c', global = true, env = "JIRA_CLOUD")]
    pub cloud: Option<String>,

    /// Jira project keys (comma-separated)
    #[arg(long, short = 'p', global = true, env = "JIRA_PROJECTS")]
    pub projects: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file to use instead of the default one
    #[arg(long, global = true, env = "JIRATOOL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show projects and their versions
    #[command(visible_alias = "ls")]
    Show,

    /// Create a version in every project
    #[command(visible_alias = "cv")]
    Create(CreateArgs),

    /// Release a version in every project
    #[command(visible_alias = "rv")]
    Release(ReleaseArgs),

    /// Show whether a version is released or archived
    Inspect(InspectArgs),

    /// Generate shell completion scripts
    Completion(CompletionCommand),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Name of the new version
    #[arg(value_name = "VERSION")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Name of the version to release
    #[arg(value_name = "VERSION")]
    pub name: String,

    /// Release date (YYYY-MM-DD)
    #[arg(long, short = 'd', value_parser = parse_release_date)]
    pub date: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Name of the version to inspect
    #[arg(value_name = "VERSION")]
    pub name: String,
}

impl Cli {
    /// The project action selected on the command line, if any.
    pub fn action(&self) -> Option<Action> {
        match self.command.as_ref()? {
            Commands::Show => Some(Action::Show),
            Commands::Create(args) => Some(Action::Create {
                version: args.name.clone(),
            }),
            Commands::Release(args) => Some(Action::Release {
                version: args.name.clone(),
                date: args.date.clone(),
            }),
            Commands::Inspect(args) => Some(Action::Inspect {
                version: args.name.clone(),
            }),
            Commands::Completion(_) => None,
        }
    }
}
