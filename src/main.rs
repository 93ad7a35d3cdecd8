//
//  jiratool
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jiratool::api::JiraClient;
use jiratool::cli::{Cli, Commands};
use jiratool::config::{read_config_file, Config, ConfigError, Settings};
use jiratool::output::{OutputFormat, OutputWriter};
use jiratool::{exit_codes, runner};

#[tokio::main]
async fn main() {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) if e.downcast_ref::<ConfigError>().is_some() => {
            eprintln!("{e}");
            eprintln!("{}", Cli::command().render_usage());
            exit_codes::USAGE
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("JIRATOOL_LOG")
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolves the configuration and processes all projects
async fn run(cli: Cli) -> Result<i32> {
    if let Some(Commands::Completion(cmd)) = &cli.command {
        cmd.run()?;
        return Ok(exit_codes::SUCCESS);
    }

    let global = &cli.global;
    let config = match &global.config {
        Some(path) => read_config_file(path)?,
        None => Config::load()?,
    };
    let settings = Settings::resolve(
        global.user.as_deref(),
        global.api_key.as_deref(),
        global.cloud.as_deref(),
        global.projects.as_deref(),
        &config,
    )?;
    debug!(cloud = %settings.cloud, projects = ?settings.projects, "settings resolved");

    let client = JiraClient::cloud(&settings.cloud, Some(settings.credentials.clone()))
        .context("Jira client could not be created")?;
    debug!(url = %client.base_url(), "using Jira site");
    let writer = if global.json {
        OutputWriter::new(OutputFormat::Json)
    } else {
        OutputWriter::table()
    };

    let action = cli.action();
    let summary = runner::run(&client, &settings.projects, action.as_ref(), &writer).await;

    Ok(if summary.all_succeeded() {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR
    })
}
