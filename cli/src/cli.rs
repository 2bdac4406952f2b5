//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::AppContext;
use crate::commands;

/// AppDynamics buildpack extension
#[derive(Parser)]
#[command(
    name = "appdx",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether an AppDynamics service is bound
    Detect,

    /// Install the agent package and assemble its wiring
    Supply(commands::supply::SupplyArgs),

    /// Print the service environment
    Env,

    /// Print process-management directives
    Commands,

    /// Print the preprocess command sequence
    Preprocess,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let app = AppContext::new(no_color, quiet, json);
        match command {
            Command::Detect => return Ok(commands::detect::run(&app)),
            Command::Supply(args) => commands::supply::run(&args, &app).await?,
            Command::Env => commands::env::run(&app).await?,
            Command::Commands => commands::services::run(&app)?,
            Command::Preprocess => commands::preprocess::run(&app).await?,
            Command::Version => commands::version::run(json),
        }
        Ok(ExitCode::SUCCESS)
    }
}
