//! Planwright CLI Application
//!
//! Command-line front end for the Planwright sales plan wizard.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{load_plan, Cli};
use log::info;
use planwright_core::WizardBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        directory_file,
        no_color,
        command,
    } = Args::parse();

    let configuration = command
        .as_ref()
        .and_then(Commands::config_path)
        .map(load_plan)
        .transpose()?;

    let wizard = WizardBuilder::new()
        .with_directory_path(directory_file)
        .with_configuration(configuration)
        .build()
        .await
        .context("Failed to initialize wizard")?;

    let cli = Cli::new(wizard, TerminalRenderer::new(!no_color));

    info!("Planwright started");

    match command {
        Some(Steps) | None => cli.list_steps(),
        Some(Defaults) => cli.print_defaults(),
        Some(Validate(args)) => cli.validate(&args),
        Some(Review(_)) => cli.review(),
        Some(Directory(args)) => cli.directory(&args),
        Some(Session(_)) => cli.run_session().await,
    }
}
