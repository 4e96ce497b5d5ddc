use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::cli::{DirectoryArgs, ReviewArgs, SessionArgs, ValidateArgs};

/// Command-line front end for the Planwright sales plan wizard
///
/// Planwright walks a sales plan through seven steps: overview, goals and
/// targets, reps and teams, audience, channels and strategies, drift
/// detection, and a final review. Plans are exchanged as camelCase JSON
/// files; people, teams and option lists come from a directory file.
#[derive(Parser)]
#[command(version, about, name = "planwright")]
pub struct Args {
    /// Path to the directory JSON file. Defaults to
    /// $XDG_CONFIG_HOME/planwright/directory.json, then to the built-in
    /// sample directory
    #[arg(long, global = true)]
    pub directory_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Planwright CLI
#[derive(Subcommand)]
pub enum Commands {
    /// List the wizard steps and their slugs
    Steps,
    /// Print the default drift-detection settings as JSON
    Defaults,
    /// Validate a plan file
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Print the review summary of a plan file
    #[command(alias = "r")]
    Review(ReviewArgs),
    /// Run a line-oriented wizard session reading commands from stdin
    #[command(alias = "s")]
    Session(SessionArgs),
    /// Print the active directory, or install it as the default
    Directory(DirectoryArgs),
}

impl Commands {
    /// The plan file a command starts from, if any.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Commands::Validate(args) => Some(args.config.as_path()),
            Commands::Review(args) => Some(args.config.as_path()),
            Commands::Session(args) => args.config.as_deref(),
            Commands::Steps | Commands::Defaults | Commands::Directory(_) => None,
        }
    }
}
