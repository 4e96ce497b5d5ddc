//! Command handlers and their clap argument structures.
//!
//! Each subcommand gets a small `#[derive(Args)]` struct; [`Cli`] owns the
//! wizard and the renderer and turns the core's markdown `Display` output
//! into terminal output:
//!
//! ```text
//! User Input → CLI Args (clap) → WizardController → Display → Renderer
//! ```

use std::{
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use clap::Args;
use log::{info, warn};
use planwright_core::{
    display::{OperationStatus, StepOverview, ValidationReport},
    validation::validate_all,
    validate_step, Directory, DriftSettings, PlanConfiguration, WizardController, WizardStep,
};

use crate::{renderer::TerminalRenderer, session::{Session, SessionInput}};

/// Validate a plan file
///
/// Runs the field rules of every step (or only `--step`) and the drift
/// settings validation. Exits with a non-zero status when anything fails.
#[derive(Args)]
pub struct ValidateArgs {
    #[arg(short, long, help = "Path to the plan JSON file")]
    pub config: PathBuf,
    #[arg(
        short,
        long,
        help = "Only validate this step (number 1-7 or slug, e.g. 'goals')"
    )]
    pub step: Option<WizardStep>,
}

/// Print the review summary of a plan file
#[derive(Args)]
pub struct ReviewArgs {
    #[arg(short, long, help = "Path to the plan JSON file")]
    pub config: PathBuf,
}

/// Run a wizard session
///
/// Reads one command per line from stdin. Type `help` inside the session for
/// the list of commands. On a terminal confirmations are yes/no dialogs;
/// piped input answers them with the next line, where `y` or `yes` confirms.
#[derive(Args)]
pub struct SessionArgs {
    #[arg(short, long, help = "Start from this plan JSON file instead of a blank plan")]
    pub config: Option<PathBuf>,
}

/// Print the active directory
///
/// The active directory is `--directory-file`, the XDG config file, or the
/// built-in sample, in that order.
#[derive(Args)]
pub struct DirectoryArgs {
    #[arg(
        short,
        long,
        help = "Write the active directory to $XDG_CONFIG_HOME/planwright/directory.json"
    )]
    pub write: bool,
}

/// Reads a plan configuration from a JSON file.
///
/// Roles and quotas of members missing from `participants` are dropped.
pub fn load_plan(path: &Path) -> Result<PlanConfiguration> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file {}", path.display()))?;
    let mut plan: PlanConfiguration = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse plan file {}", path.display()))?;
    for key in plan.drop_orphan_assignments() {
        warn!(
            "{}: ignoring {key} of members who are not participants",
            path.display()
        );
    }
    Ok(plan)
}

/// Front end tying the wizard to the terminal.
pub struct Cli {
    wizard: WizardController,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(wizard: WizardController, renderer: TerminalRenderer) -> Self {
        Self { wizard, renderer }
    }

    pub fn list_steps(&self) -> Result<()> {
        let overview = StepOverview::from(self.wizard.progress());
        self.renderer.render(&overview.to_string())
    }

    pub fn print_defaults(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&DriftSettings::default())
            .context("Failed to serialize drift defaults")?;
        println!("{json}");
        Ok(())
    }

    pub fn validate(&self, args: &ValidateArgs) -> Result<()> {
        let plan = self.wizard.config();
        let failures = match args.step {
            Some(step) => {
                let errors = validate_step(step, plan);
                if errors.is_empty() {
                    Vec::new()
                } else {
                    vec![(step, errors)]
                }
            }
            None => validate_all(plan),
        };
        let problems = match args.step {
            Some(step) if step != WizardStep::Drift => Vec::new(),
            _ => plan.drift.validate(),
        };

        let mut output = String::new();
        for (step, errors) in &failures {
            output.push_str(&ValidationReport::new(*step, errors).to_string());
            output.push('\n');
        }
        if !problems.is_empty() {
            output.push_str(&format!("## {} settings\n\n", WizardStep::Drift));
            for problem in &problems {
                output.push_str(&format!("- {problem}\n"));
            }
            output.push('\n');
        }

        if failures.is_empty() && problems.is_empty() {
            let scope = args.step.map_or("Plan".to_string(), |step| step.to_string());
            return self
                .renderer
                .render(&OperationStatus::success(format!("{scope} is valid")).to_string());
        }

        self.renderer.render(&output)?;
        bail!(
            "Validation failed: {} step(s) with field errors, {} drift problem(s)",
            failures.len(),
            problems.len()
        )
    }

    pub fn review(&self) -> Result<()> {
        self.renderer.render(&self.wizard.review().to_string())
    }

    pub fn directory(&self, args: &DirectoryArgs) -> Result<()> {
        let directory = self.wizard.directory();
        if !args.write {
            let json = serde_json::to_string_pretty(directory)
                .context("Failed to serialize directory")?;
            println!("{json}");
            return Ok(());
        }

        let path = Directory::default_path().context("Failed to locate directory file")?;
        directory
            .save(&path)
            .with_context(|| format!("Failed to write directory to {}", path.display()))?;
        info!("Directory written to {}", path.display());
        self.renderer.render(
            &OperationStatus::success(format!("Directory written to {}", path.display()))
                .to_string(),
        )
    }

    /// Runs an interactive session on a terminal, or a scripted one when
    /// stdin is piped.
    pub async fn run_session(self) -> Result<()> {
        let stdin = io::stdin();
        let input = if stdin.is_terminal() {
            SessionInput::interactive()?
        } else {
            SessionInput::script(stdin.lock())
        };
        Session::new(self.wizard, self.renderer, input).run().await
    }
}
