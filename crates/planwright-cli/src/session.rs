//! Wizard session driven by one command per line.
//!
//! On a terminal the session reads lines through a line editor with history;
//! piped input is read as a script. Blank lines and lines starting with `#`
//! are skipped so scripted sessions can be commented. Commands that fail
//! print an error and the session carries on. The session ends on `quit` or
//! at end of input.

mod command;
mod input;

use std::io::BufRead;

use anyhow::Result;
use log::debug;
use planwright_core::{
    display::{OperationStatus, StepOverview, StepResult, UpdateResult, ValidationReport},
    Confirm, LogStore, PlanPatch, WizardController, WizardError, WizardStep,
};

use crate::renderer::TerminalRenderer;
use command::{field_patch, DriftAction, ListField, SessionCommand, HELP};
pub use input::SessionInput;

/// Routes the wizard's confirmation prompts to the session input.
struct InputConfirm<'a, R> {
    input: &'a mut SessionInput<R>,
    renderer: &'a TerminalRenderer,
}

impl<R: BufRead> Confirm for InputConfirm<'_, R> {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.input.confirm(self.renderer, prompt)
    }
}

fn failure(message: impl Into<String>) -> String {
    OperationStatus::failure(message).to_string()
}

fn rejected(error: &WizardError) -> String {
    OperationStatus::from(error).to_string()
}

fn success(message: impl Into<String>) -> String {
    OperationStatus::success(message).to_string()
}

pub struct Session<R> {
    wizard: WizardController,
    renderer: TerminalRenderer,
    input: SessionInput<R>,
    store: LogStore,
}

impl<R: BufRead> Session<R> {
    pub fn new(
        wizard: WizardController,
        renderer: TerminalRenderer,
        input: SessionInput<R>,
    ) -> Self {
        Self {
            wizard,
            renderer,
            input,
            store: LogStore,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let step = self.wizard.current_step();
        self.renderer.render(&format!(
            "Step {} of {}: {} (type `help` for commands)\n",
            step.index() + 1,
            WizardStep::COUNT,
            step
        ))?;

        loop {
            let prompt = format!("{}> ", self.wizard.current_step().as_str());
            let Some(line) = self.input.next_line(&prompt)? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            debug!("Session command: {line}");

            let output = match line.parse::<SessionCommand>() {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.execute(command).await,
                Err(message) => failure(message),
            };
            self.renderer.render(&output)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_lines)]
    async fn execute(&mut self, command: SessionCommand) -> String {
        match command {
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Show => self.show(),
            SessionCommand::Progress => StepOverview::from(self.wizard.progress()).to_string(),
            SessionCommand::Review => self.wizard.review().to_string(),
            SessionCommand::Errors => self.errors(),
            SessionCommand::Set { field, value } => match field_patch(&field, &value) {
                Ok(patch) => self.apply(patch),
                Err(e) => rejected(&e),
            },
            SessionCommand::Toggle { list, value } => {
                let config = self.wizard.config();
                let patch = match list {
                    ListField::Teams => PlanPatch::toggle_team(config, &value),
                    ListField::Members => PlanPatch::toggle_participant(config, &value),
                    ListField::Industries => PlanPatch::toggle_industry(config, &value),
                    ListField::Regions => PlanPatch::toggle_region(config, &value),
                    ListField::Strategies => PlanPatch::toggle_strategy(config, &value),
                };
                self.apply(patch)
            }
            SessionCommand::Role { member, label } => {
                let patch = PlanPatch::set_role(self.wizard.config(), &member, &label);
                self.apply_result(patch)
            }
            SessionCommand::Quota { member, amount } => {
                let patch = PlanPatch::set_quota(self.wizard.config(), &member, amount);
                self.apply_result(patch)
            }
            SessionCommand::Size { bound, value } => {
                let patch = PlanPatch::company_size_bound(self.wizard.config(), bound, value);
                self.apply(patch)
            }
            SessionCommand::ChannelAdd {
                channel,
                percentage,
            } => {
                let patch = PlanPatch::add_channel(self.wizard.config(), &channel, percentage);
                self.apply(patch)
            }
            SessionCommand::ChannelSet {
                position,
                channel,
                percentage,
            } => match self.channel_id(position) {
                Ok(id) => {
                    let patch =
                        PlanPatch::update_channel(self.wizard.config(), &id, &channel, percentage);
                    self.apply_result(patch)
                }
                Err(message) => failure(message),
            },
            SessionCommand::ChannelRemove { position } => match self.channel_id(position) {
                Ok(id) => {
                    let patch = PlanPatch::remove_channel(self.wizard.config(), &id);
                    self.apply(patch)
                }
                Err(message) => failure(message),
            },
            SessionCommand::Metric { key, patch } => {
                self.wizard.drift_editor().set_metric(key, patch);
                success(format!("{} updated", key.label()))
            }
            SessionCommand::Expect { key, value } => {
                self.wizard.drift_editor().set_expected_value(key, value);
                success(format!(
                    "Expected {} set to {}",
                    key.label(),
                    key.baseline_unit().format(value)
                ))
            }
            SessionCommand::Notify(setting) => {
                self.wizard.drift_editor().set_notification(setting);
                success("Notification settings updated")
            }
            SessionCommand::Drift(action) => self.drift(action).await,
            SessionCommand::Next => self.next(),
            SessionCommand::Back => {
                let from = self.wizard.current_step();
                StepResult::new(from, self.wizard.retreat()).to_string()
            }
            SessionCommand::Jump(step) => {
                let from = self.wizard.current_step();
                StepResult::new(from, self.wizard.jump_to_step(step)).to_string()
            }
            SessionCommand::Cancel => {
                let mut confirm = InputConfirm {
                    input: &mut self.input,
                    renderer: &self.renderer,
                };
                if self.wizard.cancel(&mut confirm) {
                    success("Wizard reset to a blank plan")
                } else {
                    "Cancel aborted.\n".to_string()
                }
            }
            SessionCommand::Submit => match self.wizard.submit(&self.store).await {
                Ok(()) => success(format!("Plan '{}' submitted", self.wizard.config().name)),
                Err(e) => rejected(&e),
            },
            SessionCommand::Quit => String::new(),
        }
    }

    fn apply(&mut self, patch: PlanPatch) -> String {
        UpdateResult::with_changes(self.wizard.patch(patch)).to_string()
    }

    fn apply_result(&mut self, patch: planwright_core::Result<PlanPatch>) -> String {
        match patch {
            Ok(patch) => self.apply(patch),
            Err(e) => rejected(&e),
        }
    }

    /// Maps a 1-based channel number to the allocation's id.
    fn channel_id(&self, position: usize) -> std::result::Result<String, String> {
        let allocations = &self.wizard.config().channel_allocation;
        position
            .checked_sub(1)
            .and_then(|index| allocations.get(index))
            .map(|entry| entry.id.clone())
            .ok_or_else(|| {
                format!(
                    "No channel #{position}; the plan has {} channel(s)",
                    allocations.len()
                )
            })
    }

    fn show(&self) -> String {
        let step = self.wizard.current_step();
        let mut output = format!(
            "# Step {} of {}: {}\n\n",
            step.index() + 1,
            WizardStep::COUNT,
            step
        );
        match step {
            WizardStep::Review => output.push_str(&self.wizard.review().to_string()),
            WizardStep::Drift => output.push_str(&self.wizard.config().drift.to_string()),
            _ => {
                if let Some(section) = self.wizard.review().section(step) {
                    output.push_str(&section.to_string());
                }
            }
        }
        if !self.wizard.errors().is_empty() {
            output.push('\n');
            output.push_str(&ValidationReport::new(step, self.wizard.errors()).to_string());
        }
        output
    }

    fn errors(&self) -> String {
        let mut output =
            ValidationReport::new(self.wizard.current_step(), self.wizard.errors()).to_string();
        for problem in self.wizard.drift_problems() {
            output.push_str(&format!("- {problem}\n"));
        }
        output
    }

    fn next(&mut self) -> String {
        let from = self.wizard.current_step();
        match self.wizard.advance() {
            Ok(to) => StepResult::new(from, to).to_string(),
            Err(WizardError::FieldValidation { step, errors }) => format!(
                "{}\n{}",
                failure(format!("{step} is incomplete")),
                ValidationReport::new(step, &errors)
            ),
            Err(e) => rejected(&e),
        }
    }

    async fn drift(&mut self, action: DriftAction) -> String {
        match action {
            DriftAction::Validate => {
                let problems = self.wizard.drift_editor().validate().to_vec();
                if problems.is_empty() {
                    return success("Drift settings are valid");
                }
                let mut output = failure(format!("{} drift problem(s)", problems.len()));
                for problem in &problems {
                    output.push_str(&format!("- {problem}\n"));
                }
                output
            }
            DriftAction::Save => match self.wizard.drift_editor().save(&self.store).await {
                Ok(()) => success("Drift settings saved"),
                Err(e) => rejected(&e),
            },
            DriftAction::Defaults => {
                let mut confirm = InputConfirm {
                    input: &mut self.input,
                    renderer: &self.renderer,
                };
                if self.wizard.drift_editor().restore_defaults(&mut confirm) {
                    success("Drift settings restored to defaults")
                } else {
                    "Restore aborted.\n".to_string()
                }
            }
        }
    }
}
