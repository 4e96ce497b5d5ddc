//! The wizard controller: one editing session over a plan configuration.
//!
//! [`WizardController`] owns the session state exclusively: the current
//! step, the [`PlanConfiguration`] being composed, the field errors of the
//! last failed `advance` and the problems of the last drift validation.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Front end     │    │ WizardController│    │   PlanStore     │
//! │ (patch, next,   │───▶│ (navigation,    │───▶│ (submit, save   │
//! │  jump, submit)  │    │  validation)    │    │  drift)         │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: assembles a controller from a directory source and an
//!   optional starting configuration
//! - [`navigation`]: `advance`, `retreat`, `jump_to` and `patch`
//! - [`session_ops`]: `cancel` and `submit`
//! - [`drift_editor`]: the drift-settings editor borrowed from a controller
//!
//! # Usage
//!
//! ```rust
//! use planwright_core::{WizardBuilder, models::{PlanPatch, WizardStep}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().with_sample_directory().build().await?;
//!
//! // The overview step has required fields, so advancing fails at first.
//! assert!(wizard.advance().is_err());
//! assert_eq!(wizard.current_step(), WizardStep::Overview);
//!
//! wizard.patch(PlanPatch::from_json(
//!     r#"{"name": "FY25", "startDate": "2025-01-01", "endDate": "2025-12-31", "ownerId": "1"}"#,
//! )?);
//! assert_eq!(wizard.advance()?, WizardStep::Goals);
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod drift_editor;
pub mod navigation;
pub mod session_ops;

#[cfg(test)]
mod tests;

pub use builder::WizardBuilder;
pub use drift_editor::DriftEditor;

use crate::{
    directory::Directory,
    models::{PlanConfiguration, StepProgress, WizardStep},
    review::PlanReview,
    validation::ValidationErrors,
};

/// A single wizard session.
#[derive(Debug, Clone)]
pub struct WizardController {
    pub(crate) step: WizardStep,
    pub(crate) config: PlanConfiguration,
    pub(crate) errors: ValidationErrors,
    pub(crate) drift_problems: Vec<String>,
    pub(crate) directory: Directory,
}

impl WizardController {
    /// Creates a session on the first step.
    pub(crate) fn new(config: PlanConfiguration, directory: Directory) -> Self {
        Self {
            step: WizardStep::FIRST,
            config,
            errors: ValidationErrors::new(),
            drift_problems: Vec::new(),
            directory,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.step
    }

    pub fn config(&self) -> &PlanConfiguration {
        &self.config
    }

    /// Field errors stored by the last failed `advance`.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Problems recorded by the last drift validation or save.
    pub fn drift_problems(&self) -> &[String] {
        &self.drift_problems
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Progress state of every step, in order.
    pub fn progress(&self) -> Vec<(WizardStep, StepProgress)> {
        WizardStep::ALL
            .into_iter()
            .map(|step| (step, step.progress(self.step)))
            .collect()
    }

    /// Read-only review projection of the current configuration.
    pub fn review(&self) -> PlanReview {
        PlanReview::project(&self.config, &self.directory)
    }

    /// Editor for the plan's drift settings.
    pub fn drift_editor(&mut self) -> DriftEditor<'_> {
        DriftEditor::new(&mut self.config.drift, &mut self.drift_problems)
    }
}
