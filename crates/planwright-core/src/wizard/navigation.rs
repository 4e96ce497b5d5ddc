//! Step navigation and patch application for the WizardController.

use super::WizardController;
use crate::{
    error::{Result, WizardError},
    models::{PlanPatch, WizardStep},
    validation::validate_step,
};

impl WizardController {
    /// Validates the current step and moves forward by one.
    ///
    /// On success the stored errors are cleared and the new step is
    /// returned; on the last step the index stays where it is. On failure the
    /// errors are stored, the step is unchanged, and a
    /// `WizardError::FieldValidation` carrying the same errors is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use planwright_core::{WizardBuilder, WizardError, models::WizardStep};
    /// # async {
    /// let mut wizard = WizardBuilder::new().with_sample_directory().build().await?;
    /// match wizard.advance() {
    ///     Err(WizardError::FieldValidation { step, errors }) => {
    ///         assert_eq!(step, WizardStep::Overview);
    ///         assert!(errors.contains("name"));
    ///     }
    ///     other => panic!("expected field errors, got {other:?}"),
    /// }
    /// # Result::<(), WizardError>::Ok(())
    /// # };
    /// ```
    pub fn advance(&mut self) -> Result<WizardStep> {
        let errors = validate_step(self.step, &self.config);
        if !errors.is_empty() {
            log::warn!(
                "Cannot leave {}: {} invalid field(s)",
                self.step.as_str(),
                errors.len()
            );
            self.errors = errors.clone();
            return Err(WizardError::FieldValidation {
                step: self.step,
                errors,
            });
        }

        self.errors = errors;
        let from = self.step;
        self.step = from.next().unwrap_or(WizardStep::LAST);
        log::debug!("Advanced from {} to {}", from.as_str(), self.step.as_str());
        Ok(self.step)
    }

    /// Moves back by one step without validating; stays on the first step.
    pub fn retreat(&mut self) -> WizardStep {
        let from = self.step;
        self.step = from.previous().unwrap_or(WizardStep::FIRST);
        log::debug!("Retreated from {} to {}", from.as_str(), self.step.as_str());
        self.step
    }

    /// Moves directly to the step at a zero-based index.
    ///
    /// No validation runs and stored errors are left as they are. Only
    /// indices outside the step range are rejected.
    pub fn jump_to(&mut self, index: usize) -> Result<WizardStep> {
        let step = WizardStep::from_index(index).ok_or_else(|| {
            log::warn!("Rejected jump to step index {index}");
            WizardError::invalid_input("step").with_reason(format!(
                "Step index {index} is out of range (0-{})",
                WizardStep::COUNT - 1
            ))
        })?;
        Ok(self.jump_to_step(step))
    }

    /// Moves directly to a step.
    pub fn jump_to_step(&mut self, step: WizardStep) -> WizardStep {
        log::debug!("Jumped from {} to {}", self.step.as_str(), step.as_str());
        self.step = step;
        self.step
    }

    /// Merges a partial configuration into the plan.
    ///
    /// No validation runs and stored errors are left untouched, even for the
    /// fields the patch fixes; they refresh on the next `advance`.
    ///
    /// # Returns
    ///
    /// The keys whose value changed, in field declaration order
    pub fn patch(&mut self, patch: PlanPatch) -> Vec<&'static str> {
        let changed = patch.apply_to(&mut self.config);
        if !changed.is_empty() {
            log::debug!("Patched {}", changed.join(", "));
        }
        changed
    }
}
