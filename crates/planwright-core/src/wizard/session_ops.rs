//! Session-level operations: cancelling and submitting a plan.

use super::WizardController;
use crate::{
    confirm::{Confirm, CANCEL_PROMPT},
    error::{Result, WizardError},
    models::{PlanConfiguration, WizardStep},
    store::PlanStore,
    validation::ValidationErrors,
};

impl WizardController {
    /// Resets the session after confirmation.
    ///
    /// On yes the controller returns to the first step with a default
    /// configuration and no stored errors or drift problems. The directory is
    /// kept.
    ///
    /// # Returns
    ///
    /// Whether the session was reset
    pub fn cancel<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        if !confirm.confirm(CANCEL_PROMPT) {
            log::debug!("Cancel declined");
            return false;
        }

        self.step = WizardStep::FIRST;
        self.config = PlanConfiguration::default();
        self.errors = ValidationErrors::new();
        self.drift_problems.clear();
        log::info!("Wizard session cancelled and reset");
        true
    }

    /// Hands the complete configuration to the store.
    ///
    /// Only allowed on the final step. A store failure surfaces as
    /// `WizardError::Persistence` and leaves the session untouched and
    /// editable.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::InvalidInput` when called before the review step
    /// Returns `WizardError::Persistence` when the store rejects the plan
    pub async fn submit<S: PlanStore + ?Sized>(&self, store: &S) -> Result<()> {
        if self.step != WizardStep::LAST {
            log::warn!("Submit rejected on step {}", self.step.as_str());
            return Err(WizardError::invalid_input("step").with_reason(format!(
                "Plans can only be submitted from the {} step",
                WizardStep::LAST.title()
            )));
        }

        store.submit_plan(&self.config).await.map_err(|e| match e {
            WizardError::Persistence { .. } => e,
            other => WizardError::persistence(other),
        })?;
        log::info!("Plan '{}' submitted", self.config.name);
        Ok(())
    }
}
