//! Editor for the drift-detection settings of a session.

use crate::{
    confirm::{Confirm, RESTORE_DEFAULTS_PROMPT},
    error::{Result, WizardError},
    models::{
        DriftSettings, MetricGroup, MetricKey, MetricPatch, NotificationSetting, SectionStatus,
    },
    store::PlanStore,
};

/// Mutable view over a plan's drift settings and the session's drift problem
/// list, obtained from [`super::WizardController::drift_editor`].
pub struct DriftEditor<'a> {
    settings: &'a mut DriftSettings,
    problems: &'a mut Vec<String>,
}

impl<'a> DriftEditor<'a> {
    pub(crate) fn new(settings: &'a mut DriftSettings, problems: &'a mut Vec<String>) -> Self {
        Self { settings, problems }
    }

    pub fn settings(&self) -> &DriftSettings {
        &*self.settings
    }

    pub fn problems(&self) -> &[String] {
        self.problems.as_slice()
    }

    pub fn set_metric(&mut self, key: MetricKey, patch: MetricPatch) {
        self.settings.set_metric(key, patch);
        log::debug!("Updated drift metric {}", key.as_str());
    }

    pub fn set_expected_value(&mut self, key: MetricKey, value: f64) {
        self.settings.set_expected_value(key, value);
        log::debug!("Updated expected {} to {value}", key.as_str());
    }

    pub fn set_notification(&mut self, setting: NotificationSetting) {
        self.settings.set_notification(setting);
    }

    /// Validates the settings and records the problems.
    pub fn validate(&mut self) -> &[String] {
        *self.problems = self.settings.validate();
        self.problems.as_slice()
    }

    /// Validates, then hands the settings to the store.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::ConfigurationValidation` without touching the
    /// store when validation fails
    /// Returns `WizardError::Persistence` when the store rejects the settings
    pub async fn save<S: PlanStore + ?Sized>(&mut self, store: &S) -> Result<()> {
        let problems = self.validate().to_vec();
        if !problems.is_empty() {
            log::warn!("Drift settings not saved: {}", problems.join("; "));
            return Err(WizardError::ConfigurationValidation { problems });
        }

        store
            .save_drift_settings(&*self.settings)
            .await
            .map_err(|e| match e {
                WizardError::Persistence { .. } => e,
                other => WizardError::persistence(other),
            })?;
        log::info!("Drift settings saved");
        Ok(())
    }

    /// Replaces every setting with the factory defaults after confirmation
    /// and clears recorded problems.
    pub fn restore_defaults<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        if !confirm.confirm(RESTORE_DEFAULTS_PROMPT) {
            return false;
        }
        *self.settings = DriftSettings::default();
        self.problems.clear();
        log::info!("Drift settings restored to defaults");
        true
    }

    pub fn section_status(&self, keys: &[MetricKey]) -> SectionStatus {
        self.settings.section_status(keys)
    }

    pub fn group_status(&self, group: MetricGroup) -> SectionStatus {
        self.settings.group_status(group)
    }
}
