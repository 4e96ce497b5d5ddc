//! Persistence boundary for submitted plans and drift settings.
//!
//! Storage itself is out of scope: [`LogStore`] only records the payload in
//! the log. Front ends with a real backend implement [`PlanStore`].

use std::future::Future;

use crate::{
    error::Result,
    models::{DriftSettings, PlanConfiguration},
};

/// Receives plans and drift settings handed off by the wizard.
///
/// A failing call must not assume anything about the caller's state; the
/// wizard keeps its configuration untouched and editable on error.
pub trait PlanStore {
    /// Stores a completed plan configuration.
    fn submit_plan(&self, plan: &PlanConfiguration) -> impl Future<Output = Result<()>> + Send;

    /// Stores drift-detection settings on their own.
    fn save_drift_settings(
        &self,
        settings: &DriftSettings,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Store that logs the JSON payload and always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStore;

impl PlanStore for LogStore {
    async fn submit_plan(&self, plan: &PlanConfiguration) -> Result<()> {
        let payload = serde_json::to_string(plan)?;
        log::info!("Submitting plan '{}': {payload}", plan.name);
        Ok(())
    }

    async fn save_drift_settings(&self, settings: &DriftSettings) -> Result<()> {
        let payload = serde_json::to_string(settings)?;
        log::info!("Saving drift settings: {payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_store_accepts_defaults() {
        let store = LogStore;
        assert!(store.submit_plan(&PlanConfiguration::default()).await.is_ok());
        assert!(store.save_drift_settings(&DriftSettings::default()).await.is_ok());
    }
}
