//! Tests for the wizard module.

use std::sync::atomic::{AtomicUsize, Ordering};

use jiff::civil::date;

use super::*;
use crate::{
    confirm::{CANCEL_PROMPT, RESTORE_DEFAULTS_PROMPT},
    error::{Result, WizardError},
    models::{DriftSettings, MetricKey, MetricPatch, NotificationSetting, PlanPatch},
    store::PlanStore,
};

/// Helper function to create a test wizard on the sample directory
async fn create_test_wizard() -> WizardController {
    WizardBuilder::new()
        .with_sample_directory()
        .build()
        .await
        .expect("Failed to create wizard")
}

fn overview_patch() -> PlanPatch {
    PlanPatch {
        name: Some("FY25 Enterprise Push".to_string()),
        start_date: Some(Some(date(2025, 1, 1))),
        end_date: Some(Some(date(2025, 12, 31))),
        owner_id: Some(Some("2".to_string())),
        ..Default::default()
    }
}

/// Store that counts calls and optionally fails them
#[derive(Default)]
struct RecordingStore {
    fail: bool,
    plans: AtomicUsize,
    drift_saves: AtomicUsize,
}

impl RecordingStore {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    fn outcome(&self) -> Result<()> {
        if self.fail {
            Err(WizardError::persistence("backend unavailable"))
        } else {
            Ok(())
        }
    }
}

impl PlanStore for RecordingStore {
    async fn submit_plan(&self, _plan: &PlanConfiguration) -> Result<()> {
        self.plans.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }

    async fn save_drift_settings(&self, _settings: &DriftSettings) -> Result<()> {
        self.drift_saves.fetch_add(1, Ordering::SeqCst);
        self.outcome()
    }
}

#[tokio::test]
async fn test_new_session_starts_on_overview() {
    let wizard = create_test_wizard().await;
    assert_eq!(wizard.current_step(), WizardStep::Overview);
    assert_eq!(wizard.config(), &PlanConfiguration::default());
    assert!(wizard.errors().is_empty());
    assert!(wizard.drift_problems().is_empty());
}

#[tokio::test]
async fn test_advance_blocked_on_empty_overview() {
    let mut wizard = create_test_wizard().await;

    let err = wizard.advance().unwrap_err();
    match err {
        WizardError::FieldValidation { step, errors } => {
            assert_eq!(step, WizardStep::Overview);
            assert_eq!(errors.fields(), vec!["name", "startDate", "endDate", "ownerId"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(wizard.current_step(), WizardStep::Overview);
    assert_eq!(wizard.errors().len(), 4);
}

#[tokio::test]
async fn test_advance_clears_errors_on_success() {
    let mut wizard = create_test_wizard().await;
    assert!(wizard.advance().is_err());

    wizard.patch(overview_patch());
    // Patching leaves stored errors alone until the next advance.
    assert_eq!(wizard.errors().len(), 4);

    assert_eq!(wizard.advance().unwrap(), WizardStep::Goals);
    assert!(wizard.errors().is_empty());
}

#[tokio::test]
async fn test_goals_require_positive_revenue() {
    let mut wizard = create_test_wizard().await;
    wizard.patch(overview_patch());
    wizard.advance().unwrap();

    let err = wizard.advance().unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(
        wizard.errors().get("revenueGoal"),
        Some("Revenue goal must be greater than 0")
    );
    assert_eq!(wizard.current_step(), WizardStep::Goals);

    wizard.patch(PlanPatch {
        revenue_goal: Some(750_000.0),
        ..Default::default()
    });
    assert_eq!(wizard.advance().unwrap(), WizardStep::Team);
}

#[tokio::test]
async fn test_advance_clamps_on_last_step() {
    let mut wizard = create_test_wizard().await;
    wizard.jump_to(6).unwrap();
    assert_eq!(wizard.advance().unwrap(), WizardStep::Review);
    assert_eq!(wizard.current_step(), WizardStep::Review);
}

#[tokio::test]
async fn test_retreat_floors_at_first_step_and_skips_validation() {
    let mut wizard = create_test_wizard().await;
    assert_eq!(wizard.retreat(), WizardStep::Overview);

    wizard.jump_to(1).unwrap();
    assert_eq!(wizard.retreat(), WizardStep::Overview);
    assert!(wizard.errors().is_empty());
}

#[tokio::test]
async fn test_jump_skips_validation_and_keeps_errors() {
    let mut wizard = create_test_wizard().await;
    assert!(wizard.advance().is_err());
    let before = wizard.errors().clone();

    assert_eq!(wizard.jump_to(4).unwrap(), WizardStep::Strategy);
    assert_eq!(wizard.errors(), &before);

    assert_eq!(wizard.jump_to_step(WizardStep::Drift), WizardStep::Drift);
    assert_eq!(wizard.errors(), &before);
}

#[tokio::test]
async fn test_jump_out_of_range_is_rejected() {
    let mut wizard = create_test_wizard().await;
    wizard.jump_to(3).unwrap();

    let err = wizard.jump_to(7).unwrap_err();
    assert!(matches!(err, WizardError::InvalidInput { .. }));
    assert_eq!(wizard.current_step(), WizardStep::Audience);
}

#[tokio::test]
async fn test_patch_reports_changed_keys() {
    let mut wizard = create_test_wizard().await;
    let changed = wizard.patch(overview_patch());
    assert_eq!(changed, vec!["name", "startDate", "endDate", "ownerId"]);
    assert!(wizard.patch(overview_patch()).is_empty());
}

#[tokio::test]
async fn test_builder_drops_assignments_of_non_participants() {
    let plan: crate::models::PlanConfiguration = serde_json::from_str(
        r#"{"participants": ["2"], "roles": {"2": "SE", "6": "AE"}, "quotas": {"6": 1000}}"#,
    )
    .unwrap();

    let wizard = WizardBuilder::new()
        .with_sample_directory()
        .with_configuration(Some(plan))
        .build()
        .await
        .expect("Failed to create wizard");

    let config = wizard.config();
    assert_eq!(config.roles.keys().collect::<Vec<_>>(), vec!["2"]);
    assert!(config.quotas.is_empty());
}

#[tokio::test]
async fn test_progress_marks_each_step() {
    let mut wizard = create_test_wizard().await;
    wizard.jump_to(2).unwrap();

    let progress = wizard.progress();
    assert_eq!(progress.len(), 7);
    assert_eq!(progress[0].1, StepProgress::Completed);
    assert_eq!(progress[1].1, StepProgress::Completed);
    assert_eq!(progress[2].1, StepProgress::Current);
    assert!(progress[3..].iter().all(|(_, p)| *p == StepProgress::Pending));
}

#[tokio::test]
async fn test_cancel_declined_keeps_state() {
    let mut wizard = create_test_wizard().await;
    wizard.patch(overview_patch());
    wizard.jump_to(3).unwrap();

    let mut prompts = Vec::new();
    let mut decline = |prompt: &str| {
        prompts.push(prompt.to_string());
        false
    };
    assert!(!wizard.cancel(&mut decline));
    assert_eq!(prompts, vec![CANCEL_PROMPT.to_string()]);
    assert_eq!(wizard.current_step(), WizardStep::Audience);
    assert_eq!(wizard.config().name, "FY25 Enterprise Push");
}

#[tokio::test]
async fn test_cancel_confirmed_resets_session() {
    let mut wizard = create_test_wizard().await;
    wizard.patch(overview_patch());
    wizard.jump_to(1).unwrap();
    assert!(wizard.advance().is_err());
    wizard.drift_editor().set_metric(MetricKey::WinRate, MetricPatch::enabled(false));

    assert!(wizard.cancel(&mut |_: &str| true));
    assert_eq!(wizard.current_step(), WizardStep::Overview);
    assert_eq!(wizard.config(), &PlanConfiguration::default());
    assert!(wizard.errors().is_empty());
    assert!(wizard.drift_problems().is_empty());
}

#[tokio::test]
async fn test_submit_only_from_review() {
    let wizard = create_test_wizard().await;
    let store = RecordingStore::default();

    let err = wizard.submit(&store).await.unwrap_err();
    assert!(matches!(err, WizardError::InvalidInput { .. }));
    assert_eq!(store.plans.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_submit_hands_plan_to_store() {
    let mut wizard = create_test_wizard().await;
    wizard.jump_to(6).unwrap();
    let store = RecordingStore::default();

    wizard.submit(&store).await.unwrap();
    assert_eq!(store.plans.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_submit_failure_keeps_state_editable() {
    let mut wizard = create_test_wizard().await;
    wizard.patch(overview_patch());
    wizard.jump_to(6).unwrap();
    let before = wizard.config().clone();

    let err = wizard.submit(&RecordingStore::failing()).await.unwrap_err();
    assert!(matches!(err, WizardError::Persistence { .. }));
    assert_eq!(wizard.config(), &before);
    assert_eq!(wizard.current_step(), WizardStep::Review);

    wizard.jump_to(0).unwrap();
    let changed = wizard.patch(PlanPatch {
        name: Some("Retry".to_string()),
        ..Default::default()
    });
    assert_eq!(changed, vec!["name"]);
}

#[tokio::test]
async fn test_drift_save_with_problems_skips_store() {
    let mut wizard = create_test_wizard().await;
    let store = RecordingStore::default();

    let mut editor = wizard.drift_editor();
    for key in MetricKey::ALL {
        editor.set_metric(key, MetricPatch::enabled(false));
    }
    editor.set_notification(NotificationSetting::WebhookUrl("hooks.example.com".to_string()));

    let err = editor.save(&store).await.unwrap_err();
    match err {
        WizardError::ConfigurationValidation { problems } => assert_eq!(problems.len(), 2),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(store.drift_saves.load(Ordering::SeqCst), 0);
    assert_eq!(wizard.drift_problems().len(), 2);
}

#[tokio::test]
async fn test_drift_save_persists_valid_settings() {
    let mut wizard = create_test_wizard().await;
    let store = RecordingStore::default();

    let mut editor = wizard.drift_editor();
    editor.set_expected_value(MetricKey::DealSize, 65_000.0);
    editor.save(&store).await.unwrap();
    assert!(editor.problems().is_empty());

    assert_eq!(store.drift_saves.load(Ordering::SeqCst), 1);
    assert_eq!(wizard.config().drift.expected_value(MetricKey::DealSize), 65_000.0);
}

#[tokio::test]
async fn test_drift_save_store_failure_is_persistence_error() {
    let mut wizard = create_test_wizard().await;
    let err = wizard
        .drift_editor()
        .save(&RecordingStore::failing())
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::Persistence { .. }));
    assert_eq!(wizard.config().drift, DriftSettings::default());
}

#[tokio::test]
async fn test_restore_defaults_requires_confirmation() {
    let mut wizard = create_test_wizard().await;
    let mut editor = wizard.drift_editor();
    for key in MetricKey::ALL {
        editor.set_metric(key, MetricPatch::enabled(false));
    }
    assert_eq!(editor.validate().len(), 1);

    let mut seen = String::new();
    assert!(!editor.restore_defaults(&mut |prompt: &str| {
        seen = prompt.to_string();
        false
    }));
    assert_eq!(seen, RESTORE_DEFAULTS_PROMPT);
    assert!(!editor.settings().any_enabled());

    assert!(editor.restore_defaults(&mut |_: &str| true));
    assert_eq!(editor.settings(), &DriftSettings::default());
    assert!(editor.problems().is_empty());
}

#[tokio::test]
async fn test_builder_loads_directory_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("directory.json");
    std::fs::write(
        &path,
        r#"{"teams": [{"id": "apac", "name": "APAC Expansion"}]}"#,
    )
    .expect("Failed to write directory");

    let wizard = WizardBuilder::new()
        .with_directory_path(Some(&path))
        .build()
        .await
        .expect("Failed to create wizard");
    assert_eq!(wizard.directory().team_name("apac"), "APAC Expansion");
    assert!(wizard.directory().users.is_empty());
}

#[tokio::test]
async fn test_builder_reports_missing_directory_file() {
    let err = WizardBuilder::new()
        .with_directory_path(Some("/nonexistent/directory.json"))
        .build()
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::FileSystem { .. }));
}

#[tokio::test]
async fn test_builder_with_configuration() {
    let config = PlanConfiguration {
        name: "Imported".to_string(),
        ..Default::default()
    };
    let wizard = WizardBuilder::new()
        .with_directory(Directory::default())
        .with_configuration(Some(config))
        .build()
        .await
        .expect("Failed to create wizard");
    assert_eq!(wizard.config().name, "Imported");
    assert_eq!(wizard.current_step(), WizardStep::Overview);
}
