mod common;

use common::{create_test_wizard, valid_overview};
use planwright_core::{
    models::{AllocationState, CompanySize, MetricGroup, SectionStatus},
    LogStore, MetricKey, MetricPatch, NotificationSetting, PlanConfiguration, PlanPatch,
    PlanReview, WizardError, WizardStep,
};

#[tokio::test]
#[allow(clippy::too_many_lines)]
async fn test_complete_wizard_workflow() {
    let mut wizard = create_test_wizard().await;

    // Plan overview
    assert!(wizard.advance().is_err());
    wizard.patch(valid_overview());
    assert_eq!(wizard.advance().expect("overview should pass"), WizardStep::Goals);

    // Goals & targets
    wizard.patch(
        PlanPatch::from_json(
            r#"{"revenueGoal": 1234567, "pipelineCoverageTarget": 3, "overallWinRate": 22}"#,
        )
        .expect("Failed to parse goals patch"),
    );
    assert_eq!(wizard.advance().expect("goals should pass"), WizardStep::Team);

    // Reps & teams
    let patch = PlanPatch::toggle_team(wizard.config(), "enterprise");
    wizard.patch(patch);
    let patch = PlanPatch::toggle_team(wizard.config(), "unlisted-team");
    wizard.patch(patch);
    for member in ["1", "3", "77"] {
        let patch = PlanPatch::toggle_participant(wizard.config(), member);
        wizard.patch(patch);
    }
    let patch = PlanPatch::set_role(wizard.config(), "1", "Account Executive (AE)")
        .expect("participant role");
    wizard.patch(patch);
    let patch = PlanPatch::set_quota(wizard.config(), "3", 400_000.0).expect("participant quota");
    wizard.patch(patch);
    wizard.advance().expect("team has no rules");

    // Audience
    let patch = PlanPatch::toggle_industry(wizard.config(), "Finance");
    wizard.patch(patch);
    wizard.patch(PlanPatch {
        company_size: Some(CompanySize { min: 200, max: 5000 }),
        ..Default::default()
    });
    wizard.advance().expect("audience has no rules");

    // Channels & strategies
    let patch = PlanPatch::toggle_strategy(wizard.config(), "Webinars");
    wizard.patch(patch);
    for percentage in [30.0, 30.0, 30.0] {
        let patch = PlanPatch::add_channel(wizard.config(), "Referrals", percentage);
        wizard.patch(patch);
    }
    assert_eq!(
        wizard.config().allocation_total().state(),
        AllocationState::Remaining(10.0)
    );
    wizard.advance().expect("allocation total is advisory only");

    // Drift detection
    assert_eq!(wizard.current_step(), WizardStep::Drift);
    wizard
        .drift_editor()
        .set_metric(MetricKey::CallDuration, MetricPatch::enabled(false));
    wizard.drift_editor().save(&LogStore).await.expect("drift save");
    assert_eq!(wizard.advance().expect("drift has no rules"), WizardStep::Review);

    // Review
    let review = wizard.review();
    let overview = review.section(WizardStep::Overview).expect("overview section");
    assert_eq!(overview.value("Plan Owner"), Some("Sarah Chen - Sales Director"));
    assert_eq!(overview.value("Start Date"), Some("Jan 1, 2025"));
    assert_eq!(overview.value("Scope"), Some("Team"));

    let goals = review.section(WizardStep::Goals).expect("goals section");
    assert_eq!(goals.value("Revenue Goal"), Some("$1,234,567"));
    assert_eq!(goals.value("Pipeline Coverage Target"), Some("3×"));

    let team = review.section(WizardStep::Team).expect("team section");
    assert_eq!(
        team.entries("Selected Teams"),
        Some(&["Enterprise Sales".to_string(), "unlisted-team".to_string()][..])
    );
    assert_eq!(
        team.entries("Team Members"),
        Some(&["Alex Thompson".to_string(), "Sam Wilson".to_string(), "Unknown".to_string()][..])
    );
    assert_eq!(
        team.entries("Role Assignments"),
        Some(&["Alex Thompson: Account Executive (AE)".to_string()][..])
    );

    let audience = review.section(WizardStep::Audience).expect("audience section");
    assert_eq!(audience.value("Company Size"), Some("200 - 5000 employees"));

    let strategy = review.section(WizardStep::Strategy).expect("strategy section");
    assert!(strategy
        .items
        .iter()
        .any(|item| item.to_string().contains("Total allocation: 90% (10% remaining)")));

    let drift = review.section(WizardStep::Drift).expect("drift section");
    assert_eq!(drift.value("Activity & Engagement"), Some("On"));
    assert_eq!(drift.value("Email"), Some("Enabled"));
    assert_eq!(drift.value("Webhook URL"), Some("Not set"));

    wizard.submit(&LogStore).await.expect("submit");
}

#[tokio::test]
async fn test_edit_from_review_jumps_without_validation() {
    let mut wizard = create_test_wizard().await;
    wizard.jump_to(WizardStep::Review.index()).expect("jump to review");

    let review = wizard.review();
    let target = review.sections[1].step;
    assert_eq!(wizard.jump_to(target.index()).expect("edit jump"), WizardStep::Goals);
    assert!(wizard.errors().is_empty());
}

#[tokio::test]
async fn test_participant_removal_is_idempotent() {
    let mut wizard = create_test_wizard().await;
    for member in ["2", "4"] {
        let patch = PlanPatch::toggle_participant(wizard.config(), member);
        wizard.patch(patch);
    }
    let patch = PlanPatch::set_role(wizard.config(), "2", "Sales Engineer").expect("role");
    wizard.patch(patch);
    let patch = PlanPatch::set_quota(wizard.config(), "2", 90_000.0).expect("quota");
    wizard.patch(patch);

    let patch = PlanPatch::remove_participant(wizard.config(), "2");
    wizard.patch(patch);
    let after_first = wizard.config().clone();
    assert_eq!(after_first.participants, vec!["4"]);
    assert!(after_first.roles.is_empty());
    assert!(after_first.quotas.is_empty());

    let patch = PlanPatch::remove_participant(wizard.config(), "2");
    assert!(wizard.patch(patch).is_empty());
    assert_eq!(wizard.config(), &after_first);
}

#[tokio::test]
async fn test_default_drift_settings_validate_clean() {
    let mut wizard = create_test_wizard().await;
    assert!(wizard.drift_editor().validate().is_empty());
    assert!(MetricGroup::ALL
        .iter()
        .all(|group| wizard.drift_editor().group_status(*group) == SectionStatus::On));
}

#[tokio::test]
async fn test_drift_problems_block_save() {
    let mut wizard = create_test_wizard().await;
    let mut editor = wizard.drift_editor();
    for key in MetricKey::ALL {
        editor.set_metric(key, MetricPatch::enabled(false));
    }
    let problems = editor.validate().to_vec();
    assert_eq!(problems.len(), 1);
    assert!(problems[0].to_lowercase().contains("at least one metric"));

    editor.set_metric(MetricKey::WinRate, MetricPatch::enabled(true));
    editor.set_notification(NotificationSetting::WebhookUrl("ftp://hooks.example.com".to_string()));
    let err = editor.save(&LogStore).await.unwrap_err();
    match err {
        WizardError::ConfigurationValidation { problems } => {
            assert_eq!(
                problems,
                vec!["Webhook URL must start with http:// or https://".to_string()]
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_patch_round_trip_leaves_other_fields() {
    let mut wizard = create_test_wizard().await;
    wizard.patch(valid_overview());
    let before = wizard.config().clone();

    let patch = PlanPatch::from_json(r#"{"companySize": {"min": 10, "max": 50}}"#)
        .expect("Failed to parse patch");
    assert_eq!(wizard.patch(patch), vec!["companySize"]);

    let expected = PlanConfiguration {
        company_size: CompanySize { min: 10, max: 50 },
        ..before
    };
    assert_eq!(wizard.config(), &expected);
}

#[tokio::test]
async fn test_review_of_defaults_never_fails() {
    let wizard = create_test_wizard().await;
    let review: PlanReview = wizard.review();
    assert_eq!(review.sections.len(), 6);
    let steps: Vec<_> = review.sections.iter().map(|s| s.step).collect();
    assert_eq!(steps, WizardStep::ALL[..6].to_vec());
}
