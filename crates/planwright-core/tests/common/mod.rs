use planwright_core::{PlanPatch, WizardBuilder, WizardController};

/// Helper function to create a wizard on the built-in sample directory
pub async fn create_test_wizard() -> WizardController {
    WizardBuilder::new()
        .with_sample_directory()
        .build()
        .await
        .expect("Failed to create wizard")
}

/// Patch that satisfies every required field of the overview step
pub fn valid_overview() -> PlanPatch {
    PlanPatch::from_json(
        r#"{
            "name": "FY25 Enterprise Push",
            "description": "Grow enterprise ARR in the east",
            "startDate": "2025-01-01",
            "endDate": "2025-12-31",
            "ownerId": "1"
        }"#,
    )
    .expect("Failed to parse overview patch")
}
