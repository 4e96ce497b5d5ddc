//! Core library for the Planwright sales plan wizard.
//!
//! This crate holds the wizard's state, validation and navigation model: the
//! [`PlanConfiguration`] being composed, per-step field validation, the
//! drift-detection settings schema and editor, the review projection, and the
//! persistence boundary a finished plan is handed to.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain data, serialized as camelCase JSON
//! - **Display** ([`display`]): [`std::fmt::Display`] implementations and
//!   wrappers producing markdown
//! - **Terminal Rendering**: rich markdown output via the CLI's terminal
//!   renderer
//!
//! # Quick Start
//!
//! ```rust
//! use planwright_core::{LogStore, PlanPatch, WizardBuilder, WizardStep};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut wizard = WizardBuilder::new().with_sample_directory().build().await?;
//!
//! wizard.patch(PlanPatch::from_json(
//!     r#"{"name": "FY25 Enterprise", "startDate": "2025-01-01",
//!         "endDate": "2025-12-31", "ownerId": "1"}"#,
//! )?);
//! wizard.advance()?;
//!
//! wizard.patch(PlanPatch::field("revenueGoal", serde_json::json!(1_200_000))?);
//! while wizard.current_step() != WizardStep::Review {
//!     wizard.advance()?;
//! }
//!
//! println!("{}", wizard.review());
//! wizard.submit(&LogStore).await?;
//! # Ok(())
//! # }
//! ```

pub mod confirm;
pub mod directory;
pub mod display;
pub mod error;
pub mod models;
pub mod review;
pub mod store;
pub mod validation;
pub mod wizard;

// Re-export commonly used types
pub use confirm::Confirm;
pub use directory::Directory;
pub use display::{OperationStatus, StepOverview, StepResult, UpdateResult, ValidationReport};
pub use error::{Result, WizardError};
pub use models::{
    DriftSettings, MetricKey, MetricPatch, NotificationSetting, PlanConfiguration, PlanPatch,
    StepProgress, Window, WizardStep,
};
pub use review::PlanReview;
pub use store::{LogStore, PlanStore};
pub use validation::{validate_step, ValidationErrors};
pub use wizard::{DriftEditor, WizardBuilder, WizardController};
