//! Data models for the sales plan wizard.
//!
//! [`PlanConfiguration`] is the single record a wizard session edits; it is
//! only ever changed by applying a [`PlanPatch`]. The drift-detection
//! sub-model lives in [`drift`], the step sequence in [`step`].
//!
//! Display implementations for these models are located in
//! [`crate::display`] to keep presentation apart from the data structures.
//!
//! # Examples
//!
//! ```rust
//! use planwright_core::models::{PlanConfiguration, PlanPatch, WizardStep};
//!
//! let mut plan = PlanConfiguration::default();
//! assert_eq!(plan.company_size.max, 1000);
//! assert_eq!(plan.data_refresh_frequency, 24);
//!
//! let patch = PlanPatch::toggle_team(&plan, "sales-east");
//! let changed = patch.apply_to(&mut plan);
//! assert_eq!(changed, vec!["selectedTeams"]);
//!
//! assert_eq!(WizardStep::FIRST.title(), "Plan Overview");
//! ```

pub mod choices;
pub mod drift;
pub mod patch;
pub mod plan;
pub mod step;
pub mod targets;


pub use choices::{PlanScope, UpdateFrequency};
pub use drift::{
    BaselineUnit, DriftSettings, MetricConfig, MetricGroup, MetricKey, MetricPatch,
    NotificationSetting, Notifications, SectionStatus, ThresholdUnit, Window,
};
pub use patch::{PlanPatch, SizeBound};
pub use plan::{AllocationState, AllocationTotal, ChannelAllocation, CompanySize, PlanConfiguration};
pub use step::{StepProgress, WizardStep};
pub use targets::{TargetField, TargetGroup, TargetUnit};
