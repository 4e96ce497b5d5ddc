//! Display formatting functions and result types.
//!
//! Domain models get direct Display implementations (in [`models`]); the
//! review projection is rendered by [`review`]; wrapper types format the
//! outcome of wizard operations. Everything produces markdown so the CLI can
//! render it richly or print it as plain text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Plan, Review)  │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (StepOverview)
//! - [`results`]: Operation result types (UpdateResult, StepResult,
//!   ValidationReport)
//! - [`status`]: Outcome lines of wizard commands (OperationStatus)
//! - [`datetime`]: Date formatting utilities
//! - [`numbers`]: Thousands separators for money and baselines
//! - [`models`]: Display implementations for domain models
//! - [`review`]: Display implementations for the review projection
//!
//! ### Status Messages
//!
//! ```rust
//! use planwright_core::display::OperationStatus;
//!
//! use planwright_core::WizardError;
//!
//! let success = OperationStatus::success("Plan submitted");
//! assert_eq!(success.to_string(), "Success: Plan submitted\n");
//!
//! let error = OperationStatus::from(&WizardError::persistence("Store unavailable"));
//! assert!(error.to_string().ends_with("(your edits are kept)\n"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod numbers;
pub mod results;
pub mod review;
pub mod status;

pub use collections::StepOverview;
pub use datetime::ReviewDate;
pub use numbers::format_number;
pub use results::{StepResult, UpdateResult, ValidationReport};
pub use status::OperationStatus;
