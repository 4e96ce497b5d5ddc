//! Error types for the wizard library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::{models::WizardStep, validation::ValidationErrors};

/// Comprehensive error type for all wizard operations.
#[derive(Error, Debug)]
pub enum WizardError {
    /// The current step has field errors and cannot be left going forward
    #[error("{step} has {} invalid field(s): {errors}", .errors.len())]
    FieldValidation {
        step: WizardStep,
        errors: ValidationErrors,
    },
    /// Drift settings failed validation and were not saved
    #[error("Drift settings are invalid: {}", .problems.join("; "))]
    ConfigurationValidation { problems: Vec<String> },
    /// The persistence collaborator rejected a submit or save
    #[error("Persistence error: {message}")]
    Persistence { message: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WizardError {
        WizardError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WizardError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a persistence error from anything displayable.
    pub fn persistence(message: impl fmt::Display) -> Self {
        Self::Persistence {
            message: message.to_string(),
        }
    }

    /// Whether the user can fix the problem by editing and retrying.
    ///
    /// Validation and persistence failures never discard in-memory state,
    /// so all of them are recoverable from the wizard's point of view.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::FieldValidation { .. }
                | Self::ConfigurationValidation { .. }
                | Self::Persistence { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to WizardError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| WizardError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;
