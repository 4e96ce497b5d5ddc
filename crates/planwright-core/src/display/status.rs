//! Outcome lines for wizard commands.

use std::fmt;

use crate::error::WizardError;

/// Outcome of a submit, save, reset or edit command.
///
/// Failures converted from a recoverable [`WizardError`] mention that the
/// user's edits are still in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    /// The failed command left the in-progress plan untouched
    pub edits_kept: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            edits_kept: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            edits_kept: false,
        }
    }
}

impl From<&WizardError> for OperationStatus {
    fn from(error: &WizardError) -> Self {
        Self {
            edits_kept: error.is_recoverable(),
            ..Self::failure(error.to_string())
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return writeln!(f, "Success: {}", self.message);
        }
        write!(f, "Error: {}", self.message)?;
        if self.edits_kept {
            write!(f, " (your edits are kept)")?;
        }
        writeln!(f)
    }
}
