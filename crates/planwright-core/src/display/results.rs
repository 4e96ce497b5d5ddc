//! Result wrapper types for displaying operation outcomes.
//!
//! These wrappers format the results of patching the plan, moving between
//! steps and validating, with consistent messaging.

use std::fmt;

use crate::{models::WizardStep, validation::ValidationErrors};

/// Wrapper type for displaying the result of a patch.
///
/// # Examples
///
/// ```rust
/// use planwright_core::display::UpdateResult;
///
/// let result = UpdateResult::with_changes(vec!["name", "revenueGoal"]);
/// let output = result.to_string();
/// assert!(output.contains("Updated 2 field(s)"));
/// assert!(output.contains("- revenueGoal"));
///
/// assert_eq!(UpdateResult::with_changes(vec![]).to_string(), "No changes.\n");
/// ```
pub struct UpdateResult {
    pub changes: Vec<&'static str>,
}

impl UpdateResult {
    /// Create an UpdateResult with the list of changed keys.
    pub fn with_changes(changes: Vec<&'static str>) -> Self {
        Self { changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.changes.is_empty() {
            return writeln!(f, "No changes.");
        }

        writeln!(f, "Updated {} field(s):", self.changes.len())?;
        for change in &self.changes {
            writeln!(f, "- {change}")?;
        }
        Ok(())
    }
}

/// Wrapper type for displaying a step transition.
pub struct StepResult {
    pub from: WizardStep,
    pub to: WizardStep,
}

impl StepResult {
    pub fn new(from: WizardStep, to: WizardStep) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for StepResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.from == self.to {
            writeln!(
                f,
                "Still on step {} of {}: {}",
                self.to.index() + 1,
                WizardStep::COUNT,
                self.to
            )
        } else {
            writeln!(
                f,
                "Step {} of {}: {}",
                self.to.index() + 1,
                WizardStep::COUNT,
                self.to
            )
        }
    }
}

/// Wrapper type for displaying the field errors of one step.
pub struct ValidationReport<'a> {
    pub step: WizardStep,
    pub errors: &'a ValidationErrors,
}

impl<'a> ValidationReport<'a> {
    pub fn new(step: WizardStep, errors: &'a ValidationErrors) -> Self {
        Self { step, errors }
    }
}

impl fmt::Display for ValidationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return writeln!(f, "{}: no errors", self.step);
        }

        writeln!(f, "## {}", self.step)?;
        writeln!(f)?;
        for error in self.errors {
            writeln!(f, "- **{}**: {}", error.field, error.message)?;
        }
        Ok(())
    }
}
