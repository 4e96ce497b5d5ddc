//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{StepProgress, WizardStep};

/// Newtype wrapper for displaying the progress indicator of every step.
///
/// # Examples
///
/// ```rust
/// use planwright_core::{display::StepOverview, models::WizardStep};
///
/// let overview = StepOverview::at(WizardStep::Team);
/// let output = overview.to_string();
/// assert!(output.contains("1. Plan Overview (`overview`): ✓ Completed"));
/// assert!(output.contains("3. Reps & Teams (`team`): ➤ Current"));
/// assert!(output.contains("7. Review & Confirm (`review`): ○ Pending"));
/// ```
pub struct StepOverview(pub Vec<(WizardStep, StepProgress)>);

impl StepOverview {
    /// Progress of all steps relative to `current`.
    pub fn at(current: WizardStep) -> Self {
        Self(
            WizardStep::ALL
                .into_iter()
                .map(|step| (step, step.progress(current)))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get an iterator over the steps and their progress.
    pub fn iter(&self) -> std::slice::Iter<'_, (WizardStep, StepProgress)> {
        self.0.iter()
    }
}

impl From<Vec<(WizardStep, StepProgress)>> for StepOverview {
    fn from(steps: Vec<(WizardStep, StepProgress)>) -> Self {
        Self(steps)
    }
}

impl Index<usize> for StepOverview {
    type Output = (WizardStep, StepProgress);

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a StepOverview {
    type Item = &'a (WizardStep, StepProgress);
    type IntoIter = std::slice::Iter<'a, (WizardStep, StepProgress)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for StepOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (step, progress) in &self.0 {
            writeln!(
                f,
                "{}. {} (`{}`): {progress}",
                step.index() + 1,
                step.title(),
                step.as_str()
            )?;
        }
        Ok(())
    }
}
