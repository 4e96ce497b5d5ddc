//! Wizard step identifiers and progress states.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven wizard steps, in navigation order.
///
/// The order is load-bearing: `advance`/`retreat` move along it and the
/// review step's edit targets are expressed as these indices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    Overview,
    Goals,
    Team,
    Audience,
    Strategy,
    Drift,
    Review,
}

impl WizardStep {
    /// All steps in navigation order.
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Overview,
        WizardStep::Goals,
        WizardStep::Team,
        WizardStep::Audience,
        WizardStep::Strategy,
        WizardStep::Drift,
        WizardStep::Review,
    ];

    /// Number of steps in the wizard.
    pub const COUNT: usize = Self::ALL.len();

    /// The first step of a fresh session.
    pub const FIRST: WizardStep = WizardStep::Overview;

    /// The terminal step for forward motion.
    pub const LAST: WizardStep = WizardStep::Review;

    /// Zero-based position of the step.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a step by zero-based position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// User-facing step title.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Overview => "Plan Overview",
            WizardStep::Goals => "Goals & Targets",
            WizardStep::Team => "Reps & Teams",
            WizardStep::Audience => "Target Audience & Segmentation",
            WizardStep::Strategy => "Channels & Strategies",
            WizardStep::Drift => "Drift Detection Settings",
            WizardStep::Review => "Review & Confirm",
        }
    }

    /// Short identifier used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Overview => "overview",
            WizardStep::Goals => "goals",
            WizardStep::Team => "team",
            WizardStep::Audience => "audience",
            WizardStep::Strategy => "strategy",
            WizardStep::Drift => "drift",
            WizardStep::Review => "review",
        }
    }

    /// Next step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous step, or `None` on the first one.
    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Progress state of this step relative to the current one.
    pub fn progress(self, current: WizardStep) -> StepProgress {
        match self.cmp(&current) {
            std::cmp::Ordering::Less => StepProgress::Completed,
            std::cmp::Ordering::Equal => StepProgress::Current,
            std::cmp::Ordering::Greater => StepProgress::Pending,
        }
    }
}

impl FromStr for WizardStep {
    type Err = String;

    /// Accepts either a slug (`goals`) or a 1-based step number (`2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Self::from_index)
                .ok_or_else(|| format!("Invalid step number: {s} (expected 1-{})", Self::COUNT));
        }
        Self::ALL
            .into_iter()
            .find(|step| step.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("Invalid step: {s}"))
    }
}

/// Progress indicator state for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepProgress {
    Completed,
    Current,
    Pending,
}

impl StepProgress {
    /// Get progress with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwright_core::models::StepProgress;
    ///
    /// assert_eq!(StepProgress::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StepProgress::Current.with_icon(), "➤ Current");
    /// assert_eq!(StepProgress::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StepProgress::Completed => "✓ Completed",
            StepProgress::Current => "➤ Current",
            StepProgress::Pending => "○ Pending",
        }
    }
}
