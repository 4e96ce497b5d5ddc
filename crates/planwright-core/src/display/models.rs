//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the wizard's
//! models, separated from the model definitions. Enums display as their
//! user-facing label; composite values produce markdown.

use std::fmt;

use crate::{
    models::{
        AllocationState, AllocationTotal, DriftSettings, MetricGroup, MetricKey, PlanScope,
        SectionStatus, StepProgress, UpdateFrequency, Window, WizardStep,
    },
    validation::ValidationErrors,
};

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl fmt::Display for StepProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.with_icon())
    }
}

impl fmt::Display for PlanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Messages joined by `; `, as used in error text.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.iter().map(|error| error.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl fmt::Display for AllocationTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total allocation: {}%", self.total)?;
        match self.state() {
            AllocationState::Balanced => Ok(()),
            AllocationState::Remaining(remaining) => write!(f, " ({remaining}% remaining)"),
            AllocationState::Exceeds => write!(f, " (exceeds 100%)"),
        }
    }
}

impl fmt::Display for DriftSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", WizardStep::Drift.title())?;

        for group in MetricGroup::ALL {
            writeln!(f)?;
            writeln!(f, "## {} ({})", group.title(), self.group_status(group).label())?;
            writeln!(f)?;
            for key in group.metrics() {
                let config = self.metric(*key);
                let mark = if config.enabled { "✓" } else { "○" };
                writeln!(
                    f,
                    "- {mark} **{}** (`{}`): threshold {}, window {}, expected {}",
                    key.label(),
                    key.as_str(),
                    key.threshold_unit().format(config.threshold),
                    config.window,
                    key.baseline_unit().format(self.expected_value(*key)),
                )?;
            }
        }

        let notifications = &self.notifications;
        writeln!(f)?;
        writeln!(f, "## Notifications")?;
        writeln!(f)?;
        writeln!(f, "- Email: {}", if notifications.email { "on" } else { "off" })?;
        writeln!(
            f,
            "- Chat webhook: {}",
            if notifications.chat_webhook { "on" } else { "off" }
        )?;
        if notifications.webhook_url.is_empty() {
            writeln!(f, "- Webhook URL: Not set")
        } else {
            writeln!(f, "- Webhook URL: {}", notifications.webhook_url)
        }
    }
}
