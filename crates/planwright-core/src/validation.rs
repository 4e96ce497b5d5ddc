//! Per-step field validation.
//!
//! Each wizard step owns a static list of [`FieldRule`]s. Validating a step
//! runs every rule of that step against the configuration and collects the
//! messages of the failing ones, in rule order. Steps without rules always
//! validate clean.

use std::ops::Index;

use crate::models::{PlanConfiguration, WizardStep};

/// A failing field and the message shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// camelCase field key, as used in plan files and patches
    pub field: &'static str,
    pub message: String,
}

/// Ordered field-to-message mapping produced by one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error; a field keeps its first message.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.contains(field) {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Failing field keys, in rule order.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|error| error.field).collect()
    }
}

impl Index<usize> for ValidationErrors {
    type Output = FieldError;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A single declarative check: `check` returns true when the field is valid.
pub struct FieldRule {
    pub field: &'static str,
    pub message: &'static str,
    pub check: fn(&PlanConfiguration) -> bool,
}

const OVERVIEW_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        message: "Plan name is required",
        check: |plan| !plan.name.trim().is_empty(),
    },
    FieldRule {
        field: "startDate",
        message: "Start date is required",
        check: |plan| plan.start_date.is_some(),
    },
    FieldRule {
        field: "endDate",
        message: "End date is required",
        check: |plan| plan.end_date.is_some(),
    },
    FieldRule {
        field: "ownerId",
        message: "Plan owner is required",
        check: |plan| plan.owner_id.as_deref().is_some_and(|id| !id.is_empty()),
    },
];

const GOALS_RULES: &[FieldRule] = &[FieldRule {
    field: "revenueGoal",
    message: "Revenue goal must be greater than 0",
    check: |plan| plan.revenue_goal > 0.0,
}];

/// Rules attached to a step.
pub fn rules_for(step: WizardStep) -> &'static [FieldRule] {
    match step {
        WizardStep::Overview => OVERVIEW_RULES,
        WizardStep::Goals => GOALS_RULES,
        _ => &[],
    }
}

/// Validates the fields owned by `step`.
///
/// # Examples
///
/// ```rust
/// use planwright_core::{models::{PlanConfiguration, WizardStep}, validation::validate_step};
///
/// let errors = validate_step(WizardStep::Goals, &PlanConfiguration::default());
/// assert_eq!(errors.get("revenueGoal"), Some("Revenue goal must be greater than 0"));
/// assert!(validate_step(WizardStep::Team, &PlanConfiguration::default()).is_empty());
/// ```
pub fn validate_step(step: WizardStep, plan: &PlanConfiguration) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for rule in rules_for(step) {
        if !(rule.check)(plan) {
            errors.insert(rule.field, rule.message);
        }
    }
    errors
}

/// Validates every step, returning only the steps that have errors.
pub fn validate_all(plan: &PlanConfiguration) -> Vec<(WizardStep, ValidationErrors)> {
    WizardStep::ALL
        .into_iter()
        .map(|step| (step, validate_step(step, plan)))
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}
