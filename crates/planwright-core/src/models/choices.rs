//! Enumerated choices stored on the plan configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Who the plan applies to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanScope {
    #[default]
    Team,
    Individual,
}

impl FromStr for PlanScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "team" => Ok(PlanScope::Team),
            "individual" => Ok(PlanScope::Individual),
            _ => Err(format!("Invalid plan scope: {s}")),
        }
    }
}

impl PlanScope {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanScope::Team => "team",
            PlanScope::Individual => "individual",
        }
    }

    /// Capitalized label used on the review screen
    pub fn label(&self) -> &'static str {
        match self {
            PlanScope::Team => "Team",
            PlanScope::Individual => "Individual",
        }
    }
}

/// How often the sales plan is reviewed and updated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UpdateFrequency {
    Daily,
    Weekly,
    Monthly,
    /// Uses `customUpdateDate` on the plan
    Custom,
}

impl FromStr for UpdateFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(UpdateFrequency::Daily),
            "weekly" => Ok(UpdateFrequency::Weekly),
            "monthly" => Ok(UpdateFrequency::Monthly),
            "custom" => Ok(UpdateFrequency::Custom),
            _ => Err(format!("Invalid update frequency: {s}")),
        }
    }
}

impl UpdateFrequency {
    /// Serialized string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateFrequency::Daily => "daily",
            UpdateFrequency::Weekly => "weekly",
            UpdateFrequency::Monthly => "monthly",
            UpdateFrequency::Custom => "custom",
        }
    }

    /// Label used on the review screen
    pub fn label(&self) -> &'static str {
        match self {
            UpdateFrequency::Daily => "Daily",
            UpdateFrequency::Weekly => "Weekly",
            UpdateFrequency::Monthly => "Monthly",
            UpdateFrequency::Custom => "Custom Schedule",
        }
    }
}
