//! Partial updates of the plan configuration.
//!
//! A [`PlanPatch`] carries one optional value per top-level field of
//! [`PlanConfiguration`]. Applying it is a shallow merge: a present value
//! replaces the field wholesale (nested values such as `companySize` or
//! `drift` included) and absent fields are left alone.
//!
//! The constructors below compute the patch a screen would emit for a single
//! interaction, reading the current configuration where the new value depends
//! on the old one (toggling a set member, removing a participant, editing one
//! channel allocation).

use std::collections::BTreeMap;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    ChannelAllocation, CompanySize, DriftSettings, PlanConfiguration, PlanScope, UpdateFrequency,
};
use crate::error::{Result, WizardError};

/// Distinguishes an explicit `null` (clear the field) from an absent key.
fn explicit<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

macro_rules! plan_patch {
    ($($(#[$attr:meta])* $field:ident: $ty:ty => $key:literal,)*) => {
        /// Partial update of a [`PlanConfiguration`].
        #[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        pub struct PlanPatch {
            $(
                $(#[$attr])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl PlanPatch {
            /// Every patchable key, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// Keys present in this patch.
            pub fn keys(&self) -> Vec<&'static str> {
                let mut keys = Vec::new();
                $(
                    if self.$field.is_some() {
                        keys.push($key);
                    }
                )*
                keys
            }

            fn merge_into(self, config: &mut PlanConfiguration) -> Vec<&'static str> {
                let mut changed = Vec::new();
                $(
                    if let Some(value) = self.$field {
                        if config.$field != value {
                            config.$field = value;
                            changed.push($key);
                        }
                    }
                )*
                changed
            }
        }
    };
}

plan_patch! {
    name: String => "name",
    description: String => "description",
    #[serde(deserialize_with = "explicit")]
    start_date: Option<Date> => "startDate",
    #[serde(deserialize_with = "explicit")]
    end_date: Option<Date> => "endDate",
    #[serde(deserialize_with = "explicit")]
    owner_id: Option<String> => "ownerId",
    scope: PlanScope => "scope",
    revenue_goal: f64 => "revenueGoal",
    pipeline_coverage_target: f64 => "pipelineCoverageTarget",
    icp_mix_target: f64 => "icpMixTarget",
    next_step_coverage: f64 => "nextStepCoverage",
    monthly_pipeline_creation_target: f64 => "monthlyPipelineCreationTarget",
    lead_to_meeting_held: f64 => "leadToMeetingHeld",
    meeting_to_sqo: f64 => "meetingToSqo",
    sqo_to_proposal: f64 => "sqoToProposal",
    proposal_to_commit: f64 => "proposalToCommit",
    commit_to_won: f64 => "commitToWon",
    overall_win_rate: f64 => "overallWinRate",
    sales_cycle_target: f64 => "salesCycleTarget",
    multithreading: f64 => "multithreading",
    meetings_held_rate_target: f64 => "meetingsHeldRateTarget",
    forecast_accuracy_threshold: f64 => "forecastAccuracyThreshold",
    close_date_change_rate_max: f64 => "closeDateChangeRateMax",
    slippage_max: f64 => "slippageMax",
    no_decision_max: f64 => "noDecisionMax",
    at_risk_logo_max: f64 => "atRiskLogoMax",
    median_discount_ceiling: f64 => "medianDiscountCeiling",
    non_standard_terms_max: f64 => "nonStandardTermsMax",
    expansion_as_percent_of_new_arr: f64 => "expansionAsPercentOfNewArr",
    renewal_win_rate: f64 => "renewalWinRate",
    selected_teams: Vec<String> => "selectedTeams",
    participants: Vec<String> => "participants",
    roles: BTreeMap<String, String> => "roles",
    quotas: BTreeMap<String, f64> => "quotas",
    #[serde(deserialize_with = "explicit")]
    update_frequency: Option<UpdateFrequency> => "updateFrequency",
    #[serde(deserialize_with = "explicit")]
    custom_update_date: Option<Date> => "customUpdateDate",
    industries: Vec<String> => "industries",
    regions: Vec<String> => "regions",
    company_size: CompanySize => "companySize",
    buyer_persona: String => "buyerPersona",
    sales_strategies: Vec<String> => "salesStrategies",
    channel_allocation: Vec<ChannelAllocation> => "channelAllocation",
    key_messages: String => "keyMessages",
    competitors: String => "competitors",
    crm_integration: BTreeMap<String, bool> => "crmIntegration",
    communication_data: BTreeMap<String, bool> => "communicationData",
    lms_integration: bool => "lmsIntegration",
    data_refresh_frequency: u32 => "dataRefreshFrequency",
    drift: DriftSettings => "drift",
}

impl PlanPatch {
    /// Merges the patch into `config`, returning the keys whose value
    /// actually changed.
    ///
    /// Roles and quotas only exist for participants. Patch entries for other
    /// members are ignored, and entries left behind by a shrinking
    /// participant list are removed (reported as changed `roles`/`quotas`).
    pub fn apply_to(mut self, config: &mut PlanConfiguration) -> Vec<&'static str> {
        let participants = self.participants.as_ref().unwrap_or(&config.participants);
        if let Some(roles) = self.roles.as_mut() {
            roles.retain(|id, _| participants.contains(id));
        }
        if let Some(quotas) = self.quotas.as_mut() {
            quotas.retain(|id, _| participants.contains(id));
        }

        let mut changed = self.merge_into(config);
        for key in config.drop_orphan_assignments() {
            if !changed.contains(&key) {
                changed.push(key);
            }
        }
        changed
    }
}

/// Which end of the company-size range to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBound {
    Min,
    Max,
}

impl FromStr for SizeBound {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(SizeBound::Min),
            "max" => Ok(SizeBound::Max),
            _ => Err(format!("Invalid size bound: {s}. Must be 'min' or 'max'")),
        }
    }
}

/// Returns `list` with `value` removed if present, appended otherwise.
fn toggled(list: &[String], value: &str) -> Vec<String> {
    if list.iter().any(|item| item == value) {
        list.iter().filter(|item| *item != value).cloned().collect()
    } else {
        let mut next = list.to_vec();
        next.push(value.to_string());
        next
    }
}

impl PlanPatch {
    /// Parses a patch from a JSON object, rejecting unknown keys.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| WizardError::invalid_input("patch").with_reason(e.to_string()))
    }

    /// Builds a single-field patch from a key and its JSON value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planwright_core::models::PlanPatch;
    ///
    /// let patch = PlanPatch::field("revenueGoal", serde_json::json!(500000)).unwrap();
    /// assert_eq!(patch.revenue_goal, Some(500000.0));
    /// assert!(PlanPatch::field("bogus", serde_json::json!(1)).is_err());
    /// ```
    pub fn field(key: &str, value: serde_json::Value) -> Result<Self> {
        if !Self::KEYS.contains(&key) {
            return Err(WizardError::invalid_input(key).with_reason("Unknown plan field"));
        }
        let mut object = serde_json::Map::new();
        object.insert(key.to_string(), value);
        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| WizardError::invalid_input(key).with_reason(e.to_string()))
    }

    /// Whether the patch carries no value at all.
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    pub fn toggle_team(config: &PlanConfiguration, team_id: &str) -> Self {
        Self {
            selected_teams: Some(toggled(&config.selected_teams, team_id)),
            ..Default::default()
        }
    }

    pub fn toggle_industry(config: &PlanConfiguration, industry: &str) -> Self {
        Self {
            industries: Some(toggled(&config.industries, industry)),
            ..Default::default()
        }
    }

    pub fn toggle_region(config: &PlanConfiguration, region: &str) -> Self {
        Self {
            regions: Some(toggled(&config.regions, region)),
            ..Default::default()
        }
    }

    pub fn toggle_strategy(config: &PlanConfiguration, strategy: &str) -> Self {
        Self {
            sales_strategies: Some(toggled(&config.sales_strategies, strategy)),
            ..Default::default()
        }
    }

    /// Adds a member to the participants, or removes it together with its
    /// role and quota.
    pub fn toggle_participant(config: &PlanConfiguration, member_id: &str) -> Self {
        if config.is_participant(member_id) {
            Self::remove_participant(config, member_id)
        } else {
            Self {
                participants: Some(toggled(&config.participants, member_id)),
                ..Default::default()
            }
        }
    }

    /// Removes a participant and cascades to its role and quota.
    ///
    /// Removing a member that is not a participant yields an empty patch.
    pub fn remove_participant(config: &PlanConfiguration, member_id: &str) -> Self {
        if !config.is_participant(member_id) {
            return Self::default();
        }

        let mut roles = config.roles.clone();
        roles.remove(member_id);
        let mut quotas = config.quotas.clone();
        quotas.remove(member_id);

        Self {
            participants: Some(toggled(&config.participants, member_id)),
            roles: Some(roles),
            quotas: Some(quotas),
            ..Default::default()
        }
    }

    /// Assigns a role label to a participant.
    pub fn set_role(config: &PlanConfiguration, member_id: &str, role: &str) -> Result<Self> {
        if !config.is_participant(member_id) {
            return Err(WizardError::invalid_input("roles")
                .with_reason(format!("Member {member_id} is not a participant")));
        }
        let mut roles = config.roles.clone();
        roles.insert(member_id.to_string(), role.to_string());
        Ok(Self {
            roles: Some(roles),
            ..Default::default()
        })
    }

    /// Assigns an individual quota to a participant.
    pub fn set_quota(config: &PlanConfiguration, member_id: &str, quota: f64) -> Result<Self> {
        if !config.is_participant(member_id) {
            return Err(WizardError::invalid_input("quotas")
                .with_reason(format!("Member {member_id} is not a participant")));
        }
        let mut quotas = config.quotas.clone();
        quotas.insert(member_id.to_string(), quota);
        Ok(Self {
            quotas: Some(quotas),
            ..Default::default()
        })
    }

    /// Changes one end of the company-size range; the patch still carries the
    /// whole range.
    pub fn company_size_bound(config: &PlanConfiguration, bound: SizeBound, value: u32) -> Self {
        let mut size = config.company_size;
        match bound {
            SizeBound::Min => size.min = value,
            SizeBound::Max => size.max = value,
        }
        Self {
            company_size: Some(size),
            ..Default::default()
        }
    }

    /// Appends a channel allocation with a fresh id.
    pub fn add_channel(config: &PlanConfiguration, channel: &str, percentage: f64) -> Self {
        let mut allocations = config.channel_allocation.clone();
        allocations.push(ChannelAllocation::new(channel, percentage));
        Self {
            channel_allocation: Some(allocations),
            ..Default::default()
        }
    }

    /// Replaces the label and percentage of an existing allocation.
    pub fn update_channel(
        config: &PlanConfiguration,
        id: &str,
        channel: &str,
        percentage: f64,
    ) -> Result<Self> {
        let mut allocations = config.channel_allocation.clone();
        let entry = allocations
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or_else(|| {
                WizardError::invalid_input("channelAllocation")
                    .with_reason(format!("No channel allocation with id {id}"))
            })?;
        entry.channel = channel.to_string();
        entry.percentage = percentage;
        Ok(Self {
            channel_allocation: Some(allocations),
            ..Default::default()
        })
    }

    /// Removes an allocation by id; an unknown id leaves the list as is.
    pub fn remove_channel(config: &PlanConfiguration, id: &str) -> Self {
        Self {
            channel_allocation: Some(
                config
                    .channel_allocation
                    .iter()
                    .filter(|entry| entry.id != id)
                    .cloned()
                    .collect(),
            ),
            ..Default::default()
        }
    }
}
