//! Plan configuration model: the single record the wizard edits.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{DriftSettings, PlanScope, UpdateFrequency};

/// Employee-count range of the targeted companies.
///
/// `min <= max` is not enforced; callers replace the range wholesale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CompanySize {
    pub min: u32,
    pub max: u32,
}

impl Default for CompanySize {
    fn default() -> Self {
        Self { min: 0, max: 1000 }
    }
}

/// Share of effort assigned to one sales channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelAllocation {
    /// Unique within the plan, generated when the entry is created
    pub id: String,
    /// Channel label, empty until one is chosen
    pub channel: String,
    pub percentage: f64,
}

impl ChannelAllocation {
    /// Creates an entry with a freshly generated id.
    pub fn new(channel: impl Into<String>, percentage: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            channel: channel.into(),
            percentage,
        }
    }
}

/// Represents everything collected by the wizard for one sales plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanConfiguration {
    // Plan overview
    pub name: String,
    pub description: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    /// Reference into the user directory
    pub owner_id: Option<String>,
    pub scope: PlanScope,

    // Goals & targets
    pub revenue_goal: f64,
    pub pipeline_coverage_target: f64,
    pub icp_mix_target: f64,
    pub next_step_coverage: f64,
    pub monthly_pipeline_creation_target: f64,
    pub lead_to_meeting_held: f64,
    pub meeting_to_sqo: f64,
    pub sqo_to_proposal: f64,
    pub proposal_to_commit: f64,
    pub commit_to_won: f64,
    pub overall_win_rate: f64,
    pub sales_cycle_target: f64,
    pub multithreading: f64,
    pub meetings_held_rate_target: f64,
    pub forecast_accuracy_threshold: f64,
    pub close_date_change_rate_max: f64,
    pub slippage_max: f64,
    pub no_decision_max: f64,
    pub at_risk_logo_max: f64,
    pub median_discount_ceiling: f64,
    pub non_standard_terms_max: f64,
    pub expansion_as_percent_of_new_arr: f64,
    pub renewal_win_rate: f64,

    // Reps & teams
    pub selected_teams: Vec<String>,
    pub participants: Vec<String>,
    /// Participant id to role label
    pub roles: BTreeMap<String, String>,
    /// Participant id to individual quota
    pub quotas: BTreeMap<String, f64>,
    pub update_frequency: Option<UpdateFrequency>,
    pub custom_update_date: Option<Date>,

    // Target audience & segmentation
    pub industries: Vec<String>,
    pub regions: Vec<String>,
    pub company_size: CompanySize,
    pub buyer_persona: String,

    // Channels & strategies
    pub sales_strategies: Vec<String>,
    pub channel_allocation: Vec<ChannelAllocation>,
    pub key_messages: String,
    pub competitors: String,

    // Data sources
    pub crm_integration: BTreeMap<String, bool>,
    pub communication_data: BTreeMap<String, bool>,
    pub lms_integration: bool,
    /// Hours between data refreshes
    pub data_refresh_frequency: u32,

    // Drift detection
    pub drift: DriftSettings,
}

impl Default for PlanConfiguration {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            start_date: None,
            end_date: None,
            owner_id: None,
            scope: PlanScope::default(),
            revenue_goal: 0.0,
            pipeline_coverage_target: 0.0,
            icp_mix_target: 0.0,
            next_step_coverage: 0.0,
            monthly_pipeline_creation_target: 0.0,
            lead_to_meeting_held: 0.0,
            meeting_to_sqo: 0.0,
            sqo_to_proposal: 0.0,
            proposal_to_commit: 0.0,
            commit_to_won: 0.0,
            overall_win_rate: 0.0,
            sales_cycle_target: 0.0,
            multithreading: 0.0,
            meetings_held_rate_target: 0.0,
            forecast_accuracy_threshold: 0.0,
            close_date_change_rate_max: 0.0,
            slippage_max: 0.0,
            no_decision_max: 0.0,
            at_risk_logo_max: 0.0,
            median_discount_ceiling: 0.0,
            non_standard_terms_max: 0.0,
            expansion_as_percent_of_new_arr: 0.0,
            renewal_win_rate: 0.0,
            selected_teams: Vec::new(),
            participants: Vec::new(),
            roles: BTreeMap::new(),
            quotas: BTreeMap::new(),
            update_frequency: None,
            custom_update_date: None,
            industries: Vec::new(),
            regions: Vec::new(),
            company_size: CompanySize::default(),
            buyer_persona: String::new(),
            sales_strategies: Vec::new(),
            channel_allocation: Vec::new(),
            key_messages: String::new(),
            competitors: String::new(),
            crm_integration: BTreeMap::new(),
            communication_data: BTreeMap::new(),
            lms_integration: false,
            data_refresh_frequency: 24,
            drift: DriftSettings::default(),
        }
    }
}

impl PlanConfiguration {
    /// Whether the given member is a plan participant.
    pub fn is_participant(&self, member_id: &str) -> bool {
        self.participants.iter().any(|id| id == member_id)
    }

    /// Removes roles and quotas of members who are not participants,
    /// returning the keys (`roles`, `quotas`) that lost entries.
    pub fn drop_orphan_assignments(&mut self) -> Vec<&'static str> {
        let participants = &self.participants;
        let mut dropped = Vec::new();

        let before = self.roles.len();
        self.roles.retain(|id, _| participants.contains(id));
        if self.roles.len() != before {
            dropped.push("roles");
        }

        let before = self.quotas.len();
        self.quotas.retain(|id, _| participants.contains(id));
        if self.quotas.len() != before {
            dropped.push("quotas");
        }
        dropped
    }

    /// Derived total of the channel allocation percentages.
    pub fn allocation_total(&self) -> AllocationTotal {
        AllocationTotal::from_allocations(&self.channel_allocation)
    }

    /// Looks up a channel allocation by id.
    pub fn allocation(&self, id: &str) -> Option<&ChannelAllocation> {
        self.channel_allocation.iter().find(|entry| entry.id == id)
    }

    /// Enabled data-source names of a source map, in key order.
    pub fn enabled_sources(sources: &BTreeMap<String, bool>) -> Vec<&str> {
        sources
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Advisory state of the channel allocation total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllocationState {
    /// Exactly 100%, or nothing allocated yet
    Balanced,
    /// Below 100%, with the remaining share
    Remaining(f64),
    /// Above 100%
    Exceeds,
}

/// Sum of channel allocation percentages.
///
/// The sum is never capped; it only drives a warning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationTotal {
    pub total: f64,
    pub entries: usize,
}

impl AllocationTotal {
    pub fn from_allocations(allocations: &[ChannelAllocation]) -> Self {
        Self {
            total: allocations.iter().map(|entry| entry.percentage).sum(),
            entries: allocations.len(),
        }
    }

    pub fn state(&self) -> AllocationState {
        if self.entries == 0 || self.total == 100.0 {
            AllocationState::Balanced
        } else if self.total > 100.0 {
            AllocationState::Exceeds
        } else {
            AllocationState::Remaining(100.0 - self.total)
        }
    }

    /// Whether the total warrants a warning.
    pub fn needs_attention(&self) -> bool {
        self.state() != AllocationState::Balanced
    }
}
