//! Display grouping of the numeric plan targets.

use super::PlanConfiguration;

/// How a target value is suffixed when shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetUnit {
    /// Multiple of something, `3×`
    Multiple,
    Percent,
    /// Tolerance band, `±10%`
    PlusMinusPercent,
    Days,
    /// Plain count
    Count,
}

impl TargetUnit {
    pub fn format(&self, value: f64) -> String {
        match self {
            TargetUnit::Multiple => format!("{value}×"),
            TargetUnit::Percent => format!("{value}%"),
            TargetUnit::PlusMinusPercent => format!("±{value}%"),
            TargetUnit::Days => format!("{value} days"),
            TargetUnit::Count => value.to_string(),
        }
    }
}

/// One numeric target of the goals step.
pub struct TargetField {
    /// camelCase key in plan files
    pub key: &'static str,
    pub label: &'static str,
    pub unit: TargetUnit,
    pub value: fn(&PlanConfiguration) -> f64,
}

impl TargetField {
    /// Formatted value of this target on the given plan.
    pub fn display_value(&self, plan: &PlanConfiguration) -> String {
        self.unit.format((self.value)(plan))
    }
}

/// Display groups of the goals step, in screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetGroup {
    PipelineCoverage,
    ConversionRates,
    SalesProcess,
    RiskManagement,
    CommercialTerms,
}

const PIPELINE_COVERAGE: &[TargetField] = &[
    TargetField {
        key: "pipelineCoverageTarget",
        label: "Pipeline Coverage Target",
        unit: TargetUnit::Multiple,
        value: |plan| plan.pipeline_coverage_target,
    },
    TargetField {
        key: "icpMixTarget",
        label: "ICP Mix Target",
        unit: TargetUnit::Percent,
        value: |plan| plan.icp_mix_target,
    },
    TargetField {
        key: "nextStepCoverage",
        label: "Next-Step Coverage",
        unit: TargetUnit::Percent,
        value: |plan| plan.next_step_coverage,
    },
    TargetField {
        key: "monthlyPipelineCreationTarget",
        label: "Monthly Pipeline Creation Target",
        unit: TargetUnit::Multiple,
        value: |plan| plan.monthly_pipeline_creation_target,
    },
];

const CONVERSION_RATES: &[TargetField] = &[
    TargetField {
        key: "leadToMeetingHeld",
        label: "Lead → Meeting Held",
        unit: TargetUnit::Percent,
        value: |plan| plan.lead_to_meeting_held,
    },
    TargetField {
        key: "meetingToSqo",
        label: "Meeting → SQO",
        unit: TargetUnit::Percent,
        value: |plan| plan.meeting_to_sqo,
    },
    TargetField {
        key: "sqoToProposal",
        label: "SQO → Proposal",
        unit: TargetUnit::Percent,
        value: |plan| plan.sqo_to_proposal,
    },
    TargetField {
        key: "proposalToCommit",
        label: "Proposal → Commit",
        unit: TargetUnit::Percent,
        value: |plan| plan.proposal_to_commit,
    },
    TargetField {
        key: "commitToWon",
        label: "Commit → Won",
        unit: TargetUnit::Percent,
        value: |plan| plan.commit_to_won,
    },
    TargetField {
        key: "overallWinRate",
        label: "Overall Win Rate",
        unit: TargetUnit::Percent,
        value: |plan| plan.overall_win_rate,
    },
];

const SALES_PROCESS: &[TargetField] = &[
    TargetField {
        key: "salesCycleTarget",
        label: "Sales Cycle Target",
        unit: TargetUnit::Days,
        value: |plan| plan.sales_cycle_target,
    },
    TargetField {
        key: "multithreading",
        label: "Multithreading (contacts/opportunity in Commit)",
        unit: TargetUnit::Count,
        value: |plan| plan.multithreading,
    },
    TargetField {
        key: "meetingsHeldRateTarget",
        label: "Meetings Held Rate Target",
        unit: TargetUnit::Percent,
        value: |plan| plan.meetings_held_rate_target,
    },
    TargetField {
        key: "forecastAccuracyThreshold",
        label: "Forecast Accuracy Threshold",
        unit: TargetUnit::PlusMinusPercent,
        value: |plan| plan.forecast_accuracy_threshold,
    },
];

const RISK_MANAGEMENT: &[TargetField] = &[
    TargetField {
        key: "closeDateChangeRateMax",
        label: "Close-Date Change Rate Max",
        unit: TargetUnit::Count,
        value: |plan| plan.close_date_change_rate_max,
    },
    TargetField {
        key: "slippageMax",
        label: "Slippage Max (% of commit pushed)",
        unit: TargetUnit::Percent,
        value: |plan| plan.slippage_max,
    },
    TargetField {
        key: "noDecisionMax",
        label: "No-Decision Max (% of SQOs)",
        unit: TargetUnit::Percent,
        value: |plan| plan.no_decision_max,
    },
    TargetField {
        key: "atRiskLogoMax",
        label: "At-Risk Logo Max",
        unit: TargetUnit::Percent,
        value: |plan| plan.at_risk_logo_max,
    },
];

const COMMERCIAL_TERMS: &[TargetField] = &[
    TargetField {
        key: "medianDiscountCeiling",
        label: "Median Discount Ceiling",
        unit: TargetUnit::Percent,
        value: |plan| plan.median_discount_ceiling,
    },
    TargetField {
        key: "nonStandardTermsMax",
        label: "Non-standard Terms Max",
        unit: TargetUnit::Percent,
        value: |plan| plan.non_standard_terms_max,
    },
    TargetField {
        key: "expansionAsPercentOfNewArr",
        label: "Expansion as % of New ARR",
        unit: TargetUnit::Percent,
        value: |plan| plan.expansion_as_percent_of_new_arr,
    },
    TargetField {
        key: "renewalWinRate",
        label: "Renewal Win Rate",
        unit: TargetUnit::Percent,
        value: |plan| plan.renewal_win_rate,
    },
];

impl TargetGroup {
    pub const ALL: [TargetGroup; 5] = [
        TargetGroup::PipelineCoverage,
        TargetGroup::ConversionRates,
        TargetGroup::SalesProcess,
        TargetGroup::RiskManagement,
        TargetGroup::CommercialTerms,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TargetGroup::PipelineCoverage => "Pipeline & Coverage Metrics",
            TargetGroup::ConversionRates => "Conversion Rates",
            TargetGroup::SalesProcess => "Sales Process Metrics",
            TargetGroup::RiskManagement => "Risk Management",
            TargetGroup::CommercialTerms => "Commercial Terms",
        }
    }

    pub fn fields(&self) -> &'static [TargetField] {
        match self {
            TargetGroup::PipelineCoverage => PIPELINE_COVERAGE,
            TargetGroup::ConversionRates => CONVERSION_RATES,
            TargetGroup::SalesProcess => SALES_PROCESS,
            TargetGroup::RiskManagement => RISK_MANAGEMENT,
            TargetGroup::CommercialTerms => COMMERCIAL_TERMS,
        }
    }
}
