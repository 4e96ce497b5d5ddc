//! Read-only review projection of a plan configuration.
//!
//! [`PlanReview::project`] turns the configuration and the directory into one
//! [`ReviewSection`] per editable step, each tagged with the step a front end
//! jumps to when the user wants to edit it. Projection never mutates and
//! never fails, defaults included; missing references fall back to
//! placeholder text.

use crate::{
    directory::Directory,
    display::{datetime::ReviewDate, format_number},
    models::{MetricGroup, PlanConfiguration, TargetGroup, UpdateFrequency, WizardStep},
};

pub use crate::display::datetime::NOT_SET;
pub const NOT_SELECTED: &str = "Not selected";
pub const NO_TEAMS: &str = "No teams selected";
pub const NO_MEMBERS: &str = "No team members selected";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NONE_SELECTED: &str = "None selected";

/// One line of a review section.
#[derive(Debug, Clone, PartialEq)]
pub enum ReviewItem {
    /// Label and formatted value
    Field { label: &'static str, value: String },
    /// Sub-heading grouping the items that follow
    Heading(&'static str),
    /// Labeled list, shown as `empty` when it has no entries
    List {
        label: &'static str,
        entries: Vec<String>,
        empty: &'static str,
    },
    /// Free-standing remark
    Note(String),
}

impl ReviewItem {
    fn field(label: &'static str, value: impl Into<String>) -> Self {
        ReviewItem::Field {
            label,
            value: value.into(),
        }
    }

    fn list(label: &'static str, entries: Vec<String>, empty: &'static str) -> Self {
        ReviewItem::List {
            label,
            entries,
            empty,
        }
    }
}

/// Review of one wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSection {
    /// Step the section summarizes and the edit action jumps to
    pub step: WizardStep,
    pub items: Vec<ReviewItem>,
}

impl ReviewSection {
    pub fn title(&self) -> &'static str {
        self.step.title()
    }

    /// Value of a field item, if the section has one with this label.
    pub fn value(&self, label: &str) -> Option<&str> {
        self.items.iter().find_map(|item| match item {
            ReviewItem::Field { label: l, value } if *l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// Entries of a list item, if the section has one with this label.
    pub fn entries(&self, label: &str) -> Option<&[String]> {
        self.items.iter().find_map(|item| match item {
            ReviewItem::List {
                label: l, entries, ..
            } if *l == label => Some(entries.as_slice()),
            _ => None,
        })
    }
}

/// Review of a whole plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReview {
    pub sections: Vec<ReviewSection>,
}

fn dollars(value: f64) -> String {
    format!("${}", format_number(value))
}

fn enabled(flag: bool) -> &'static str {
    if flag {
        "Enabled"
    } else {
        "Disabled"
    }
}

fn joined_or(values: &[&str], empty: &str) -> String {
    if values.is_empty() {
        empty.to_string()
    } else {
        values.join(", ")
    }
}

impl PlanReview {
    /// Projects the configuration into review sections for steps 1 to 6.
    pub fn project(plan: &PlanConfiguration, directory: &Directory) -> Self {
        Self {
            sections: vec![
                overview(plan, directory),
                goals(plan),
                team(plan, directory),
                audience(plan),
                strategy(plan),
                drift(plan),
            ],
        }
    }

    pub fn section(&self, step: WizardStep) -> Option<&ReviewSection> {
        self.sections.iter().find(|section| section.step == step)
    }
}

fn overview(plan: &PlanConfiguration, directory: &Directory) -> ReviewSection {
    let name = if plan.name.is_empty() {
        NOT_SET.to_string()
    } else {
        plan.name.clone()
    };
    let owner = plan
        .owner_id
        .as_deref()
        .and_then(|id| directory.user(id))
        .map_or_else(
            || NOT_SELECTED.to_string(),
            |user| format!("{} - {}", user.name, user.role),
        );

    let mut items = vec![
        ReviewItem::field("Plan Name", name),
        ReviewItem::field("Plan Owner", owner),
        ReviewItem::field("Start Date", ReviewDate::new(&plan.start_date).to_string()),
        ReviewItem::field("End Date", ReviewDate::new(&plan.end_date).to_string()),
        ReviewItem::field("Scope", plan.scope.label()),
    ];
    if !plan.description.trim().is_empty() {
        items.push(ReviewItem::field("Description", plan.description.clone()));
    }

    ReviewSection {
        step: WizardStep::Overview,
        items,
    }
}

fn goals(plan: &PlanConfiguration) -> ReviewSection {
    let mut items = vec![ReviewItem::field("Revenue Goal", dollars(plan.revenue_goal))];
    for group in TargetGroup::ALL {
        items.push(ReviewItem::Heading(group.title()));
        items.extend(
            group
                .fields()
                .iter()
                .map(|field| ReviewItem::field(field.label, field.display_value(plan))),
        );
    }

    ReviewSection {
        step: WizardStep::Goals,
        items,
    }
}

fn team(plan: &PlanConfiguration, directory: &Directory) -> ReviewSection {
    let teams = plan
        .selected_teams
        .iter()
        .map(|id| directory.team_name(id).to_string())
        .collect();
    let members = plan
        .participants
        .iter()
        .map(|id| directory.member_name(id).to_string())
        .collect();

    let mut items = vec![
        ReviewItem::list("Selected Teams", teams, NO_TEAMS),
        ReviewItem::list("Team Members", members, NO_MEMBERS),
    ];

    if !plan.roles.is_empty() {
        let roles = plan
            .roles
            .iter()
            .map(|(id, role)| format!("{}: {role}", directory.member_name(id)))
            .collect();
        items.push(ReviewItem::list("Role Assignments", roles, NOT_SPECIFIED));
    }
    if !plan.quotas.is_empty() {
        let quotas = plan
            .quotas
            .iter()
            .map(|(id, quota)| format!("{}: {}", directory.member_name(id), dollars(*quota)))
            .collect();
        items.push(ReviewItem::list("Quotas", quotas, NOT_SPECIFIED));
    }
    if let Some(frequency) = plan.update_frequency {
        let value = match plan.custom_update_date {
            Some(date) if frequency == UpdateFrequency::Custom => format!(
                "{} ({})",
                frequency.label(),
                ReviewDate(Some(&date))
            ),
            _ => frequency.label().to_string(),
        };
        items.push(ReviewItem::field("Update Frequency", value));
    }

    ReviewSection {
        step: WizardStep::Team,
        items,
    }
}

fn audience(plan: &PlanConfiguration) -> ReviewSection {
    let mut items = vec![
        ReviewItem::list("Industries", plan.industries.clone(), NOT_SPECIFIED),
        ReviewItem::field(
            "Company Size",
            format!(
                "{} - {} employees",
                plan.company_size.min, plan.company_size.max
            ),
        ),
        ReviewItem::list("Regions", plan.regions.clone(), NOT_SPECIFIED),
    ];
    if !plan.buyer_persona.trim().is_empty() {
        items.push(ReviewItem::field("Buyer Persona", plan.buyer_persona.clone()));
    }

    ReviewSection {
        step: WizardStep::Audience,
        items,
    }
}

fn strategy(plan: &PlanConfiguration) -> ReviewSection {
    let mut items = vec![ReviewItem::list(
        "Sales Strategies",
        plan.sales_strategies.clone(),
        NONE_SELECTED,
    )];

    if !plan.channel_allocation.is_empty() {
        let allocations = plan
            .channel_allocation
            .iter()
            .map(|entry| {
                let channel = if entry.channel.is_empty() {
                    "Unassigned"
                } else {
                    entry.channel.as_str()
                };
                format!("{channel}: {}%", entry.percentage)
            })
            .collect();
        items.push(ReviewItem::list("Channel Allocation", allocations, NONE_SELECTED));
        items.push(ReviewItem::Note(plan.allocation_total().to_string()));
    }
    if !plan.key_messages.trim().is_empty() {
        items.push(ReviewItem::field("Key Messages", plan.key_messages.clone()));
    }
    if !plan.competitors.trim().is_empty() {
        items.push(ReviewItem::field("Competitors", plan.competitors.clone()));
    }

    ReviewSection {
        step: WizardStep::Strategy,
        items,
    }
}

fn drift(plan: &PlanConfiguration) -> ReviewSection {
    let settings = &plan.drift;
    let crm = PlanConfiguration::enabled_sources(&plan.crm_integration);
    let communication = PlanConfiguration::enabled_sources(&plan.communication_data);

    let mut items = vec![
        ReviewItem::field("Data Sources", joined_or(&crm, NONE_SELECTED)),
        ReviewItem::field("Activity Monitoring", joined_or(&communication, NONE_SELECTED)),
        ReviewItem::field("Learning Tracking", enabled(plan.lms_integration)),
        ReviewItem::field(
            "Detection Frequency",
            format!("Every {} hour(s)", plan.data_refresh_frequency),
        ),
        ReviewItem::Heading("Monitored Metrics"),
    ];

    items.extend(
        MetricGroup::ALL
            .iter()
            .map(|group| ReviewItem::field(group.title(), settings.group_status(*group).label())),
    );

    let metrics = settings
        .enabled_metrics()
        .into_iter()
        .map(|key| {
            let config = settings.metric(key);
            format!(
                "{}: {} over {} (expected {})",
                key.label(),
                key.threshold_unit().format(config.threshold),
                config.window.as_str(),
                key.baseline_unit().format(settings.expected_value(key)),
            )
        })
        .collect();
    items.push(ReviewItem::list("Enabled Metrics", metrics, NONE_SELECTED));

    let notifications = &settings.notifications;
    let webhook = if notifications.webhook_url.is_empty() {
        NOT_SET.to_string()
    } else {
        notifications.webhook_url.clone()
    };
    items.extend([
        ReviewItem::Heading("Notifications"),
        ReviewItem::field("Email", enabled(notifications.email)),
        ReviewItem::field("Chat Webhook", enabled(notifications.chat_webhook)),
        ReviewItem::field("Webhook URL", webhook),
    ]);

    ReviewSection {
        step: WizardStep::Drift,
        items,
    }
}
