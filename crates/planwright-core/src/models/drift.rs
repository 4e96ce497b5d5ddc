//! Drift-detection configuration: monitored metrics, baselines and
//! notification routing.
//!
//! Every monitored metric shares the same [`MetricConfig`] shape. What varies
//! per metric (display label, group, threshold unit, baseline unit and the
//! factory defaults) is described by [`MetricKey`], so no per-metric code is
//! needed anywhere else.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::display::numbers::format_number;

/// Message reported when no metric is enabled.
pub const NO_METRIC_ENABLED: &str = "At least one metric must be enabled";

/// Message reported when the webhook URL has a non-http scheme.
pub const WEBHOOK_SCHEME: &str = "Webhook URL must start with http:// or https://";

/// Observation window for a monitored metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Window {
    #[serde(rename = "7d")]
    Days7,
    #[serde(rename = "28d")]
    Days28,
    #[serde(rename = "84d")]
    Days84,
}

impl Window {
    /// The allowed windows, shortest first.
    pub const ALL: [Window; 3] = [Window::Days7, Window::Days28, Window::Days84];

    /// Wire representation (`7d`, `28d`, `84d`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Days7 => "7d",
            Window::Days28 => "28d",
            Window::Days84 => "84d",
        }
    }
}

impl FromStr for Window {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Window::ALL
            .into_iter()
            .find(|window| window.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid window: {s}. Must be '7d', '28d', or '84d'"))
    }
}

/// Unit of a metric's drift threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdUnit {
    /// Relative deviation in percent
    Percent,
    /// Staleness in hours
    Hours,
}

impl ThresholdUnit {
    /// Formats a threshold value with its unit (`10%`, `48h`).
    pub fn format(&self, value: f64) -> String {
        match self {
            ThresholdUnit::Percent => format!("{value}%"),
            ThresholdUnit::Hours => format!("{value}h"),
        }
    }
}

/// Unit of a metric's expected baseline value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineUnit {
    Percent,
    Dollars,
    Days,
    Minutes,
    Hours,
}

impl BaselineUnit {
    /// Formats a baseline value with its unit.
    pub fn format(&self, value: f64) -> String {
        match self {
            BaselineUnit::Percent => format!("{value}%"),
            BaselineUnit::Dollars => format!("${}", format_number(value)),
            BaselineUnit::Days => format!("{value} days"),
            BaselineUnit::Minutes => format!("{value} min"),
            BaselineUnit::Hours => format!("{value}h"),
        }
    }
}

/// Display groups for the monitored metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricGroup {
    SalesPerformance,
    ActivityEngagement,
    TrainingEnablement,
    ForecastAccuracy,
    DataQuality,
}

impl MetricGroup {
    /// All groups in display order.
    pub const ALL: [MetricGroup; 5] = [
        MetricGroup::SalesPerformance,
        MetricGroup::ActivityEngagement,
        MetricGroup::TrainingEnablement,
        MetricGroup::ForecastAccuracy,
        MetricGroup::DataQuality,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MetricGroup::SalesPerformance => "Sales Performance",
            MetricGroup::ActivityEngagement => "Activity & Engagement",
            MetricGroup::TrainingEnablement => "Training & Enablement",
            MetricGroup::ForecastAccuracy => "Forecast Accuracy",
            MetricGroup::DataQuality => "Data Quality",
        }
    }

    /// Metrics belonging to the group, in display order.
    pub fn metrics(&self) -> &'static [MetricKey] {
        use MetricKey::*;
        match self {
            MetricGroup::SalesPerformance => {
                &[WinRate, DealSize, SalesCycleLength, PipelineStageMix]
            }
            MetricGroup::ActivityEngagement => {
                &[CallConnectionRate, CallDuration, EmailOpenRate, MeetingHeldRate]
            }
            MetricGroup::TrainingEnablement => &[TrainingCompletionRate, AssessmentScore],
            MetricGroup::ForecastAccuracy => &[ForecastAccuracy],
            MetricGroup::DataQuality => &[MissingDataRate, IntegrationHealth],
        }
    }
}

/// Identifier of a monitored metric.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum MetricKey {
    WinRate,
    DealSize,
    SalesCycleLength,
    PipelineStageMix,
    CallConnectionRate,
    CallDuration,
    EmailOpenRate,
    MeetingHeldRate,
    TrainingCompletionRate,
    AssessmentScore,
    ForecastAccuracy,
    MissingDataRate,
    IntegrationHealth,
}

impl MetricKey {
    /// All metrics in display order.
    pub const ALL: [MetricKey; 13] = [
        MetricKey::WinRate,
        MetricKey::DealSize,
        MetricKey::SalesCycleLength,
        MetricKey::PipelineStageMix,
        MetricKey::CallConnectionRate,
        MetricKey::CallDuration,
        MetricKey::EmailOpenRate,
        MetricKey::MeetingHeldRate,
        MetricKey::TrainingCompletionRate,
        MetricKey::AssessmentScore,
        MetricKey::ForecastAccuracy,
        MetricKey::MissingDataRate,
        MetricKey::IntegrationHealth,
    ];

    /// Key as written in settings files (`winRate`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKey::WinRate => "winRate",
            MetricKey::DealSize => "dealSize",
            MetricKey::SalesCycleLength => "salesCycleLength",
            MetricKey::PipelineStageMix => "pipelineStageMix",
            MetricKey::CallConnectionRate => "callConnectionRate",
            MetricKey::CallDuration => "callDuration",
            MetricKey::EmailOpenRate => "emailOpenRate",
            MetricKey::MeetingHeldRate => "meetingHeldRate",
            MetricKey::TrainingCompletionRate => "trainingCompletionRate",
            MetricKey::AssessmentScore => "assessmentScore",
            MetricKey::ForecastAccuracy => "forecastAccuracy",
            MetricKey::MissingDataRate => "missingDataRate",
            MetricKey::IntegrationHealth => "integrationHealth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MetricKey::WinRate => "Win Rate",
            MetricKey::DealSize => "Deal Size (Avg)",
            MetricKey::SalesCycleLength => "Sales Cycle Length",
            MetricKey::PipelineStageMix => "Pipeline Stage Mix",
            MetricKey::CallConnectionRate => "Call Connection Rate",
            MetricKey::CallDuration => "Call Duration (Avg)",
            MetricKey::EmailOpenRate => "Email Open Rate",
            MetricKey::MeetingHeldRate => "Meeting Held Rate",
            MetricKey::TrainingCompletionRate => "Training Completion Rate",
            MetricKey::AssessmentScore => "Assessment Score (Avg)",
            MetricKey::ForecastAccuracy => "Forecast Accuracy",
            MetricKey::MissingDataRate => "Missing Data Rate",
            MetricKey::IntegrationHealth => "Integration Health",
        }
    }

    pub fn group(&self) -> MetricGroup {
        match self {
            MetricKey::WinRate
            | MetricKey::DealSize
            | MetricKey::SalesCycleLength
            | MetricKey::PipelineStageMix => MetricGroup::SalesPerformance,
            MetricKey::CallConnectionRate
            | MetricKey::CallDuration
            | MetricKey::EmailOpenRate
            | MetricKey::MeetingHeldRate => MetricGroup::ActivityEngagement,
            MetricKey::TrainingCompletionRate | MetricKey::AssessmentScore => {
                MetricGroup::TrainingEnablement
            }
            MetricKey::ForecastAccuracy => MetricGroup::ForecastAccuracy,
            MetricKey::MissingDataRate | MetricKey::IntegrationHealth => MetricGroup::DataQuality,
        }
    }

    pub fn threshold_unit(&self) -> ThresholdUnit {
        match self {
            MetricKey::IntegrationHealth => ThresholdUnit::Hours,
            _ => ThresholdUnit::Percent,
        }
    }

    pub fn baseline_unit(&self) -> BaselineUnit {
        match self {
            MetricKey::DealSize => BaselineUnit::Dollars,
            MetricKey::SalesCycleLength => BaselineUnit::Days,
            MetricKey::CallDuration => BaselineUnit::Minutes,
            MetricKey::IntegrationHealth => BaselineUnit::Hours,
            _ => BaselineUnit::Percent,
        }
    }

    /// Factory monitoring configuration for the metric.
    pub fn default_config(&self) -> MetricConfig {
        let (threshold, window) = match self {
            MetricKey::WinRate => (10.0, Window::Days28),
            MetricKey::DealSize => (15.0, Window::Days28),
            MetricKey::SalesCycleLength => (10.0, Window::Days28),
            MetricKey::PipelineStageMix => (10.0, Window::Days28),
            MetricKey::CallConnectionRate => (15.0, Window::Days7),
            MetricKey::CallDuration => (10.0, Window::Days7),
            MetricKey::EmailOpenRate => (15.0, Window::Days7),
            MetricKey::MeetingHeldRate => (15.0, Window::Days7),
            MetricKey::TrainingCompletionRate => (15.0, Window::Days28),
            MetricKey::AssessmentScore => (5.0, Window::Days28),
            MetricKey::ForecastAccuracy => (10.0, Window::Days28),
            MetricKey::MissingDataRate => (5.0, Window::Days7),
            MetricKey::IntegrationHealth => (48.0, Window::Days7),
        };
        MetricConfig {
            enabled: true,
            threshold,
            window,
        }
    }

    /// Factory expected baseline for the metric.
    pub fn default_baseline(&self) -> f64 {
        match self {
            MetricKey::WinRate => 25.0,
            MetricKey::DealSize => 50_000.0,
            MetricKey::SalesCycleLength => 90.0,
            MetricKey::PipelineStageMix => 30.0,
            MetricKey::CallConnectionRate => 35.0,
            MetricKey::CallDuration => 15.0,
            MetricKey::EmailOpenRate => 25.0,
            MetricKey::MeetingHeldRate => 80.0,
            MetricKey::TrainingCompletionRate => 90.0,
            MetricKey::AssessmentScore => 85.0,
            MetricKey::ForecastAccuracy => 85.0,
            MetricKey::MissingDataRate => 5.0,
            MetricKey::IntegrationHealth => 24.0,
        }
    }
}

impl FromStr for MetricKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid metric: {s}"))
    }
}

/// Monitoring configuration of one metric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MetricConfig {
    pub enabled: bool,
    /// Percentage deviation, or hours for [`ThresholdUnit::Hours`] metrics
    pub threshold: f64,
    pub window: Window,
}

/// Partial update for a [`MetricConfig`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetricPatch {
    pub enabled: Option<bool>,
    pub threshold: Option<f64>,
    pub window: Option<Window>,
}

impl MetricPatch {
    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Default::default()
        }
    }

    pub fn threshold(threshold: f64) -> Self {
        Self {
            threshold: Some(threshold),
            ..Default::default()
        }
    }

    pub fn window(window: Window) -> Self {
        Self {
            window: Some(window),
            ..Default::default()
        }
    }
}

impl MetricConfig {
    /// Merges the present fields of `patch` into this configuration.
    pub fn apply(&mut self, patch: MetricPatch) {
        if let Some(enabled) = patch.enabled {
            self.enabled = enabled;
        }
        if let Some(threshold) = patch.threshold {
            self.threshold = threshold;
        }
        if let Some(window) = patch.window {
            self.window = window;
        }
    }
}

/// Where drift alerts are delivered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Notifications {
    pub email: bool,
    pub chat_webhook: bool,
    pub webhook_url: String,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email: true,
            chat_webhook: false,
            webhook_url: String::new(),
        }
    }
}

/// A single notification field update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationSetting {
    Email(bool),
    ChatWebhook(bool),
    WebhookUrl(String),
}

/// Aggregate on/off state of a group of metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionStatus {
    On,
    Off,
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::On => "on",
            SectionStatus::Off => "off",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionStatus::On => "On",
            SectionStatus::Off => "Off",
        }
    }
}

/// Complete drift-detection settings for a plan.
///
/// Metrics or baselines missing from a deserialized document read as their
/// factory defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DriftSettings {
    pub metrics: BTreeMap<MetricKey, MetricConfig>,
    pub expected_values: BTreeMap<MetricKey, f64>,
    pub notifications: Notifications,
}

impl Default for DriftSettings {
    fn default() -> Self {
        Self {
            metrics: MetricKey::ALL
                .into_iter()
                .map(|key| (key, key.default_config()))
                .collect(),
            expected_values: MetricKey::ALL
                .into_iter()
                .map(|key| (key, key.default_baseline()))
                .collect(),
            notifications: Notifications::default(),
        }
    }
}

impl DriftSettings {
    /// Current configuration of a metric.
    pub fn metric(&self, key: MetricKey) -> MetricConfig {
        self.metrics
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_config())
    }

    /// Current expected baseline of a metric.
    pub fn expected_value(&self, key: MetricKey) -> f64 {
        self.expected_values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_baseline())
    }

    /// Merges a partial configuration into the named metric.
    pub fn set_metric(&mut self, key: MetricKey, patch: MetricPatch) {
        self.metrics
            .entry(key)
            .or_insert_with(|| key.default_config())
            .apply(patch);
    }

    /// Sets a metric's baseline, independent of its enabled flag.
    pub fn set_expected_value(&mut self, key: MetricKey, value: f64) {
        self.expected_values.insert(key, value);
    }

    pub fn set_notification(&mut self, setting: NotificationSetting) {
        match setting {
            NotificationSetting::Email(enabled) => self.notifications.email = enabled,
            NotificationSetting::ChatWebhook(enabled) => self.notifications.chat_webhook = enabled,
            NotificationSetting::WebhookUrl(url) => self.notifications.webhook_url = url,
        }
    }

    /// Whether any monitored metric is enabled.
    pub fn any_enabled(&self) -> bool {
        MetricKey::ALL.into_iter().any(|key| self.metric(key).enabled)
    }

    /// Metrics currently enabled, in display order.
    pub fn enabled_metrics(&self) -> Vec<MetricKey> {
        MetricKey::ALL
            .into_iter()
            .filter(|key| self.metric(*key).enabled)
            .collect()
    }

    /// Checks the settings, returning problems in a fixed order.
    ///
    /// An empty list means the settings can be saved.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.any_enabled() {
            problems.push(NO_METRIC_ENABLED.to_string());
        }

        let url = &self.notifications.webhook_url;
        if !url.is_empty() && !url.starts_with("http") {
            problems.push(WEBHOOK_SCHEME.to_string());
        }

        problems
    }

    /// "on" when any of the given metrics is enabled.
    pub fn section_status(&self, keys: &[MetricKey]) -> SectionStatus {
        if keys.iter().any(|key| self.metric(*key).enabled) {
            SectionStatus::On
        } else {
            SectionStatus::Off
        }
    }

    pub fn group_status(&self, group: MetricGroup) -> SectionStatus {
        self.section_status(group.metrics())
    }
}
