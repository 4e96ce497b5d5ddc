//! Parsing of session input lines.
//!
//! Lines are split into words the way a shell would (`shell_words`), so
//! labels with spaces can be quoted. Trailing labels may also be given
//! unquoted; their words are joined back with single spaces.

use std::str::FromStr;

use planwright_core::{
    models::SizeBound, MetricKey, MetricPatch, NotificationSetting, PlanPatch, Window, WizardStep,
};
use serde_json::Value;

/// Command list shown by `help`.
pub const HELP: &str = "\
# Session commands

- `show`, `progress`, `review`, `errors`
- `set <field> <value>`: replace one plan field, e.g. `set revenueGoal 500000`;
  the value is read as JSON when it parses, otherwise as text
- `toggle <teams|members|industries|regions|strategies> <value>`
- `role <member> <label>`, `quota <member> <amount>`
- `size <min|max> <employees>`
- `channel add <label> <percent>`, `channel set <n> <label> <percent>`, `channel remove <n>`
- `metric <key> <enabled|threshold|window> <value>`, `expect <key> <value>`
- `notify <email|chat> <on|off>`, `notify webhook <url>`
- `drift <validate|save|defaults>`
- `next`, `back`, `jump <n|slug>`
- `cancel`, `submit`, `quit`

Quote labels that contain spaces: `channel set 1 \"Partner Referrals\" 40`
";

/// Command words offered for tab completion.
pub const COMMANDS: &[&str] = &[
    "back", "cancel", "channel", "drift", "errors", "exit", "expect", "help", "jump", "metric",
    "next", "notify", "progress", "quit", "quota", "review", "role", "set", "show", "size",
    "submit", "toggle",
];

/// Set-valued plan fields edited with `toggle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Teams,
    Members,
    Industries,
    Regions,
    Strategies,
}

impl FromStr for ListField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "teams" | "team" => Ok(ListField::Teams),
            "members" | "member" | "participants" => Ok(ListField::Members),
            "industries" | "industry" => Ok(ListField::Industries),
            "regions" | "region" => Ok(ListField::Regions),
            "strategies" | "strategy" => Ok(ListField::Strategies),
            _ => Err(format!(
                "Invalid list: {s}. Must be 'teams', 'members', 'industries', 'regions', or 'strategies'"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriftAction {
    Validate,
    Save,
    Defaults,
}

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Help,
    Show,
    Progress,
    Set { field: String, value: String },
    Toggle { list: ListField, value: String },
    Role { member: String, label: String },
    Quota { member: String, amount: f64 },
    Size { bound: SizeBound, value: u32 },
    ChannelAdd { channel: String, percentage: f64 },
    ChannelSet { position: usize, channel: String, percentage: f64 },
    ChannelRemove { position: usize },
    Metric { key: MetricKey, patch: MetricPatch },
    Expect { key: MetricKey, value: f64 },
    Notify(NotificationSetting),
    Drift(DriftAction),
    Next,
    Back,
    Jump(WizardStep),
    Review,
    Errors,
    Cancel,
    Submit,
    Quit,
}

/// Builds the patch for `set <field> <value>`.
///
/// The value is tried as JSON first and as plain text when that fails, so
/// `set ownerId 1` and `set name FY25 Push` both work. When neither form is
/// accepted the JSON error is reported.
pub fn field_patch(field: &str, value: &str) -> planwright_core::Result<PlanPatch> {
    let text = || Value::String(value.to_string());
    match serde_json::from_str::<Value>(value) {
        Ok(json) => PlanPatch::field(field, json)
            .or_else(|e| PlanPatch::field(field, text()).map_err(|_| e)),
        Err(_) => PlanPatch::field(field, text()),
    }
}

/// Parses a measure; infinities and NaN are rejected because plan files
/// cannot store them.
fn decimal(s: &str, what: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("Invalid {what}: '{s}' is not a number"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("Invalid {what}: '{s}' is not a finite number"))
    }
}

fn count<T: FromStr>(s: &str, what: &str) -> Result<T, String> {
    s.parse()
        .map_err(|_| format!("Invalid {what}: '{s}' is not a whole number"))
}

fn switch(s: &str) -> Result<bool, String> {
    match s.to_lowercase().as_str() {
        "on" | "true" | "yes" | "enabled" => Ok(true),
        "off" | "false" | "no" | "disabled" => Ok(false),
        _ => Err(format!("Invalid switch: {s}. Must be 'on' or 'off'")),
    }
}

fn usage(form: &str) -> String {
    format!("Usage: {form}")
}

fn parse_channel(args: &[&str]) -> Result<SessionCommand, String> {
    match args {
        ["add", channel @ .., percentage] if !channel.is_empty() => {
            Ok(SessionCommand::ChannelAdd {
                channel: channel.join(" "),
                percentage: decimal(percentage, "percentage")?,
            })
        }
        ["set", position, channel @ .., percentage] if !channel.is_empty() => {
            Ok(SessionCommand::ChannelSet {
                position: count(position, "channel number")?,
                channel: channel.join(" "),
                percentage: decimal(percentage, "percentage")?,
            })
        }
        ["add", ..] => Err(usage("channel add <label> <percent>")),
        ["set", ..] => Err(usage("channel set <n> <label> <percent>")),
        ["remove" | "rm", position] => Ok(SessionCommand::ChannelRemove {
            position: count(position, "channel number")?,
        }),
        _ => Err(usage("channel <add|set|remove> ...")),
    }
}

fn parse_metric(args: &[&str]) -> Result<SessionCommand, String> {
    let [key, setting, value] = args else {
        return Err(usage("metric <key> <enabled|threshold|window> <value>"));
    };
    let key = key.parse()?;
    let patch = match *setting {
        "enabled" | "enable" => MetricPatch::enabled(switch(value)?),
        "threshold" => MetricPatch::threshold(decimal(value, "threshold")?),
        "window" => MetricPatch::window(value.parse::<Window>()?),
        _ => {
            return Err(format!(
                "Invalid metric setting: {setting}. Must be 'enabled', 'threshold', or 'window'"
            ))
        }
    };
    Ok(SessionCommand::Metric { key, patch })
}

fn parse_notify(args: &[&str]) -> Result<SessionCommand, String> {
    let setting = match args {
        ["email", value] => NotificationSetting::Email(switch(value)?),
        ["chat", value] => NotificationSetting::ChatWebhook(switch(value)?),
        ["webhook"] => NotificationSetting::WebhookUrl(String::new()),
        ["webhook", url] => NotificationSetting::WebhookUrl((*url).to_string()),
        _ => return Err(usage("notify <email|chat> <on|off> | notify webhook <url>")),
    };
    Ok(SessionCommand::Notify(setting))
}

impl FromStr for SessionCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = shell_words::split(line).map_err(|e| format!("Invalid input: {e}"))?;
        let Some((word, rest)) = tokens.split_first() else {
            return Err(usage("<command> [arguments]; type 'help' for a list"));
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();

        let command = match (word.to_lowercase().as_str(), args.as_slice()) {
            ("help" | "?", _) => SessionCommand::Help,
            ("show", _) => SessionCommand::Show,
            ("progress", _) => SessionCommand::Progress,
            ("review", _) => SessionCommand::Review,
            ("errors", _) => SessionCommand::Errors,
            ("next", _) => SessionCommand::Next,
            ("back", _) => SessionCommand::Back,
            ("cancel", _) => SessionCommand::Cancel,
            ("submit", _) => SessionCommand::Submit,
            ("quit" | "exit", _) => SessionCommand::Quit,
            ("jump", [step]) => SessionCommand::Jump(step.parse()?),
            ("jump", _) => return Err(usage("jump <n|slug>")),
            ("set", [field, value @ ..]) if !value.is_empty() => SessionCommand::Set {
                field: (*field).to_string(),
                value: value.join(" "),
            },
            ("set", _) => return Err(usage("set <field> <value>")),
            ("toggle", [list, value @ ..]) if !value.is_empty() => SessionCommand::Toggle {
                list: list.parse()?,
                value: value.join(" "),
            },
            ("toggle", _) => return Err(usage("toggle <list> <value>")),
            ("role", [member, label @ ..]) if !label.is_empty() => SessionCommand::Role {
                member: (*member).to_string(),
                label: label.join(" "),
            },
            ("role", _) => return Err(usage("role <member> <label>")),
            ("quota", [member, amount]) => SessionCommand::Quota {
                member: (*member).to_string(),
                amount: decimal(amount, "quota")?,
            },
            ("quota", _) => return Err(usage("quota <member> <amount>")),
            ("size", [bound, value]) => SessionCommand::Size {
                bound: bound.parse()?,
                value: count(value, "company size")?,
            },
            ("size", _) => return Err(usage("size <min|max> <employees>")),
            ("channel", args) => parse_channel(args)?,
            ("metric", args) => parse_metric(args)?,
            ("expect", [key, value]) => SessionCommand::Expect {
                key: key.parse()?,
                value: decimal(value, "expected value")?,
            },
            ("expect", _) => return Err(usage("expect <key> <value>")),
            ("notify", args) => parse_notify(args)?,
            ("drift", ["validate"]) => SessionCommand::Drift(DriftAction::Validate),
            ("drift", ["save"]) => SessionCommand::Drift(DriftAction::Save),
            ("drift", ["defaults" | "restore"]) => SessionCommand::Drift(DriftAction::Defaults),
            ("drift", _) => return Err(usage("drift <validate|save|defaults>")),
            _ => return Err(format!("Unknown command: '{word}'. Type 'help' for a list")),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use planwright_core::{models::CompanySize, PlanConfiguration};

    use super::*;

    fn parse(line: &str) -> SessionCommand {
        line.parse().expect("command should parse")
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("next"), SessionCommand::Next);
        assert_eq!(parse("  BACK "), SessionCommand::Back);
        assert_eq!(parse("jump goals"), SessionCommand::Jump(WizardStep::Goals));
        assert_eq!(parse("jump 7"), SessionCommand::Jump(WizardStep::Review));
        assert_eq!(parse("drift save"), SessionCommand::Drift(DriftAction::Save));
    }

    #[test]
    fn test_quoted_labels_lose_their_quotes() {
        assert_eq!(
            parse(r#"channel set 1 "Partner Referrals" 40"#),
            SessionCommand::ChannelSet {
                position: 1,
                channel: "Partner Referrals".to_string(),
                percentage: 40.0,
            }
        );
        assert_eq!(
            parse("role 1 'Account Executive (AE)'"),
            SessionCommand::Role {
                member: "1".to_string(),
                label: "Account Executive (AE)".to_string(),
            }
        );
        assert_eq!(
            parse(r#"set name "FY25 Enterprise Push""#),
            SessionCommand::Set {
                field: "name".to_string(),
                value: "FY25 Enterprise Push".to_string(),
            }
        );
    }

    #[test]
    fn test_unquoted_labels_keep_spaces() {
        assert_eq!(
            parse("role 1 Account Executive (AE)"),
            SessionCommand::Role {
                member: "1".to_string(),
                label: "Account Executive (AE)".to_string(),
            }
        );
        assert_eq!(
            parse("toggle industries Financial Services"),
            SessionCommand::Toggle {
                list: ListField::Industries,
                value: "Financial Services".to_string(),
            }
        );
        assert_eq!(
            parse("channel add Partner Referrals 35.5"),
            SessionCommand::ChannelAdd {
                channel: "Partner Referrals".to_string(),
                percentage: 35.5,
            }
        );
    }

    #[test]
    fn test_unbalanced_quotes_are_rejected() {
        let err = r#"channel add "Partner 40"#.parse::<SessionCommand>().unwrap_err();
        assert!(err.starts_with("Invalid input"));
    }

    #[test]
    fn test_field_patch_reads_json_then_text() {
        let mut config = PlanConfiguration::default();

        field_patch("companySize", r#"{"min": 10, "max": 50}"#)
            .unwrap()
            .apply_to(&mut config);
        assert_eq!(config.company_size, CompanySize { min: 10, max: 50 });

        field_patch("revenueGoal", "250000").unwrap().apply_to(&mut config);
        assert_eq!(config.revenue_goal, 250_000.0);

        // `1` parses as a JSON number but owner ids are strings
        field_patch("ownerId", "1").unwrap().apply_to(&mut config);
        assert_eq!(config.owner_id.as_deref(), Some("1"));

        field_patch("name", "FY25 Push").unwrap().apply_to(&mut config);
        assert_eq!(config.name, "FY25 Push");

        field_patch("startDate", "2025-01-01").unwrap().apply_to(&mut config);
        assert_eq!(config.start_date.map(|d| d.to_string()).as_deref(), Some("2025-01-01"));

        let err = field_patch("revenueGoal", "lots").unwrap_err();
        assert!(err.to_string().contains("revenueGoal"));
        let err = field_patch("budget", "5").unwrap_err();
        assert!(err.to_string().contains("Unknown plan field"));
    }

    #[test]
    fn test_non_finite_numbers_are_rejected() {
        for line in [
            "quota 1 inf",
            "quota 1 NaN",
            "channel add Events -inf",
            "expect winRate infinity",
            "metric winRate threshold nan",
        ] {
            let err = line.parse::<SessionCommand>().unwrap_err();
            assert!(err.contains("not a finite number"), "{line}: {err}");
        }
        assert_eq!(
            parse("quota 1 1e3"),
            SessionCommand::Quota {
                member: "1".to_string(),
                amount: 1000.0,
            }
        );
    }

    #[test]
    fn test_drift_commands() {
        assert_eq!(
            parse("metric winRate window 84d"),
            SessionCommand::Metric {
                key: MetricKey::WinRate,
                patch: MetricPatch::window(Window::Days84),
            }
        );
        assert_eq!(
            parse("metric callDuration enabled off"),
            SessionCommand::Metric {
                key: MetricKey::CallDuration,
                patch: MetricPatch::enabled(false),
            }
        );
        assert_eq!(
            parse("notify webhook https://hooks.example.com/x"),
            SessionCommand::Notify(NotificationSetting::WebhookUrl(
                "https://hooks.example.com/x".to_string()
            ))
        );
        assert_eq!(
            parse("notify webhook"),
            SessionCommand::Notify(NotificationSetting::WebhookUrl(String::new()))
        );
    }

    #[test]
    fn test_invalid_input_reports_usage() {
        let err = "quota 1".parse::<SessionCommand>().unwrap_err();
        assert!(err.starts_with("Usage: quota"));

        let err = "channel add 40".parse::<SessionCommand>().unwrap_err();
        assert!(err.starts_with("Usage: channel add"));

        let err = "metric bogus threshold 5".parse::<SessionCommand>().unwrap_err();
        assert!(err.contains("Invalid metric"));

        let err = "dance".parse::<SessionCommand>().unwrap_err();
        assert!(err.contains("Unknown command"));

        assert!("jump 9".parse::<SessionCommand>().is_err());
        assert!("size middle 5".parse::<SessionCommand>().is_err());
        assert!("size max -5".parse::<SessionCommand>().is_err());
    }
}
