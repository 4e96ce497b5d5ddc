use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VALID_PLAN: &str = r#"{
    "name": "FY25 Enterprise Push",
    "description": "Grow enterprise ARR",
    "startDate": "2025-01-01",
    "endDate": "2025-12-31",
    "ownerId": "1",
    "revenueGoal": 1500000,
    "selectedTeams": ["enterprise"],
    "participants": ["1", "3"],
    "roles": {"1": "Account Executive (AE)"}
}"#;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
///
/// The XDG config home points into the test directory so a developer's own
/// directory file never leaks into the output.
fn planwright_cmd(env: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("planwright").expect("Failed to find planwright binary");
    cmd.env("XDG_CONFIG_HOME", env.path().join("config"));
    cmd.arg("--no-color");
    cmd
}

fn write_plan(env: &TempDir, name: &str, json: &str) -> PathBuf {
    let path = env.path().join(name);
    fs::write(&path, json).expect("Failed to write plan file");
    path
}

#[test]
fn test_cli_lists_steps() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("steps")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Plan Overview (`overview`)"))
        .stdout(predicate::str::contains("6. Drift Detection Settings (`drift`)"))
        .stdout(predicate::str::contains("7. Review & Confirm (`review`)"));
}

#[test]
fn test_cli_without_command_lists_steps() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Goals & Targets (`goals`)"));
}

#[test]
fn test_cli_defaults_is_json() {
    let env = create_cli_test_environment();

    let output = planwright_cmd(&env)
        .arg("defaults")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("defaults should print JSON");
    assert_eq!(json["metrics"]["winRate"]["enabled"], true);
    assert_eq!(json["metrics"]["winRate"]["window"], "28d");
    assert_eq!(json["notifications"]["email"], true);
}

#[test]
fn test_cli_validate_reports_missing_fields() {
    let env = create_cli_test_environment();
    let plan = write_plan(&env, "blank.json", "{}");

    planwright_cmd(&env)
        .args(["validate", "--config", plan.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Plan Overview"))
        .stdout(predicate::str::contains("Plan name is required"))
        .stdout(predicate::str::contains("Revenue goal must be greater than 0"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_cli_validate_single_step() {
    let env = create_cli_test_environment();
    let plan = write_plan(&env, "blank.json", "{}");
    let plan_arg = plan.to_str().unwrap();

    planwright_cmd(&env)
        .args(["validate", "--config", plan_arg, "--step", "team"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Reps & Teams is valid"));

    planwright_cmd(&env)
        .args(["validate", "--config", plan_arg, "--step", "2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("revenueGoal"))
        .stdout(predicate::str::contains("Plan name").not());
}

#[test]
fn test_cli_validate_valid_plan() {
    let env = create_cli_test_environment();
    let plan = write_plan(&env, "plan.json", VALID_PLAN);

    planwright_cmd(&env)
        .args(["validate", "--config", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Plan is valid"));
}

#[test]
fn test_cli_validate_flags_drift_problems() {
    let env = create_cli_test_environment();
    let plan = write_plan(
        &env,
        "plan.json",
        r#"{"name": "x", "startDate": "2025-01-01", "endDate": "2025-02-01", "ownerId": "2",
            "revenueGoal": 1,
            "drift": {"notifications": {"webhookUrl": "hooks.example.com"}}}"#,
    );

    planwright_cmd(&env)
        .args(["validate", "--config", plan.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Webhook URL must start with http:// or https://",
        ));
}

#[test]
fn test_cli_review_plan_file() {
    let env = create_cli_test_environment();
    let plan = write_plan(&env, "plan.json", VALID_PLAN);

    planwright_cmd(&env)
        .args(["review", "--config", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Review & Confirm"))
        .stdout(predicate::str::contains("**Plan Owner**: Sarah Chen - Sales Director"))
        .stdout(predicate::str::contains("**Start Date**: Jan 1, 2025"))
        .stdout(predicate::str::contains("**Revenue Goal**: $1,500,000"))
        .stdout(predicate::str::contains("Alex Thompson: Account Executive (AE)"));
}

#[test]
fn test_cli_review_rejects_bad_plan_files() {
    let env = create_cli_test_environment();
    let missing = env.path().join("missing.json");

    planwright_cmd(&env)
        .args(["review", "--config", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read plan file"));

    let unknown = write_plan(&env, "unknown.json", r#"{"name": 42}"#);
    planwright_cmd(&env)
        .args(["review", "--config", unknown.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse plan file"));
}

#[test]
fn test_cli_plan_file_drops_assignments_of_non_participants() {
    let env = create_cli_test_environment();
    let plan = write_plan(
        &env,
        "plan.json",
        r#"{"participants": ["1"],
            "roles": {"1": "AE", "5": "Sales Engineer"},
            "quotas": {"5": 90000}}"#,
    );

    planwright_cmd(&env)
        .args(["review", "--config", plan.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alex Thompson: AE"))
        .stdout(predicate::str::contains("Taylor Davis").not())
        .stdout(predicate::str::contains("$90,000").not());
}

#[test]
fn test_cli_custom_directory_file() {
    let env = create_cli_test_environment();
    let directory = env.path().join("directory.json");
    fs::write(
        &directory,
        r#"{"users": [{"id": "1", "name": "Ada Byron", "role": "CRO"}]}"#,
    )
    .expect("Failed to write directory");
    let plan = write_plan(&env, "plan.json", VALID_PLAN);

    planwright_cmd(&env)
        .args([
            "--directory-file",
            directory.to_str().unwrap(),
            "review",
            "--config",
            plan.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Byron - CRO"))
        // Unknown team ids fall back to the raw id
        .stdout(predicate::str::contains("  - enterprise"));
}

#[test]
fn test_cli_directory_write_installs_default() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .args(["directory", "--write"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Directory written to"));

    let installed = env.path().join("config/planwright/directory.json");
    let json = fs::read_to_string(&installed).expect("directory file should exist");
    assert!(json.contains("Sarah Chen"));

    planwright_cmd(&env)
        .arg("directory")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Enterprise Sales\""));
}

#[test]
fn test_cli_session_full_walkthrough() {
    let env = create_cli_test_environment();
    let script = r#"
# overview
set name "FY25 Enterprise Push"
set startDate "2025-01-01"
set endDate "2025-12-31"
set ownerId "1"
next
set revenueGoal 250000
next
toggle teams enterprise
toggle members 1
role 1 Account Executive (AE)
quota 1 120000
next
toggle industries Finance
size max 5000
next
channel add Referrals 60
channel add Events 40
channel set 2 "Field Events" 30
next
metric callDuration enabled off
drift save
next
review
submit
quit
"#;

    planwright_cmd(&env)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 2 of 7: Goals & Targets"))
        .stdout(predicate::str::contains("Step 7 of 7: Review & Confirm"))
        .stdout(predicate::str::contains("Total allocation: 90% (10% remaining)"))
        .stdout(predicate::str::contains("Success: Drift settings saved"))
        .stdout(predicate::str::contains("Alex Thompson: Account Executive (AE)"))
        .stdout(predicate::str::contains(
            "Success: Plan 'FY25 Enterprise Push' submitted",
        ));
}

#[test]
fn test_cli_session_quoted_labels_and_participant_cleanup() {
    let env = create_cli_test_environment();
    let script = r#"
channel add Referrals 60
channel set 1 "Partner Referrals" 40
toggle members 1
quota 1 5000
set participants []
review
"#;

    planwright_cmd(&env)
        .arg("session")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Partner Referrals: 40%"))
        .stdout(predicate::str::contains("\"Partner Referrals\"").not())
        .stdout(predicate::str::contains(
            "Updated 2 field(s):\n- participants\n- quotas\n",
        ))
        .stdout(predicate::str::contains("**Quotas**").not());
}

#[test]
fn test_cli_session_rejects_non_finite_numbers() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin("toggle members 1\nquota 1 inf\nquota 1 NaN\nreview\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid quota: 'inf' is not a finite number",
        ))
        .stdout(predicate::str::contains(
            "Error: Invalid quota: 'NaN' is not a finite number",
        ))
        .stdout(predicate::str::contains("**Quotas**").not());
}

#[test]
fn test_cli_session_blocks_incomplete_step() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin("next\nerrors\nsubmit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Plan Overview is incomplete"))
        .stdout(predicate::str::contains("- **name**: Plan name is required"))
        .stdout(predicate::str::contains("only be submitted from the Review & Confirm step"));
}

#[test]
fn test_cli_session_jump_and_back() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin("jump drift\nback\nback\njump 1\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 6 of 7: Drift Detection"))
        .stdout(predicate::str::contains("Step 4 of 7: Target Audience & Segmentation"))
        .stdout(predicate::str::contains("Still on step 1 of 7"));
}

#[test]
fn test_cli_session_confirmations_read_next_line() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin("set name \"Draft\"\ncancel\nno\ncancel\ny\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Are you sure you want to cancel? All progress will be lost.",
        ))
        .stdout(predicate::str::contains("Cancel aborted."))
        .stdout(predicate::str::contains("Success: Wizard reset to a blank plan"))
        .stdout(predicate::str::contains("**Plan Name**: Not set"));
}

#[test]
fn test_cli_session_drift_validation() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin(
            "notify webhook ftp://hooks.example.com\ndrift save\ndrift validate\ndrift defaults\nyes\ndrift validate\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Drift settings are invalid"))
        .stdout(predicate::str::contains("Error: 1 drift problem(s)"))
        .stdout(predicate::str::contains("Success: Drift settings restored to defaults"))
        .stdout(predicate::str::contains("Success: Drift settings are valid"));
}

#[test]
fn test_cli_session_reports_bad_commands() {
    let env = create_cli_test_environment();

    planwright_cmd(&env)
        .arg("session")
        .write_stdin("dance\nrole 9 Sales Engineer\nchannel remove 3\nset budget 5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Unknown command: 'dance'"))
        .stdout(predicate::str::contains("not a participant"))
        .stdout(predicate::str::contains("No channel #3"))
        .stdout(predicate::str::contains("Unknown plan field"));
}
