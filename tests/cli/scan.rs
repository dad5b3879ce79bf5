use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

const LOGIN_FEATURE: &str = r#"Feature: Login
  Scenario: Successful login
    Given a registered user
    And the login page is open
    When the user submits valid credentials
    Then the dashboard is shown
    But no warning is displayed
"#;

#[test]
fn test_scan_text_report() -> Result<()> {
    let test = CliTest::with_file("features/login.feature", LOGIN_FEATURE)?;

    let output = run(test.scan_command())?;

    assert!(output.success);
    assert_eq!(output.stderr, "");
    assert_snapshot!(output.stdout, @r"
    features/login.feature
      feature:  Login
      scenario: Successful login
      given:    a registered user
      given:    the login page is open
      when:     the user submits valid credentials
      then:     the dashboard is shown
      then:     no warning is displayed

    ✓ Analyzed 1 feature file: 1 feature, 1 scenario, 2 states, 1 action, 2 outcomes
    ");

    Ok(())
}

#[test]
fn test_scan_json_report() -> Result<()> {
    let test = CliTest::with_file("features/login.feature", LOGIN_FEATURE)?;

    let mut cmd = test.scan_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    assert!(output.success);
    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["totals"]["files"], 1);
    assert_eq!(report["summary"]["features"][0], "Login");
    assert_eq!(report["summary"]["files"].as_array().map(Vec::len), Some(7));
    assert_eq!(
        report["files"][0]["gherkins"]["outcomes"],
        serde_json::json!(["the dashboard is shown", "no warning is displayed"])
    );
    let path = report["files"][0]["path"].as_str().unwrap_or_default();
    assert!(path.starts_with(test.root().to_str().unwrap_or_default()));
    assert!(path.ends_with("login.feature"));

    Ok(())
}

#[test]
fn test_scan_explicit_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("specs/cart.feature", "Feature: Cart\nGiven an empty cart\n")?;
    test.write_file("other/ignored.feature", "Feature: Other\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("specs");
    let output = run(cmd)?;

    assert!(output.success);
    assert!(output.stdout.starts_with("cart.feature\n"));
    assert!(!output.stdout.contains("Other"));

    Ok(())
}

#[test]
fn test_scan_aggregates_multiple_files() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a/first.feature", "Feature: First\nGiven one\n")?;
    test.write_file("b/second.feature", "Feature: Second\nAnd dangling\nThen two\n")?;
    test.write_file("b/notes.txt", "Feature: Not a feature file\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;

    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(
        report["summary"]["features"],
        serde_json::json!(["First", "Second"])
    );
    assert_eq!(report["summary"]["states"], serde_json::json!(["one"]));
    assert_eq!(report["summary"]["outcomes"], serde_json::json!(["two"]));
    assert_eq!(report["totals"]["files"], 2);

    Ok(())
}

#[test]
fn test_scan_missing_directory() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.scan_command();
    cmd.arg("not-existing-folder");
    let output = run(cmd)?;

    assert!(output.success);
    assert!(output.stdout.contains("No feature files found"));
    assert!(output.stderr.contains("1 path(s) skipped due to access errors"));

    Ok(())
}

#[test]
fn test_config_ignores_and_format() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gherkinrc.json",
        r#"{
         "ignores": ["**/drafts/**"],
         "format": "json"
     }"#,
    )?;
    test.write_file("features/done.feature", "Feature: Done\n")?;
    test.write_file("features/drafts/wip.feature", "Feature: Draft\n")?;

    let output = run(test.scan_command())?;

    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["features"], serde_json::json!(["Done"]));

    Ok(())
}

#[test]
fn test_config_root_relative_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".gherkinrc.json",
        r#"{
         "root": "./",
         "ignores": ["drafts/**", "legacy"],
         "format": "json"
     }"#,
    )?;
    test.write_file("done.feature", "Feature: Done\n")?;
    test.write_file("drafts/wip.feature", "Feature: Draft\n")?;
    test.write_file("legacy/old.feature", "Feature: Legacy\n")?;

    let output = run(test.scan_command())?;

    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["features"], serde_json::json!(["Done"]));

    Ok(())
}

#[test]
fn test_cli_ignore_and_extension_flags() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("stories/pay.story", "Feature: Pay\n")?;
    test.write_file("stories/old/legacy.story", "Feature: Legacy\n")?;
    test.write_file("stories/skip.feature", "Feature: Skipped\n")?;

    let mut cmd = test.scan_command();
    cmd.args([
        "--extension",
        "story",
        "--ignore",
        "**/old/**",
        "--format",
        "json",
    ]);
    let output = run(cmd)?;

    let report: Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(report["summary"]["features"], serde_json::json!(["Pay"]));

    Ok(())
}

#[test]
fn test_invalid_config_fails() -> Result<()> {
    let test = CliTest::with_file(".gherkinrc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let output = run(test.scan_command())?;

    assert!(!output.success);
    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = run(test.command())?;

    assert!(output.success);
    assert!(output.stdout.contains("scan"));
    assert!(output.stdout.contains("init"));

    Ok(())
}
