use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(
        parsed["bump"]["packageDirs"],
        serde_json::json!([".", "frontend", "backend"])
    );
    assert_eq!(
        parsed["translations"]["languages"],
        serde_json::json!(["en", "fi", "sv"])
    );
    assert_eq!(
        parsed["translations"]["output"],
        "translationCheckResult/translationResults.js"
    );

    assert!(
        content.contains("\n  \"bump\""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .repokitrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".repokitrc.json").exists());

    let content = test.read_file(".repokitrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".repokitrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: .repokitrc.json already exists
    ");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;

    test.write_file("frontend/src/App.tsx", "t('greeting')")?;
    test.write_manifest(".", "root", "0.1.0")?;
    test.write_manifest("frontend", "frontend", "0.1.0")?;
    test.write_manifest("backend", "backend", "0.1.0")?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let output = test.bump_command().output()?;
    assert!(
        output.status.success(),
        "Bump command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    Ok(())
}
