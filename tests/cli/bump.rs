use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_manifest(".", "school-app", "1.2.3")?;
    test.write_manifest("frontend", "school-app-frontend", "1.2.3")?;
    test.write_manifest("backend", "school-app-backend", "1.2.0")?;
    Ok(test)
}

fn version_of(test: &CliTest, path: &str) -> Result<String> {
    let manifest: Value = serde_json::from_str(&test.read_file(path)?)?;
    Ok(manifest["version"].as_str().unwrap_or_default().to_string())
}

#[test]
fn test_bump_defaults_to_patch() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.bump_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated package.json from 1.2.3 to 1.2.4
    Updated frontend/package.json from 1.2.3 to 1.2.4
    Updated backend/package.json from 1.2.0 to 1.2.1

    ----- stderr -----
    ");

    assert_eq!(version_of(&test, "package.json")?, "1.2.4");
    assert_eq!(version_of(&test, "backend/package.json")?, "1.2.1");

    Ok(())
}

#[test]
fn test_bump_minor() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.bump_command().arg("minor"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated package.json from 1.2.3 to 1.3.0
    Updated frontend/package.json from 1.2.3 to 1.3.0
    Updated backend/package.json from 1.2.0 to 1.3.0

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_bump_major() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.bump_command().arg("major"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated package.json from 1.2.3 to 2.0.0
    Updated frontend/package.json from 1.2.3 to 2.0.0
    Updated backend/package.json from 1.2.0 to 2.0.0

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_bump_preserves_manifest_layout() -> Result<()> {
    let test = CliTest::new()?;
    let original = r#"{
  "name": "school-app",
  "version": "0.9.9",
  "scripts": {
    "bump": "repokit bump",
    "check-translations": "repokit check"
  },
  "workspaces": [
    "frontend",
    "backend"
  ]
}
"#;
    test.write_file("package.json", original)?;
    test.write_manifest("frontend", "frontend", "0.9.9")?;
    test.write_manifest("backend", "backend", "0.9.9")?;

    let output = test.bump_command().output()?;
    assert!(output.status.success());

    assert_eq!(
        test.read_file("package.json")?,
        original.replace("0.9.9", "0.9.10")
    );

    Ok(())
}

#[test]
fn test_bump_dry_run_writes_nothing() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.bump_command().args(["minor", "--dry-run"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Would update package.json from 1.2.3 to 1.3.0
    Would update frontend/package.json from 1.2.3 to 1.3.0
    Would update backend/package.json from 1.2.0 to 1.3.0

    ----- stderr -----
    ");

    assert_eq!(version_of(&test, "package.json")?, "1.2.3");

    Ok(())
}

#[test]
fn test_bump_unknown_class_touches_nothing() -> Result<()> {
    let test = project()?;

    assert_cmd_snapshot!(test.bump_command().arg("huge"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: unknown bump class 'huge' (expected one of: patch, minor, major)
    ");

    assert_eq!(version_of(&test, "package.json")?, "1.2.3");

    Ok(())
}

#[test]
fn test_bump_halts_on_missing_manifest() -> Result<()> {
    let test = CliTest::new()?;
    test.write_manifest(".", "root", "1.0.0")?;
    test.write_manifest("backend", "backend", "1.0.0")?;

    let output = test.bump_command().output()?;
    let stdout = String::from_utf8(output.stdout)?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout, "Updated package.json from 1.0.0 to 1.0.1\n");
    assert!(stderr.starts_with("error: failed to bump frontend: manifest not found:"));

    // Already-written manifests stay written, later ones are untouched.
    assert_eq!(version_of(&test, "package.json")?, "1.0.1");
    assert_eq!(version_of(&test, "backend/package.json")?, "1.0.0");

    Ok(())
}

#[test]
fn test_bump_invalid_json_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("package.json", "{ \"version\": \"1.0.0\",, }")?;

    let output = test.bump_command().output()?;
    let stderr = String::from_utf8(output.stderr)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr.contains("failed to parse"));

    Ok(())
}

#[test]
fn test_bump_uses_configured_package_dirs() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".repokitrc.json",
        r#"{ "bump": { "packageDirs": ["packages/web", "packages/api"] } }"#,
    )?;
    test.write_manifest("packages/web", "web", "3.1.4")?;
    test.write_manifest("packages/api", "api", "2.7.1")?;

    assert_cmd_snapshot!(test.bump_command().arg("patch"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Updated packages/web/package.json from 3.1.4 to 3.1.5
    Updated packages/api/package.json from 2.7.1 to 2.7.2

    ----- stderr -----
    ");

    Ok(())
}
