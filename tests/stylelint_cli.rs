//! Drives [`StylelintCli`] against a scripted stand-in for the stylelint
//! binary, so the subprocess plumbing is covered without a node toolchain.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use tempfile::TempDir;

use stylebridge::{LintRequest, Linter, Severity, StylelintCli};

/// Writes an executable shell script acting as the linter binary.
fn fake_linter(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("fake-stylelint");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

const REPORT_JSON: &str = r#"[{"source":"stdin.scss","warnings":[{"line":1,"column":2,"rule":"color-no-invalid-hex","severity":"error","text":"Unexpected invalid hex color"}]}]"#;

#[tokio::test]
async fn test_source_request_goes_over_stdin() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    // Echo stdin into the report text so we can see it arrived intact.
    let program = fake_linter(
        &dir,
        r#"code=$(cat)
printf '[{"source":"stdin.scss","warnings":[{"line":1,"column":1,"severity":"warning","text":"%s"}]}]' "$code""#,
    );

    let reports = StylelintCli::new(program)
        .lint(LintRequest::Source {
            code: "a { color: red }".to_string(),
            syntax: "scss".to_string(),
            config_file: PathBuf::from("./.stylelint.config.js"),
        })
        .await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].warnings[0].text, "a { color: red }");
    assert_eq!(reports[0].warnings[0].severity, Severity::Warning);

    Ok(())
}

#[tokio::test]
async fn test_exit_code_two_still_yields_reports() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    // stylelint exits with 2 when violations were found.
    let program = fake_linter(&dir, &format!("printf '%s' '{REPORT_JSON}'\nexit 2"));

    let reports = StylelintCli::new(program)
        .lint(LintRequest::Files {
            patterns: vec!["src/**/*.scss".to_string()],
            config_file: PathBuf::from("./.stylelint.config.js"),
        })
        .await?;

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].warnings[0].severity, Severity::Error);
    assert_eq!(reports[0].warnings[0].text, "Unexpected invalid hex color");

    Ok(())
}

#[tokio::test]
async fn test_other_exit_codes_are_failures() {
    let dir = TempDir::new().unwrap();
    let program = fake_linter(&dir, "echo 'config not found' >&2\nexit 78");

    let err = StylelintCli::new(program)
        .lint(LintRequest::Files {
            patterns: vec!["src/**/*.scss".to_string()],
            config_file: PathBuf::from("./missing.config.js"),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("config not found"));
}

#[tokio::test]
async fn test_garbage_output_is_a_failure() {
    let dir = TempDir::new().unwrap();
    let program = fake_linter(&dir, "printf 'not json'");

    let err = StylelintCli::new(program)
        .lint(LintRequest::Files {
            patterns: vec!["src/**/*.scss".to_string()],
            config_file: PathBuf::from("./.stylelint.config.js"),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("could not parse linter JSON output"));
}
