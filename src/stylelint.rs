use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, bail};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::diagnostic::FileReport;
use crate::linter::{LintRequest, Linter};

/// `Linter` backed by a stylelint-compatible executable.
///
/// Invokes the binary with `--formatter json` and deserializes the report
/// array from stdout. Single-source requests go over stdin with a
/// `--stdin-filename` carrying the inferred syntax; file requests pass the
/// globs as arguments.
#[derive(Debug, Clone)]
pub struct StylelintCli {
    program: PathBuf,
}

impl StylelintCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for StylelintCli {
    fn default() -> Self {
        Self::new("stylelint")
    }
}

#[async_trait]
impl Linter for StylelintCli {
    async fn lint(&self, request: LintRequest) -> anyhow::Result<Vec<FileReport>> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("--formatter")
            .arg("json")
            .arg("--config")
            .arg(request.config_file())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let stdin_payload = match &request {
            LintRequest::Source { code, syntax, .. } => {
                cmd.arg("--stdin")
                    .arg("--stdin-filename")
                    .arg(format!("stdin.{syntax}"));
                Some(code.clone())
            }
            LintRequest::Files { patterns, .. } => {
                cmd.args(patterns);
                None
            }
        };

        let mut child = cmd
            .spawn()
            .with_context(|| format!("failed to spawn `{}`", self.program.display()))?;

        if let Some(code) = stdin_payload {
            let mut stdin = child
                .stdin
                .take()
                .context("child process has no stdin handle")?;
            stdin.write_all(code.as_bytes()).await?;
            // Dropping the handle closes the pipe so the linter sees EOF.
            drop(stdin);
        }

        let output = child.wait_with_output().await?;

        // stylelint exits with 2 when it found violations. That is a normal
        // outcome with a JSON body on stdout, not an invocation failure.
        if !output.status.success() && output.status.code() != Some(2) {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "`{}` exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            );
        }

        let reports: Vec<FileReport> = serde_json::from_slice(&output.stdout)
            .context("could not parse linter JSON output")?;
        Ok(reports)
    }
}
