use std::path::PathBuf;

use async_trait::async_trait;

use crate::diagnostic::FileReport;

/// What to lint in one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintRequest {
    /// Lint source text directly. `syntax` is the resource extension without
    /// the leading dot (`scss`, `less`, ...).
    Source {
        code: String,
        syntax: String,
        config_file: PathBuf,
    },
    /// Lint a set of path globs together. Used when the transformed source
    /// pulls in other files and the caller configured an explicit file list.
    Files {
        patterns: Vec<String>,
        config_file: PathBuf,
    },
}

impl LintRequest {
    pub fn config_file(&self) -> &PathBuf {
        match self {
            Self::Source { config_file, .. } => config_file,
            Self::Files { config_file, .. } => config_file,
        }
    }
}

/// The external linter seam.
///
/// Implementations must be `Send + Sync` so one linter can serve many
/// in-flight transforms.
#[async_trait]
pub trait Linter: Send + Sync {
    /// Run the linter and return one report per analyzed source, warnings in
    /// the order the linter produced them.
    async fn lint(&self, request: LintRequest) -> anyhow::Result<Vec<FileReport>>;
}
