use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// A single finding reported by the external linter.
///
/// Field names follow the stylelint JSON formatter, so this deserializes
/// straight out of `--formatter json` output. Extra keys (`rule`, `url`, ...)
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintWarning {
    pub line: u32,
    pub column: u32,
    #[serde(default)]
    pub severity: Severity,
    pub text: String,
}

impl LintWarning {
    /// `"{line}:{column}"`, the prefix used in console and host diagnostics.
    pub fn position(&self) -> String {
        format!("{}:{}", self.line, self.column)
    }
}

/// All findings for one linted source, in the order the linter returned them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub source: String,
    #[serde(default)]
    pub warnings: Vec<LintWarning>,
}
