use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Classification of a linter finding.
///
/// Linters are not required to tag every warning: a missing severity field
/// deserializes to [`Severity::Unspecified`], so downstream matching stays
/// exhaustive instead of branching on an optional string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    #[default]
    #[serde(other)]
    Unspecified,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Unspecified => write!(f, "unspecified"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_severities() {
        assert_eq!(
            serde_json::from_str::<Severity>("\"warning\"").unwrap(),
            Severity::Warning
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"error\"").unwrap(),
            Severity::Error
        );
    }

    #[test]
    fn test_unknown_severity_is_unspecified() {
        assert_eq!(
            serde_json::from_str::<Severity>("\"info\"").unwrap(),
            Severity::Unspecified
        );
    }
}
