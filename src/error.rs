use thiserror::Error;

/// Failure of one transform step.
///
/// Findings reported by the linter are data, not errors; this type only
/// covers the cases where the step itself cannot complete.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The per-invocation query could not be parsed into known options.
    #[error("invalid loader query: {reason}")]
    Query { reason: String },

    /// The external linter rejected or could not be invoked.
    #[error("lint invocation failed: {0}")]
    Lint(#[source] anyhow::Error),
}
