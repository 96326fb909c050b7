use std::path::Path;

/// The host pipeline seam.
///
/// One context per file transformation. It identifies the resource being
/// transformed and exposes the host's two diagnostic sinks. Whether a
/// forwarded diagnostic fails the overall build is host policy.
pub trait TransformContext: Send + Sync {
    /// Absolute path of the resource being transformed.
    fn resource_path(&self) -> &Path;

    /// Forward a warning-severity diagnostic to the host.
    fn emit_warning(&self, message: &str);

    /// Forward an error-severity diagnostic to the host.
    fn emit_error(&self, message: &str);
}
