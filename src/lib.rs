//! Bridges a bundler-style transform pipeline to an external CSS/SCSS linter.
//!
//! The host pipeline calls [`LintBridge::process`] once per file. The bridge
//! lints each path at most once per build run, reports findings to the
//! console and to the host's diagnostic channel, and always hands the
//! original content back unchanged.

pub mod bridge;
pub mod cache;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod linter;
pub mod options;
pub mod query;
pub mod report;
pub mod severity;
pub mod stylelint;

pub use bridge::LintBridge;
pub use context::TransformContext;
pub use diagnostic::{FileReport, LintWarning};
pub use error::BridgeError;
pub use linter::{LintRequest, Linter};
pub use options::{Options, OptionsOverlay};
pub use severity::Severity;
pub use stylelint::StylelintCli;
