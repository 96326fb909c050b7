use std::sync::Arc;

use tracing::{debug, error};

use crate::cache::SeenPaths;
use crate::context::TransformContext;
use crate::diagnostic::FileReport;
use crate::error::BridgeError;
use crate::linter::{LintRequest, Linter};
use crate::options::{Options, OptionsOverlay};
use crate::query::parse_query;
use crate::report::render_report;
use crate::severity::Severity;

/// The token whose presence switches a transform to the multi-file lint path.
const IMPORT_TOKEN: &str = "@import";

/// Bridges a transform pipeline to an external linter.
///
/// One bridge per build run: it owns the seen-set, so its lifetime decides
/// how long the at-most-once-per-path policy holds. The host-level settings
/// overlay is fixed at construction; per-invocation queries layer on top of
/// it inside [`LintBridge::process`].
pub struct LintBridge {
    linter: Arc<dyn Linter>,
    host: OptionsOverlay,
    seen: SeenPaths,
}

impl LintBridge {
    pub fn new(linter: Arc<dyn Linter>, host: OptionsOverlay) -> Self {
        Self {
            linter,
            host,
            seen: SeenPaths::new(),
        }
    }

    /// Transform entry point, one call per file the pipeline offers.
    ///
    /// Resolves once with either the original content, untouched, or the
    /// error that failed this transform step. Linter findings are reported
    /// as side effects (console and host diagnostics) and never alter the
    /// content.
    pub async fn process(
        &self,
        content: String,
        query: Option<&str>,
        ctx: &dyn TransformContext,
    ) -> Result<String, BridgeError> {
        let query_overlay = match query.map(parse_query).transpose() {
            Ok(overlay) => overlay.unwrap_or_default(),
            Err(err) => {
                error!(path = %ctx.resource_path().display(), "option error: {err}");
                return Err(err);
            }
        };
        let options = Options::resolve(&self.host, &query_overlay);

        // The seen-set insertion must happen before the first await so that
        // a second in-flight transform of the same path short-circuits here
        // instead of linting twice.
        if !options.ignore_cache && !self.seen.first_visit(ctx.resource_path()) {
            debug!(path = %ctx.resource_path().display(), "already linted in this run, skipping");
            return Ok(content);
        }

        let request = build_request(&content, &options, ctx);
        let reports = match self.linter.lint(request).await {
            Ok(reports) => reports,
            Err(err) => {
                error!(path = %ctx.resource_path().display(), "lint invocation failed: {err}");
                return Err(BridgeError::Lint(err));
            }
        };

        for report in &reports {
            dispatch_report(report, &options, ctx);
        }

        Ok(content)
    }
}

/// Picks the lint path: multi-file when the source contains an `@import`
/// token and a non-empty file list is configured, single-source otherwise.
///
/// The import check is a literal substring scan over the content the
/// pipeline handed us. It has no awareness of comments or string literals.
fn build_request(content: &str, options: &Options, ctx: &dyn TransformContext) -> LintRequest {
    let files = options.files.as_deref().unwrap_or_default();
    if !files.is_empty() && content.contains(IMPORT_TOKEN) {
        return LintRequest::Files {
            patterns: files.to_vec(),
            config_file: options.config_file.clone(),
        };
    }

    let syntax = ctx
        .resource_path()
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default();

    LintRequest::Source {
        code: content.to_string(),
        syntax,
        config_file: options.config_file.clone(),
    }
}

/// Prints one report (when display is on) and forwards its findings to the
/// host diagnostic channel per the forwarding flags.
fn dispatch_report(report: &FileReport, options: &Options, ctx: &dyn TransformContext) {
    if options.display_output {
        print!("{}", render_report(report));
    }

    for warning in &report.warnings {
        match warning.severity {
            Severity::Warning => {
                if options.webpack_warnings {
                    ctx.emit_warning(&format!("{} {}", warning.position(), warning.text));
                }
            }
            Severity::Error => {
                if options.webpack_errors {
                    ctx.emit_error(&format!("{} {}", warning.position(), warning.text));
                }
            }
            // Untagged findings carry no position worth trusting; forward
            // the bare text, and only ever on the error channel.
            Severity::Unspecified => {
                if options.webpack_errors {
                    ctx.emit_error(&warning.text);
                }
            }
        }
    }
}
