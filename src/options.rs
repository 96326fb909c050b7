use std::path::PathBuf;

use serde::Deserialize;

/// Resolved per-invocation configuration.
///
/// Built by layering, in increasing precedence: built-in defaults, the
/// host-level settings object, the per-invocation query. Immutable once
/// merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Path to the linter configuration, handed through verbatim. Never
    /// interpreted here.
    pub config_file: PathBuf,
    /// Print findings to the console.
    pub display_output: bool,
    /// Bypass the seen-set and re-lint on every invocation.
    pub ignore_cache: bool,
    /// Forward warning-severity findings to the host diagnostic channel.
    pub webpack_warnings: bool,
    /// Forward error-severity (and untagged) findings to the host diagnostic
    /// channel.
    pub webpack_errors: bool,
    /// Globs to lint together when the source pulls in other files via
    /// `@import`.
    pub files: Option<Vec<String>>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from("./.stylelint.config.js"),
            display_output: true,
            ignore_cache: false,
            webpack_warnings: true,
            webpack_errors: true,
            files: None,
        }
    }
}

impl Options {
    /// Layer `host` then `query` over the defaults.
    pub fn resolve(host: &OptionsOverlay, query: &OptionsOverlay) -> Self {
        let mut options = Options::default();
        options.apply(host);
        options.apply(query);
        options
    }

    fn apply(&mut self, overlay: &OptionsOverlay) {
        if let Some(config_file) = &overlay.config_file {
            self.config_file = config_file.clone();
        }
        if let Some(display_output) = overlay.display_output {
            self.display_output = display_output;
        }
        if let Some(ignore_cache) = overlay.ignore_cache {
            self.ignore_cache = ignore_cache;
        }
        if let Some(webpack_warnings) = overlay.webpack_warnings {
            self.webpack_warnings = webpack_warnings;
        }
        if let Some(webpack_errors) = overlay.webpack_errors {
            self.webpack_errors = webpack_errors;
        }
        if let Some(files) = &overlay.files {
            self.files = Some(files.clone());
        }
    }
}

/// Partial form of [`Options`] with every field optional.
///
/// Used for both the host-level settings object and the parsed query, so the
/// two layers deserialize and merge the same way. Key names match the loader
/// convention (`configFile`, `ignoreCache`, ...); unknown keys are a setup
/// error rather than being silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct OptionsOverlay {
    pub config_file: Option<PathBuf>,
    pub display_output: Option<bool>,
    pub ignore_cache: Option<bool>,
    pub webpack_warnings: Option<bool>,
    pub webpack_errors: Option<bool>,
    pub files: Option<Vec<String>>,
}
