use colored::Colorize;
use std::fmt::Write;

use crate::diagnostic::FileReport;
use crate::severity::Severity;

/// Renders one report as the colored console block.
///
/// Empty reports render to an empty string: no header, no separator. A
/// non-empty report gets a header line naming the source, one line per
/// finding, and a trailing blank line so consecutive reports stay readable.
pub fn render_report(report: &FileReport) -> String {
    let mut out = String::new();

    if report.warnings.is_empty() {
        return out;
    }

    writeln!(out, "{}", report.source.blue().underline().bold()).unwrap();
    for warning in &report.warnings {
        let line = match warning.severity {
            Severity::Warning => {
                format!("{} {}", warning.position(), warning.text).yellow()
            }
            Severity::Error => format!("{} {}", warning.position(), warning.text).red(),
            Severity::Unspecified => warning.text.clone().cyan(),
        };
        writeln!(out, "{line}").unwrap();
    }
    writeln!(out).unwrap();

    out
}
