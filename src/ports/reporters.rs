//! Diagnostic Reporters
//!
//! Render one file's check results as compiler-style warning lines or JSON.

use crate::domain::diagnostics::CheckResult;
use crate::ports::DiagnosticReporter;

/// MSBuild-style text output, one warning line per offending `await`.
pub struct TextReporter;

impl DiagnosticReporter for TextReporter {
    fn render(&self, path: &str, results: &[CheckResult]) -> String {
        let mut out = String::new();
        for result in results {
            if !result.properly_configured {
                out.push_str(&warning_line(path, result));
                out.push('\n');
            }
        }
        out
    }
}

/// JSON output, one object per file. Every record is included, properly
/// configured points as well, so downstream tooling sees the full picture.
pub struct JsonReporter;

impl DiagnosticReporter for JsonReporter {
    fn render(&self, path: &str, results: &[CheckResult]) -> String {
        let report = serde_json::json!({
            "path": path,
            "diagnostics": results,
        });
        format!("{}\n", report)
    }
}

/// The warning line format is a compatibility contract with existing build
/// integrations. The reported span always covers six display columns from
/// the keyword start, the width of `await`, regardless of token length.
fn warning_line(path: &str, result: &CheckResult) -> String {
    format!(
        "{}({},{},{},{}): warning PA1000: Found 'await' without 'ConfigureAwait(false)'",
        path,
        result.line + 1,
        result.column + 1,
        result.line + 1,
        result.column + 6
    )
}
