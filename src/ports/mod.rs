use anyhow::Result;
use tree_sitter::Tree;

use crate::domain::diagnostics::CheckResult;

pub mod reporters;

pub trait SourceParser {
    fn parse(&self, source: &str, file: &str) -> Result<Tree>;
}

/// Renders one file's check results. Returns the text to emit; empty when
/// the file has nothing to report in the chosen format.
pub trait DiagnosticReporter {
    fn render(&self, path: &str, results: &[CheckResult]) -> String;
}
