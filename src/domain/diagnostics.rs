/// Diagnostic data produced by the checker core.

use serde::Serialize;

/// Verdict plus source position for one `await` expression.
///
/// Exactly one of these is produced per suspension point found, whether or
/// not the point turned out to be properly configured. Positions are the
/// `await` keyword's own start, not the wrapped call's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub properly_configured: bool,
    /// 0-based line of the `await` keyword.
    pub line: usize,
    /// 0-based column of the `await` keyword.
    pub column: usize,
}
