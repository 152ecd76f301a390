use serde::Serialize;

use crate::snapshots::WriteOutcome;

/// What one successful tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOutcome {
    pub timestamp: i64,
    pub write: WriteOutcome,
    /// Rows removed by the retention window (0 when retention is off).
    pub pruned: usize,
}
