use serde::Serialize;

/// Result of a tick write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Inserted,
    /// A row already exists for this timestamp; nothing was written.
    Coalesced,
}

/// One row of a historical range read, reduced to the requested symbols.
///
/// `None` means the stored column was NULL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRow {
    pub timestamp: i64,
    pub base: Option<f64>,
    pub target: Option<f64>,
}
