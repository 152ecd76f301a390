use crate::symbols::Symbol;

/// Digits after the decimal point for every rendered rate
pub const DISPLAY_DECIMAL_PRECISION: usize = 6;

/// Anchor of every stored row. Live fetches may use another anchor,
/// but snapshots are rebased to this one before they are written.
pub const STORAGE_ANCHOR: Symbol = Symbol::Usd;

/// Tolerance when checking that the anchor's own rate is 1.0
pub const ANCHOR_TOLERANCE: f64 = 1e-9;

/// Default period between two fetch-and-store ticks
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// Seconds in a day, used by the retention window
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;
