use chrono::{DateTime, Utc};

use crate::constants::SECONDS_PER_DAY;

/// Current time as Unix seconds (UTC).
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// Cutoff timestamp for a retention window of `days` ending at `now`.
pub fn retention_cutoff(now: i64, days: u32) -> i64 {
    now.saturating_sub(i64::from(days) * SECONDS_PER_DAY)
}

/// Renders Unix seconds as RFC 3339 for log lines. Out-of-range values fall
/// back to the raw number.
pub fn format_unix(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| timestamp.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retention_cutoff_subtracts_whole_days() {
        assert_eq!(retention_cutoff(10 * SECONDS_PER_DAY, 3), 7 * SECONDS_PER_DAY);
        assert_eq!(retention_cutoff(i64::MIN + 1, 1), i64::MIN);
    }

    #[test]
    fn format_unix_renders_epoch() {
        assert_eq!(format_unix(0), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn now_unix_is_after_2020() {
        assert!(now_unix() > 1_577_836_800);
    }
}
