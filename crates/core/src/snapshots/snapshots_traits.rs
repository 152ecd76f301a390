use async_trait::async_trait;

use super::snapshots_model::{RangeRow, WriteOutcome};
use crate::errors::Result;
use crate::rates::QuoteSet;
use crate::symbols::Symbol;

/// Persistence for USD-anchored quote snapshots keyed by Unix seconds.
///
/// Reads are synchronous and may run concurrently; writes are serialized
/// and each row becomes visible atomically.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Row with the greatest timestamp, or `None` when nothing is stored.
    fn read_latest(&self) -> Result<Option<QuoteSet>>;

    /// Rows with `start <= timestamp <= end`, ascending. `start > end` yields no rows.
    fn read_range(
        &self,
        base: Symbol,
        target: Symbol,
        start: i64,
        end: i64,
    ) -> Result<Vec<RangeRow>>;

    /// Appends one row. `quotes` must be anchored on USD. A second write for
    /// the same timestamp is a no-op reported as [`WriteOutcome::Coalesced`].
    async fn write_tick(&self, timestamp: i64, quotes: &QuoteSet) -> Result<WriteOutcome>;

    /// Deletes rows strictly older than `cutoff`, returning how many went.
    async fn prune_before(&self, cutoff: i64) -> Result<usize>;
}
