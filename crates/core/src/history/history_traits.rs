use crate::errors::Result;
use crate::symbols::Symbol;

use super::history_model::TimeSeriesPoint;

/// Trait defining the contract for historical series operations.
pub trait HistoryServiceTrait: Send + Sync {
    /// `target / base` for every stored row in `[start, end]`. `end = None` means now.
    fn reconstruct(
        &self,
        base: Symbol,
        target: Symbol,
        start: i64,
        end: Option<i64>,
    ) -> Result<Vec<TimeSeriesPoint>>;
}
