use std::sync::Arc;

use log::debug;

use super::history_model::TimeSeriesPoint;
use super::history_traits::HistoryServiceTrait;
use super::series::SeriesReconstructor;
use crate::errors::Result;
use crate::snapshots::SnapshotStore;
use crate::symbols::Symbol;
use crate::utils::time_utils::now_unix;

pub struct HistoryService {
    store: Arc<dyn SnapshotStore>,
}

impl HistoryService {
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self { store }
    }
}

impl HistoryServiceTrait for HistoryService {
    fn reconstruct(
        &self,
        base: Symbol,
        target: Symbol,
        start: i64,
        end: Option<i64>,
    ) -> Result<Vec<TimeSeriesPoint>> {
        let end = end.unwrap_or_else(now_unix);
        if start > end {
            return Ok(Vec::new());
        }
        let rows = self.store.read_range(base, target, start, end)?;
        debug!(
            "Reconstructing {}/{} over {} rows in [{}, {}]",
            target,
            base,
            rows.len(),
            start,
            end
        );
        Ok(SeriesReconstructor::new(rows).collect())
    }
}
