use async_trait::async_trait;

use super::sync_model::TickOutcome;
use crate::errors::Result;

#[async_trait]
pub trait RateSyncServiceTrait: Send + Sync {
    /// Fetches one quote set and stores it under `timestamp`.
    ///
    /// On error nothing is written and the latest stored row is unchanged.
    async fn run_tick(&self, timestamp: i64) -> Result<TickOutcome>;
}
