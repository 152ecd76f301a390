use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::sync_model::TickOutcome;
use super::sync_traits::RateSyncServiceTrait;
use crate::constants::STORAGE_ANCHOR;
use crate::errors::Result;
use crate::rates::{AnchorHint, QuoteFetcherTrait};
use crate::snapshots::{SnapshotStore, WriteOutcome};
use crate::utils::time_utils::{format_unix, retention_cutoff};

/// Periodic fetch, rebase to the storage anchor, and append.
#[derive(Clone)]
pub struct RateSyncService {
    fetcher: Arc<dyn QuoteFetcherTrait>,
    store: Arc<dyn SnapshotStore>,
    retention_days: Option<u32>,
}

impl RateSyncService {
    pub fn new(fetcher: Arc<dyn QuoteFetcherTrait>, store: Arc<dyn SnapshotStore>) -> Self {
        Self {
            fetcher,
            store,
            retention_days: None,
        }
    }

    /// Keep only rows from the last `days` days. `None` keeps everything.
    pub fn with_retention(mut self, days: Option<u32>) -> Self {
        self.retention_days = days;
        self
    }

    async fn apply_retention(&self, now: i64) -> usize {
        let Some(days) = self.retention_days else {
            return 0;
        };
        let cutoff = retention_cutoff(now, days);
        match self.store.prune_before(cutoff).await {
            Ok(pruned) => {
                if pruned > 0 {
                    info!("Pruned {} rate rows older than {}", pruned, format_unix(cutoff));
                }
                pruned
            }
            Err(e) => {
                // The row for this tick is already stored.
                warn!("Failed to prune rate rows before {}: {}", cutoff, e);
                0
            }
        }
    }
}

#[async_trait]
impl RateSyncServiceTrait for RateSyncService {
    async fn run_tick(&self, timestamp: i64) -> Result<TickOutcome> {
        debug!("Rate sync tick at {}", format_unix(timestamp));

        let quotes = self.fetcher.fetch(Some(AnchorHint::Fiat)).await?;
        let quotes = quotes.rebase(STORAGE_ANCHOR)?;
        if quotes.is_degenerate() {
            warn!("Snapshot at {} contains zero rates", timestamp);
        }

        let write = self.store.write_tick(timestamp, &quotes).await?;
        match write {
            WriteOutcome::Inserted => info!("Stored rate snapshot at {}", format_unix(timestamp)),
            WriteOutcome::Coalesced => debug!("Snapshot at {} already stored, skipped", timestamp),
        }

        let pruned = self.apply_retention(timestamp).await;

        Ok(TickOutcome {
            timestamp,
            write,
            pruned,
        })
    }
}
