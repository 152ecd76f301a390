use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use super::rates_matrix::{derive, DerivedMatrix};
use super::rates_model::Presentation;
use super::rates_traits::{QuoteFetcherTrait, RatesServiceTrait};
use crate::errors::{Error, Result};
use crate::snapshots::SnapshotStore;

/// Serves the derived matrix from the latest stored snapshot.
#[derive(Clone)]
pub struct RatesService {
    store: Arc<dyn SnapshotStore>,
    fetcher: Arc<dyn QuoteFetcherTrait>,
}

impl RatesService {
    pub fn new(store: Arc<dyn SnapshotStore>, fetcher: Arc<dyn QuoteFetcherTrait>) -> Self {
        Self { store, fetcher }
    }
}

#[async_trait]
impl RatesServiceTrait for RatesService {
    async fn latest_matrix(&self, presentation: Presentation) -> Result<DerivedMatrix> {
        if let Some(quotes) = self.store.read_latest()? {
            return Ok(derive(&quotes, presentation));
        }

        // Cold start: nothing synced yet.
        debug!("No stored snapshot, fetching live rates for {:?}", presentation);
        match self.fetcher.fetch(Some(presentation.anchor_hint())).await {
            Ok(quotes) => Ok(derive(&quotes, presentation)),
            Err(e) => {
                warn!("Live rate fallback failed: {}", e);
                Err(Error::Unavailable(
                    "no stored snapshot and the rate source is unreachable".to_string(),
                ))
            }
        }
    }
}
