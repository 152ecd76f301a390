use async_trait::async_trait;

use super::rates_matrix::DerivedMatrix;
use super::rates_model::{AnchorHint, Presentation, QuoteSet};
use crate::errors::Result;

/// Retrieves one anchor-relative quote set from the external source.
#[async_trait]
pub trait QuoteFetcherTrait: Send + Sync {
    /// Absent or fiat hint anchors on USD, crypto on BTC.
    async fn fetch(&self, hint: Option<AnchorHint>) -> Result<QuoteSet>;
}

/// Trait defining the contract for live rate presentation.
#[async_trait]
pub trait RatesServiceTrait: Send + Sync {
    async fn latest_matrix(&self, presentation: Presentation) -> Result<DerivedMatrix>;
}
