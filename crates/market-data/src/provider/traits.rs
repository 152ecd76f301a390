//! Rate provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::ProviderRates;

/// A source of anchor-relative exchange rates.
///
/// # Example
///
/// ```ignore
/// use xrates_market_data::{CoinbaseProvider, ExchangeRateProvider};
///
/// let provider = CoinbaseProvider::new(url, Duration::from_secs(10));
/// let rates = provider.latest_rates("USD").await?;
/// ```
#[async_trait]
pub trait ExchangeRateProvider: Send + Sync {
    /// Constant identifier such as "COINBASE", used in logs and errors.
    fn id(&self) -> &'static str;

    /// Latest rates with `currency` as anchor.
    async fn latest_rates(&self, currency: &str) -> Result<ProviderRates, MarketDataError>;
}
