use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use xrates_market_data::{ExchangeRateProvider, ProviderRates};

use super::rates_model::{AnchorHint, QuoteSet};
use super::rates_traits::QuoteFetcherTrait;
use crate::errors::{FetchError, Result};
use crate::symbols::Symbol;

/// Turns a provider response into a validated [`QuoteSet`].
pub struct QuoteFetcher {
    provider: Arc<dyn ExchangeRateProvider>,
}

impl QuoteFetcher {
    pub fn new(provider: Arc<dyn ExchangeRateProvider>) -> Self {
        Self { provider }
    }

    fn to_quote_set(&self, response: ProviderRates) -> Result<QuoteSet> {
        let anchor: Symbol = response.currency.parse().map_err(|_| {
            FetchError::Malformed(format!(
                "{}: unsupported anchor currency '{}'",
                self.provider.id(),
                response.currency
            ))
        })?;

        let mut pairs = Vec::with_capacity(Symbol::ALL.len());
        for symbol in Symbol::ALL {
            let rate = if symbol == anchor {
                // Some sources omit the anchor from its own rate table.
                response.rates.get(symbol.as_str()).copied().unwrap_or(1.0)
            } else {
                response.rates.get(symbol.as_str()).copied().ok_or_else(|| {
                    FetchError::Malformed(format!(
                        "{}: response has no rate for {}",
                        self.provider.id(),
                        symbol
                    ))
                })?
            };
            pairs.push((symbol, rate));
        }

        QuoteSet::new(anchor, pairs)
            .map_err(|e| FetchError::Malformed(format!("{}: {}", self.provider.id(), e)).into())
    }
}

#[async_trait]
impl QuoteFetcherTrait for QuoteFetcher {
    async fn fetch(&self, hint: Option<AnchorHint>) -> Result<QuoteSet> {
        let anchor = AnchorHint::anchor(hint);
        debug!("Fetching rates from {} anchored on {}", self.provider.id(), anchor);
        let response = self.provider.latest_rates(anchor.as_str()).await?;
        self.to_quote_set(response)
    }
}
