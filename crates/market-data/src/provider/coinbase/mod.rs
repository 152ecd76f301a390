//! Coinbase-style exchange rate provider.
//!
//! `GET <base-url>?currency=USD` returns every rate the exchange knows with
//! `USD` as anchor. Values are usually decimal strings; plain numbers are
//! accepted too.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::ProviderRates;
use crate::provider::ExchangeRateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINBASE";

/// Public endpoint used when no other URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.coinbase.com/v2/exchange-rates";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ExchangeRatesResponse {
    data: ExchangeRatesData,
}

#[derive(Debug, Deserialize)]
struct ExchangeRatesData {
    currency: String,
    rates: HashMap<String, RateValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RateValue {
    Number(f64),
    Text(String),
}

impl RateValue {
    fn as_f64(&self) -> Option<f64> {
        let value = match self {
            RateValue::Number(n) => Some(*n),
            RateValue::Text(s) => s.trim().parse::<f64>().ok(),
        };
        value.filter(|v| v.is_finite())
    }
}

pub struct CoinbaseProvider {
    client: Client,
    base_url: String,
}

impl CoinbaseProvider {
    /// Create a provider for `base_url` whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, MarketDataError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    fn map_send_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    }

    fn parse_body(body: &str) -> Result<ProviderRates, MarketDataError> {
        let parsed: ExchangeRatesResponse =
            serde_json::from_str(body).map_err(|e| MarketDataError::MalformedResponse {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        let rates = parsed
            .data
            .rates
            .iter()
            .filter_map(|(code, value)| value.as_f64().map(|v| (code.clone(), v)))
            .collect();

        Ok(ProviderRates {
            currency: parsed.data.currency,
            rates,
        })
    }
}

#[async_trait]
impl ExchangeRateProvider for CoinbaseProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_rates(&self, currency: &str) -> Result<ProviderRates, MarketDataError> {
        debug!(provider = PROVIDER_ID, currency, "requesting exchange rates");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[("currency", currency)])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::map_send_error)?;
        let rates = Self::parse_body(&body)?;
        debug!(
            provider = PROVIDER_ID,
            currency = %rates.currency,
            count = rates.rates.len(),
            "received exchange rates"
        );
        Ok(rates)
    }
}
