//! xrates Market Data Crate
//!
//! Transport for the external exchange rate source.
//!
//! ```text
//!  ExchangeRateProvider::latest_rates("USD")
//!          │  GET <base-url>?currency=USD
//!          ▼
//!  {"data": {"currency": "USD", "rates": {"BTC": "0.000016", ...}}}
//!          │
//!          ▼
//!     ProviderRates { currency, rates }
//! ```
//!
//! The crate knows nothing about the supported symbol set; unknown currencies
//! are passed through and filtered by the caller.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::ProviderRates;
pub use provider::coinbase::CoinbaseProvider;
pub use provider::ExchangeRateProvider;
