//! Quote sets, cross-rate derivation and the live rates service.

mod fetcher;
mod rates_matrix;
mod rates_model;
mod rates_service;
mod rates_traits;

pub use fetcher::QuoteFetcher;
pub use rates_matrix::{derive, DerivedMatrix, RateCell};
pub use rates_model::{AnchorHint, Presentation, QuoteSet};
pub use rates_service::RatesService;
pub use rates_traits::{QuoteFetcherTrait, RatesServiceTrait};
