//! Caller input checks for the HTTP surface.
//!
//! Plain values in, typed queries out. Nothing here holds state, so handlers
//! call these directly.

mod requests;

pub use requests::{HistoricalQuery, HistoricalRatesRequest, RatesRequest};
