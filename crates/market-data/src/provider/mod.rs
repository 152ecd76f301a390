//! Rate provider abstraction and implementations.

mod traits;

pub mod coinbase;

pub use traits::ExchangeRateProvider;
