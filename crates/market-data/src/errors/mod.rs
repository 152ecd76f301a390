//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while talking to a rate source.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("HTTP {status} from {provider}")]
    HttpStatus { provider: String, status: u16 },

    /// The body could not be parsed into the expected shape.
    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse { provider: String, message: String },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
