//! Core error types for the xrates service.
//!
//! This module defines database-agnostic error types. Storage-specific errors
//! (from Diesel, SQLite, etc.) are converted to these types by the storage layer.

use std::fmt;
use thiserror::Error;

use xrates_market_data::errors::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the rates service.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Database operation failed: {0}")]
    Database(#[from] DatabaseError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Rate fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// A division by a zero rate was required to produce a value.
    #[error("Degenerate rate: {0}")]
    DegenerateRate(String),

    #[error("Invalid quote set: {0}")]
    InvalidQuoteSet(String),

    /// No data can be served for the request.
    #[error("Rates unavailable: {0}")]
    Unavailable(String),
}

/// Database-agnostic error type for storage operations.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert storage-specific errors (Diesel, SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    #[error("Database query failed: {0}")]
    QueryFailed(String),

    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Errors raised while fetching a quote set from the external source.
///
/// A failed fetch means "no update this cycle"; it is never fatal.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Upstream request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream {provider} returned status {status}")]
    Status { provider: String, status: u16 },

    #[error("Malformed upstream response: {0}")]
    Malformed(String),
}

impl From<MarketDataError> for FetchError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::Timeout { provider } => FetchError::Timeout(provider),
            MarketDataError::HttpStatus { provider, status } => {
                FetchError::Status { provider, status }
            }
            MarketDataError::MalformedResponse { provider, message } => {
                FetchError::Malformed(format!("{provider}: {message}"))
            }
            MarketDataError::Network(e) if e.is_timeout() => FetchError::Timeout(e.to_string()),
            MarketDataError::Network(e) => FetchError::Network(e.to_string()),
        }
    }
}

impl From<MarketDataError> for Error {
    fn from(err: MarketDataError) -> Self {
        Error::Fetch(err.into())
    }
}

/// A single rejected request field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Lower-cased field name, e.g. `basecurrency`
    pub field: String,
    /// The raw value the caller supplied (empty when absent)
    pub value: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into().to_lowercase(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: '{}' value error", self.field, self.value)
    }
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// One or more fields are outside the supported domain.
    #[error("{}", join_field_errors(.0))]
    InvalidFields(Vec<FieldError>),

    #[error("Currency '{0}' is not supported")]
    UnsupportedSymbol(String),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}
