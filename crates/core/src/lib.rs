//! xrates Core - Domain entities, services, and traits.
//!
//! This crate contains the rate normalization and cross-rate derivation logic.
//! It is database-agnostic and defines the traits that are implemented
//! by the `storage-sqlite` crate.
//!
//! ```text
//!  market-data (provider)        storage-sqlite (SnapshotStore)
//!          │                               ▲
//!          ▼                               │
//!     QuoteFetcher ──▶ RateSyncService ────┤
//!                                          │
//!     RatesService ◀───────────────────────┤
//!     HistoryService ◀─────────────────────┘
//! ```

pub mod constants;
pub mod errors;
pub mod history;
pub mod rates;
pub mod snapshots;
pub mod symbols;
pub mod sync;
pub mod utils;
pub mod validation;

pub use symbols::Symbol;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
