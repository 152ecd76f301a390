//! SQLite storage implementation for xrates.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the [`SnapshotStore`](xrates_core::snapshots::SnapshotStore) trait
//! defined in `xrates-core` and contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - A single writer actor so inserts are serialized and atomic
//! - The `rates` table repository
//!
//! ```text
//!   RateSyncService          RatesService / HistoryService
//!         │ write_tick                 │ read_latest / read_range
//!         ▼                            ▼
//!     WriteHandle ──▶ writer conn    r2d2 pool (WAL readers)
//!                 └──────┬───────────┘
//!                        ▼
//!                    SQLite DB
//! ```

pub mod db;
pub mod errors;
pub mod rates;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

pub use rates::SnapshotRepository;

// Re-export from xrates-core for convenience
pub use xrates_core::errors::{DatabaseError, Error, Result};
