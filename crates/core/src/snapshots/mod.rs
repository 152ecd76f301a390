//! Snapshot store contract.
//!
//! Stored rows are USD-anchored with USD kept explicitly at `1.0`.

mod snapshots_model;
mod snapshots_traits;

pub use snapshots_model::{RangeRow, WriteOutcome};
pub use snapshots_traits::SnapshotStore;
