//! Fetch-and-store tick driven by the scheduler.

mod sync_model;
mod sync_service;
mod sync_traits;

pub use sync_model::TickOutcome;
pub use sync_service::RateSyncService;
pub use sync_traits::RateSyncServiceTrait;
