//! Background scheduler for the periodic rate sync.

use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{info, warn};
use xrates_core::utils::time_utils::now_unix;

use crate::main_lib::AppState;

/// Starts the background rate sync loop.
///
/// The first tick fires immediately. Ticks are awaited one after another, so a
/// slow fetch delays the next tick instead of overlapping it.
pub fn start_rate_sync_scheduler(state: Arc<AppState>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Rate sync scheduler started ({:?} interval)", period);

        let mut sync_interval = interval(period);
        sync_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            sync_interval.tick().await;
            run_scheduled_sync(&state).await;
        }
    })
}

/// Runs a single scheduled tick. Failures are logged and never stop the loop.
pub async fn run_scheduled_sync(state: &Arc<AppState>) {
    let timestamp = now_unix();
    match state.rate_sync_service.run_tick(timestamp).await {
        Ok(outcome) => {
            info!(
                timestamp = outcome.timestamp,
                write = ?outcome.write,
                pruned = outcome.pruned,
                "Scheduled rate sync completed"
            );
        }
        Err(e) => {
            warn!("Scheduled rate sync at {} failed: {}", timestamp, e);
        }
    }
}
