use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use xrates_core::{
    history::{HistoryService, HistoryServiceTrait},
    rates::{QuoteFetcher, QuoteFetcherTrait, RatesService, RatesServiceTrait},
    snapshots::SnapshotStore,
    sync::{RateSyncService, RateSyncServiceTrait},
};
use xrates_market_data::{CoinbaseProvider, ExchangeRateProvider};
use xrates_storage_sqlite::{db, SnapshotRepository};

use crate::config::Config;

pub struct AppState {
    pub rates_service: Arc<dyn RatesServiceTrait + Send + Sync>,
    pub history_service: Arc<dyn HistoryServiceTrait + Send + Sync>,
    pub rate_sync_service: Arc<dyn RateSyncServiceTrait + Send + Sync>,
    pub snapshot_store: Arc<dyn SnapshotStore>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let snapshot_store: Arc<dyn SnapshotStore> =
        Arc::new(SnapshotRepository::new(pool.clone(), writer.clone()));

    let provider: Arc<dyn ExchangeRateProvider> = Arc::new(CoinbaseProvider::new(
        config.rate_source_url.clone(),
        config.fetch_timeout,
    )?);
    tracing::info!(
        "Rate source {} ({}), timeout {:?}",
        provider.id(),
        config.rate_source_url,
        config.fetch_timeout
    );
    let fetcher: Arc<dyn QuoteFetcherTrait> = Arc::new(QuoteFetcher::new(provider));

    let rates_service = Arc::new(RatesService::new(snapshot_store.clone(), fetcher.clone()));
    let history_service = Arc::new(HistoryService::new(snapshot_store.clone()));
    let rate_sync_service = Arc::new(
        RateSyncService::new(fetcher, snapshot_store.clone()).with_retention(config.retention_days),
    );
    if let Some(days) = config.retention_days {
        tracing::info!("Retaining rate rows for {} days", days);
    }

    Ok(Arc::new(AppState {
        rates_service,
        history_service,
        rate_sync_service,
        snapshot_store,
    }))
}
