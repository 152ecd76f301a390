mod common;

use std::time::Duration;

use common::{fake_upstream, hanging_upstream, test_app, usd_quotes};
use tempfile::tempdir;
use xrates_core::errors::{Error, FetchError};
use xrates_core::Symbol;
use xrates_server::scheduler::{run_scheduled_sync, start_rate_sync_scheduler};

const USD_BODY: &str = r#"{"data":{"currency":"USD","rates":{
    "SGD":"1.35","EUR":"0.92","BTC":"0.00002","DOGE":"8.0","ETH":"0.0005","JPY":"150"}}}"#;

#[tokio::test]
async fn timed_out_fetch_writes_nothing() {
    let tmp = tempdir().unwrap();
    let upstream = hanging_upstream().await;
    let (state, _app) = test_app(tmp.path(), &upstream).await;
    state.snapshot_store.write_tick(100, &usd_quotes(2.0)).await.unwrap();

    let err = state.rate_sync_service.run_tick(200).await.unwrap_err();
    assert!(matches!(err, Error::Fetch(FetchError::Timeout(_))));

    // A scheduled tick against the same upstream logs and carries on.
    run_scheduled_sync(&state).await;

    assert_eq!(
        state.snapshot_store.read_latest().unwrap(),
        Some(usd_quotes(2.0))
    );
    let rows = state
        .snapshot_store
        .read_range(Symbol::Usd, Symbol::Sgd, 0, i64::MAX)
        .unwrap();
    assert_eq!(rows.len(), 1);
}

#[tokio::test]
async fn tick_stores_fetched_snapshot() {
    let tmp = tempdir().unwrap();
    let upstream = fake_upstream(USD_BODY).await;
    let (state, _app) = test_app(tmp.path(), &upstream).await;

    let outcome = state.rate_sync_service.run_tick(60).await.unwrap();
    assert_eq!(outcome.timestamp, 60);

    let latest = state.snapshot_store.read_latest().unwrap().unwrap();
    assert_eq!(latest.rate(Symbol::Usd), 1.0);
    assert_eq!(latest.rate(Symbol::Doge), 8.0);
}

#[tokio::test]
async fn scheduler_keeps_store_populated() {
    let tmp = tempdir().unwrap();
    let upstream = fake_upstream(USD_BODY).await;
    let (state, _app) = test_app(tmp.path(), &upstream).await;

    let handle = start_rate_sync_scheduler(state.clone(), Duration::from_millis(50));

    let mut stored = None;
    for _ in 0..100 {
        stored = state.snapshot_store.read_latest().unwrap();
        if stored.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    handle.abort();

    let stored = stored.expect("scheduler never stored a snapshot");
    assert_eq!(stored.rate(Symbol::Sgd), 1.35);
}
