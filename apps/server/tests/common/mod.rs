#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, response::Response, routing, Router};
use tower::ServiceExt;
use xrates_core::rates::QuoteSet;
use xrates_core::Symbol;
use xrates_server::{api::app_router, build_state, config::Config, AppState};

/// Nothing listens on the discard port, so requests fail fast.
pub const UNREACHABLE_SOURCE: &str = "http://127.0.0.1:9/v2/exchange-rates";

pub fn test_config(dir: &Path, rate_source_url: &str) -> Config {
    Config {
        db_path: dir.join("test.db").to_string_lossy().to_string(),
        rate_source_url: rate_source_url.to_string(),
        fetch_timeout: Duration::from_millis(300),
        sync_enabled: false,
        ..Config::default()
    }
}

pub async fn test_app(dir: &Path, rate_source_url: &str) -> (Arc<AppState>, Router) {
    let config = test_config(dir, rate_source_url);
    let state = build_state(&config).await.unwrap();
    let router = app_router(state.clone(), &config).unwrap();
    (state, router)
}

pub async fn get(router: &Router, uri: &str) -> Response {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// USD-anchored snapshot with every rate 1 except SGD.
pub fn usd_quotes(sgd: f64) -> QuoteSet {
    QuoteSet::new(
        Symbol::Usd,
        Symbol::ALL
            .iter()
            .map(|s| (*s, if *s == Symbol::Sgd { sgd } else { 1.0 })),
    )
    .unwrap()
}

/// Accepts connections and never answers them.
pub async fn hanging_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{}/v2/exchange-rates", addr)
}

/// Serves a fixed exchange-rates body for any `currency`.
pub async fn fake_upstream(body: &'static str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route(
        "/v2/exchange-rates",
        routing::get(move || async move {
            (
                [(axum::http::header::CONTENT_TYPE, "application/json")],
                body,
            )
        }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{}/v2/exchange-rates", addr)
}
