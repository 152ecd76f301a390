use anyhow::Context;
use std::{net::SocketAddr, str::FromStr, time::Duration};
use xrates_core::constants::DEFAULT_SYNC_INTERVAL_SECS;
use xrates_market_data::provider::coinbase::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub rate_source_url: String,
    pub fetch_timeout: Duration,
    pub sync_interval: Duration,
    pub sync_enabled: bool,
    /// Keep stored rows for this many days; `None` keeps everything.
    pub retention_days: Option<u32>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            db_path: "./db/rates.db".to_string(),
            rate_source_url: DEFAULT_BASE_URL.to_string(),
            fetch_timeout: DEFAULT_TIMEOUT,
            sync_interval: Duration::from_secs(DEFAULT_SYNC_INTERVAL_SECS),
            sync_enabled: true,
            retention_days: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `.env` and then by `XR_*` environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("XR_LISTEN_ADDR") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid XR_LISTEN_ADDR '{}'", raw))?,
            Err(_) => defaults.listen_addr,
        };
        let cors_allow = std::env::var("XR_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            listen_addr,
            db_path: std::env::var("XR_DB_PATH").unwrap_or(defaults.db_path),
            rate_source_url: std::env::var("XR_RATE_SOURCE_URL")
                .unwrap_or(defaults.rate_source_url),
            fetch_timeout: env_parse("XR_FETCH_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.fetch_timeout),
            sync_interval: env_parse("XR_SYNC_INTERVAL_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sync_interval),
            sync_enabled: env_parse("XR_SYNC_ENABLED").unwrap_or(defaults.sync_enabled),
            retention_days: env_parse("XR_RETENTION_DAYS").filter(|days: &u32| *days > 0),
            cors_allow,
            request_timeout: env_parse("XR_REQUEST_TIMEOUT_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
            log_format: std::env::var("XR_LOG_FORMAT").unwrap_or(defaults.log_format),
        })
    }
}

/// Parsed value of `key`, or `None` when it is unset or malformed.
fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring malformed {}='{}', using default", key, raw);
            None
        }
    }
}
