use serde::Serialize;

use crate::rates::RateCell;

/// `target / base` at one stored timestamp. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    #[serde(rename = "Value")]
    pub value: RateCell,
}

/// Body of `GET /historical-rates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoricalResponse {
    #[serde(rename = "Results")]
    pub results: Vec<TimeSeriesPoint>,
}

impl From<Vec<TimeSeriesPoint>> for HistoricalResponse {
    fn from(results: Vec<TimeSeriesPoint>) -> Self {
        Self { results }
    }
}
