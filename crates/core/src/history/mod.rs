//! Historical series reconstruction from stored USD-anchored rows.

mod history_model;
mod history_service;
mod history_traits;
mod series;

pub use history_model::{HistoricalResponse, TimeSeriesPoint};
pub use history_service::HistoryService;
pub use history_traits::HistoryServiceTrait;
pub use series::SeriesReconstructor;
