use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use xrates_core::history::HistoricalResponse;
use xrates_core::validation::HistoricalRatesRequest;

use crate::{error::ApiResult, main_lib::AppState};

async fn get_historical_rates(
    State(state): State<Arc<AppState>>,
    Query(request): Query<HistoricalRatesRequest>,
) -> ApiResult<Json<HistoricalResponse>> {
    let query = request.validate()?;
    let points =
        state
            .history_service
            .reconstruct(query.base, query.target, query.start, query.end)?;
    Ok(Json(HistoricalResponse::from(points)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/historical-rates", get(get_historical_rates))
}
