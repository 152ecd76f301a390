use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use xrates_core::rates::DerivedMatrix;
use xrates_core::validation::RatesRequest;

use crate::{error::ApiResult, main_lib::AppState};

/// Latest cross-rate matrix, fiat-as-base unless `base=crypto`.
async fn get_rates(
    State(state): State<Arc<AppState>>,
    Query(request): Query<RatesRequest>,
) -> ApiResult<Json<DerivedMatrix>> {
    let presentation = request.validate()?;
    let matrix = state.rates_service.latest_matrix(presentation).await?;
    if matrix.degenerate_count() > 0 {
        tracing::warn!(
            "Serving {:?} matrix with {} degenerate cells",
            presentation,
            matrix.degenerate_count()
        );
    }
    Ok(Json(matrix))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/rates", get(get_rates))
}
