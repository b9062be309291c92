//! # REST API for Statistics

use axum::{extract::State, Json};
use shared::StatisticsResponse;
use tracing::debug;

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::StatisticsMapper;
use crate::AppState;

/// Aggregates over the configured trailing window.
///
/// Also refreshes the `active_transactions_count` gauge with the window size.
pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<StatisticsResponse>, ApiError> {
    let statistics = state
        .statistics_service
        .compute_window(state.statistics_window_secs)
        .await?;

    state.metrics.set_active_transactions(statistics.count);
    debug!(
        window_secs = state.statistics_window_secs,
        count = statistics.count,
        "Statistics computed"
    );

    Ok(Json(StatisticsMapper::to_dto(&statistics)))
}
