use axum::{extract::State, http::header, response::IntoResponse};

use crate::io::rest::error::ApiError;
use crate::AppState;

/// Prometheus scrape endpoint
pub async fn get_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let body = state.metrics.render()?;
    Ok(([(header::CONTENT_TYPE, state.metrics.content_type())], body))
}
