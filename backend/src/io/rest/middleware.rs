use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use crate::io::metrics::normalize_route;
use crate::AppState;

/// Record request count and latency for every request that passes through the router.
pub async fn track_metrics(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = request.method().as_str().to_owned();
    let route = match request.extensions().get::<MatchedPath>() {
        Some(matched) => matched.as_str().to_owned(),
        None => normalize_route(request.uri().path()),
    };

    let response = next.run(request).await;

    state
        .metrics
        .observe_request(&method, &route, response.status().as_u16(), started.elapsed());
    response
}
