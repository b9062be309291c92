//! # Transactions API
//!
//! Records monetary transactions in memory and answers rolling-window
//! statistics over them.
//!
//! ## Architecture
//!
//! The crate follows a layered architecture:
//! ```text
//! IO Layer (REST handlers, mappers, metrics)
//!     ↓
//! Domain Layer (Transaction entity, services, statistics)
//!     ↓
//! Storage Layer (TransactionStorage trait, in-memory store)
//! ```
//!
//! A single store instance is created at startup and shared by handle between
//! the transaction and statistics services.

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use anyhow::Result;
use axum::{
    http::Method,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{info, Level};

use crate::config::AppConfig;
use crate::domain::{StatisticsService, TransactionService};
use crate::io::ServiceMetrics;
use crate::storage::{InMemoryTransactionRepository, TransactionStorage};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
    pub statistics_service: StatisticsService,
    pub metrics: ServiceMetrics,
    pub statistics_window_secs: u64,
}

impl AppState {
    /// Wire both services to the same store.
    pub fn new(
        transaction_repository: Arc<dyn TransactionStorage>,
        statistics_window_secs: u64,
    ) -> Result<Self> {
        Ok(Self {
            transaction_service: TransactionService::new(transaction_repository.clone()),
            statistics_service: StatisticsService::new(transaction_repository),
            metrics: ServiceMetrics::new()?,
            statistics_window_secs,
        })
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up in-memory transaction store");
    let transaction_repository: Arc<dyn TransactionStorage> =
        Arc::new(InMemoryTransactionRepository::new());

    info!(
        "Setting up application state (statistics window: {}s)",
        config.statistics_window_secs
    );
    AppState::new(transaction_repository, config.statistics_window_secs)
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &AppConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);
    let cors = match &config.cors_allow_origin {
        Some(origin) => cors.allow_origin(origin.clone()),
        None => cors.allow_origin(Any),
    };

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    Router::new()
        .route(
            "/transactions",
            get(io::list_transactions)
                .post(io::create_transaction)
                .delete(io::delete_transactions),
        )
        .route("/transactions/statistics", get(io::get_statistics))
        .route("/transactions/health", get(io::health_check))
        .route("/metrics", get(io::get_metrics))
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            io::middleware::track_metrics,
        ))
        .layer(trace)
        .layer(cors)
        .with_state(app_state)
}
