//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain logic.
//!
//! ## Supported Operations
//!
//! - **POST /transactions**: Record a transaction
//! - **GET /transactions**: List all transactions
//! - **DELETE /transactions**: Delete all transactions
//! - **GET /transactions/statistics**: Aggregates over the trailing window
//! - **GET /transactions/health**: Liveness check
//! - **GET /metrics**: Prometheus metrics
//!
//! ## Current Implementation
//!
//! - **Web Framework**: Axum
//! - **Serialization**: Serde, with the wire DTOs living in the `shared` crate
//! - **State Management**: Services injected through Axum state
//! - **Metrics**: Prometheus registry owned by the application state

pub mod metrics;
pub mod rest;

pub use metrics::ServiceMetrics;
pub use rest::*;
