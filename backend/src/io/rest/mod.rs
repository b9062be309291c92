//! # REST API Interface Layer
//!
//! Provides the HTTP endpoints of the transactions service.
//! This layer handles:
//! - JSON request/response serialization and deserialization
//! - Payload shape validation before anything reaches the domain
//! - Error translation from domain errors to HTTP status codes
//! - Request metrics
//!
//! ## Design Principles
//!
//! - **Domain Separation**: Pure translation layer without business logic
//! - **Consistent Error Format**: Every error body is an `ErrorResponse`

pub mod error;
pub mod mappers;
pub mod metrics_apis;
pub mod middleware;
pub mod statistics_apis;
pub mod transaction_apis;

pub use error::ApiError;
pub use metrics_apis::get_metrics;
pub use statistics_apis::get_statistics;
pub use transaction_apis::{create_transaction, delete_transactions, health_check, list_transactions};
