//! # Domain Module
//!
//! Contains the business rules of the service, independent of HTTP and of
//! the storage backend.
//!
//! ## Module Organization
//!
//! - **models**: the validated `Transaction` entity and the `Statistics` reduction
//! - **transaction_service**: creation, listing and bulk deletion
//! - **statistics_service**: aggregates over the trailing time window
//! - **commands**: internal input types mapped from wire DTOs by the IO layer
//!
//! ## Business Rules
//!
//! - Amounts are non-negative; debits are expressed through the transaction kind
//! - Timestamps may not lie in the future
//! - Two transactions with the same timestamp and amount are one submission
//! - The statistics window includes both of its bounds
//! - Monetary aggregates are rounded to two places, midpoint away from zero

pub mod commands;
pub mod models;
pub mod statistics_service;
pub mod transaction_service;

pub use statistics_service::StatisticsService;
pub use transaction_service::TransactionService;
