//! # REST API for Transactions
//!
//! Endpoints for recording, listing and clearing transactions, plus the
//! service health check.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use shared::{CreateTransactionRequest, HealthResponse, Transaction as SharedTransaction};
use tracing::{info, warn};

use crate::io::rest::error::ApiError;
use crate::io::rest::mappers::TransactionMapper;
use crate::AppState;

/// Record a new transaction. Responds 201 with an empty body.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected malformed transaction payload: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;
    let command = TransactionMapper::to_command(request)?;

    match state.transaction_service.create_transaction(command).await {
        Ok(transaction) => {
            info!(
                id = %transaction.id(),
                amount = %transaction.amount(),
                kind = %TransactionMapper::to_dto_kind(transaction.kind()),
                timestamp = %transaction.timestamp(),
                "Transaction recorded"
            );
            Ok(StatusCode::CREATED)
        }
        Err(e) => {
            warn!("Transaction rejected: {}", e);
            Err(e.into())
        }
    }
}

/// List every stored transaction in insertion order
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<SharedTransaction>>, ApiError> {
    let transactions = state.transaction_service.list_transactions().await?;
    Ok(Json(transactions.iter().map(TransactionMapper::to_dto).collect()))
}

/// Delete all transactions. Responds 200 with an empty body.
pub async fn delete_transactions(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.transaction_service.delete_all_transactions().await?;
    info!("All transactions deleted");
    Ok(StatusCode::OK)
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
