use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use thiserror::Error;
use tracing::error;

use crate::domain::models::TransactionError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Transaction(#[from] TransactionError),
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(vec![rejection.body_text()])
    }
}

/// Converts `ApiError` into a JSON error response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                errors,
            ),
            ApiError::Transaction(err) => {
                let message = err.to_string();
                match err {
                    TransactionError::InvalidAmount | TransactionError::FutureTimestamp => {
                        (StatusCode::UNPROCESSABLE_ENTITY, message, Vec::new())
                    }
                    TransactionError::DuplicateTransaction => {
                        (StatusCode::CONFLICT, message, Vec::new())
                    }
                    TransactionError::StatisticsOverflow => {
                        error!("Statistics overflow: {}", message);
                        (StatusCode::INTERNAL_SERVER_ERROR, message, Vec::new())
                    }
                    TransactionError::Storage(storage_err) => {
                        error!(error = ?storage_err, "Storage error.");
                        (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            "An internal storage error occurred".to_string(),
                            Vec::new(),
                        )
                    }
                }
            }
            ApiError::Metrics(metrics_err) => {
                error!(error = ?metrics_err, "Metrics error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to render metrics".to_string(),
                    Vec::new(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status_code: status.as_u16(),
            message,
            errors,
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(ApiError::Validation(vec!["amount: missing".to_string()])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(TransactionError::InvalidAmount.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(TransactionError::FutureTimestamp.into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(TransactionError::DuplicateTransaction.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(TransactionError::StatisticsOverflow.into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(TransactionError::Storage(anyhow::anyhow!("disk full")).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
