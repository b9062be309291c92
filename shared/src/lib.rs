use serde::{Deserialize, Serialize};
use std::fmt;

/// A recorded transaction as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// UUID assigned by the server at creation time
    pub id: String,
    /// Magnitude of the movement, always non-negative
    pub amount: f64,
    /// Whether the amount is added to or subtracted from aggregates
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// When the movement happened (RFC 3339, UTC)
    pub timestamp: String,
}

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money in, counted positively
    Credit,
    /// Money out, counted negatively
    Debit,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Credit => write!(f, "credit"),
            TransactionType::Debit => write!(f, "debit"),
        }
    }
}

/// Body of `POST /transactions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTransactionRequest {
    /// Transaction amount; must not be negative
    pub amount: f64,
    /// ISO 8601 timestamp; must not be in the future
    pub timestamp: String,
    /// Optional direction, defaults to credit
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
}

/// Aggregates over the trailing statistics window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    pub sum: f64,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Error body returned for every non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    /// Per-field validation messages, only present for 400 responses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
