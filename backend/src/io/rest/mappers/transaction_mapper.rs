use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use shared::{
    CreateTransactionRequest, Transaction as SharedTransaction,
    TransactionType as SharedTransactionType,
};

use crate::domain::commands::transactions::CreateTransactionCommand;
use crate::domain::models::{Transaction as DomainTransaction, TransactionKind};
use crate::io::rest::error::ApiError;

pub struct TransactionMapper;

impl TransactionMapper {
    /// Turn a wire request into a domain command.
    ///
    /// Only shape problems are reported here (non-finite or oversized amount,
    /// unparseable timestamp). Business rules are left to the domain.
    pub fn to_command(request: CreateTransactionRequest) -> Result<CreateTransactionCommand, ApiError> {
        let mut errors = Vec::new();

        let amount = match to_decimal(request.amount) {
            Ok(amount) => Some(amount),
            Err(message) => {
                errors.push(format!("amount: {message}"));
                None
            }
        };

        let timestamp = parse_timestamp(&request.timestamp);
        if timestamp.is_none() {
            errors.push("timestamp: Timestamp must be a valid ISO 8601 date string.".to_string());
        }

        match (amount, timestamp) {
            (Some(amount), Some(timestamp)) => Ok(CreateTransactionCommand {
                amount,
                timestamp,
                kind: request.transaction_type.map(Self::to_domain_kind),
            }),
            _ => Err(ApiError::Validation(errors)),
        }
    }

    pub fn to_dto(domain: &DomainTransaction) -> SharedTransaction {
        SharedTransaction {
            id: domain.id().to_string(),
            amount: domain.amount().to_f64().unwrap_or_default(),
            transaction_type: Self::to_dto_kind(domain.kind()),
            timestamp: domain.timestamp().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    fn to_domain_kind(dto_type: SharedTransactionType) -> TransactionKind {
        match dto_type {
            SharedTransactionType::Credit => TransactionKind::Credit,
            SharedTransactionType::Debit => TransactionKind::Debit,
        }
    }

    pub fn to_dto_kind(kind: TransactionKind) -> SharedTransactionType {
        match kind {
            TransactionKind::Credit => SharedTransactionType::Credit,
            TransactionKind::Debit => SharedTransactionType::Debit,
        }
    }
}

/// Convert a wire amount to a decimal.
///
/// Negative values beyond the decimal range become `Decimal::MIN` so the
/// entity still rejects them for their sign.
fn to_decimal(amount: f64) -> Result<Decimal, &'static str> {
    if !amount.is_finite() {
        return Err("Amount must be a finite number.");
    }
    match Decimal::from_f64(amount) {
        Some(amount) => Ok(amount),
        None if amount < 0.0 => Ok(Decimal::MIN),
        None => Err("Amount is outside the supported range."),
    }
}

/// Parse an ISO 8601 timestamp.
///
/// Accepts RFC 3339, an explicit offset without colon, a naive date-time
/// (taken as UTC) or a bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
