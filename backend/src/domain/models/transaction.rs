//! Domain model for a transaction.
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Direction of a transaction. Decides the sign used when aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionKind {
    #[default]
    Credit,
    Debit,
}

/// An immutable, validated movement of money.
///
/// Values can only be obtained through [`Transaction::new`] or
/// [`Transaction::new_as_of`], so every instance satisfies
/// `amount >= 0` and `timestamp <= creation time`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: Uuid,
    amount: Decimal,
    kind: TransactionKind,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Transaction amount cannot be negative.")]
    InvalidAmount,
    #[error("Transaction timestamp cannot be in the future.")]
    FutureTimestamp,
    #[error("Transaction with the same timestamp and amount already exists.")]
    DuplicateTransaction,
    #[error("Window sum exceeds the representable decimal range.")]
    StatisticsOverflow,
    #[error("Transaction storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl Transaction {
    /// Validate and build a transaction, checking the timestamp against the system clock.
    pub fn new(
        amount: Decimal,
        timestamp: DateTime<Utc>,
        kind: Option<TransactionKind>,
    ) -> Result<Self, TransactionError> {
        Self::new_as_of(amount, timestamp, kind, Utc::now())
    }

    /// Validate and build a transaction against an explicit "now".
    pub fn new_as_of(
        amount: Decimal,
        timestamp: DateTime<Utc>,
        kind: Option<TransactionKind>,
        now: DateTime<Utc>,
    ) -> Result<Self, TransactionError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(TransactionError::InvalidAmount);
        }
        if timestamp > now {
            return Err(TransactionError::FutureTimestamp);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            kind: kind.unwrap_or_default(),
            timestamp,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Amount with the kind's sign applied: positive for credits, negative for debits.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionKind::Credit => self.amount,
            TransactionKind::Debit => -self.amount,
        }
    }

    /// True when both transactions would be treated as the same submission.
    pub fn is_duplicate_of(&self, other: &Transaction) -> bool {
        self.timestamp == other.timestamp && self.amount == other.amount
    }
}
