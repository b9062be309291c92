//! # Storage Traits
//!
//! This module defines the storage abstraction that lets the domain layer work
//! with any transaction store. The service ships with an in-memory store; a
//! persistent backend only has to implement [`TransactionStorage`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::models::{Transaction, TransactionError};

/// Trait defining the interface for transaction storage operations
///
/// Every operation must appear atomic to concurrent callers: a read never
/// observes a half-applied `create` or `delete_all`.
#[async_trait]
pub trait TransactionStorage: Send + Sync {
    /// Store an already validated transaction.
    ///
    /// Fails with [`TransactionError::DuplicateTransaction`] when a stored
    /// transaction has the same timestamp and amount.
    async fn create(&self, transaction: Transaction) -> Result<Transaction, TransactionError>;

    /// Snapshot of every stored transaction, in insertion order
    async fn find_all(&self) -> Result<Vec<Transaction>, TransactionError>;

    /// Transactions with `as_of - window_secs <= timestamp <= as_of`, in insertion order
    async fn find_recent_as_of(
        &self,
        window_secs: u64,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, TransactionError>;

    /// Transactions from the last `window_secs` seconds, both bounds inclusive
    async fn find_recent(&self, window_secs: u64) -> Result<Vec<Transaction>, TransactionError> {
        self.find_recent_as_of(window_secs, Utc::now()).await
    }

    /// Remove every stored transaction. Calling it on an empty store is a no-op.
    async fn delete_all(&self) -> Result<(), TransactionError>;
}
