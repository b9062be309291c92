use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::models::{Transaction, TransactionError};
use crate::storage::traits::TransactionStorage;

/// Process-local transaction store.
///
/// Clones share the same collection. The duplicate check and the append run
/// under a single write guard, so concurrent `create` calls are serialized.
#[derive(Clone, Default)]
pub struct InMemoryTransactionRepository {
    transactions: Arc<RwLock<Vec<Transaction>>>,
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Earliest timestamp still inside a window of `window_secs` ending at `as_of`.
///
/// Windows that reach past the representable range start at the earliest instant.
pub fn window_start(window_secs: u64, as_of: DateTime<Utc>) -> DateTime<Utc> {
    i64::try_from(window_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|window| as_of.checked_sub_signed(window))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[async_trait]
impl TransactionStorage for InMemoryTransactionRepository {
    async fn create(&self, transaction: Transaction) -> Result<Transaction, TransactionError> {
        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|existing| existing.is_duplicate_of(&transaction)) {
            return Err(TransactionError::DuplicateTransaction);
        }
        transactions.push(transaction.clone());
        Ok(transaction)
    }

    async fn find_all(&self) -> Result<Vec<Transaction>, TransactionError> {
        Ok(self.transactions.read().await.clone())
    }

    async fn find_recent_as_of(
        &self,
        window_secs: u64,
        as_of: DateTime<Utc>,
    ) -> Result<Vec<Transaction>, TransactionError> {
        let lower_bound = window_start(window_secs, as_of);
        let transactions = self.transactions.read().await;
        Ok(transactions
            .iter()
            .filter(|t| t.timestamp() >= lower_bound && t.timestamp() <= as_of)
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> Result<(), TransactionError> {
        self.transactions.write().await.clear();
        Ok(())
    }
}
