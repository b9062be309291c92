//! Transaction service: creation, listing and bulk deletion.
use std::sync::Arc;

use crate::domain::commands::transactions::CreateTransactionCommand;
use crate::domain::models::{Transaction, TransactionError};
use crate::storage::TransactionStorage;

#[derive(Clone)]
pub struct TransactionService {
    transaction_repository: Arc<dyn TransactionStorage>,
}

impl TransactionService {
    pub fn new(transaction_repository: Arc<dyn TransactionStorage>) -> Self {
        Self {
            transaction_repository,
        }
    }

    /// Validate the command into a [`Transaction`] and store it.
    ///
    /// Entity errors (`InvalidAmount`, `FutureTimestamp`) are returned before
    /// the store is touched.
    pub async fn create_transaction(
        &self,
        command: CreateTransactionCommand,
    ) -> Result<Transaction, TransactionError> {
        let transaction = Transaction::new(command.amount, command.timestamp, command.kind)?;
        self.transaction_repository.create(transaction).await
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, TransactionError> {
        self.transaction_repository.find_all().await
    }

    pub async fn delete_all_transactions(&self) -> Result<(), TransactionError> {
        self.transaction_repository.delete_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::TransactionKind;
    use crate::storage::InMemoryTransactionRepository;
    use chrono::{Duration, Utc};
    use rust_decimal_macros::dec;

    fn setup_service() -> TransactionService {
        TransactionService::new(Arc::new(InMemoryTransactionRepository::new()))
    }

    fn command(amount: rust_decimal::Decimal, seconds_ago: i64) -> CreateTransactionCommand {
        CreateTransactionCommand {
            amount,
            timestamp: Utc::now() - Duration::seconds(seconds_ago),
            kind: None,
        }
    }

    #[tokio::test]
    async fn test_create_transaction_successfully() {
        let service = setup_service();
        let request = command(dec!(100), 1);
        let timestamp = request.timestamp;

        let transaction = service.create_transaction(request).await.unwrap();

        assert_eq!(transaction.amount(), dec!(100));
        assert_eq!(transaction.timestamp(), timestamp);
        assert_eq!(transaction.kind(), TransactionKind::Credit);
        assert_eq!(service.list_transactions().await.unwrap(), vec![transaction]);
    }

    #[tokio::test]
    async fn test_create_transaction_with_negative_amount() {
        let service = setup_service();

        let result = service.create_transaction(command(dec!(-50), 0)).await;

        assert!(matches!(result, Err(TransactionError::InvalidAmount)));
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_transaction_with_future_timestamp() {
        let service = setup_service();

        let result = service.create_transaction(command(dec!(100), -3600)).await;

        assert!(matches!(result, Err(TransactionError::FutureTimestamp)));
        assert!(service.list_transactions().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_duplicate_transaction() {
        let service = setup_service();
        let first = command(dec!(25), 2);
        let second = first.clone();

        service.create_transaction(first).await.unwrap();
        let result = service.create_transaction(second).await;

        assert!(matches!(result, Err(TransactionError::DuplicateTransaction)));
        assert_eq!(service.list_transactions().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_debit_transaction() {
        let service = setup_service();
        let mut request = command(dec!(4), 0);
        request.kind = Some(TransactionKind::Debit);

        let transaction = service.create_transaction(request).await.unwrap();
        assert_eq!(transaction.signed_amount(), dec!(-4));
    }

    #[tokio::test]
    async fn test_delete_all_transactions() {
        let service = setup_service();
        service.create_transaction(command(dec!(1), 1)).await.unwrap();
        service.create_transaction(command(dec!(2), 2)).await.unwrap();

        service.delete_all_transactions().await.unwrap();
        assert!(service.list_transactions().await.unwrap().is_empty());

        service.delete_all_transactions().await.unwrap();
        assert!(service.list_transactions().await.unwrap().is_empty());
    }
}
