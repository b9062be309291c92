//! Statistics over the trailing window of recorded transactions.
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::domain::models::{Statistics, TransactionError};
use crate::storage::TransactionStorage;

#[derive(Clone)]
pub struct StatisticsService {
    transaction_repository: Arc<dyn TransactionStorage>,
}

impl StatisticsService {
    pub fn new(transaction_repository: Arc<dyn TransactionStorage>) -> Self {
        Self {
            transaction_repository,
        }
    }

    /// Aggregates over the last `window_secs` seconds.
    pub async fn compute_window(&self, window_secs: u64) -> Result<Statistics, TransactionError> {
        self.compute_window_as_of(window_secs, Utc::now()).await
    }

    /// Aggregates over `[as_of - window_secs, as_of]`.
    ///
    /// An empty window yields [`Statistics::empty`], never an error.
    pub async fn compute_window_as_of(
        &self,
        window_secs: u64,
        as_of: DateTime<Utc>,
    ) -> Result<Statistics, TransactionError> {
        let transactions = self
            .transaction_repository
            .find_recent_as_of(window_secs, as_of)
            .await?;
        Statistics::from_transactions(&transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Transaction, TransactionKind};
    use crate::storage::InMemoryTransactionRepository;
    use chrono::Duration;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    struct Fixture {
        repository: Arc<InMemoryTransactionRepository>,
        service: StatisticsService,
        now: DateTime<Utc>,
    }

    impl Fixture {
        fn new() -> Self {
            let repository = Arc::new(InMemoryTransactionRepository::new());
            let service = StatisticsService::new(repository.clone());
            Self {
                repository,
                service,
                now: Utc::now(),
            }
        }

        async fn record(&self, amount: Decimal, kind: TransactionKind, age: Duration) {
            let transaction =
                Transaction::new_as_of(amount, self.now - age, Some(kind), self.now).unwrap();
            self.repository.create(transaction).await.unwrap();
        }

        async fn stats(&self, window_secs: u64) -> Statistics {
            self.service
                .compute_window_as_of(window_secs, self.now)
                .await
                .unwrap()
        }
    }

    #[tokio::test]
    async fn test_empty_store_returns_zeroes() {
        let fixture = Fixture::new();
        assert_eq!(fixture.stats(60).await, Statistics::empty());
    }

    #[tokio::test]
    async fn test_only_stale_transactions_returns_zeroes() {
        let fixture = Fixture::new();
        fixture
            .record(dec!(30), TransactionKind::Credit, Duration::seconds(61))
            .await;
        assert_eq!(fixture.stats(60).await, Statistics::empty());
    }

    #[tokio::test]
    async fn test_three_credits_in_window() {
        let fixture = Fixture::new();
        fixture.record(dec!(10.5), TransactionKind::Credit, Duration::seconds(10)).await;
        fixture.record(dec!(20.0), TransactionKind::Credit, Duration::seconds(20)).await;
        fixture.record(dec!(5.25), TransactionKind::Credit, Duration::seconds(30)).await;

        let stats = fixture.stats(60).await;
        assert_eq!(stats.sum, dec!(35.75));
        assert_eq!(stats.avg, dec!(11.92));
        assert_eq!(stats.max, dec!(20.0));
        assert_eq!(stats.min, dec!(5.25));
        assert_eq!(stats.count, 3);
    }

    #[tokio::test]
    async fn test_single_credit_in_window() {
        let fixture = Fixture::new();
        fixture.record(dec!(100.0), TransactionKind::Credit, Duration::seconds(5)).await;

        let stats = fixture.stats(60).await;
        assert_eq!(stats.sum, dec!(100));
        assert_eq!(stats.avg, dec!(100));
        assert_eq!(stats.max, dec!(100));
        assert_eq!(stats.min, dec!(100));
        assert_eq!(stats.count, 1);
    }

    #[tokio::test]
    async fn test_window_boundary_is_inclusive() {
        let fixture = Fixture::new();
        fixture.record(dec!(50), TransactionKind::Credit, Duration::seconds(60)).await;
        fixture
            .record(dec!(60), TransactionKind::Credit, Duration::milliseconds(60_001))
            .await;

        let stats = fixture.stats(60).await;
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, dec!(50));
    }

    #[tokio::test]
    async fn test_credit_and_debit_at_now() {
        let fixture = Fixture::new();
        fixture.record(dec!(10), TransactionKind::Credit, Duration::zero()).await;
        fixture.record(dec!(4), TransactionKind::Debit, Duration::zero()).await;

        let stats = fixture.stats(60).await;
        assert_eq!(stats.sum, dec!(6));
        assert_eq!(stats.avg, dec!(3.0));
        assert_eq!(stats.max, dec!(10));
        assert_eq!(stats.min, dec!(-4));
        assert_eq!(stats.count, 2);
    }

    #[tokio::test]
    async fn test_window_size_is_a_parameter() {
        let fixture = Fixture::new();
        fixture.record(dec!(1), TransactionKind::Credit, Duration::seconds(5)).await;
        fixture.record(dec!(2), TransactionKind::Credit, Duration::seconds(90)).await;

        assert_eq!(fixture.stats(10).await.count, 1);
        assert_eq!(fixture.stats(120).await.count, 2);
    }

    #[tokio::test]
    async fn test_deletion_is_visible_to_statistics() {
        let fixture = Fixture::new();
        fixture.record(dec!(1), TransactionKind::Credit, Duration::seconds(5)).await;
        fixture.repository.delete_all().await.unwrap();

        assert_eq!(fixture.stats(60).await, Statistics::empty());
    }

    #[tokio::test]
    async fn test_compute_window_against_system_clock() {
        let repository = Arc::new(InMemoryTransactionRepository::new());
        let service = StatisticsService::new(repository.clone());
        repository
            .create(Transaction::new(dec!(12), Utc::now() - Duration::seconds(2), None).unwrap())
            .await
            .unwrap();

        let stats = service.compute_window(60).await.unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.sum, dec!(12));
    }
}
