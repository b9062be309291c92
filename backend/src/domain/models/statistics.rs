//! Rolling-window aggregates over signed transaction amounts.
use rust_decimal::{Decimal, RoundingStrategy};

use super::transaction::{Transaction, TransactionError};

/// Number of decimal places kept on every monetary aggregate.
pub const MONEY_SCALE: u32 = 2;

/// Aggregates over the transactions of one window.
///
/// `sum`, `avg`, `max` and `min` are rounded to [`MONEY_SCALE`] places,
/// midpoint away from zero. `count` is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub sum: Decimal,
    pub avg: Decimal,
    pub max: Decimal,
    pub min: Decimal,
    pub count: u64,
}

impl Statistics {
    /// The result for a window with no transactions.
    pub fn empty() -> Self {
        Self {
            sum: Decimal::ZERO,
            avg: Decimal::ZERO,
            max: Decimal::ZERO,
            min: Decimal::ZERO,
            count: 0,
        }
    }

    /// Reduce a window of transactions to its aggregates.
    ///
    /// Debits count negatively, so `max` and `min` are taken over signed
    /// amounts rather than magnitudes. Fails with
    /// [`TransactionError::StatisticsOverflow`] when the exact sum leaves the
    /// decimal range.
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self, TransactionError> {
        let mut signed = transactions.iter().map(Transaction::signed_amount);
        let Some(first) = signed.next() else {
            return Ok(Self::empty());
        };

        let (sum, max, min) =
            signed.try_fold((first, first, first), |(sum, max, min), amount| {
                let sum = sum
                    .checked_add(amount)
                    .ok_or(TransactionError::StatisticsOverflow)?;
                Ok::<_, TransactionError>((sum, max.max(amount), min.min(amount)))
            })?;
        let count = transactions.len() as u64;
        let avg = sum / Decimal::from(count);

        Ok(Self {
            sum: round_money(sum),
            avg: round_money(avg),
            max: round_money(max),
            min: round_money(min),
            count,
        })
    }
}

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
