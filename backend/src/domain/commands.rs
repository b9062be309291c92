//! Domain-level command types.
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the wire DTOs defined in
//! the `shared` crate to these internal types.

pub mod transactions {
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;

    use crate::domain::models::TransactionKind;

    /// Input for creating a new transaction, already parsed from the wire.
    #[derive(Debug, Clone)]
    pub struct CreateTransactionCommand {
        pub amount: Decimal,
        pub timestamp: DateTime<Utc>,
        pub kind: Option<TransactionKind>,
    }
}
