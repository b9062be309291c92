//! In-memory storage backend. Contents live for the lifetime of the process.

pub mod transaction_repository;

pub use transaction_repository::InMemoryTransactionRepository;
