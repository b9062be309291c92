//! # Storage Module
//!
//! Holds the transaction collection behind the [`TransactionStorage`] trait.
//!
//! ## Current Implementation
//!
//! - **Primary Storage**: process memory, guarded by an async read/write lock
//! - **Future Flexibility**: a persistent backend can implement the same trait
//!   and be handed to the services without touching the domain layer
//!
//! ## Design Principles
//!
//! - **Repository Pattern**: Clean separation between domain and data access
//! - **Dependency Inversion**: Domain depends on the storage trait, not on an implementation
//! - **Testability**: Every test builds its own isolated store

pub mod memory;
pub mod traits;

pub use memory::InMemoryTransactionRepository;
pub use traits::TransactionStorage;
