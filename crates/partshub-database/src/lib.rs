//! # partshub-database
//!
//! PostgreSQL connection management, store trait seams, and concrete
//! repository implementations for all PartsHub entities.
//!
//! Services depend on the traits in [`store`] rather than on the concrete
//! repositories, so that business logic stays testable against in-memory
//! fakes.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{InventoryStore, LoanFilter, LoanStore, RecycleBinStore};
