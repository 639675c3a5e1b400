//! # partshub-service
//!
//! Business logic service layer for PartsHub. Each service orchestrates the
//! store seams defined in `partshub-database` to implement application-level
//! use cases.
//!
//! Services follow constructor injection — all dependencies are provided at
//! construction time via `Arc<dyn ...>` store references, so every service
//! is unit-testable against in-memory fakes.

pub mod context;
pub mod inventory;
pub mod loan;
pub mod recycle_bin;

#[cfg(test)]
pub(crate) mod testing;

pub use context::RequestContext;
pub use inventory::InventoryService;
pub use loan::LoanService;
pub use recycle_bin::RecycleBinService;
