//! Application state shared across all handlers.

use std::sync::Arc;

use partshub_core::config::AppConfig;
use partshub_database::connection::DatabasePool;
use partshub_service::{InventoryService, LoanService, RecycleBinService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db: DatabasePool,
    /// Loan engine.
    pub loan_service: Arc<LoanService>,
    /// Recycle-bin service.
    pub recycle_bin_service: Arc<RecycleBinService>,
    /// Spare-part catalog service.
    pub inventory_service: Arc<InventoryService>,
}
