//! Application builder — wires repositories, services, and state into an
//! Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use partshub_core::config::{AppConfig, CorsConfig};
use partshub_core::error::AppError;
use partshub_database::connection::DatabasePool;
use partshub_database::repositories::deleted_loan::DeletedLoanRepository;
use partshub_database::repositories::loan::LoanRepository;
use partshub_database::repositories::spare_part::SparePartRepository;
use partshub_database::store::{InventoryStore, LoanStore, RecycleBinStore};
use partshub_service::{InventoryService, LoanService, RecycleBinService};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Builds the shared application state from configuration and a connected
/// database pool.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppState {
    let pool = db.pool().clone();

    let inventory: Arc<dyn InventoryStore> = Arc::new(SparePartRepository::new(pool.clone()));
    let loans: Arc<dyn LoanStore> = Arc::new(LoanRepository::new(pool.clone()));
    let bin: Arc<dyn RecycleBinStore> = Arc::new(DeletedLoanRepository::new(pool));

    let loan_service = Arc::new(LoanService::new(Arc::clone(&loans), Arc::clone(&inventory)));
    let recycle_bin_service = Arc::new(RecycleBinService::new(
        Arc::clone(&loans),
        bin,
        &config.recycle_bin,
    ));
    let inventory_service = Arc::new(InventoryService::new(inventory));

    AppState {
        config: Arc::new(config),
        db,
        loan_service,
        recycle_bin_service,
        inventory_service,
    }
}

/// Runs the PartsHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db: DatabasePool) -> Result<(), AppError> {
    let addr = config.server.bind_addr();
    let cors_config = config.server.cors.clone();
    let state = build_state(config, db);

    let app = build_app(state, &cors_config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("PartsHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
