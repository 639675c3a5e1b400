//! Route definitions for the PartsHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(loan_routes())
        .merge(recycle_bin_routes())
        .merge(spare_part_routes())
        .merge(stock_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Loan lifecycle: create, list, read, edit, returns, item removal.
fn loan_routes() -> Router<AppState> {
    Router::new()
        .route("/loans", post(handlers::loan::create_loan))
        .route("/loans", get(handlers::loan::list_loans))
        .route("/loans/active", get(handlers::loan::list_active_loans))
        .route("/loans/returned", get(handlers::loan::list_returned_loans))
        .route("/loans/{id}", get(handlers::loan::get_loan))
        .route("/loans/{id}", put(handlers::loan::update_loan))
        .route("/loans/{id}/return", put(handlers::loan::partial_return))
        .route(
            "/loans/{id}/complete-return",
            put(handlers::loan::complete_return),
        )
        .route(
            "/loans/{loan_id}/items/{item_id}",
            delete(handlers::loan::remove_item),
        )
}

/// Soft delete, restore, listing, purge, and the cleanup sweep.
fn recycle_bin_routes() -> Router<AppState> {
    Router::new()
        .route("/loans/{id}", delete(handlers::recycle_bin::delete_loan))
        .route(
            "/loans/{id}/restore",
            post(handlers::recycle_bin::restore_loan),
        )
        .route(
            "/loans/recycle-bin/all",
            get(handlers::recycle_bin::list_deleted_loans),
        )
        .route(
            "/loans/recycle-bin/{id}",
            delete(handlers::recycle_bin::purge_deleted_loan),
        )
        .route(
            "/loans/recycle-bin/cleanup",
            post(handlers::recycle_bin::cleanup_recycle_bin),
        )
}

/// Spare-part catalog CRUD.
fn spare_part_routes() -> Router<AppState> {
    Router::new()
        .route("/spare-parts", post(handlers::spare_part::create_part))
        .route("/spare-parts", get(handlers::spare_part::list_parts))
        .route("/spare-parts/{id}", get(handlers::spare_part::get_part))
        .route("/spare-parts/{id}", put(handlers::spare_part::update_part))
        .route(
            "/spare-parts/{id}",
            delete(handlers::spare_part::delete_part),
        )
}

/// Manual stock in/out.
fn stock_routes() -> Router<AppState> {
    Router::new()
        .route("/stock/in", post(handlers::stock::stock_in))
        .route("/stock/out", post(handlers::stock::stock_out))
}

/// Liveness.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
