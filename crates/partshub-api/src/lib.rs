//! # partshub-api
//!
//! HTTP API layer for PartsHub built on Axum.
//!
//! Provides the REST endpoints for loans, the recycle bin, the spare-part
//! catalog, and stock adjustment, plus DTOs, the actor extractor, CORS,
//! and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
