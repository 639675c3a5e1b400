//! # partshub-core
//!
//! Core crate for PartsHub. Contains configuration schemas, shared types
//! (money rounding), and the unified error system.
//!
//! This crate has **no** internal dependencies on other PartsHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
