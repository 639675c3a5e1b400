//! # partshub-entity
//!
//! Domain entity models for PartsHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod deleted_loan;
pub mod loan;
pub mod spare_part;
pub mod stock_history;
