//! HTTP request handlers, organized by domain.

pub mod health;
pub mod loan;
pub mod recycle_bin;
pub mod spare_part;
pub mod stock;
