//! Spare-part catalog management and direct stock adjustment.

pub mod service;

pub use service::{InventoryService, StockAdjustment};
