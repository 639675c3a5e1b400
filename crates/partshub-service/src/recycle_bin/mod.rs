//! Soft deletion and the 24-hour recycle bin.

pub mod service;

pub use service::RecycleBinService;
