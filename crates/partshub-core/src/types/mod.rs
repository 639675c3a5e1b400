//! Core type definitions used across the PartsHub workspace.

pub mod money;

pub use money::round2;
