//! Unified application error types for PartsHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A spare part does not have enough stock for the requested quantity.
    InsufficientStock,
    /// The loan has already been returned and cannot be modified.
    LoanClosed,
    /// A return was attempted on a loan that is already fully returned.
    AlreadyReturned,
    /// A recycle-bin entry has already been restored.
    AlreadyRestored,
    /// The recycle-bin restore window has expired.
    ExpiryExceeded,
    /// A conflict occurred (duplicate entry, concurrent modification, etc.).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::InsufficientStock => write!(f, "INSUFFICIENT_STOCK"),
            Self::LoanClosed => write!(f, "LOAN_CLOSED"),
            Self::AlreadyReturned => write!(f, "ALREADY_RETURNED"),
            Self::AlreadyRestored => write!(f, "ALREADY_RESTORED"),
            Self::ExpiryExceeded => write!(f, "EXPIRY_EXCEEDED"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout PartsHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create an insufficient-stock error naming the part and quantities.
    pub fn insufficient_stock(part_name: &str, available: f64, requested: f64) -> Self {
        Self::new(
            ErrorKind::InsufficientStock,
            format!(
                "Insufficient stock for {part_name}. Available: {available}, Requested: {requested}"
            ),
        )
    }

    /// Create a loan-closed error.
    pub fn loan_closed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoanClosed, message)
    }

    /// Create an already-returned error.
    pub fn already_returned(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyReturned, message)
    }

    /// Create an already-restored error.
    pub fn already_restored(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyRestored, message)
    }

    /// Create an expiry-exceeded error.
    pub fn expiry_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ExpiryExceeded, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
