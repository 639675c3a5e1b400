//! Request context carrying the acting user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Authentication lives in an upstream gateway, so the context only carries
/// the actor name recorded on created and deleted records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// Name of the acting user, `"System"` when unknown.
    pub actor: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context. A missing actor defaults to `"System"`.
    pub fn new(actor: Option<String>) -> Self {
        Self {
            actor: actor.unwrap_or_else(|| "System".to_string()),
            request_time: Utc::now(),
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new(None)
    }
}
