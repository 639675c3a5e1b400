//! `Actor` extractor — reads the optional `X-Actor` header into a request
//! context.
//!
//! Authentication lives in an upstream gateway; the backend only records who
//! performed each mutation. A missing or empty header falls back to
//! `"System"`.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use partshub_service::RequestContext;

/// Extracted acting-user context available in handlers.
#[derive(Debug, Clone)]
pub struct Actor(pub RequestContext);

impl std::ops::Deref for Actor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Actor {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get("x-actor")
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        Ok(Actor(RequestContext::new(actor)))
    }
}
