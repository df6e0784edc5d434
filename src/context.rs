use std::{convert::Infallible, future::Future, time::Duration};

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::{info_span, Instrument, Span};
use uuid::Uuid;

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Per-request identity and deadline, passed explicitly into service and
/// store calls.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    pub timeout: Duration,
}

impl RequestContext {
    pub fn new(request_id: impl Into<String>, timeout: Duration) -> Self {
        Self {
            request_id: request_id.into(),
            timeout,
        }
    }

    pub fn span(&self, op: &'static str) -> Span {
        info_span!("store", request_id = %self.request_id, op)
    }

    /// Runs `fut` inside this request's span, bounded by its deadline.
    pub async fn run<F, T>(&self, op: &'static str, fut: F) -> Result<T, tokio::time::error::Elapsed>
    where
        F: Future<Output = T>,
    {
        tokio::time::timeout(self.timeout, fut.instrument(self.span(op))).await
    }
}

/// Reads the id set by `SetRequestIdLayer`, or makes one up when the
/// handler is called without it.
#[async_trait]
impl FromRequestParts<AppState> for RequestContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::to_owned)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(RequestContext::new(request_id, state.config.request_timeout()))
    }
}
