//! Contact inquiry endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Malformed JSON maps to `400`, field validation failures to `422` with
//! per-field messages, and rate limiting to `429`. Every error body is a
//! `ContactErrorBody` so the browser decodes one shape.

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

use std::net::SocketAddr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use client::net::types::{ContactErrorBody, ContactReceipt, ContactRequest, FieldError};
use uuid::Uuid;

use crate::rate_limit::RateLimitError;
use crate::state::AppState;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("request body is not a valid inquiry: {0}")]
    MalformedBody(String),
    #[error("some fields need attention")]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
}

impl ContactError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) => StatusCode::BAD_REQUEST,
            Self::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let fields = match self {
            Self::Invalid(fields) => fields,
            Self::MalformedBody(_) | Self::RateLimited(_) => Vec::new(),
        };
        (status, Json(ContactErrorBody { error, fields })).into_response()
    }
}

// =============================================================================
// HANDLER
// =============================================================================

/// `POST /api/contact`: validate, rate-limit, simulate processing, acknowledge.
///
/// Inquiries are logged and not delivered anywhere else.
pub async fn submit_contact(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactReceipt>), ContactError> {
    let Json(request) = payload.map_err(|rejection| ContactError::MalformedBody(rejection.body_text()))?;
    let request = request.trimmed();
    request.validate().map_err(ContactError::Invalid)?;

    let client = client_key(&headers, peer, state.config.trust_forwarded_for);
    if let Err(err) = state.contact_limiter.check_and_record(&client) {
        tracing::warn!(%client, error = %err, "contact submission rate limited");
        return Err(err.into());
    }

    tokio::time::sleep(state.config.contact_latency).await;

    let receipt = ContactReceipt { id: Uuid::new_v4().to_string(), received_at_ms: now_unix_ms() };
    tracing::info!(
        id = %receipt.id,
        %client,
        name = %request.name,
        email = %request.email,
        message_chars = request.message.chars().count(),
        "contact inquiry received"
    );
    Ok((StatusCode::CREATED, Json(receipt)))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Rate-limit key: the peer IP, or the first `X-Forwarded-For` hop when the
/// server runs behind a trusted proxy.
///
/// The header is client-controlled, so it is ignored unless
/// `trust_forwarded_for` is set.
fn client_key(headers: &HeaderMap, peer: SocketAddr, trust_forwarded_for: bool) -> String {
    if !trust_forwarded_for {
        return peer.ip().to_string();
    }
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| peer.ip().to_string(), str::to_owned)
}

fn now_unix_ms() -> i64 {
    let nanos = time::OffsetDateTime::now_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}
