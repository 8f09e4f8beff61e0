//! REST helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since submission only
//! happens from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto `SubmitError` so the contact form can decide
//! between inline field errors and a non-blocking notice.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactReceipt, ContactRequest, FieldError};
#[cfg(feature = "hydrate")]
use super::types::ContactErrorBody;

pub const CONTACT_ENDPOINT: &str = "/api/contact";
/// Upper bound on a single submission round trip, including the server's
/// simulated delivery latency.
pub const SUBMIT_TIMEOUT_MS: u32 = 15_000;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("the server took too long to respond")]
    Timeout,
    #[error("some fields need attention")]
    Rejected(Vec<FieldError>),
    #[error("too many messages sent recently, please try again later")]
    RateLimited,
    /// The server could not read the request at all.
    #[error("the request was rejected, please check the form and try again")]
    BadRequest,
    #[error("server error: {0}")]
    Server(u16),
}

impl SubmitError {
    /// Whether retrying the same payload later could succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Network(_) | SubmitError::Timeout | SubmitError::RateLimited)
            || matches!(self, SubmitError::Server(status) if *status >= 500)
    }
}

/// Map a non-success HTTP status and its decoded body onto a `SubmitError`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, fields: Vec<FieldError>) -> SubmitError {
    match status {
        422 | 400 if !fields.is_empty() => SubmitError::Rejected(fields),
        400 => SubmitError::BadRequest,
        429 => SubmitError::RateLimited,
        other => SubmitError::Server(other),
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns a `SubmitError` describing why the inquiry was not accepted.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactReceipt, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let send = async {
            let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
                .json(request)
                .map_err(|e| SubmitError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            if resp.ok() {
                return resp.json::<ContactReceipt>().await.map_err(|e| SubmitError::Network(e.to_string()));
            }
            let status = resp.status();
            let body = resp.json::<ContactErrorBody>().await.unwrap_or_default();
            Err(classify_failure(status, body.fields))
        };
        let timeout = gloo_timers::future::TimeoutFuture::new(SUBMIT_TIMEOUT_MS);

        match select(Box::pin(send), Box::pin(timeout)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(SubmitError::Timeout),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(SubmitError::Network("not available on server".to_owned()))
    }
}
