use std::time::Duration;

use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{HeaderValue, Request};
use client::net::types::FormField;
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::config::Config;
use crate::routes::api_routes;

fn test_state(limit: usize) -> AppState {
    AppState::new(Config {
        contact_latency: Duration::ZERO,
        contact_rate_limit: limit,
        ..Config::default()
    })
}

fn peer() -> SocketAddr {
    SocketAddr::from(([203, 0, 113, 7], 40_000))
}

fn valid_request() -> ContactRequest {
    ContactRequest {
        name: "  Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        message: "I'd like a new website.".to_owned(),
    }
}

async fn call(state: AppState, request: ContactRequest) -> Result<(StatusCode, Json<ContactReceipt>), ContactError> {
    submit_contact(State(state), ConnectInfo(peer()), HeaderMap::new(), Ok(Json(request))).await
}

async fn post_raw(state: AppState, body: &str) -> (StatusCode, serde_json::Value) {
    post_forwarded(state, body, None).await
}

async fn post_forwarded(state: AppState, body: &str, forwarded_for: Option<&str>) -> (StatusCode, serde_json::Value) {
    let app = api_routes(state).layer(MockConnectInfo(peer()));
    let mut request = Request::post("/api/contact").header("content-type", "application/json");
    if let Some(value) = forwarded_for {
        request = request.header("x-forwarded-for", value);
    }
    let request = request.body(Body::from(body.to_owned())).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

// =============================================================================
// HANDLER
// =============================================================================

#[tokio::test]
async fn valid_inquiry_is_acknowledged() {
    let (status, Json(receipt)) = call(test_state(5), valid_request()).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert!(Uuid::parse_str(&receipt.id).is_ok());
    assert!(receipt.received_at_ms > 0);
}

#[tokio::test]
async fn invalid_inquiry_reports_every_field() {
    let request = ContactRequest { name: "   ".to_owned(), email: "nope".to_owned(), message: String::new() };
    let Err(ContactError::Invalid(fields)) = call(test_state(5), request).await else {
        panic!("expected validation failure");
    };
    let named: Vec<_> = fields.iter().map(|f| f.field).collect();
    assert_eq!(named, vec![FormField::Name, FormField::Email, FormField::Message]);
}

#[tokio::test]
async fn invalid_inquiries_do_not_consume_quota() {
    let state = test_state(1);
    let bad = ContactRequest::default();
    assert!(matches!(call(state.clone(), bad.clone()).await, Err(ContactError::Invalid(_))));
    assert!(matches!(call(state.clone(), bad).await, Err(ContactError::Invalid(_))));
    assert!(call(state, valid_request()).await.is_ok());
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited() {
    let state = test_state(2);
    assert!(call(state.clone(), valid_request()).await.is_ok());
    assert!(call(state.clone(), valid_request()).await.is_ok());
    let err = call(state, valid_request()).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn acknowledgment_waits_for_configured_latency() {
    let state = AppState::new(Config { contact_latency: Duration::from_millis(50), ..Config::default() });
    let started = std::time::Instant::now();
    call(state, valid_request()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn client_key_ignores_forwarded_for_by_default() {
    let mut headers = HeaderMap::new();
    headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.1"));
    assert_eq!(client_key(&headers, peer(), false), "203.0.113.7");
}

#[test]
fn client_key_uses_first_hop_behind_trusted_proxy() {
    let mut headers = HeaderMap::new();
    assert_eq!(client_key(&headers, peer(), true), "203.0.113.7");

    headers.insert("x-forwarded-for", HeaderValue::from_static("198.51.100.1, 10.0.0.1"));
    assert_eq!(client_key(&headers, peer(), true), "198.51.100.1");

    headers.insert("x-forwarded-for", HeaderValue::from_static("  "));
    assert_eq!(client_key(&headers, peer(), true), "203.0.113.7");
}

// =============================================================================
// ROUTER
// =============================================================================

#[tokio::test]
async fn router_returns_unprocessable_with_field_errors() {
    let (status, body) = post_raw(test_state(5), r#"{"name":"","email":"a@b.co","message":"hi"}"#).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"][0]["field"], "name");
    assert_eq!(body["fields"][0]["message"], "Please enter your name.");
}

#[tokio::test]
async fn router_rejects_malformed_json() {
    let (status, body) = post_raw(test_state(5), "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
    assert!(body.get("fields").is_none());
}

#[tokio::test]
async fn router_returns_too_many_requests() {
    let state = test_state(1);
    let body = r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#;
    let (first, receipt) = post_raw(state.clone(), body).await;
    assert_eq!(first, StatusCode::CREATED);
    assert!(receipt["id"].is_string());

    let (second, err) = post_raw(state, body).await;
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert!(err["error"].as_str().is_some_and(|e| e.contains("too many")));
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_bypass_limit() {
    let state = test_state(1);
    let body = r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#;
    let mut accepted = 0;
    for i in 0..5 {
        let forwarded = format!("10.9.9.{i}");
        let (status, _) = post_forwarded(state.clone(), body, Some(&forwarded)).await;
        if status == StatusCode::CREATED {
            accepted += 1;
        } else {
            assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        }
    }
    assert_eq!(accepted, 1);
}

#[tokio::test]
async fn trusted_proxy_limits_each_forwarded_client() {
    let state = AppState::new(Config {
        contact_latency: Duration::ZERO,
        contact_rate_limit: 1,
        trust_forwarded_for: true,
        ..Config::default()
    });
    let body = r#"{"name":"Ada","email":"ada@example.com","message":"hello"}"#;
    let (first, _) = post_forwarded(state.clone(), body, Some("198.51.100.1")).await;
    let (other, _) = post_forwarded(state.clone(), body, Some("198.51.100.2")).await;
    let (repeat, _) = post_forwarded(state, body, Some("198.51.100.1")).await;
    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(other, StatusCode::CREATED);
    assert_eq!(repeat, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = api_routes(test_state(1));
    let response = app.oneshot(Request::get("/healthz").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
