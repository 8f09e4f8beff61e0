#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod state;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env();
    tracing::info!(
        latency_ms = config.contact_latency.as_millis(),
        rate_limit = config.contact_rate_limit,
        rate_window_secs = config.contact_rate_window.as_secs(),
        trust_forwarded_for = config.trust_forwarded_for,
        "contact endpoint configured"
    );

    let state = state::AppState::new(config);
    let app = routes::app(state).expect("router init failed");

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "ezz-site listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
