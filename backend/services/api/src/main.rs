mod error;
mod insights;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tower_http::cors::CorsLayer;
use wardwatch_common::types::ServiceInfo;
use wardwatch_config::{init_tracing, AppConfig};
use wardwatch_insight::{HttpTransport, HttpTransportConfig, InsightClient};

#[derive(Clone)]
pub struct AppState {
    pub insights: InsightClient,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("wardwatch-api", env!("CARGO_PKG_VERSION")))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(insights::router())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    tracing::info!(service = "wardwatch-api", upstream = %config.insight_api_base_url, "starting");

    let transport = HttpTransport::new(HttpTransportConfig {
        base_url: config.insight_api_base_url.clone(),
        api_token: config.insight_api_token.clone(),
        timeout_secs: config.insight_timeout_secs,
    })
    .expect("failed to create insight transport");

    let state = AppState {
        insights: InsightClient::new(Arc::new(transport)),
    };

    let app = build_router(state, &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
