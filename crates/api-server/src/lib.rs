//! Thin HTTP wrapper around the valuation orchestrator.
//!
//! The server owns no business logic: parsing, CORS, rate limiting, and
//! response envelopes live here; everything else is a call into
//! `valuation-orchestrator`.

pub mod rate_limit;
pub mod valuation_routes;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use rate_limit::ClientRateLimiter;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use valuation_core::ValuationError;
use valuation_orchestrator::ValuationOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ValuationOrchestrator>,
    pub rate_limiter: ClientRateLimiter,
}

/// Standard response envelope.
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            error_type: None,
        }
    }

    pub fn failure(message: String, error_type: &'static str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            error_type: Some(error_type),
        }
    }
}

pub enum AppError {
    Valuation(ValuationError),
    RateLimited,
    Internal(anyhow::Error),
}

impl From<ValuationError> for AppError {
    fn from(err: ValuationError) -> Self {
        Self::Valuation(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, error_type) = match self {
            AppError::Valuation(err) => {
                let status = match err {
                    ValuationError::Validation { .. } => StatusCode::BAD_REQUEST,
                    ValuationError::Computation(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, err.to_string(), err.kind())
            }
            AppError::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                "Rate limit exceeded, try again later".to_string(),
                "rate_limited",
            ),
            AppError::Internal(err) => {
                // Log the detail, return a generic message
                tracing::error!(error = %err, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                    "internal_error",
                )
            }
        };

        (
            status,
            Json(ApiResponse::<()>::failure(message, error_type)),
        )
            .into_response()
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let requests_per_hour: usize = env_or("RATE_LIMIT_PER_HOUR", 100);
    let port: u16 = env_or("PORT", 5000);

    let state = AppState {
        orchestrator: Arc::new(ValuationOrchestrator::new()),
        rate_limiter: ClientRateLimiter::new(requests_per_hour, Duration::from_secs(3600)),
    };

    let app = Router::new()
        .merge(valuation_routes::valuation_routes())
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "valuation server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
