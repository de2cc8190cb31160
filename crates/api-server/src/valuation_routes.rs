//! Valuation routes.

use axum::extract::{ConnectInfo, State};
use axum::http::HeaderMap;
use axum::routing::{get, post};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;
use std::net::SocketAddr;
use valuation_core::{RawValuationInput, ValuationResult};

use crate::{ApiResponse, AppError, AppState};

pub fn valuation_routes() -> Router<AppState> {
    Router::new()
        .route("/api/valuation/calculate", post(calculate_valuation))
        .route("/api/valuation/industries", get(list_industries))
}

/// Prefer the forwarded client address when running behind a proxy.
fn client_key(headers: &HeaderMap, addr: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| addr.ip().to_string())
}

async fn calculate_valuation(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    Json(input): Json<RawValuationInput>,
) -> Result<Json<ApiResponse<ValuationResult>>, AppError> {
    let client = client_key(&headers, addr);
    if !state.rate_limiter.try_acquire(&client).await {
        tracing::warn!(%client, "request quota exhausted");
        return Err(AppError::RateLimited);
    }

    let result = state.orchestrator.compute_valuation(&input).await?;
    Ok(Json(ApiResponse::success(result)))
}

#[derive(Serialize)]
pub struct IndustryMultiple {
    pub industry: &'static str,
    pub multiple: Decimal,
}

async fn list_industries() -> Json<ApiResponse<Vec<IndustryMultiple>>> {
    let industries = valuation_engine::multiples::industries()
        .map(|(industry, multiple)| IndustryMultiple { industry, multiple })
        .collect();
    Json(ApiResponse::success(industries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn forwarded_header_wins_over_socket_address() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.9, 10.0.0.1"),
        );
        let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        assert_eq!(client_key(&headers, addr), "203.0.113.9");
    }

    #[test]
    fn socket_address_is_the_fallback() {
        let addr: SocketAddr = "127.0.0.1:9000".parse().unwrap();
        assert_eq!(client_key(&HeaderMap::new(), addr), "127.0.0.1");
    }
}
