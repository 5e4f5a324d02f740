//! # RPC Forward Endpoint
//!
//! Relays opaque JSON-RPC bodies to the configured upstream endpoint so the
//! browser wallet stack can talk to a keyed provider URL without ever seeing
//! the key. The body, upstream status code, and upstream response body all
//! pass through verbatim — no inspection or rewriting.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::routing::post;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Build the RPC forward router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/solana-rpc", post(forward))
}

/// POST /api/solana-rpc — Forward an opaque JSON-RPC body verbatim.
#[utoipa::path(
    post,
    path = "/api/solana-rpc",
    responses(
        (status = 200, description = "Upstream response relayed verbatim (any upstream status passes through)"),
        (status = 500, description = "No upstream RPC endpoint configured", body = crate::error::ErrorBody),
    ),
    tag = "rpc"
)]
pub async fn forward(State(state): State<AppState>, body: String) -> Result<Response, AppError> {
    let das = state
        .das_client
        .as_ref()
        .ok_or_else(|| AppError::NotConfigured("RPC endpoint is not configured".into()))?;

    let (status, body) = das.forward_raw(body).await?;

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .map_err(|e| AppError::Internal(format!("failed to assemble relay response: {e}")))
}
