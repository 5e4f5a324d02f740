//! # muse-api — Axum API Services for the Muse Supporter Stack
//!
//! The server-side surface of the supporter campaign site: a wallet-gated
//! verification endpoint that reveals tiered content after a cryptographic
//! ownership check, a thin RPC forwarder, and the static tier sale table.
//!
//! ## API Surface
//!
//! | Route              | Module                     | Domain                    |
//! |--------------------|----------------------------|---------------------------|
//! | `POST /api/verify` | [`routes::verify`]         | Ownership verification    |
//! | `POST /api/solana-rpc` | [`routes::rpc_proxy`]  | Opaque RPC forwarding     |
//! | `GET /api/tiers`   | [`routes::tiers`]          | Tier sale table           |
//! | `GET /openapi.json`| [`openapi`]                | OpenAPI spec              |
//!
//! Each verification call is stateless and independent: no session store,
//! no cache, no shared mutable state (see [`state::AppState`]).

pub mod error;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Health probes (`/health/*`) are mounted outside the API router so they
/// stay reachable regardless of upstream configuration.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::verify::router())
        .merge(routes::rpc_proxy::router())
        .merge(routes::tiers::router())
        .merge(openapi::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe — returns 200 when the application is ready to serve.
async fn readiness() -> &'static str {
    "ready"
}
