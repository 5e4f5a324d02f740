//! # Tier Sale Table Endpoint
//!
//! Serves the static supporter-tier sale table (names, pricing estimates,
//! candy-machine addresses) so the mint page renders from one source of
//! truth. Read-only; minting itself happens client-side against the
//! candy-machine program.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use muse_core::TierInfo;

use crate::state::AppState;

/// Build the tiers router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/tiers", get(list_tiers))
}

/// GET /api/tiers — Return the supporter-tier sale table, lowest tier first.
#[utoipa::path(
    get,
    path = "/api/tiers",
    responses(
        (status = 200, description = "Sale table, ordered lowest tier first"),
    ),
    tag = "tiers"
)]
pub async fn list_tiers(State(state): State<AppState>) -> Json<Vec<TierInfo>> {
    Json(state.tier_table.as_ref().clone())
}
