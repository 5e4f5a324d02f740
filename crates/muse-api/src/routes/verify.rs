//! # Wallet-Ownership Verification Endpoint
//!
//! Orchestrates the full verification pipeline for one request:
//!
//! ```text
//! Received → SignatureChecked → HoldingsFetched → TierResolved
//!          → EntitlementComputed → Responded
//! ```
//!
//! with a rejection terminal reachable from every step. The signature check
//! fails fast — the holdings service is never contacted for a request that
//! does not verify. Tier and entitlement resolution are pure functions over
//! the fetched holdings; nothing is persisted server-side and the raw
//! signature and message are never logged.
//!
//! ## Known Gap: Replay
//!
//! The signed message embeds a client-generated timestamp but the server
//! does not track nonces or enforce a freshness window, so a captured
//! `(message, signature)` pair stays replayable. A hardened version would
//! issue a short-lived server nonce and reject reuse.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use muse_core::{resolve_tier, AssetRecord, Lang, Tier, WalletAddress};

use crate::error::AppError;
use crate::state::AppState;

/// Signed assertion submitted by the dashboard.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    /// Base58-encoded wallet public key.
    #[schema(value_type = String)]
    pub public_key: WalletAddress,
    /// Base58-encoded detached Ed25519 signature.
    pub signature: String,
    /// The signed message (embeds a client-generated timestamp).
    pub message: String,
    /// Display language for labels and localized targets. Defaults to `en`.
    #[serde(default)]
    #[schema(value_type = String, example = "en")]
    pub lang: Lang,
}

/// One resolved download link.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DownloadLink {
    /// Display label in the requested language.
    pub label: String,
    /// Concrete URL in the requested language.
    pub url: String,
}

/// Successful verification payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct VerifyResponse {
    /// The single highest tier the wallet qualifies for.
    #[schema(value_type = String, example = "silver")]
    pub tier: Tier,
    /// Cumulative unlockable content, lowest tier first.
    pub downloads: Vec<DownloadLink>,
}

/// Build the verification router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/verify", post(verify))
}

/// POST /api/verify — Verify wallet ownership and resolve entitlements.
#[utoipa::path(
    post,
    path = "/api/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Wallet verified; cumulative entitlement returned", body = VerifyResponse),
        (status = 401, description = "Invalid signature", body = crate::error::ErrorBody),
        (status = 403, description = "NFT not found, or no valid tier", body = crate::error::ErrorBody),
        (status = 502, description = "Upstream indexer failure", body = crate::error::ErrorBody),
        (status = 500, description = "RPC endpoint or collection not configured", body = crate::error::ErrorBody),
    ),
    tag = "verify"
)]
pub async fn verify(
    State(state): State<AppState>,
    Json(req): Json<VerifyRequest>,
) -> Result<Json<VerifyResponse>, AppError> {
    let das = state
        .das_client
        .as_ref()
        .ok_or_else(|| AppError::NotConfigured("RPC endpoint is not configured".into()))?;
    let collection = state
        .config
        .collection_address
        .as_deref()
        .ok_or_else(|| AppError::NotConfigured("collection address is not configured".into()))?;

    // 1. Signature check — fail fast, before any network call.
    if !muse_crypto::verify_detached(req.public_key.as_str(), &req.message, &req.signature)? {
        return Err(AppError::InvalidSignature);
    }

    // 2. Holdings lookup (single page; see muse-das-client docs).
    let assets = das.search_assets(&req.public_key, collection).await?;
    if assets.is_empty() {
        return Err(AppError::NftNotFound);
    }

    // 3. Tier resolution — highest qualifying tier or fail closed.
    let records: Vec<AssetRecord> = assets
        .into_iter()
        .map(|a| a.into_asset_record(collection))
        .collect();
    let tier = resolve_tier(&records).ok_or(AppError::TierNotFound)?;

    // 4. Cumulative entitlement, resolved to the requested language.
    let downloads = state
        .catalog
        .entitlement(tier)
        .into_iter()
        .map(|item| DownloadLink {
            label: item.label.get(req.lang).to_string(),
            url: item.target.resolve(req.lang).to_string(),
        })
        .collect();

    tracing::info!(wallet = %req.public_key, %tier, "wallet verified");
    Ok(Json(VerifyResponse { tier, downloads }))
}
