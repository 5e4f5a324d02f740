//! # muse-das-client — Typed client for the DAS asset-search RPC
//!
//! Provides the two upstream interactions the supporter stack needs:
//!
//! - [`DasClient::search_assets`] — one `searchAssets` JSON-RPC call scoped
//!   by owner and collection, used by the verification endpoint to discover
//!   a wallet's supporter-tier holdings.
//! - [`DasClient::forward_raw`] — opaque passthrough of a JSON-RPC body,
//!   used by the RPC forward endpoint so the browser never sees the keyed
//!   provider URL.
//!
//! This crate is the only path to the hosted indexer; no other crate makes
//! direct HTTP requests to it.
//!
//! ## Known Limitation: Pagination
//!
//! `search_assets` requests page 1 with a page size of 100 and does not walk
//! further pages. A wallet whose matching asset falls beyond the first page
//! may falsely resolve to "no holdings". This is a documented constraint of
//! the verification flow, not a silent bug.
//!
//! ## Error Handling & Retries
//!
//! Every failure maps to a [`DasApiError`] variant; nothing panics out of
//! this crate. There is no retry or backoff: each verification is a
//! user-initiated, re-triable action, so a single timeout-bounded attempt is
//! made per call.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConfigError, DasConfig};
pub use error::DasApiError;
pub use types::{DasAsset, SearchAssetsResult};

use std::time::Duration;

use muse_core::WalletAddress;
use serde::Deserialize;

/// Fixed page size for `searchAssets`. Holdings beyond the first page of
/// this size are not seen (see crate-level docs).
pub const SEARCH_PAGE_LIMIT: u32 = 100;

/// JSON-RPC error object.
#[derive(Debug, Clone, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC response envelope for `searchAssets`.
#[derive(Debug, Deserialize)]
struct RpcEnvelope {
    #[serde(default)]
    result: Option<SearchAssetsResult>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

/// Client for the DAS RPC endpoint.
#[derive(Debug, Clone)]
pub struct DasClient {
    http: reqwest::Client,
    rpc_url: url::Url,
}

impl DasClient {
    /// Create a new DAS client from configuration.
    pub fn new(config: DasConfig) -> Result<Self, DasApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DasApiError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            rpc_url: config.rpc_url,
        })
    }

    /// Query all assets of `collection` owned by `owner`.
    ///
    /// Issues a single `searchAssets` call (page 1, limit
    /// [`SEARCH_PAGE_LIMIT`]). An empty item list is a valid non-error
    /// outcome — "no holdings" is a domain answer, not a failure.
    pub async fn search_assets(
        &self,
        owner: &WalletAddress,
        collection: &str,
    ) -> Result<Vec<DasAsset>, DasApiError> {
        let endpoint = "searchAssets".to_string();
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": "muse-verify",
            "method": "searchAssets",
            "params": {
                "ownerAddress": owner.as_str(),
                "grouping": ["collection", collection],
                "page": 1,
                "limit": SEARCH_PAGE_LIMIT,
            },
        });

        let resp = self
            .http
            .post(self.rpc_url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| DasApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DasApiError::ApiError {
                endpoint,
                status,
                body,
            });
        }

        let envelope: RpcEnvelope =
            resp.json().await.map_err(|e| DasApiError::Deserialization {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if let Some(err) = envelope.error {
            return Err(DasApiError::Rpc {
                endpoint,
                code: err.code,
                message: err.message,
            });
        }

        let result = envelope.result.unwrap_or_default();
        tracing::debug!(
            total = result.total,
            items = result.items.len(),
            "searchAssets returned"
        );
        Ok(result.items)
    }

    /// Forward an opaque JSON-RPC body verbatim and return the upstream
    /// status code and body verbatim.
    ///
    /// No inspection, rewriting, or status mapping happens here — the
    /// caller relays both to its own client unchanged.
    pub async fn forward_raw(&self, body: String) -> Result<(u16, String), DasApiError> {
        let endpoint = "forward".to_string();
        let resp = self
            .http
            .post(self.rpc_url.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DasApiError::Http {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| DasApiError::Http {
            endpoint,
            source: e,
        })?;
        Ok((status, body))
    }
}
