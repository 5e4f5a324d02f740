//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every component-level failure (signature, holdings lookup, catalog) is
//! caught here and mapped to one of the documented HTTP failure shapes —
//! no internal error propagates to the caller unhandled.
//!
//! Response bodies are flat `{error, code}` objects: `error` carries the
//! fixed client-facing message, `code` a stable machine-readable kind so
//! clients can branch on cause without string matching. Raw upstream detail
//! is logged server-side only.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Flat JSON error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Fixed client-facing message (e.g. `"Invalid signature"`).
    pub error: String,
    /// Stable machine-readable error kind (e.g. `"INVALID_SIGNATURE"`).
    pub code: String,
}

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// The signed assertion did not verify under the claimed public key
    /// (401).
    #[error("invalid signature")]
    InvalidSignature,

    /// The address or signature was not valid base58 of the expected length
    /// (401). Same client-facing message as [`Self::InvalidSignature`] but a
    /// distinct machine-readable code, so clients can tell a garbled request
    /// apart from a genuine verification failure.
    #[error("malformed address or signature encoding")]
    InvalidEncoding,

    /// The wallet holds no asset of the target collection (403).
    #[error("no asset of the target collection found")]
    NftNotFound,

    /// Holdings were present but none carried a recognized tier (403).
    #[error("no qualifying tier among held assets")]
    TierNotFound,

    /// The indexer could not be reached or timed out (502).
    /// Detail is logged server-side, never returned.
    #[error("network error reaching RPC endpoint: {0}")]
    Network(String),

    /// The indexer answered but with an error or malformed payload (502).
    /// Detail is logged server-side, never returned.
    #[error("upstream RPC error: {0}")]
    Upstream(String),

    /// A required upstream endpoint or collection address is not
    /// configured (500). A server-side misconfiguration, not a client
    /// mistake, so it answers in the 500 class like any other internal
    /// failure.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// Internal server error (500). Message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and machine-readable error code.
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidSignature => (StatusCode::UNAUTHORIZED, "INVALID_SIGNATURE"),
            Self::InvalidEncoding => (StatusCode::UNAUTHORIZED, "INVALID_ENCODING"),
            Self::NftNotFound => (StatusCode::FORBIDDEN, "NFT_NOT_FOUND"),
            Self::TierNotFound => (StatusCode::FORBIDDEN, "TIER_NOT_FOUND"),
            Self::Network(_) => (StatusCode::BAD_GATEWAY, "NETWORK_ERROR"),
            Self::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            Self::NotConfigured(_) => (StatusCode::INTERNAL_SERVER_ERROR, "NOT_CONFIGURED"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// The fixed client-facing message for this error.
    ///
    /// The 401/403 strings are part of the public API contract and must not
    /// change; upstream and internal messages are deliberately generic so no
    /// upstream implementation detail leaks to the browser.
    fn client_message(&self) -> String {
        match self {
            Self::InvalidSignature | Self::InvalidEncoding => "Invalid signature".to_string(),
            Self::NftNotFound => "NFT not found".to_string(),
            Self::TierNotFound => "Valid Tier not found".to_string(),
            Self::Network(_) | Self::Upstream(_) => "Upstream RPC error".to_string(),
            Self::NotConfigured(msg) => msg.clone(),
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        // Full detail server-side only for operator visibility.
        match &self {
            Self::Network(_) | Self::Upstream(_) => {
                tracing::error!(error = %self, "upstream RPC failure")
            }
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::NotConfigured(_) => {
                tracing::warn!(error = %self, "required upstream configuration missing")
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.client_message(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Map DAS client failures onto the API taxonomy.
impl From<muse_das_client::DasApiError> for AppError {
    fn from(err: muse_das_client::DasApiError) -> Self {
        use muse_das_client::DasApiError;
        match err {
            DasApiError::Http { .. } => Self::Network(err.to_string()),
            DasApiError::ApiError { .. }
            | DasApiError::Rpc { .. }
            | DasApiError::Deserialization { .. } => Self::Upstream(err.to_string()),
            DasApiError::Config(e) => Self::NotConfigured(e.to_string()),
        }
    }
}

/// Malformed base58 input rejects with the same 401 and message as a failed
/// verification, but keeps its own code so the cause stays distinguishable.
impl From<muse_crypto::SignatureError> for AppError {
    fn from(_: muse_crypto::SignatureError) -> Self {
        Self::InvalidEncoding
    }
}
