//! DAS client error types.

/// Errors from DAS RPC calls.
#[derive(Debug, thiserror::Error)]
pub enum DasApiError {
    /// HTTP transport error (connection failure, timeout).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        /// The logical operation that failed.
        endpoint: String,
        /// Underlying transport error.
        source: reqwest::Error,
    },
    /// The RPC endpoint returned a non-2xx status.
    #[error("DAS endpoint {endpoint} returned {status}: {body}")]
    ApiError {
        /// The logical operation that failed.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt for diagnostics.
        body: String,
    },
    /// The endpoint answered 2xx but with a JSON-RPC error object.
    #[error("DAS RPC error from {endpoint} (code {code}): {message}")]
    Rpc {
        /// The logical operation that failed.
        endpoint: String,
        /// JSON-RPC error code.
        code: i64,
        /// JSON-RPC error message.
        message: String,
    },
    /// Response deserialization failed.
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Deserialization {
        /// The logical operation that failed.
        endpoint: String,
        /// Underlying decode error.
        source: reqwest::Error,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] super::config::ConfigError),
}
