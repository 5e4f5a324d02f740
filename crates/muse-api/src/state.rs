//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor.
//!
//! Every field is immutable configuration resolved at startup: the validated
//! content catalog, the tier sale table, and the optional DAS client. There
//! is no shared mutable state — verification calls are independent and
//! stateless, so concurrent requests cannot interfere and no locking is
//! needed.

use std::sync::Arc;

use muse_core::{default_tier_table, CatalogError, ContentCatalog, TierInfo};
use muse_das_client::DasClient;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Address of the NFT collection whose holdings gate the dashboard.
    /// When `None`, the verification endpoint answers 500.
    pub collection_address: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            collection_address: None,
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the catalog and tier table sit behind `Arc`, the DAS
/// client clones its inner connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    /// DAS client for holdings lookups and raw RPC forwarding.
    /// `None` when no RPC endpoint is configured — the endpoints that need
    /// it answer 500 instead of failing at startup.
    pub das_client: Option<DasClient>,

    /// The validated tier-gated content catalog.
    pub catalog: Arc<ContentCatalog>,

    /// Static sale table served to the mint page.
    pub tier_table: Arc<Vec<TierInfo>>,

    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with the built-in default catalog.
    pub fn new(config: AppConfig, das_client: Option<DasClient>) -> Self {
        // The built-in catalog is covered by unit tests; validation cannot
        // fail for it, so this constructor is infallible.
        Self::with_catalog(config, das_client, ContentCatalog::default_catalog())
            .unwrap_or_else(|e| unreachable!("built-in catalog failed validation: {e}"))
    }

    /// Create application state with an explicit catalog, validating it.
    ///
    /// Rejects catalogs with duplicate item ids at startup rather than
    /// serving ambiguous entitlement lists later.
    pub fn with_catalog(
        config: AppConfig,
        das_client: Option<DasClient>,
        catalog: ContentCatalog,
    ) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self {
            das_client,
            catalog: Arc::new(catalog),
            tier_table: Arc::new(default_tier_table()),
            config,
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), None)
    }
}
