//! # Catalog Errors
//!
//! Structured errors for content-catalog configuration, built with
//! `thiserror`. A bad catalog is a startup-time configuration failure, not a
//! per-request condition.

use thiserror::Error;

use crate::tier::Tier;

/// Errors raised while building or validating a [`crate::ContentCatalog`].
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The same `ContentItem.id` appears in more than one tier catalog,
    /// which would make the cumulative entitlement list ambiguous.
    #[error("duplicate content item id {id:?} (second occurrence in {tier} catalog)")]
    DuplicateItemId {
        /// The offending item id.
        id: String,
        /// The tier catalog in which the duplicate was encountered.
        tier: Tier,
    },

    /// The catalog JSON document could not be parsed.
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
