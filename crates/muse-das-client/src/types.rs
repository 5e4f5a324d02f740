//! Types matching the DAS `searchAssets` response schema.
//!
//! Fields the verification flow does not consume are tolerated but not
//! modeled; `#[serde(default)]` keeps the decoder forgiving about fields the
//! hosted indexer omits for assets with sparse metadata.

use serde::{Deserialize, Serialize};

use muse_core::{AssetAttribute, AssetRecord};

/// The `result` payload of a `searchAssets` response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchAssetsResult {
    /// Total matching assets reported by the indexer.
    #[serde(default)]
    pub total: u64,
    /// Page size echoed back.
    #[serde(default)]
    pub limit: u64,
    /// Page number echoed back.
    #[serde(default)]
    pub page: u64,
    /// The assets on this page.
    #[serde(default)]
    pub items: Vec<DasAsset>,
}

/// One asset as returned by the indexer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DasAsset {
    /// The asset's mint address.
    pub id: String,
    /// Off-chain content block.
    #[serde(default)]
    pub content: DasContent,
    /// Grouping memberships (collection, etc.).
    #[serde(default)]
    pub grouping: Vec<DasGrouping>,
}

/// The `content` block of a DAS asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DasContent {
    /// Parsed metadata.
    #[serde(default)]
    pub metadata: DasMetadata,
}

/// Parsed metadata of a DAS asset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DasMetadata {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Trait attributes. Values may be strings or numbers on the wire.
    #[serde(default)]
    pub attributes: Vec<DasAttribute>,
}

/// One trait attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DasAttribute {
    /// Attribute key.
    pub trait_type: String,
    /// Attribute value. Kept as a raw JSON value because indexers emit both
    /// strings and numbers here.
    pub value: serde_json::Value,
}

impl DasAttribute {
    /// Render the value as a plain string (numbers are stringified).
    pub fn value_string(&self) -> String {
        match &self.value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A grouping membership of a DAS asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DasGrouping {
    /// Grouping kind, e.g. `"collection"`.
    pub group_key: String,
    /// Grouping value, e.g. the collection address.
    pub group_value: String,
}

impl DasAsset {
    /// Convert to the domain [`AssetRecord`].
    ///
    /// The collection id comes from the asset's own `collection` grouping
    /// when present, falling back to the collection the query was scoped by.
    pub fn into_asset_record(self, queried_collection: &str) -> AssetRecord {
        let collection_id = self
            .grouping
            .iter()
            .find(|g| g.group_key == "collection")
            .map(|g| g.group_value.clone())
            .unwrap_or_else(|| queried_collection.to_string());

        AssetRecord {
            id: self.id,
            collection_id,
            attributes: self
                .content
                .metadata
                .attributes
                .iter()
                .map(|a| AssetAttribute {
                    trait_type: a.trait_type.clone(),
                    value: a.value_string(),
                })
                .collect(),
        }
    }
}
