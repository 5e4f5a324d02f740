//! # Wallet and Asset Records
//!
//! Domain types for the verification flow: the claimant's wallet address and
//! the on-chain collectible records reported by the asset-search service.
//!
//! Asset records are transient — fetched fresh on every verification call
//! and never cached or persisted.

use serde::{Deserialize, Serialize};

/// An opaque base58-encoded public-key string identifying a claimant.
///
/// No format validation happens at construction; the address is only decoded
/// (and thereby validated) at signature-verification time. Uniqueness is an
/// on-chain concern, not this subsystem's.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(String);

impl WalletAddress {
    /// Wrap a base58 address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Access the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WalletAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One metadata attribute of an on-chain collectible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetAttribute {
    /// Attribute key, e.g. `"Tier"`.
    pub trait_type: String,
    /// Attribute value, e.g. `"Gold"`.
    pub value: String,
}

/// One on-chain collectible the wallet is reported to own within the target
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// The asset's on-chain id (base58 mint address).
    pub id: String,
    /// The collection grouping the asset belongs to.
    pub collection_id: String,
    /// Ordered metadata attributes as reported by the indexing service.
    pub attributes: Vec<AssetAttribute>,
}
