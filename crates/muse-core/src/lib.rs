#![deny(missing_docs)]

//! # muse-core — Foundational Types for the Muse Supporter Stack
//!
//! This crate defines the types and pure logic that every other crate in the
//! workspace depends on. It has no internal crate dependencies — only
//! `serde`, `serde_json`, and `thiserror` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`WalletAddress`] is a
//!    distinct type, not a bare string passed around the verification flow.
//!
//! 2. **One ordered [`Tier`] enum.** A single closed enumeration with a total
//!    order (`Bronze < Silver < Gold < Platinum`). Tier selection is an
//!    explicit highest-first scan, never a set-max over insertion order.
//!
//! 3. **The content catalog is immutable configuration.** A
//!    [`ContentCatalog`] is built once at process start, validated for
//!    duplicate item ids, and passed by reference. There is no module-level
//!    mutable catalog state.
//!
//! 4. **Structured errors with `thiserror`.** No `Box<dyn Error>`, no
//!    `.unwrap()` outside tests.

pub mod asset;
pub mod content;
pub mod error;
pub mod sale;
pub mod tier;

// Re-export primary types at crate root for ergonomic imports.
pub use asset::{AssetAttribute, AssetRecord, WalletAddress};
pub use content::{
    ContentCatalog, ContentItem, ContentKind, ContentTarget, Lang, LocalizedText,
};
pub use error::CatalogError;
pub use sale::{default_tier_table, TierInfo};
pub use tier::{resolve_tier, Tier};
