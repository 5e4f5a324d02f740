//! # Supporter Tiers
//!
//! The closed, ordered enumeration of supporter tiers and the rule that maps
//! a wallet's discovered holdings to the single highest tier it qualifies
//! for.
//!
//! ## Ordering
//!
//! `Ord` is derived from declaration order: `Bronze < Silver < Gold <
//! Platinum`. Higher tiers are supersets of lower-tier entitlements, so the
//! resolver always returns the maximum tier present among the assets.

use serde::{Deserialize, Serialize};

use crate::asset::AssetRecord;

/// Name of the metadata attribute that carries the tier of an asset.
/// The key is matched case-sensitively; the value case-insensitively.
pub const TIER_TRAIT: &str = "Tier";

/// A supporter tier, ordered by privilege level.
///
/// The `Ord` derivation respects variant declaration order:
/// `Bronze < Silver < Gold < Platinum`. This enables `<=` comparison for
/// cumulative entitlement checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry-level supporter badge.
    Bronze,
    /// Learning-pass supporter.
    Silver,
    /// Deep-dive report supporter.
    Gold,
    /// Top-level supporter with 1:1 access.
    Platinum,
}

impl Tier {
    /// All tiers from highest to lowest. Tier resolution scans this list in
    /// order so tie-breaking stays deterministic regardless of the order the
    /// upstream asset service returns items in.
    pub const DESCENDING: [Tier; 4] = [Tier::Platinum, Tier::Gold, Tier::Silver, Tier::Bronze];

    /// All tiers from lowest to highest. Entitlement concatenation walks
    /// this list so lower-tier content always comes first.
    pub const ASCENDING: [Tier; 4] = [Tier::Bronze, Tier::Silver, Tier::Gold, Tier::Platinum];

    /// Return the lowercase string representation of this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    /// Parse a tier from an attribute value, case-insensitively.
    ///
    /// Returns `None` for unrecognized values (e.g. `"diamond"`) — those are
    /// ignored by the resolver, not treated as an error.
    pub fn from_attribute_value(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "bronze" => Some(Self::Bronze),
            "silver" => Some(Self::Silver),
            "gold" => Some(Self::Gold),
            "platinum" => Some(Self::Platinum),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the single highest tier a set of held assets qualifies for.
///
/// For each asset, the attribute named exactly [`TIER_TRAIT`] is looked up
/// in its attribute list and its value parsed case-insensitively. The
/// enumeration is then evaluated from highest to lowest and the first tier
/// present among the discovered values wins.
///
/// Returns `None` when no asset carries a recognized tier value — the
/// caller must fail closed in that case.
pub fn resolve_tier(assets: &[AssetRecord]) -> Option<Tier> {
    let mut found = [false; 4];
    for asset in assets {
        for attr in &asset.attributes {
            if attr.trait_type == TIER_TRAIT {
                if let Some(tier) = Tier::from_attribute_value(&attr.value) {
                    found[tier as usize] = true;
                }
            }
        }
    }
    Tier::DESCENDING.into_iter().find(|t| found[*t as usize])
}
