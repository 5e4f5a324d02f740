//! # Tier-Gated Content Catalog
//!
//! The static per-tier catalog of unlockable content and the cumulative
//! entitlement rule: a wallet verified at tier T receives the content of T
//! and every tier strictly below it, ordered lowest tier first.
//!
//! The catalog is immutable configuration. It is constructed once at process
//! start (built-in default or a JSON override file), validated for duplicate
//! item ids, and passed to the resolver by reference — never module-level
//! mutable data.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::tier::Tier;

/// A display language for localized labels and targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    /// English.
    #[default]
    En,
    /// Japanese.
    Ja,
}

/// A label carried in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English text.
    pub en: String,
    /// Japanese text.
    pub ja: String,
}

impl LocalizedText {
    /// Build a localized label from both language variants.
    pub fn new(en: impl Into<String>, ja: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ja: ja.into(),
        }
    }

    /// Resolve the text for the requested language.
    pub fn get(&self, lang: Lang) -> &str {
        match lang {
            Lang::En => &self.en,
            Lang::Ja => &self.ja,
        }
    }
}

/// The target of a content item: one URL for all languages, or one per
/// language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentTarget {
    /// A single URL shared across languages.
    Url(String),
    /// Language-specific URLs.
    Localized {
        /// English-language URL.
        en: String,
        /// Japanese-language URL.
        ja: String,
    },
}

impl ContentTarget {
    /// Resolve the URL for the requested language.
    pub fn resolve(&self, lang: Lang) -> &str {
        match self {
            Self::Url(url) => url,
            Self::Localized { en, ja } => match lang {
                Lang::En => en,
                Lang::Ja => ja,
            },
        }
    }
}

/// The kind of a content item, used by the dashboard to pick an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Invitation to a chat community.
    Discord,
    /// Downloadable PDF report.
    Pdf,
    /// Request form.
    Form,
    /// Booking calendar.
    Calendar,
    /// Video content.
    Video,
    /// Plain link.
    Link,
}

/// One unlockable content record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Stable identifier, unique across the whole catalog.
    pub id: String,
    /// Item kind.
    pub kind: ContentKind,
    /// Localized display label.
    pub label: LocalizedText,
    /// Link target.
    pub target: ContentTarget,
}

/// The per-tier content catalogs.
///
/// Catalogs are disjoint by construction: each item appears in exactly one
/// tier's list, and [`ContentCatalog::validate`] enforces that at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCatalog {
    /// Bronze-tier items.
    pub bronze: Vec<ContentItem>,
    /// Silver-tier items.
    pub silver: Vec<ContentItem>,
    /// Gold-tier items.
    pub gold: Vec<ContentItem>,
    /// Platinum-tier items.
    pub platinum: Vec<ContentItem>,
}

impl ContentCatalog {
    /// The items published directly at one tier (non-cumulative).
    pub fn items_at(&self, tier: Tier) -> &[ContentItem] {
        match tier {
            Tier::Bronze => &self.bronze,
            Tier::Silver => &self.silver,
            Tier::Gold => &self.gold,
            Tier::Platinum => &self.platinum,
        }
    }

    /// Check that no `ContentItem.id` appears in more than one tier catalog.
    ///
    /// Run once at process start (and whenever a catalog is loaded from
    /// JSON). A duplicate id would make the cumulative entitlement list
    /// ambiguous for the dashboard, so configuration with duplicates is
    /// rejected outright.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for tier in Tier::ASCENDING {
            for item in self.items_at(tier) {
                if !seen.insert(item.id.clone()) {
                    return Err(CatalogError::DuplicateItemId {
                        id: item.id.clone(),
                        tier,
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse and validate a catalog from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Compute the cumulative entitlement for a resolved tier.
    ///
    /// The result is the concatenation of the catalogs for every tier less
    /// than or equal to `tier`, ordered from lowest tier to highest, with
    /// each catalog's internal order preserved. Computed fresh per request;
    /// nothing is persisted server-side.
    pub fn entitlement(&self, tier: Tier) -> Vec<ContentItem> {
        Tier::ASCENDING
            .into_iter()
            .filter(|t| *t <= tier)
            .flat_map(|t| self.items_at(t).iter().cloned())
            .collect()
    }

    /// The built-in default catalog for the Muse supporter campaign.
    pub fn default_catalog() -> Self {
        Self {
            bronze: vec![ContentItem {
                id: "supporter_group".to_string(),
                kind: ContentKind::Discord,
                label: LocalizedText::new(
                    "Supporter Telegram Group",
                    "サポーター限定 Telegram Group",
                ),
                target: ContentTarget::Localized {
                    en: "https://discord.gg/en-link".to_string(),
                    ja: "https://discord.gg/ja-link".to_string(),
                },
            }],
            silver: vec![ContentItem {
                id: "report_silver".to_string(),
                kind: ContentKind::Pdf,
                label: LocalizedText::new(
                    "Report: The Road to Abu Dhabi",
                    "準備編レポート: 300円からの逆転劇",
                ),
                target: ContentTarget::Localized {
                    en: "/contents/en/MuseSilver_EN.pdf".to_string(),
                    ja: "/contents/ja/MuseSilver_JP.pdf".to_string(),
                },
            }],
            gold: vec![
                ContentItem {
                    id: "report_gold".to_string(),
                    kind: ContentKind::Pdf,
                    label: LocalizedText::new(
                        "Report: The Global Playbook",
                        "攻略本レポート: Playbook",
                    ),
                    target: ContentTarget::Localized {
                        en: "/contents/en/MuseGlobalEN.pdf".to_string(),
                        ja: "/contents/ja/MuseGlobalJP.pdf".to_string(),
                    },
                },
                ContentItem {
                    id: "music_form".to_string(),
                    kind: ContentKind::Form,
                    label: LocalizedText::new(
                        "Music Performance Request",
                        "演奏リクエストフォーム",
                    ),
                    target: ContentTarget::Url(
                        "https://docs.google.com/forms/d/e/1FAIpQLSdK5639vZI45NL3jubr17ic_ByceIjHpE2yVAI-aHD3LfQ6Ig/viewform"
                            .to_string(),
                    ),
                },
            ],
            platinum: vec![
                ContentItem {
                    id: "calendly".to_string(),
                    kind: ContentKind::Calendar,
                    label: LocalizedText::new(
                        "Book 1:1 Session",
                        "1:1 セッション予約 (Calendly)",
                    ),
                    target: ContentTarget::Url("https://calendly.com/muse-sessions".to_string()),
                },
                ContentItem {
                    id: "private_group".to_string(),
                    kind: ContentKind::Link,
                    label: LocalizedText::new(
                        "Private Group Session Invitation",
                        "非公開グループセッション招待",
                    ),
                    target: ContentTarget::Url("https://t.me/+muse-private".to_string()),
                },
            ],
        }
    }
}
