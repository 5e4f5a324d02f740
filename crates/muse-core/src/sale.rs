//! # Tier Sale Table
//!
//! Static sale metadata for each supporter tier: display names, pricing
//! estimates, and the pre-deployed candy-machine addresses the mint page
//! builds transactions against. Served read-only by the API so the frontend
//! renders pricing and mint targets from one source of truth.
//!
//! Minting itself is delegated entirely to the third-party candy-machine
//! program; nothing here constructs transactions.

use serde::{Deserialize, Serialize};

use crate::content::LocalizedText;
use crate::tier::Tier;

/// Sale metadata for one supporter tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    /// The tier this entry describes.
    pub tier: Tier,
    /// Localized display name.
    pub name: LocalizedText,
    /// Localized one-line description of the tier's benefits.
    pub description: LocalizedText,
    /// Fixed USD display price.
    pub price_usd: u32,
    /// Approximate SOL price shown next to the USD price. A fixed display
    /// estimate — there is no payment-currency conversion logic.
    pub approx_sol: f64,
    /// Whether the mint page visually highlights this tier.
    #[serde(default)]
    pub highlight: bool,
    /// Image path for the tier artwork.
    pub image: String,
    /// Address of the pre-deployed candy machine for this tier.
    pub candy_machine_id: String,
    /// Address of the candy guard paired with the candy machine.
    pub candy_guard_id: String,
}

/// The built-in sale table for the Muse supporter campaign, ordered lowest
/// tier first.
pub fn default_tier_table() -> Vec<TierInfo> {
    vec![
        TierInfo {
            tier: Tier::Bronze,
            name: LocalizedText::new("Bronze Supporter", "Bronze サポーター"),
            description: LocalizedText::new(
                "First supporter badge & access to supporter Discord.",
                "最初のサポーターバッジ & サポーターディスコード",
            ),
            price_usd: 10,
            approx_sol: 0.05,
            highlight: false,
            image: "/nft/bronze.png".to_string(),
            candy_machine_id: "AC9mqM8w9ch4ZbL4Ue4wM4NzJacNmYHCh6vwde37eoaJ".to_string(),
            candy_guard_id: "9ALMywxctSLHoUoyVoDaFqTHvQ7Ttf4X3yE7biq2Yg7A".to_string(),
        },
        TierInfo {
            tier: Tier::Silver,
            name: LocalizedText::new("Silver Supporter", "Silver サポーター"),
            description: LocalizedText::new(
                "Learning pass & mini report: \"How I prepared for Abu Dhabi\".",
                "Learning pass & ミニレポート「どう準備したか」",
            ),
            price_usd: 50,
            approx_sol: 0.25,
            highlight: false,
            image: "/nft/silver.png".to_string(),
            candy_machine_id: "AWh6ZPoxHAJJMjNS62vZjS3UbsV1x2en3dtFb7vyHYAH".to_string(),
            candy_guard_id: "4wGVYEbGJwbVTUu6G4KBem1XYy37GPKnun79UxsiCDo".to_string(),
        },
        TierInfo {
            tier: Tier::Gold,
            name: LocalizedText::new("Gold Supporter", "Gold サポーター"),
            description: LocalizedText::new(
                "Deep dive report: \"Abu Dhabi Playbook\" + exclusive music performance.",
                "Abu Dhabi Playbook 詳細レポート + 限定音楽パフォーマンス動画",
            ),
            price_usd: 150,
            approx_sol: 0.8,
            highlight: true,
            image: "/nft/gold.png".to_string(),
            candy_machine_id: "B5i94xUb8ttwhypABCJo28m42PYGdX8BympFAuwZTP6C".to_string(),
            candy_guard_id: "8xWoGdSr9iqf2BZxaGyGW7hDvuSPs8Mx1fjbmJ9kbi21".to_string(),
        },
        TierInfo {
            tier: Tier::Platinum,
            name: LocalizedText::new("Platinum Supporter", "Platinum サポーター"),
            description: LocalizedText::new(
                "1:1 session + Private Group Session Invitation",
                "1on1 セッション + 非公開セッション招待",
            ),
            price_usd: 250,
            approx_sol: 1.6,
            highlight: false,
            image: "/nft/platinum.png".to_string(),
            candy_machine_id: "HbpqzJdyKSTwG8SjvuP9NKgQhCCHksEoQWb3tTTqcZz7".to_string(),
            candy_guard_id: "ELWHqqKEWPCodMFF8AYEoJCDcXZG7fJyV8eU67ei6ehh".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_tier_ascending() {
        let table = default_tier_table();
        let tiers: Vec<Tier> = table.iter().map(|t| t.tier).collect();
        assert_eq!(tiers, Tier::ASCENDING.to_vec());
    }

    #[test]
    fn prices_increase_with_tier() {
        let table = default_tier_table();
        for window in table.windows(2) {
            assert!(window[0].price_usd < window[1].price_usd);
        }
    }

    #[test]
    fn tier_info_serializes_with_lowercase_tier() {
        let table = default_tier_table();
        let json = serde_json::to_value(&table[2]).unwrap();
        assert_eq!(json["tier"], "gold");
        assert_eq!(json["highlight"], true);
    }
}
