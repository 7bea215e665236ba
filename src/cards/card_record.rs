use serde::{Deserialize, Serialize};

use crate::cards::rarity::Rarity;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CardRecord {
    pub name: String,
    pub rarity: Rarity,
    /// Tier label with the "Tier N: " prefix removed, e.g. "Excellent".
    pub tier: String,
    /// Card detail page, absolute or scheme-relative.
    pub detail_url: String,
}

impl CardRecord {
    pub fn new(name: &str, rarity: Rarity, tier: &str, detail_url: &str) -> Self {
        CardRecord {
            name: name.to_string(),
            rarity,
            tier: tier.to_string(),
            detail_url: detail_url.to_string(),
        }
    }
}

/// The value stored under a card's name in the cache file.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoredCard {
    pub rarity: Rarity,
    pub tier: String,
    pub url: String,
}

impl StoredCard {
    pub fn into_record(self, name: String) -> CardRecord {
        CardRecord {
            name,
            rarity: self.rarity,
            tier: self.tier,
            detail_url: self.url,
        }
    }
}

impl From<&CardRecord> for StoredCard {
    fn from(card: &CardRecord) -> Self {
        StoredCard {
            rarity: card.rarity,
            tier: card.tier.clone(),
            url: card.detail_url.clone(),
        }
    }
}

/// A card that was found by a lookup, together with its resolved image.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FoundCard {
    pub card: CardRecord,
    pub image_url: String,
}
