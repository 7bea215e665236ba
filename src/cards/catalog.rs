use std::{collections::HashMap, fmt};

use serde::{
    de::{MapAccess, Visitor},
    ser::SerializeMap,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::cards::card_record::{CardRecord, StoredCard};

/// All cards of one game class, keyed by name and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardCatalog {
    cards: Vec<CardRecord>,
    index: HashMap<String, usize>,
}

impl CardCatalog {
    pub fn new() -> Self {
        CardCatalog::default()
    }

    /// Inserts a card. A card with the same name is replaced but keeps the
    /// position of the first insertion; the replaced card is returned.
    pub fn insert(&mut self, card: CardRecord) -> Option<CardRecord> {
        let existing = self.index.get(&card.name).copied();
        match existing {
            Some(position) => Some(std::mem::replace(&mut self.cards[position], card)),
            None => {
                self.index.insert(card.name.clone(), self.cards.len());
                self.cards.push(card);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&CardRecord> {
        self.index.get(name).map(|&position| &self.cards[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<CardRecord> for CardCatalog {
    fn from_iter<I: IntoIterator<Item = CardRecord>>(iter: I) -> Self {
        let mut catalog = CardCatalog::new();
        for card in iter {
            catalog.insert(card);
        }
        catalog
    }
}

impl Serialize for CardCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Written as { name: { rarity, tier, url } } in insertion order
        let mut map = serializer.serialize_map(Some(self.cards.len()))?;
        for card in &self.cards {
            map.serialize_entry(&card.name, &StoredCard::from(card))?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = CardCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of card names to rarity, tier and url")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut catalog = CardCatalog::new();
        while let Some((name, stored)) = access.next_entry::<String, StoredCard>()? {
            catalog.insert(stored.into_record(name));
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for CardCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}
