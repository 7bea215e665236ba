use crate::cards::{card_record::CardRecord, catalog::CardCatalog, rarity::Rarity};

pub static FIREBALL_IMAGE_URL: &str = "http://media-Hearth.cursecdn.com/avatars/148/890/315.png";

pub fn fireball() -> CardRecord {
    CardRecord::new(
        "Fireball",
        Rarity::Common,
        "Excellent",
        "//www.hearthpwn.com/cards/315-fireball",
    )
}

pub fn fireblast() -> CardRecord {
    CardRecord::new(
        "fireblast",
        Rarity::Common,
        "Good",
        "//www.hearthpwn.com/cards/677-fireblast",
    )
}

pub fn mana_wyrm() -> CardRecord {
    CardRecord::new(
        "Mana Wyrm",
        Rarity::Common,
        "Good",
        "//www.hearthpwn.com/cards/405-mana-wyrm",
    )
}

pub fn archmage_antonidas() -> CardRecord {
    CardRecord::new(
        "Archmage Antonidas",
        Rarity::Legendary,
        "Excellent",
        "//www.hearthpwn.com/cards/220-archmage-antonidas",
    )
}

pub fn small_mage_catalog() -> CardCatalog {
    vec![fireball(), fireblast(), mana_wyrm(), archmage_antonidas()]
        .into_iter()
        .collect()
}
