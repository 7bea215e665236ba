pub mod card_record;
pub mod catalog;
pub mod rarity;
