use log::{debug, info, warn};

use crate::card_cache::CardCache;
use crate::cards::{
    card_record::{CardRecord, FoundCard},
    catalog::CardCatalog,
};
use crate::error::{LookupError, Result};
use crate::hearthpwn_image_resolver::HearthpwnImageResolver;
use crate::icy_veins_scraper::IcyVeinsScraper;
use crate::page_fetcher::PageFetcher;
use crate::utilities::config::Config;

/// First card, in catalog order, whose name contains `pattern` ignoring case.
pub fn find_first_match<'a>(cards: &'a CardCatalog, pattern: &str) -> Option<&'a CardRecord> {
    let pattern = pattern.to_lowercase();
    cards
        .iter()
        .find(|card| card.name.to_lowercase().contains(&pattern))
}

fn validate_game_class(game_class: &str) -> Result<()> {
    let valid = !game_class.is_empty()
        && game_class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(LookupError::InvalidClass(game_class.to_string()))
    }
}

// Two lookups of the same class racing on a cache miss both scrape and both
// write the cache file; the last write wins.
pub struct LookupService<F: PageFetcher> {
    fetcher: F,
    cache: CardCache,
    scraper: IcyVeinsScraper,
    image_resolver: HearthpwnImageResolver,
    use_cache: bool,
}

impl<F: PageFetcher> LookupService<F> {
    pub fn new(config: &Config, fetcher: F) -> Result<Self> {
        Ok(LookupService {
            fetcher,
            cache: CardCache::new(&config.cache_dir),
            scraper: IcyVeinsScraper::new(config),
            image_resolver: HearthpwnImageResolver::new(&config.card_base_url)?,
            use_cache: config.use_cache,
        })
    }

    /// Catalog of a class from the cache, or scraped and cached when the cache
    /// is missing, unreadable or disabled.
    pub fn load_cards(&self, game_class: &str) -> Result<CardCatalog> {
        validate_game_class(game_class)?;

        if self.use_cache {
            match self.cache.load(game_class) {
                Ok(cards) => return Ok(cards),
                Err(e) if e.is_cache_fallback() => {
                    info!("{}, fetching remote data", e);
                }
                Err(e) => return Err(e),
            }
        } else {
            debug!("Cache disabled, fetching remote data for '{}'", game_class);
        }

        let cards = self.scraper.scrape_class(&self.fetcher, game_class)?;
        if let Err(e) = self.cache.save(game_class, &cards) {
            warn!("Failed to cache cards for class '{}': {}", game_class, e);
        }
        Ok(cards)
    }

    /// Warms the cache for a class and returns how many cards it holds.
    pub fn preload(&self, game_class: &str) -> Result<usize> {
        Ok(self.load_cards(game_class)?.len())
    }

    /// Finds the first card of the class matching the pattern and resolves its image.
    pub fn find_card(&self, game_class: &str, pattern: &str) -> Result<Option<FoundCard>> {
        let cards = self.load_cards(game_class)?;

        let Some(card) = find_first_match(&cards, pattern) else {
            info!("No card matching '{}' for class '{}'", pattern, game_class);
            return Ok(None);
        };
        debug!("Pattern '{}' matched card '{}'", pattern, card.name);

        let image_url = self
            .image_resolver
            .resolve_image_url(&self.fetcher, &card.detail_url)?;

        Ok(Some(FoundCard {
            card: card.clone(),
            image_url,
        }))
    }
}
