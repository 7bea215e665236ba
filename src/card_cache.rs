use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use crate::cards::catalog::CardCatalog;
use crate::error::{LookupError, Result};
use crate::utilities::constants::CACHE_FILE_SUFFIX;
use crate::utilities::file_management::save_to_file;

/// One json file per game class, named `<class>-data.json`.
#[derive(Debug, Clone)]
pub struct CardCache {
    directory: PathBuf,
}

impl CardCache {
    pub fn new(directory: impl AsRef<Path>) -> Self {
        CardCache {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, game_class: &str) -> PathBuf {
        self.directory
            .join(format!("{}{}", game_class, CACHE_FILE_SUFFIX))
    }

    /// Reads the cached catalog of a class. A missing file gives
    /// `LookupError::CacheMiss`, unparsable content `LookupError::CacheCorrupt`.
    pub fn load(&self, game_class: &str) -> Result<CardCatalog> {
        let path = self.path_for(game_class);
        let content = fs::read_to_string(&path).map_err(|source| LookupError::CacheMiss {
            class: game_class.to_string(),
            source,
        })?;

        let cards: CardCatalog =
            serde_json::from_str(&content).map_err(|source| LookupError::CacheCorrupt {
                class: game_class.to_string(),
                source,
            })?;

        info!(
            "Local data loaded for class '{}' from {} ({} cards)",
            game_class,
            path.display(),
            cards.len()
        );
        Ok(cards)
    }

    /// Replaces the cached catalog of a class.
    pub fn save(&self, game_class: &str, cards: &CardCatalog) -> Result<()> {
        let path = self.path_for(game_class);
        save_to_file(&path, cards)?;
        info!(
            "Saved {} cards for class '{}' to {}",
            cards.len(),
            game_class,
            path.display()
        );
        Ok(())
    }
}
