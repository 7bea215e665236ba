//! Error and failure handling types

use std::io;

use thiserror::Error;

use crate::cards::rarity::Rarity;

/// A `Result` alias where the `Err` case is `LookupError`.
pub type Result<T> = std::result::Result<T, LookupError>;

/// The errors that may occur while loading, scraping or searching card data.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("No cached data for class '{class}': {source}")]
    CacheMiss {
        class: String,
        #[source]
        source: io::Error,
    },

    #[error("Cached data for class '{class}' could not be parsed: {source}")]
    CacheCorrupt {
        class: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid game class '{0}'")]
    InvalidClass(String),

    #[error("Unexpected page structure: {0}")]
    StructuralParse(String),

    #[error("Card '{card}' in the {rarity} table appears before any tier heading")]
    TierPrecondition { rarity: Rarity, card: String },

    #[error("No image url found in tooltip at {0}")]
    ImageNotFound(String),

    // Passthroughs from other libraries
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Regex(#[from] regex::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl LookupError {
    /// Cache failures are never fatal; the caller falls back to a fresh scrape.
    pub fn is_cache_fallback(&self) -> bool {
        matches!(
            self,
            LookupError::CacheMiss { .. } | LookupError::CacheCorrupt { .. }
        )
    }
}
