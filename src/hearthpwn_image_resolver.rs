use log::{debug, warn};
use regex::Regex;
use url::Url;

use crate::error::{LookupError, Result};
use crate::page_fetcher::PageFetcher;
use crate::utilities::constants::{CARD_IMAGE_PATTERN, TOOLTIP_SUFFIX};

/// Looks up the card image of a card detail page through its tooltip fragment.
#[derive(Debug)]
pub struct HearthpwnImageResolver {
    base_url: Url,
    image_pattern: Regex,
}

impl HearthpwnImageResolver {
    pub fn new(card_base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(card_base_url)?,
            image_pattern: Regex::new(CARD_IMAGE_PATTERN)?,
        })
    }

    /// Url of the tooltip fragment for a detail url. Scheme-relative and
    /// relative detail urls are resolved against the card site.
    pub fn tooltip_url(&self, detail_url: &str) -> Result<String> {
        let detail = self.base_url.join(detail_url.trim())?;
        Ok(format!(
            "{}{}",
            detail.as_str().trim_end_matches('/'),
            TOOLTIP_SUFFIX
        ))
    }

    /// First image url in the text, if any.
    pub fn find_image_url(&self, text: &str) -> Option<String> {
        self.image_pattern
            .find(text)
            .map(|found| found.as_str().to_string())
    }

    pub fn resolve_image_url(&self, fetcher: &impl PageFetcher, detail_url: &str) -> Result<String> {
        let tooltip_url = self.tooltip_url(detail_url)?;
        debug!("Fetching card tooltip from {}", tooltip_url);

        let tooltip = fetcher.fetch_page(&tooltip_url)?;
        match self.find_image_url(&tooltip) {
            Some(image_url) => Ok(image_url),
            None => {
                warn!("No card image found in tooltip {}", tooltip_url);
                Err(LookupError::ImageNotFound(tooltip_url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page_fetcher::HttpFetcher;
    use crate::utilities::constants::CARD_BASE_URL;

    fn resolver() -> HearthpwnImageResolver {
        HearthpwnImageResolver::new(CARD_BASE_URL).unwrap()
    }

    #[test]
    fn test_tooltip_url_for_scheme_relative_url() {
        assert_eq!(
            resolver()
                .tooltip_url("//www.hearthpwn.com/cards/315-fireball")
                .unwrap(),
            "http://www.hearthpwn.com/cards/315-fireball/tooltip"
        );
    }

    #[test]
    fn test_tooltip_url_for_absolute_url() {
        assert_eq!(
            resolver()
                .tooltip_url("https://cards.example.com/cards/1-one/")
                .unwrap(),
            "https://cards.example.com/cards/1-one/tooltip"
        );
    }

    #[test]
    fn test_find_first_image_url() {
        let tooltip = include_str!("test/fireball_tooltip.html");
        assert_eq!(
            resolver().find_image_url(tooltip),
            Some("http://media-Hearth.cursecdn.com/avatars/148/890/315.png".to_string())
        );
    }

    #[test]
    fn test_image_pattern_needs_exact_shape() {
        let text = r#"<img src="http://media-HearthXcursecdn.com/avatars/1/2/3.png">
                      <img src="http://media-Hearth.cursecdn.com/avatars/1/2/3.jpg">"#;
        assert_eq!(resolver().find_image_url(text), None);
    }

    #[test]
    fn test_resolve_image_url() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/cards/315-fireball/tooltip")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(include_str!("test/fireball_tooltip.html"))
            .create();

        let fetcher = HttpFetcher::new(reqwest::blocking::Client::new());
        let detail_url = format!("{}/cards/315-fireball", server.url());

        let image_url = resolver().resolve_image_url(&fetcher, &detail_url).unwrap();

        mock.assert();
        assert_eq!(
            image_url,
            "http://media-Hearth.cursecdn.com/avatars/148/890/315.png"
        );
    }

    #[test]
    fn test_resolve_image_url_without_image() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/cards/1-nothing/tooltip")
            .with_status(200)
            .with_body("<div>No image here</div>")
            .create();

        let fetcher = HttpFetcher::new(reqwest::blocking::Client::new());
        let result = resolver()
            .resolve_image_url(&fetcher, &format!("{}/cards/1-nothing", server.url()));

        mock.assert();
        assert!(matches!(result, Err(LookupError::ImageNotFound(_))));
    }
}
