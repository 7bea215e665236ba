use std::time::Instant;

use log::debug;
use reqwest::blocking::Client;

use crate::error::Result;
use crate::utilities::constants::USER_AGENT;

/// Fetches the body of a remote page as text.
#[cfg_attr(test, mockall::automock)]
pub trait PageFetcher {
    fn fetch_page(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        HttpFetcher { client }
    }

    fn setup_http_headers() -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("*/*"),
        );
        header_map.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        header_map
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_page(&self, url: &str) -> Result<String> {
        let start = Instant::now();
        let body = self
            .client
            .get(url)
            .headers(Self::setup_http_headers())
            .send()?
            .error_for_status()?
            .text()?;
        debug!("fetching {} took {} ms", url, start.elapsed().as_millis());
        Ok(body)
    }
}
