use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, USER_AGENT};

use crate::config::SiteConfig;
use crate::error::ExtractError;

/// Blocking HTTP client for the recipe site.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: &SiteConfig) -> Result<Self, ExtractError> {
        // Set up headers with a user agent
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, config.user_agent.parse()?);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    /// Fetches `url` and returns the raw response body.
    pub fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        debug!("GET {url}");
        let body = self.client.get(url).send()?.text()?;
        Ok(body)
    }
}
