use std::time::Duration;

use scraper::Html;

use crate::error::ScraperError;

/// Turns a URL into a parsed document. Any failure ends the run.
#[allow(async_fn_in_trait)]
pub trait DocumentSource {
    async fn fetch(&self, url: &str) -> Result<Html, ScraperError>;
}

/// Fetches pages over plain HTTP GET
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    /// Build a source with a request timeout and an optional user agent.
    pub fn new(timeout_secs: u64, user_agent: Option<&str>) -> Result<Self, ScraperError> {
        let mut client_builder = reqwest::Client::builder().timeout(Duration::from_secs(timeout_secs));

        if let Some(user_agent) = user_agent {
            log::debug!("Using user agent: {}", user_agent);
            client_builder = client_builder.user_agent(user_agent);
        }

        let client = client_builder.build().map_err(ScraperError::Client)?;

        Ok(Self { client })
    }
}

impl DocumentSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<Html, ScraperError> {
        let fetch_err = |source| ScraperError::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(fetch_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await.map_err(fetch_err)?;
        Ok(Html::parse_document(&html))
    }
}
