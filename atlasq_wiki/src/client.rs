//! MediaWiki API client.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::infobox::{clean_text, first_infobox, strip_tags};

/// Wikipedia client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// MediaWiki API endpoint
    #[serde(default = "WikiConfig::default_api_url")]
    pub api_url: String,

    /// Request timeout (seconds)
    #[serde(default = "WikiConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "WikiConfig::default_user_agent")]
    pub user_agent: String,
}

impl WikiConfig {
    fn default_api_url() -> String {
        "https://en.wikipedia.org/w/api.php".to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; atlasq/0.1)".to_string()
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            api_url: Self::default_api_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
        }
    }
}

/// HTTP client for locating pages and fetching their rendered HTML.
pub struct WikiClient {
    client: Client,
    config: WikiConfig,
}

impl WikiClient {
    pub fn new(config: WikiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Title of the top-ranked page for a search phrase.
    pub async fn search(&self, query: &str) -> Result<String> {
        info!("Searching Wikipedia for '{query}'");

        let response = self
            .client
            .get(&self.config.api_url)
            .header("User-Agent", &self.config.user_agent)
            .query(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", "1"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await
            .context("Wikipedia search request failed")?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
            .context("Wikipedia search returned invalid JSON")?;

        let title = response["query"]["search"][0]["title"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("No Wikipedia page found for '{query}'"))?
            .to_string();

        debug!("Search for '{query}' resolved to page '{title}'");
        Ok(title)
    }

    /// Rendered HTML of a page, by exact title.
    pub async fn page_html(&self, title: &str) -> Result<String> {
        debug!("Fetching page HTML for '{title}'");

        let response = self
            .client
            .get(&self.config.api_url)
            .header("User-Agent", &self.config.user_agent)
            .query(&[
                ("action", "parse"),
                ("page", title),
                ("prop", "text"),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .send()
            .await
            .context("Wikipedia parse request failed")?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await
            .context("Wikipedia parse returned invalid JSON")?;

        let html = response["parse"]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Wikipedia page '{title}' has no rendered text"))?
            .to_string();

        Ok(html)
    }

    /// Cleaned text of the first infobox on the page best matching `name`.
    ///
    /// Chains search, fetch, infobox isolation, and text cleaning. Each
    /// step's failure propagates with its own message.
    pub async fn infobox_text(&self, name: &str) -> Result<String> {
        let title = self.search(name).await?;
        let html = self.page_html(&title).await?;
        let infobox = first_infobox(&html)?;
        Ok(clean_text(&strip_tags(infobox)))
    }
}
