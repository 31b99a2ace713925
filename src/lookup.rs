//! Knowledge lookups against the Wikipedia page-summary API

use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;
use tracing::debug;

/// How many sentences of the page extract are spoken back.
const SUMMARY_SENTENCES: usize = 3;

/// Failures a lookup handler must convert into a spoken message
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no page found for '{0}'")]
    NotFound(String),

    #[error("lookup request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Client for one Wikipedia language edition
pub struct WikiClient {
    http: reqwest::Client,
    lang: String,
}

/// The slice of the REST summary response we care about
#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: String,
}

impl WikiClient {
    /// Build a client for the given language subtag ("en", "de", ...).
    pub fn new(lang: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("aria-assistant/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            lang: lang.to_string(),
        })
    }

    /// Fetch a short summary for `topic`.
    ///
    /// A missing page maps to [`LookupError::NotFound`]; transport and
    /// server failures map to [`LookupError::Network`].
    pub async fn summary(&self, topic: &str) -> Result<String, LookupError> {
        let title = topic.trim().replace(' ', "_");
        let url = format!(
            "https://{}.wikipedia.org/api/rest_v1/page/summary/{}",
            self.lang, title
        );
        debug!(%url, "looking up summary");

        let response = self.http.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(topic.to_string()));
        }
        let page: PageSummary = response.error_for_status()?.json().await?;

        let extract = page.extract.trim();
        if extract.is_empty() {
            return Err(LookupError::NotFound(topic.to_string()));
        }
        Ok(first_sentences(extract, SUMMARY_SENTENCES))
    }
}

/// Cut `text` after the first `n` sentence-ending periods.
fn first_sentences(text: &str, n: usize) -> String {
    let mut seen = 0;
    for (i, c) in text.char_indices() {
        if c == '.' {
            seen += 1;
            if seen == n {
                return text[..=i].to_string();
            }
        }
    }
    text.to_string()
}
