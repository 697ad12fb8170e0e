use daily_core::{DailyError, DailyResult};
use serde::{Deserialize, Serialize};

/// A fetched quote. Never persisted; each fetch replaces the last one
/// wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "content")]
    pub text: String,
    pub author: String,
}

/// Client for the random-quote endpoint.
///
/// One unauthenticated GET per call, no parameters, no retry. A failed
/// or malformed response surfaces as an error and the caller keeps
/// whatever quote it was already showing.
pub struct QuoteClient {
    agent: ureq::Agent,
    url: String,
}

impl QuoteClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::agent(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn fetch_random(&self) -> DailyResult<Quote> {
        let response = self
            .agent
            .get(&self.url)
            .call()
            .map_err(|e| DailyError::Http(e.to_string()))?;

        let quote: Quote = response
            .into_json()
            .map_err(|e| DailyError::Serialization(e.to_string()))?;

        tracing::debug!("Fetched quote by {}", quote.author);
        Ok(quote)
    }
}
