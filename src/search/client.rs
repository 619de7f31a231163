use crate::core::error::{Error, Result};
use serde::Deserialize;

/// Production base URL for the eBird API
pub const EBIRD_API_BASE: &str = "https://api.ebird.org";

/// Minimum query length (in characters) before a request is issued
pub const MIN_QUERY_LEN: usize = 3;

/// One taxonomy match returned by the lookup endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Display name in the form "Common Name - Scientific Name"
    pub name: String,
    /// eBird species code, e.g. "amerob"
    pub code: String,
}

/// Check whether a query is long enough to search for.
///
/// Queries below the threshold clear the result list and reset the selection
/// without issuing a request. There is no debouncing beyond this gate.
pub fn meets_query_threshold(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Typed HTTP client for the eBird taxonomy find endpoint
pub struct TaxonomyClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TaxonomyClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, EBIRD_API_BASE)
    }

    /// Client against a custom base URL (used by tests)
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Look up species matching `query`.
    ///
    /// Fails with `Error::Network` when the request cannot complete or the
    /// server answers with a non-success status, and with `Error::Parse` when
    /// the body is not the expected JSON array.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let url = format!("{}/v2/ref/taxon/find", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("locale", "en_US"),
                ("cat", "species"),
                ("key", self.api_key.as_str()),
                ("q", query),
            ])
            .send()
            .await
            .map_err(|e| Error::Network(format!("Taxonomy request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!(
                "Taxonomy request returned HTTP {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read taxonomy response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| Error::Parse(format!("Unexpected taxonomy response: {}", e)))
    }
}
