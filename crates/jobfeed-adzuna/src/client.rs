//! HTTP client for the Adzuna job-search REST API.
//!
//! Wraps `reqwest` with credential handling and typed response
//! deserialization. Each call is a single attempt; callers decide what a
//! failure means for the rest of the run.

use std::time::Duration;

use jobfeed_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::AdzunaError;
use crate::types::SearchPage;

const DEFAULT_BASE_URL: &str = "https://api.adzuna.com";

/// Provider-side exclusion applied to every search. Broader synonyms are
/// filtered locally by `jobfeed_core::FilterRules`.
pub const PROVIDER_EXCLUDE_TERM: &str = "Zeitarbeit";

/// Search parameters shared by every page request of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub home_city: String,
    pub radius_km: u32,
    pub results_per_page: u32,
}

impl SearchQuery {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            home_city: config.home_city.clone(),
            radius_km: config.radius_km,
            results_per_page: config.results_per_page,
        }
    }
}

/// Client for the Adzuna search endpoint of one country.
///
/// Use [`AdzunaClient::new`] for production or
/// [`AdzunaClient::with_base_url`] to point at a mock server in tests.
pub struct AdzunaClient {
    client: Client,
    app_id: String,
    app_key: String,
    /// `{origin}/v1/api/jobs/{country}/search/`; page numbers are joined on.
    search_base: Url,
}

impl AdzunaClient {
    /// Creates a client pointed at the production Adzuna API.
    ///
    /// # Errors
    ///
    /// Returns [`AdzunaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        app_id: &str,
        app_key: &str,
        country: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, AdzunaError> {
        Self::with_base_url(
            app_id,
            app_key,
            country,
            timeout_secs,
            user_agent,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom API origin (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AdzunaError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdzunaError::InvalidBaseUrl`] if
    /// `base_url` does not form a valid URL.
    pub fn with_base_url(
        app_id: &str,
        app_key: &str,
        country: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, AdzunaError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let raw = format!(
            "{}/v1/api/jobs/{}/search/",
            base_url.trim_end_matches('/'),
            country.trim().to_lowercase()
        );
        let search_base = Url::parse(&raw).map_err(|e| AdzunaError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            app_id: app_id.to_owned(),
            app_key: app_key.to_owned(),
            search_base,
        })
    }

    /// Builds a client from the run configuration.
    ///
    /// # Errors
    ///
    /// See [`AdzunaClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AdzunaError> {
        Self::with_base_url(
            &config.adzuna_app_id,
            &config.adzuna_app_key,
            &config.adzuna_country,
            config.request_timeout_secs,
            &config.user_agent,
            &config.adzuna_base_url,
        )
    }

    /// Fetches one page of search results for `keyword`, newest first.
    ///
    /// # Errors
    ///
    /// - [`AdzunaError::Http`] on network failure, timeout or non-2xx status.
    /// - [`AdzunaError::Deserialize`] if the body is not a search response.
    pub async fn search_page(
        &self,
        keyword: &str,
        page: u32,
        query: &SearchQuery,
    ) -> Result<SearchPage, AdzunaError> {
        let url = self.build_url(keyword, page, query)?;
        let body = self.request_json(&url).await?;
        serde_json::from_value(body).map_err(|e| AdzunaError::Deserialize {
            context: format!("search(what={keyword}, page={page})"),
            source: e,
        })
    }

    /// Builds the page URL with percent-encoded query parameters.
    fn build_url(&self, keyword: &str, page: u32, query: &SearchQuery) -> Result<Url, AdzunaError> {
        let page_str = page.to_string();
        let mut url = self
            .search_base
            .join(&page_str)
            .map_err(|e| AdzunaError::InvalidBaseUrl {
                base_url: self.search_base.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("app_id", &self.app_id)
            .append_pair("app_key", &self.app_key)
            .append_pair("what", keyword)
            .append_pair("where", &query.home_city)
            .append_pair("distance", &query.radius_km.to_string())
            .append_pair("sort_by", "date")
            .append_pair("results_per_page", &query.results_per_page.to_string())
            .append_pair("what_exclude", PROVIDER_EXCLUDE_TERM)
            .append_pair("page", &page_str);
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, AdzunaError> {
        // reqwest embeds the request URL in its errors; strip it so the
        // credentials in the query string never reach the logs.
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| AdzunaError::Deserialize {
            context: redact_credentials(url),
            source: e,
        })
    }
}

/// Drops `app_id` / `app_key` from a URL before it ends up in logs.
fn redact_credentials(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "app_id" && k != "app_key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
