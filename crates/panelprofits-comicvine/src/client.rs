// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{ComicVineError, Result};
use crate::models::{ApiResponse, Character, Creator, Issue, IssueQuery, Publisher, Volume};
use crate::rate_limiter::RateLimiter;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

const COMICVINE_API_BASE: &str = "https://comicvine.gamespot.com/api";
const USER_AGENT: &str = "Panel Profits/1.0 (Comic Analysis Platform)";

/// Resource-type codes prefixed to entity ids in detail endpoint paths.
const ISSUE_TYPE_CODE: u32 = 4000;
const PUBLISHER_TYPE_CODE: u32 = 4010;
const PERSON_TYPE_CODE: u32 = 4040;
const VOLUME_TYPE_CODE: u32 = 4050;

/// Comic Vine caps page size at 100 results.
const MAX_LIMIT: u32 = 100;
const DEFAULT_SEARCH_LIMIT: u32 = 10;

const CHARACTER_FIELDS: &str = "id,name,deck,image,publisher,first_appeared_in_issue";
const ISSUE_FIELDS: &str =
    "id,name,issue_number,volume,cover_date,description,character_credits,person_credits";
const VOLUME_FIELDS: &str = "id,name,publisher,start_year,end_year,count_of_issues";
const PUBLISHER_FIELDS: &str = "id,name,deck,description,characters,volumes";
const ISSUE_SEARCH_FIELDS: &str = "id,name,issue_number,volume,cover_date,person_credits";
const CREATOR_FIELDS: &str = "id,name,deck,description,created,issues";

/// Comic Vine API client with rate limiting.
///
/// Clones share the underlying HTTP client and rate limiter, so all handles
/// to one client stay within a single request budget.
#[derive(Debug, Clone)]
pub struct ComicVineClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: RateLimiter,
}

impl ComicVineClient {
    /// Create a new Comic Vine client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().build(api_key)
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> ComicVineClientBuilder {
        ComicVineClientBuilder::default()
    }

    /// Search for characters by name.
    ///
    /// # Arguments
    /// * `query` - Character name to search for.
    /// * `limit` - Maximum number of results (capped at 100).
    ///
    /// # Example
    /// ```no_run
    /// # use panelprofits_comicvine::ComicVineClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ComicVineClient::new("my-api-key")?;
    /// let characters = client.search_characters("Spider-Man", 5).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_characters(&self, query: &str, limit: u32) -> Result<Vec<Character>> {
        let params = [
            ("query", query.to_string()),
            ("resources", "character".to_string()),
            ("limit", limit.min(MAX_LIMIT).to_string()),
            ("field_list", CHARACTER_FIELDS.to_string()),
        ];

        let body = self.get_raw("search", &params).await?;
        collection_results(body)
    }

    /// Look up detailed issue information by Comic Vine issue ID.
    ///
    /// # Example
    /// ```no_run
    /// # use panelprofits_comicvine::ComicVineClient;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ComicVineClient::new("my-api-key")?;
    /// let issue = client.get_issue(300).await?; // Amazing Spider-Man #300
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_issue(&self, issue_id: u64) -> Result<Issue> {
        let endpoint = format!("issue/{ISSUE_TYPE_CODE}-{issue_id}");
        let params = [("field_list", ISSUE_FIELDS.to_string())];

        let body = self.get_raw(&endpoint, &params).await?;
        entity_results(body, &endpoint)
    }

    /// Look up volume information by Comic Vine volume ID.
    pub async fn get_volume(&self, volume_id: u64) -> Result<Volume> {
        let endpoint = format!("volume/{VOLUME_TYPE_CODE}-{volume_id}");
        let params = [("field_list", VOLUME_FIELDS.to_string())];

        let body = self.get_raw(&endpoint, &params).await?;
        entity_results(body, &endpoint)
    }

    /// Look up publisher information by Comic Vine publisher ID.
    pub async fn get_publisher(&self, publisher_id: u64) -> Result<Publisher> {
        let endpoint = format!("publisher/{PUBLISHER_TYPE_CODE}-{publisher_id}");
        let params = [("field_list", PUBLISHER_FIELDS.to_string())];

        let body = self.get_raw(&endpoint, &params).await?;
        entity_results(body, &endpoint)
    }

    /// Search for issues matching the given filters.
    ///
    /// # Example
    /// ```no_run
    /// # use panelprofits_comicvine::{ComicVineClient, IssueQuery};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ComicVineClient::new("my-api-key")?;
    /// let query = IssueQuery::new().creator("Todd McFarlane").limit(5);
    /// let issues = client.search_issues(query).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search_issues(&self, query: IssueQuery) -> Result<Vec<Issue>> {
        let mut params = vec![
            (
                "limit",
                query
                    .limit
                    .unwrap_or(DEFAULT_SEARCH_LIMIT)
                    .min(MAX_LIMIT)
                    .to_string(),
            ),
            ("field_list", ISSUE_SEARCH_FIELDS.to_string()),
        ];
        if let Some(filter) = query.filter() {
            params.push(("filter", filter));
        }

        let body = self.get_raw("issues", &params).await?;
        collection_results(body)
    }

    /// Look up detailed creator information by Comic Vine person ID.
    pub async fn get_creator(&self, creator_id: u64) -> Result<Creator> {
        let endpoint = format!("person/{PERSON_TYPE_CODE}-{creator_id}");
        let params = [("field_list", CREATOR_FIELDS.to_string())];

        let body = self.get_raw(&endpoint, &params).await?;
        entity_results(body, &endpoint)
    }

    /// Perform a rate-limited GET against an API endpoint and return the
    /// decoded body unchanged.
    ///
    /// The credential and `format=json` are appended after the caller's
    /// parameters; callers never pass those keys themselves. A body whose
    /// `error` field reads "Invalid API Key" fails with
    /// [`ComicVineError::InvalidApiKey`]; every other decoded body is
    /// returned as-is for the caller to interpret.
    pub async fn get_raw(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value> {
        let guard = self.rate_limiter.acquire().await;

        let mut url = Url::parse(&format!("{}/{}", self.base_url, endpoint))
            .map_err(|e| ComicVineError::InvalidResponse(e.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            pairs.append_pair("api_key", &self.api_key);
            pairs.append_pair("format", "json");
        }

        // The full URL carries the credential, so only the endpoint is logged.
        trace!(target: "comicvine", "GET {}/{}", self.base_url, endpoint);

        let response = self
            .client
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        debug!(target: "comicvine", "response status: {}", response.status());

        let response = response.error_for_status()?;

        // Stamp completion once the round-trip succeeded; the next request is
        // spaced from this instant. Failures above leave the timestamp alone.
        guard.complete().await;

        let body: Value = response.json().await?;

        if body.get("error").and_then(Value::as_str) == Some("Invalid API Key") {
            return Err(ComicVineError::InvalidApiKey);
        }

        Ok(body)
    }
}

fn decode_envelope<T: DeserializeOwned>(body: Value) -> Result<ApiResponse<T>> {
    serde_json::from_value(body)
        .map_err(|e| ComicVineError::InvalidResponse(format!("failed to decode results: {e}")))
}

/// Collection endpoints return an empty list both for "no matches" and for a
/// response that omits `results` entirely.
fn collection_results<T: DeserializeOwned>(body: Value) -> Result<Vec<T>> {
    Ok(decode_envelope::<Vec<T>>(body)?.results.unwrap_or_default())
}

fn entity_results<T: DeserializeOwned>(body: Value, endpoint: &str) -> Result<T> {
    decode_envelope(body)?.results.ok_or_else(|| {
        ComicVineError::InvalidResponse(format!("response for {endpoint} carried no results"))
    })
}

/// Builder for configuring a Comic Vine client.
#[derive(Debug)]
pub struct ComicVineClientBuilder {
    base_url: String,
    timeout: Duration,
    rate_limit_interval: Duration,
}

impl Default for ComicVineClientBuilder {
    fn default() -> Self {
        Self {
            base_url: COMICVINE_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            rate_limit_interval: Duration::from_secs(1),
        }
    }
}

impl ComicVineClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout duration.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set rate limit interval between requests.
    pub fn rate_limit_interval(mut self, interval: Duration) -> Self {
        self.rate_limit_interval = interval;
        self
    }

    /// Build the Comic Vine client with the given API key.
    pub fn build(self, api_key: impl Into<String>) -> Result<ComicVineClient> {
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        let rate_limiter = RateLimiter::new(self.rate_limit_interval);

        Ok(ComicVineClient {
            client,
            api_key: api_key.into(),
            base_url: self.base_url,
            rate_limiter,
        })
    }
}
