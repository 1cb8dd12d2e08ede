//! HTTP search client for the X API v2 recent-search endpoint.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use murmur_core::source::MAX_RESULTS_LIMIT;
use murmur_core::{EngagementCounts, Post, PostSource};
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com/2";
/// Smallest page the recent-search endpoint accepts.
pub const MIN_RESULTS: u8 = 10;
const TWEET_FIELDS: &str = "created_at,public_metrics,author_id,text";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error: {0}")]
    Api(String),
}

/// Client for `GET /tweets/search/recent`.
///
/// One request per search: no retries, pagination, or rate limiting. The
/// request timeout is applied by the underlying HTTP client.
pub struct SearchClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: String,
}

impl SearchClient {
    /// Create a client for the given API base URL (no trailing slash needed).
    pub fn new(
        base_url: String,
        bearer_token: String,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer_token,
        })
    }

    /// Search recent original (non-repost) English posts matching `keyword`.
    ///
    /// `max_results` is clamped to the endpoint's accepted range of 10..=100.
    pub async fn search_recent(
        &self,
        keyword: &str,
        max_results: u8,
    ) -> Result<Vec<Post>, SearchError> {
        let url = format!("{}/tweets/search/recent", self.base_url);
        let query = build_query(keyword);
        let max_results = clamp_max_results(max_results).to_string();

        info!(url = %url, query = %query, max_results = %max_results, "searching recent posts");
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.bearer_token)
            .query(&[
                ("query", query.as_str()),
                ("max_results", max_results.as_str()),
                ("tweet.fields", TWEET_FIELDS),
            ])
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SearchError::Server {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        let posts = decode_posts(&body)?;
        info!(count = posts.len(), "fetched posts");
        Ok(posts)
    }
}

#[async_trait]
impl PostSource for SearchClient {
    type Error = SearchError;

    async fn search(&self, keyword: &str, max_results: u8) -> Result<Vec<Post>, SearchError> {
        self.search_recent(keyword, max_results).await
    }
}

/// Keyword match, excluding reposts, restricted to English.
pub fn build_query(keyword: &str) -> String {
    format!("{} -is:retweet lang:en", keyword.trim())
}

pub fn clamp_max_results(requested: u8) -> u8 {
    requested.clamp(MIN_RESULTS, MAX_RESULTS_LIMIT)
}

// ── Wire format ──

/// Posts stay as raw JSON here so one malformed element cannot fail the page.
#[derive(Deserialize)]
struct SearchResponse {
    data: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    errors: Vec<WireProblem>,
}

#[derive(Deserialize)]
struct WireTweet {
    id: Option<String>,
    text: Option<String>,
    author_id: Option<String>,
    created_at: Option<String>,
    public_metrics: Option<WireMetrics>,
}

#[derive(Deserialize)]
struct WireMetrics {
    like_count: Option<u64>,
    retweet_count: Option<u64>,
    reply_count: Option<u64>,
}

#[derive(Deserialize)]
struct WireProblem {
    title: Option<String>,
    detail: Option<String>,
}

impl WireTweet {
    /// Decode one element of `data`. `None` when it is not a post object or
    /// lacks an id or text; other gaps get defaults.
    fn decode(raw: serde_json::Value) -> Option<Post> {
        serde_json::from_value::<WireTweet>(raw)
            .map_err(|e| warn!(error = %e, "malformed post"))
            .ok()?
            .into_post()
    }

    fn into_post(self) -> Option<Post> {
        let id = self.id?;
        let text = self.text?;
        let created_at = self.created_at.and_then(|raw| {
            DateTime::parse_from_rfc3339(&raw)
                .map(|t| t.with_timezone(&Utc))
                .map_err(|e| {
                    warn!(id = %id, created_at = %raw, error = %e, "unparseable timestamp")
                })
                .ok()
        });
        let metrics = self
            .public_metrics
            .map(|m| EngagementCounts {
                likes: m.like_count.unwrap_or(0),
                retweets: m.retweet_count.unwrap_or(0),
                replies: m.reply_count.unwrap_or(0),
            })
            .unwrap_or_default();
        Some(Post {
            id,
            created_at,
            author_id: self.author_id,
            text,
            metrics,
        })
    }
}

/// Decode a recent-search response body into posts, in response order.
///
/// A response with no `data` is an empty result unless it carries API errors.
/// Individual posts that are missing an id or text, or carry mistyped fields,
/// are dropped; the rest are kept.
pub fn decode_posts(body: &str) -> Result<Vec<Post>, SearchError> {
    let resp: SearchResponse = serde_json::from_str(body)?;
    let Some(tweets) = resp.data else {
        if resp.errors.is_empty() {
            return Ok(Vec::new());
        }
        let messages: Vec<String> = resp
            .errors
            .into_iter()
            .map(|p| match (p.title, p.detail) {
                (Some(t), Some(d)) => format!("{t}: {d}"),
                (Some(t), None) => t,
                (None, Some(d)) => d,
                (None, None) => "unknown error".to_string(),
            })
            .collect();
        return Err(SearchError::Api(messages.join("; ")));
    };

    let total = tweets.len();
    let posts: Vec<Post> = tweets.into_iter().filter_map(WireTweet::decode).collect();
    let skipped = total - posts.len();
    if skipped > 0 {
        warn!(skipped, total, "dropped malformed posts");
    }
    Ok(posts)
}
