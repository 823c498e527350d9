// src/github/fetch.rs
// =============================================================================
// This module fetches exam-question issues from the GitHub search API.
//
// Strategy:
// - Build one search query: author, the fixed "ExamQuestion" label, the
//   exam label, the repository, oldest first
// - Send a single GET request (no pagination, no retry, no auth)
// - Anything other than 200 OK aborts the run
// - Parse the `items` array of the response into Issue records
//
// The order of the returned issues matters: the page generator links each
// page to its neighbours based on this order.
// =============================================================================

use chrono::{DateTime, Utc};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::error::{ExamError, Result};

/// Public GitHub API root
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Label every exam question carries, whatever the exam
pub const EXAM_QUESTION_LABEL: &str = "ExamQuestion";

const USER_AGENT: &str = concat!("dump-exam/", env!("CARGO_PKG_VERSION"));

/// One issue as returned by the search API
///
/// Only the fields we use are kept; serde ignores the rest of the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// API URL of the issue
    pub url: String,
    /// Browser URL of the issue, linked from the generated page
    pub html_url: String,
    /// Issue number; names the output file and drives navigation
    pub number: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Markdown body; GitHub sends `null` for an empty body
    #[serde(default)]
    pub body: Option<String>,
}

impl Issue {
    /// The issue body, or "" when GitHub sent none
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

// Shape of the search response: { "total_count": .., "items": [ .. ] }
#[derive(Debug, Deserialize)]
struct SearchResponse {
    items: Vec<Issue>,
}

/// The filters that select the issues of one exam
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub author: String,
    pub repo: String,
    pub label: String,
}

impl SearchQuery {
    /// The `q=` search terms, e.g.
    /// `author:VanDng label:ExamQuestion label:az-204 repo:VanDng/DumpExam`
    pub fn terms(&self) -> String {
        format!(
            "author:{} label:{} label:{} repo:{}",
            self.author, EXAM_QUESTION_LABEL, self.label, self.repo
        )
    }

    /// Full search URL below `api_url`, sorted by creation time, oldest first
    pub fn search_url(&self, api_url: &str) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/search/issues",
            api_url.trim_end_matches('/')
        ))?;

        url.query_pairs_mut()
            .append_pair("q", &self.terms())
            .append_pair("sort", "created")
            .append_pair("order", "asc");

        Ok(url)
    }
}

/// Creates the HTTP client used for the search request
///
/// GitHub rejects requests without a User-Agent, so we always send one.
pub fn build_client() -> Result<Client> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

// Fetches every issue matching the query, in ascending creation order
//
// Parameters:
//   client: reqwest HTTP client
//   api_url: API root (normally DEFAULT_API_URL)
//   query: author / repo / exam label filters
//
// Returns: the issues, or an error on any non-200 answer
pub async fn fetch_issues(client: &Client, api_url: &str, query: &SearchQuery) -> Result<Vec<Issue>> {
    let url = query.search_url(api_url)?;
    debug!(%url, "searching issues");

    let response = client
        .get(url)
        .header(ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    let status = response.status();
    debug!(status = status.as_u16(), "search response");

    // Rate limits, bad credentials and missing repos all end up here alike
    if status != StatusCode::OK {
        return Err(ExamError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    parse_search_response(&body)
}

/// Parses a raw search response body into the list of issues
///
/// Also used by `render`, which reads a response saved to disk.
pub fn parse_search_response(json: &str) -> Result<Vec<Issue>> {
    let response: SearchResponse = serde_json::from_str(json)?;
    Ok(response.items)
}
