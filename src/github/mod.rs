// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub search API.
//
// Currently implements:
// - Building the search query for one exam label
// - Fetching the matching issues in creation order
// - Parsing a saved search response (for offline `render` runs)
//
// Not implemented on purpose: authentication, pagination, retries.
// =============================================================================

mod fetch;

pub use fetch::{
    build_client, fetch_issues, parse_search_response, Issue, SearchQuery, DEFAULT_API_URL,
};
