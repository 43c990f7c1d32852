//! JobTech Search Client
//!
//! Builds the search URL from a parsed query, performs one blocking GET
//! and decodes the hit list.

use common::JobListing;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{ApiResult, SearchError};
use crate::query::SearchQuery;

pub const DEFAULT_API_URL: &str = "https://jobsearch.api.jobtechdev.se/search";

/// Only the first page is ever requested.
const PAGE_OFFSET: u32 = 0;
const PAGE_LIMIT: u32 = 10;

/// Decoded search hits, in API order.
#[derive(Debug, Clone, Default)]
pub struct SearchResult {
    pub listings: Vec<JobListing>,
    /// First hit exactly as received, kept for the diagnostic dump.
    pub first_raw: Option<Value>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

#[derive(Debug, Deserialize)]
struct RawHits {
    hits: Vec<Value>,
}

pub struct JobSearchClient {
    client: Client,
    base_url: Url,
}

impl JobSearchClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| SearchError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            // No request timeout: a stalled API blocks until it answers
            client: Client::builder().timeout(None).build()?,
            base_url,
        })
    }

    /// Full request URL for a query: `q`, `offset`, `limit`, `municipality`.
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("q", &query.profession)
            .append_pair("offset", &PAGE_OFFSET.to_string())
            .append_pair("limit", &PAGE_LIMIT.to_string())
            .append_pair("municipality", &query.city);
        url
    }

    /// Runs the search. Non-2xx statuses and undecodable bodies are errors.
    pub fn search(&self, query: &SearchQuery) -> ApiResult<SearchResult> {
        let url = self.search_url(query);
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(SearchError::RequestFailed {
                status: status.as_u16(),
            });
        }

        let body = response.text()?;
        debug!("Fetched {} bytes", body.len());

        let result = decode_hits(&body)?;
        info!("Decoded {} listings for '{}'", result.len(), query);
        Ok(result)
    }
}

/// Decodes a response body into typed listings plus the first raw hit.
pub fn decode_hits(body: &str) -> ApiResult<SearchResult> {
    let raw: RawHits = serde_json::from_str(body)?;
    let first_raw = raw.hits.first().cloned();

    // Field errors in any hit surface as DecodeFailed too
    let listings: Vec<JobListing> = serde_json::from_value(Value::Array(raw.hits))?;

    Ok(SearchResult {
        listings,
        first_raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::parse_query;

    #[test]
    fn test_search_url_contains_all_parameters() {
        let client = JobSearchClient::new(DEFAULT_API_URL).unwrap();
        let url = client.search_url(&parse_query("Software Developer in Helsingborg"));

        assert_eq!(url.host_str(), Some("jobsearch.api.jobtechdev.se"));
        assert_eq!(url.path(), "/search");

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "Software Developer".to_string()),
                ("offset".to_string(), "0".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("municipality".to_string(), "Helsingborg".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_url_encodes_terms() {
        let client = JobSearchClient::new(DEFAULT_API_URL).unwrap();
        let url = client.search_url(&parse_query("C++ & Rust in Malmö"));
        let query = url.query().unwrap();

        assert!(!query.contains(' '));
        assert!(query.contains("q=C%2B%2B+%26+Rust"));
        assert!(query.contains("municipality=Malm%C3%B6"));
    }

    #[test]
    fn test_search_url_keeps_empty_municipality() {
        let client = JobSearchClient::new(DEFAULT_API_URL).unwrap();
        let url = client.search_url(&parse_query("Developer"));
        assert!(url.query().unwrap().ends_with("municipality="));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = JobSearchClient::new("not a url").err().unwrap();
        assert!(matches!(err, SearchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_decode_hits_preserves_order_and_first_raw() {
        let body = r#"{"total":{"value":2},"hits":[
            {"id":"b","headline":"Second","extra":{"deep":{"deeper":1}}},
            {"id":"a","headline":"First"}
        ]}"#;
        let result = decode_hits(body).unwrap();

        let ids: Vec<&str> = result.listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(result.first_raw.unwrap()["headline"], "Second");
    }

    #[test]
    fn test_decode_hits_empty() {
        let result = decode_hits(r#"{"hits":[]}"#).unwrap();
        assert!(result.is_empty());
        assert!(result.first_raw.is_none());
    }

    #[test]
    fn test_decode_hits_rejects_malformed_body() {
        assert!(matches!(
            decode_hits("<html>oops</html>"),
            Err(SearchError::DecodeFailed(_))
        ));
        assert!(matches!(
            decode_hits(r#"{"results":[]}"#),
            Err(SearchError::DecodeFailed(_))
        ));
        assert!(matches!(
            decode_hits(r#"{"hits":[{"id":"1"}]}"#),
            Err(SearchError::DecodeFailed(_))
        ));
    }
}
