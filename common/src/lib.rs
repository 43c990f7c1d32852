//! Shared job listing types
//!
//! Wire types mirror the JSON returned by the JobTech job search API.
//! `DisplayJob` is the flattened view printed by the CLI.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNKNOWN_COMPANY: &str = "Unknown company";
pub const UNKNOWN_LOCATION: &str = "Unknown location";

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Employer {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct WorkplaceAddress {
    pub municipality: Option<String>,
}

/// One job posting as received from the search API.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JobListing {
    pub id: String,
    pub headline: String,
    pub publication_date: Option<String>,
    pub employer: Option<Employer>,
    pub workplace_address: Option<WorkplaceAddress>,
}

impl JobListing {
    pub fn employer_name(&self) -> Option<&str> {
        self.employer
            .as_ref()
            .and_then(|e| e.name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }

    pub fn municipality(&self) -> Option<&str> {
        self.workplace_address
            .as_ref()
            .and_then(|a| a.municipality.as_deref())
            .filter(|city| !city.trim().is_empty())
    }

    /// Calendar date the listing was published, if the timestamp parses.
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.publication_date
            .as_deref()
            .and_then(parse_publication_date)
    }
}

/// Body of a search response. Only the hit list is used.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SearchResponse {
    pub hits: Vec<JobListing>,
}

/// Listing reduced to what gets printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayJob {
    pub title: String,
    pub company: String,
    pub city: String,
}

impl From<&JobListing> for DisplayJob {
    fn from(listing: &JobListing) -> Self {
        DisplayJob {
            title: listing.headline.clone(),
            company: listing.employer_name().unwrap_or(UNKNOWN_COMPANY).to_string(),
            city: listing.municipality().unwrap_or(UNKNOWN_LOCATION).to_string(),
        }
    }
}

impl fmt::Display for DisplayJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {} in {}", self.title, self.company, self.city)
    }
}

/// Parses a publication timestamp down to its calendar date.
///
/// Timestamps carrying an offset are normalised to UTC first. Local
/// timestamps (the API usually omits the offset) and bare dates keep
/// their own date.
pub fn parse_publication_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc).date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(ts.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
