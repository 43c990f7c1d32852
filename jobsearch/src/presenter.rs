//! Result Formatter
//!
//! Turns a search result into the console summary.

use common::{DisplayJob, JobListing};
use std::io::{self, Write};
use tracing::warn;

use crate::client::SearchResult;
use crate::dump::{bounded, DUMP_DEPTH};

pub const NO_RESULTS: &str = "No jobs found.";
pub const UNKNOWN_DATE: &str = "Unknown date";
const SEPARATOR_WIDTH: usize = 50;

pub struct Presenter {
    show_dump: bool,
}

impl Default for Presenter {
    fn default() -> Self {
        Self { show_dump: true }
    }
}

impl Presenter {
    pub fn new(show_dump: bool) -> Self {
        Self { show_dump }
    }

    pub fn render<W: Write>(&self, out: &mut W, result: &SearchResult) -> io::Result<()> {
        if result.is_empty() {
            writeln!(out, "{}", NO_RESULTS)?;
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "Found {} jobs", result.len())?;
        writeln!(out, "{}", separator())?;

        if self.show_dump {
            if let Some(first) = &result.first_raw {
                serde_json::to_writer_pretty(&mut *out, &bounded(first, DUMP_DEPTH))?;
                writeln!(out)?;
            }
        }

        for (index, listing) in result.listings.iter().enumerate() {
            let job = DisplayJob::from(listing);
            writeln!(out, "{}. {}", index + 1, job)?;
            writeln!(out, "Publication: {}", publication_label(listing))?;
            writeln!(out, "{}", separator())?;
        }

        Ok(())
    }
}

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// `YYYY-MM-DD`, or a placeholder when the timestamp is missing or bad.
pub fn publication_label(listing: &JobListing) -> String {
    match listing.published_on() {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => {
            warn!(
                "Listing {} has no usable publication date: {:?}",
                listing.id, listing.publication_date
            );
            UNKNOWN_DATE.to_string()
        }
    }
}
