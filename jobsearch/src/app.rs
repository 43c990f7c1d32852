//! Linear pipeline: parse -> fetch -> format -> print.

use std::io::Write;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::client::JobSearchClient;
use crate::error::ApiResult;
use crate::presenter::Presenter;
use crate::query::parse_query;

/// Runs one search. Every failure ends up as a single line on `err`;
/// nothing is returned to the caller.
pub fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, err: &mut E) {
    if let Err(e) = search_jobs(cli, out) {
        debug!("Search failed: {:?}", e);
        let _ = writeln!(err, "Error while fetching jobs: {}", e);
    }
}

fn search_jobs<O: Write>(cli: &Cli, out: &mut O) -> ApiResult<()> {
    writeln!(out, "Welcome to the Job Search App!")?;
    writeln!(out, "Searching for jobs: '{}'", cli.query)?;

    let query = parse_query(&cli.query);
    info!("Parsed query: profession='{}' city='{}'", query.profession, query.city);

    let client = JobSearchClient::new(&cli.api_url)?;
    let result = client.search(&query)?;

    Presenter::new(!cli.no_dump).render(out, &result)?;
    Ok(())
}
