//! CLI argument definitions using clap

use clap::Parser;

use crate::client::DEFAULT_API_URL;

pub const DEFAULT_QUERY: &str = "Software Developer in Helsingborg";

/// Search public job listings, e.g. "Nurse in Malmö"
#[derive(Parser, Debug)]
#[command(name = "jobsearch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Free-text query of the form "<profession> in <city>"
    #[arg(default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Search endpoint
    #[arg(long, env = "JOBSEARCH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Skip the raw dump of the first listing
    #[arg(long)]
    pub no_dump: bool,

    /// Enable logging to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
