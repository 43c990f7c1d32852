//! JobTech Job Search CLI
//!
//! Searches for "<profession> in <city>" and prints the first page of hits.

use clap::Parser;
use jobsearch::app;
use jobsearch::cli::Cli;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    app::run(&cli, &mut stdout.lock(), &mut stderr.lock());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Logs share stderr with error lines, so nothing is logged without -d
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::info!("Log level: {}", filter);
}
