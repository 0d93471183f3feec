//! CLI entry point for the seam carving tool

use clap::Parser;
use seamcarve::io::cli::{Cli, FileProcessor};
use seamcarve::io::configuration::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

fn main() -> seamcarve::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
