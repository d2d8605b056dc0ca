// Re-export modules
pub mod classifier;
pub mod config;
pub mod dedup;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod filter;
pub mod parsers;
pub mod results;
pub mod scanner;
pub mod search;
pub mod utils;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::{Config, DedupConfig, ScanConfig};
pub use error::{Result, ScanError};
pub use results::{Evaluation, JobRecord, SkipReason};
pub use scanner::JobScanner;

use fetch::HttpFetcher;
use search::DuckDuckGo;
use std::path::PathBuf;

/// Outcome of a complete scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Records were written to the output file
    Saved { count: usize, path: PathBuf },
    /// Nothing passed the heuristics, so no file was written
    NoJobs,
}

/// Runs a full scan against DuckDuckGo and writes the accepted jobs.
///
/// Per-URL failures never surface here; only client construction and the
/// final write can fail.
pub fn scan(config: &ScanConfig) -> Result<ScanOutcome> {
    let timeout = config.fetch_timeout();
    let search = DuckDuckGo::new(&config.search_endpoint, timeout, &config.user_agent)?;
    let fetcher = HttpFetcher::new(timeout, &config.user_agent)?;
    let scanner = JobScanner::new(config, search, fetcher)?;

    let jobs = scanner.run();
    if jobs.is_empty() {
        ::log::info!("No jobs found.");
        return Ok(ScanOutcome::NoJobs);
    }

    let count = writer::write_records(&config.output_path, &jobs)?;
    ::log::info!("Saved {} jobs to {}", count, config.output_path.display());

    Ok(ScanOutcome::Saved {
        count,
        path: config.output_path.clone(),
    })
}
