use clap::Parser;
use job_sift::{Config, ScanOutcome, dedup};
use std::process::ExitCode;

mod args;
use args::{Args, Command};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    match args.command {
        Command::Scan(scan_args) => {
            scan_args.apply(&mut config);
            run_scan(&config)
        }
        Command::Dedup(dedup_args) => {
            dedup_args.apply(&mut config);
            run_dedup(&config)
        }
    }
}

fn run_scan(config: &Config) -> ExitCode {
    ::log::info!("Starting scan for query: {}", config.scan.query);

    match job_sift::scan(&config.scan) {
        Ok(ScanOutcome::Saved { .. }) | Ok(ScanOutcome::NoJobs) => ExitCode::SUCCESS,
        Err(e @ job_sift::ScanError::WriteFailure { .. }) => {
            // Results are lost but the scan itself completed
            ::log::error!("Error while saving to CSV: {}", e);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Scan failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_dedup(config: &Config) -> ExitCode {
    match dedup::deduplicate_file(&config.dedup.input_path, &config.dedup.output_path) {
        Ok(summary) => {
            ::log::info!(
                "Kept {} of {} rows in {}",
                summary.rows_kept,
                summary.rows_read,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Deduplication aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
