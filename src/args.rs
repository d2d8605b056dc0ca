use clap::{Args as ClapArgs, Parser, Subcommand};
use job_sift::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "job-sift")]
#[command(about = "Finds single job postings through web search and filters out listicles and forums")]
#[command(version)]
pub struct Args {
    /// JSON configuration file (flags override its values)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search, fetch and classify pages, then write accepted jobs to CSV
    Scan(ScanArgs),
    /// Remove rows whose URL domain was already seen from a jobs CSV
    Dedup(DedupArgs),
}

#[derive(ClapArgs, Debug)]
pub struct ScanArgs {
    /// Search query
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of search results to evaluate
    #[arg(short = 'n', long)]
    pub max_results: Option<usize>,

    /// Output CSV path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Per-page fetch timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(ClapArgs, Debug)]
pub struct DedupArgs {
    /// CSV file to deduplicate
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the deduplicated CSV
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(self, config: &mut Config) {
        if let Some(query) = self.query {
            config.scan.query = query;
        }
        if let Some(max_results) = self.max_results {
            config.scan.max_results = max_results;
        }
        if let Some(output) = self.output {
            config.scan.output_path = output;
        }
        if let Some(timeout) = self.timeout {
            config.scan.fetch_timeout_secs = timeout;
        }
    }
}

impl DedupArgs {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply(self, config: &mut Config) {
        if let Some(input) = self.input {
            config.dedup.input_path = input;
        }
        if let Some(output) = self.output {
            config.dedup.output_path = output;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_overrides() {
        let args = Args::parse_from(["job-sift", "scan", "--query", "captioning jobs", "-n", "25"]);
        let mut config = Config::default();

        match args.command {
            Command::Scan(scan) => scan.apply(&mut config),
            other => panic!("unexpected command: {:?}", other),
        }

        assert_eq!(config.scan.query, "captioning jobs");
        assert_eq!(config.scan.max_results, 25);
        assert_eq!(config.scan.fetch_timeout_secs, 5);
    }

    #[test]
    fn test_dedup_with_global_config() {
        let args = Args::parse_from([
            "job-sift", "dedup", "--input", "in.csv", "--config", "settings.json",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("settings.json")));

        let mut config = Config::default();
        match args.command {
            Command::Dedup(dedup) => dedup.apply(&mut config),
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(config.dedup.input_path, PathBuf::from("in.csv"));
        assert_eq!(
            config.dedup.output_path,
            PathBuf::from("transcription_jobs_deduplicated.csv")
        );
    }
}
