use crate::classifier::ClassifierConfig;
use crate::error::{Result, ScanError};
use crate::filter::LinkFilterConfig;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for a search-fetch-classify run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Text sent to the search provider
    #[serde(default = "default_query")]
    pub query: String,

    /// Maximum number of search results to consider
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// CSV file the accepted jobs are written to (overwritten)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Per-request timeout for page fetches
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// DuckDuckGo HTML endpoint
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,

    #[serde(default)]
    pub link_filter: LinkFilterConfig,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

/// Configuration for the domain deduplication pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupConfig {
    #[serde(default = "default_dedup_input_path")]
    pub input_path: PathBuf,

    #[serde(default = "default_dedup_output_path")]
    pub output_path: PathBuf,
}

/// Top-level configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub dedup: DedupConfig,
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| ScanError::Config(format!("{}: {}", path.display(), e)))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|e| ScanError::Config(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ScanError::Config(e.to_string()))
    }
}

fn default_query() -> String {
    "audio transcription jobs".to_string()
}

fn default_max_results() -> usize {
    500
}

fn default_output_path() -> PathBuf {
    PathBuf::from("transcription_jobs.csv")
}

fn default_fetch_timeout_secs() -> u64 {
    5
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_search_endpoint() -> String {
    "https://html.duckduckgo.com/html/".to_string()
}

fn default_dedup_input_path() -> PathBuf {
    PathBuf::from("transcription_jobs1.csv")
}

fn default_dedup_output_path() -> PathBuf {
    PathBuf::from("transcription_jobs_deduplicated.csv")
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
            max_results: default_max_results(),
            output_path: default_output_path(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            user_agent: default_user_agent(),
            search_endpoint: default_search_endpoint(),
            link_filter: LinkFilterConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl ScanConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            input_path: default_dedup_input_path(),
            output_path: default_dedup_output_path(),
        }
    }
}
