use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scanning pages or reading/writing result files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The request did not complete within the configured timeout
    #[error("request to {url} timed out")]
    FetchTimeout { url: String },

    /// Network, DNS or TLS failure
    #[error("request to {url} failed: {message}")]
    FetchError { url: String, message: String },

    /// Server answered with anything other than 200
    #[error("{url} responded with status {status}")]
    NonSuccessStatus { url: String, status: u16 },

    /// Body could not be treated as an HTML document
    #[error("could not parse {url}: {message}")]
    ParseFailure { url: String, message: String },

    #[error("failed to write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP client could not be constructed
    #[error("http client error: {0}")]
    Client(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
