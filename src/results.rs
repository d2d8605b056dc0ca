use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback title when the page has no `<title>` element
pub const NO_TITLE: &str = "No Title Found";

/// Fallback pay rate when no pattern matched
pub const PAY_NOT_MENTIONED: &str = "Not mentioned";

/// Fallback description when there is no meta description
pub const NO_DESCRIPTION: &str = "Not available";

/// A page accepted as a single job posting.
///
/// Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(rename = "Job Title")]
    pub title: String,

    #[serde(rename = "URL")]
    pub url: String,

    #[serde(rename = "Pay Rate")]
    pub pay_rate: String,

    #[serde(rename = "Description")]
    pub description: String,
}

impl JobRecord {
    /// Create a new job record
    pub fn new(title: String, url: String, pay_rate: String, description: String) -> Self {
        Self {
            title,
            url,
            pay_rate,
            description,
        }
    }
}

/// Why a URL produced no record. Only used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    Timeout,
    FetchFailed(String),
    NonSuccessStatus(u16),
    ParseFailure(String),
    /// Raw-markup external link percentage above the high-external threshold
    HighExternalLinks(f64),
    /// Title looks like "<n> transcription jobs"
    TitlePattern(String),
    /// Forum domain such as quora.com or reddit.com
    ForumDomain(String),
    /// Parsed-content external link percentage at or above the listicle threshold
    Listicle(f64),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Timeout => write!(f, "request timed out"),
            SkipReason::FetchFailed(message) => write!(f, "request failed: {}", message),
            SkipReason::NonSuccessStatus(status) => write!(f, "status {}", status),
            SkipReason::ParseFailure(message) => write!(f, "unparseable content: {}", message),
            SkipReason::HighExternalLinks(pct) => {
                write!(f, "high number of external links ({:.1}%)", pct)
            }
            SkipReason::TitlePattern(title) => {
                write!(f, "title '{}' matches '[number] transcription jobs'", title)
            }
            SkipReason::ForumDomain(domain) => write!(f, "{} is a forum", domain),
            SkipReason::Listicle(pct) => write!(
                f,
                "list of companies ({:.1}% external links)",
                pct
            ),
        }
    }
}

/// Outcome of evaluating one candidate URL
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    Accepted(JobRecord),
    Skipped(SkipReason),
}

impl Evaluation {
    /// The record, if the page was accepted
    pub fn into_record(self) -> Option<JobRecord> {
        match self {
            Evaluation::Accepted(record) => Some(record),
            Evaluation::Skipped(_) => None,
        }
    }
}
