use crate::parsers::ParsedPage;
use crate::results::SkipReason;
use crate::utils::{external_link_percentage, network_location};
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Thresholds and patterns used to tell job postings from aggregators and forums
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Skip a page whose raw-markup external link percentage is strictly above this
    #[serde(default = "default_high_external_threshold")]
    pub high_external_threshold: f64,

    /// Skip a page whose parsed-content external link percentage is at or above this
    #[serde(default = "default_listicle_threshold")]
    pub listicle_threshold: f64,

    /// Domains treated as forums (substring match against the page's network location)
    #[serde(default = "default_forum_domains")]
    pub forum_domains: Vec<String>,

    /// Case-insensitive title patterns that mark a listing of many jobs
    #[serde(default = "default_skip_title_patterns")]
    pub skip_title_patterns: Vec<String>,
}

fn default_high_external_threshold() -> f64 {
    40.0
}

fn default_listicle_threshold() -> f64 {
    50.0
}

fn default_forum_domains() -> Vec<String> {
    vec!["quora.com".to_string(), "reddit.com".to_string()]
}

fn default_skip_title_patterns() -> Vec<String> {
    vec![
        r"\d+\s+transcription\s+jobs".to_string(),
        r"\d+\sonline\s+transcription\s+jobs".to_string(),
    ]
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            high_external_threshold: default_high_external_threshold(),
            listicle_threshold: default_listicle_threshold(),
            forum_domains: default_forum_domains(),
            skip_title_patterns: default_skip_title_patterns(),
        }
    }
}

/// Keep/skip decision for a page
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    Accept,
    Skip(SkipReason),
}

impl Classification {
    pub fn is_accept(&self) -> bool {
        matches!(self, Classification::Accept)
    }
}

/// Applies the link-ratio, title and forum heuristics to fetched pages.
///
/// Two link ratios are measured independently: one over the anchors of the raw
/// markup (`check_raw_markup`, strict `>` cutoff) and one over the parsed
/// page's link set (`classify`, `>=` cutoff).
#[derive(Debug)]
pub struct PageClassifier {
    config: ClassifierConfig,
    title_regexes: Vec<Regex>,
}

impl Default for PageClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default()).expect("Default title patterns should be valid")
    }
}

impl PageClassifier {
    /// Create a classifier, compiling the title patterns case-insensitively
    pub fn new(config: ClassifierConfig) -> Result<Self, regex::Error> {
        let mut title_regexes = Vec::with_capacity(config.skip_title_patterns.len());
        for pattern in &config.skip_title_patterns {
            title_regexes.push(RegexBuilder::new(pattern).case_insensitive(true).build()?);
        }

        Ok(Self {
            config,
            title_regexes,
        })
    }

    /// External link percentage over every anchor found in `raw_html`
    pub fn raw_markup_external_percentage(&self, url: &str, raw_html: &str) -> f64 {
        let domain = network_location(url);
        let hrefs = crate::parsers::html::parse_links_only(raw_html);
        external_link_percentage(&domain, &hrefs)
    }

    /// Rejects pages whose raw-markup external link percentage exceeds the threshold
    pub fn check_raw_markup(&self, external_percentage: f64) -> Classification {
        if external_percentage > self.config.high_external_threshold {
            Classification::Skip(SkipReason::HighExternalLinks(external_percentage))
        } else {
            Classification::Accept
        }
    }

    /// Rejects titles like "28 Transcription Jobs" or "12 online transcription jobs"
    pub fn check_title(&self, title: &str) -> Classification {
        if self.title_regexes.iter().any(|regex| regex.is_match(title)) {
            Classification::Skip(SkipReason::TitlePattern(title.to_string()))
        } else {
            Classification::Accept
        }
    }

    /// Returns the forum domain the page belongs to, if any
    pub fn forum_domain(&self, domain: &str) -> Option<String> {
        self.config
            .forum_domains
            .iter()
            .find(|forum| domain.contains(forum.as_str()))
            .map(|_| domain.to_string())
    }

    /// Decides whether a parsed page is a single job posting.
    ///
    /// Forum domains are rejected before any link is inspected.
    pub fn classify(&self, url: &str, page: &ParsedPage) -> Classification {
        let domain = network_location(url);

        if let Some(forum) = self.forum_domain(&domain) {
            return Classification::Skip(SkipReason::ForumDomain(forum));
        }

        let ratio = external_link_percentage(&domain, &page.links());
        if ratio >= self.config.listicle_threshold {
            return Classification::Skip(SkipReason::Listicle(ratio));
        }

        Classification::Accept
    }
}
