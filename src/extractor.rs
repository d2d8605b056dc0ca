use crate::parsers::ParsedPage;
use crate::results::{NO_DESCRIPTION, NO_TITLE, PAY_NOT_MENTIONED};
use regex::{Regex, RegexBuilder};

/// Pay-rate patterns in priority order. The first capture group is the amount.
///
/// There is no `£ ... per audio hour` entry; the per-minute pound pattern is
/// listed twice.
const PAY_RATE_PATTERNS: [&str; 4] = [
    r"(\$\d+(\.\d{1,2})?)\s*(per\s*audio\s*hour)",
    r"(\$\d+(\.\d{1,2})?)\s*(per\s*audio\s*minute)",
    r"(£\d+(\.\d{1,2})?)\s*(per\s*audio\s*minute)",
    r"(£\d+(\.\d{1,2})?)\s*(per\s*audio\s*minute)",
];

/// Fields pulled out of an accepted page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub pay_rate: String,
    pub description: String,
}

/// Extracts title, pay rate and description from already-fetched pages
#[derive(Debug)]
pub struct FieldExtractor {
    pay_rate_regexes: Vec<Regex>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        let pay_rate_regexes = PAY_RATE_PATTERNS
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .expect("pay rate patterns should be valid")
            })
            .collect();

        Self { pay_rate_regexes }
    }

    /// Returns the first amount (with currency symbol) followed by
    /// "per audio hour/minute", or "Not mentioned"
    pub fn pay_rate(&self, text: &str) -> String {
        self.pay_rate_regexes
            .iter()
            .find_map(|regex| regex.captures(text))
            .and_then(|captures| captures.get(1))
            .map(|amount| amount.as_str().to_string())
            .unwrap_or_else(|| PAY_NOT_MENTIONED.to_string())
    }

    /// Meta description content verbatim, or "Not available"
    pub fn description(&self, page: &ParsedPage) -> String {
        page.meta_description()
            .flatten()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    /// Page title, or "No Title Found"
    pub fn title(&self, page: &ParsedPage) -> String {
        page.title().unwrap_or_else(|| NO_TITLE.to_string())
    }

    /// Runs all three extractions over one page
    pub fn extract(&self, page: &ParsedPage) -> ExtractedFields {
        ExtractedFields {
            title: self.title(page),
            pay_rate: self.pay_rate(&page.text()),
            description: self.description(page),
        }
    }
}
