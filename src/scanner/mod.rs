use crate::classifier::{Classification, PageClassifier};
use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::extractor::FieldExtractor;
use crate::fetch::PageFetcher;
use crate::filter::LinkFilter;
use crate::parsers::{ContentKind, ParsedPage};
use crate::results::{Evaluation, JobRecord, SkipReason};
use crate::search::{self, SearchProvider};

#[cfg(test)]
mod tests;

/// Runs discovery, then fetches and evaluates every link one after another
pub struct JobScanner<S, F> {
    search: S,
    fetcher: F,
    link_filter: LinkFilter,
    classifier: PageClassifier,
    extractor: FieldExtractor,
    query: String,
    max_results: usize,
}

impl<S: SearchProvider, F: PageFetcher> JobScanner<S, F> {
    /// Create a scanner from configuration and its two network collaborators
    pub fn new(config: &ScanConfig, search: S, fetcher: F) -> Result<Self, ScanError> {
        let classifier = PageClassifier::new(config.classifier.clone())
            .map_err(|e| ScanError::Config(format!("invalid title pattern: {}", e)))?;

        Ok(Self {
            search,
            fetcher,
            link_filter: LinkFilter::new(config.link_filter.clone()),
            classifier,
            extractor: FieldExtractor::new(),
            query: config.query.clone(),
            max_results: config.max_results,
        })
    }

    /// Candidate URLs for the configured query, excluded domains removed
    pub fn discover(&self) -> Vec<String> {
        search::discover_links(&self.search, &self.query, self.max_results, &self.link_filter)
    }

    /// Fetches and evaluates one URL. Every failure ends in `Skipped`; a record
    /// is only produced when all checks pass.
    pub fn evaluate(&self, url: &str) -> Evaluation {
        let page = match self.fetcher.fetch(url) {
            Ok(page) => page,
            Err(e) => return Evaluation::Skipped(skip_reason(e)),
        };
        if let Err(e) = page.ensure_ok(url) {
            return Evaluation::Skipped(skip_reason(e));
        }

        if let Err(e) = ensure_parseable(url, page.content_type.as_deref()) {
            return Evaluation::Skipped(skip_reason(e));
        }

        let raw_percentage = self.classifier.raw_markup_external_percentage(url, &page.body);
        ::log::info!("{} : {:.2}% external links", url, raw_percentage);
        if let Classification::Skip(reason) = self.classifier.check_raw_markup(raw_percentage) {
            return Evaluation::Skipped(reason);
        }

        let parsed = ParsedPage::parse(&page.body);
        let title = self.extractor.title(&parsed);
        if let Classification::Skip(reason) = self.classifier.check_title(&title) {
            return Evaluation::Skipped(reason);
        }

        if let Classification::Skip(reason) = self.classifier.classify(url, &parsed) {
            return Evaluation::Skipped(reason);
        }

        let fields = self.extractor.extract(&parsed);
        Evaluation::Accepted(JobRecord::new(
            fields.title,
            url.to_string(),
            fields.pay_rate,
            fields.description,
        ))
    }

    /// Evaluates `links` in order and returns the accepted records
    pub fn collect(&self, links: &[String]) -> Vec<JobRecord> {
        let total = links.len();
        let mut jobs = Vec::new();

        for (i, link) in links.iter().enumerate() {
            ::log::debug!("Evaluating {} / {}: {}", i + 1, total, link);
            match self.evaluate(link) {
                Evaluation::Accepted(record) => {
                    ::log::info!("Accepted {}: {}", link, record.title);
                    jobs.push(record);
                }
                Evaluation::Skipped(reason) => {
                    ::log::info!("Skipping {}: {}", link, reason);
                }
            }
        }

        jobs
    }

    /// Discovers links and evaluates all of them
    pub fn run(&self) -> Vec<JobRecord> {
        let links = self.discover();
        self.collect(&links)
    }
}

/// Fails closed on bodies that cannot be read as a document
fn ensure_parseable(url: &str, content_type: Option<&str>) -> Result<(), ScanError> {
    if ContentKind::from_content_type(content_type).is_parseable() {
        Ok(())
    } else {
        Err(ScanError::ParseFailure {
            url: url.to_string(),
            message: format!("unsupported content type {}", content_type.unwrap_or_default()),
        })
    }
}

fn skip_reason(error: ScanError) -> SkipReason {
    match error {
        ScanError::FetchTimeout { .. } => SkipReason::Timeout,
        ScanError::NonSuccessStatus { status, .. } => SkipReason::NonSuccessStatus(status),
        ScanError::ParseFailure { message, .. } => SkipReason::ParseFailure(message),
        other => SkipReason::FetchFailed(other.to_string()),
    }
}
