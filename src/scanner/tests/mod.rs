
use crate::error::{Result, ScanError};
use crate::fetch::{FetchedPage, PageFetcher};
use crate::search::SearchProvider;
use std::cell::RefCell;
use std::collections::HashMap;

/// Search provider returning a fixed list of URLs
pub struct StaticSearch(pub Vec<String>);

impl StaticSearch {
    pub fn new(urls: &[&str]) -> Self {
        Self(urls.iter().map(|u| u.to_string()).collect())
    }
}

impl SearchProvider for StaticSearch {
    fn search<'a>(
        &'a self,
        _query: &str,
        max_results: usize,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(self.0.iter().take(max_results).cloned())
    }
}

/// Canned outcome for a URL
#[derive(Clone)]
pub enum Canned {
    Page {
        status: u16,
        content_type: Option<&'static str>,
        body: String,
    },
    Timeout,
    Failure(&'static str),
}

impl Canned {
    pub fn html(body: impl Into<String>) -> Self {
        Canned::Page {
            status: 200,
            content_type: Some("text/html; charset=utf-8"),
            body: body.into(),
        }
    }
}

/// In-memory fetcher that records which URLs were requested
#[derive(Default)]
pub struct CannedFetcher {
    responses: HashMap<String, Canned>,
    pub requested: RefCell<Vec<String>>,
}

impl CannedFetcher {
    pub fn with(mut self, url: &str, response: Canned) -> Self {
        self.responses.insert(url.to_string(), response);
        self
    }
}

impl PageFetcher for CannedFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.requested.borrow_mut().push(url.to_string());

        match self.responses.get(url).cloned() {
            Some(Canned::Page {
                status,
                content_type,
                body,
            }) => Ok(FetchedPage {
                status,
                content_type: content_type.map(|c| c.to_string()),
                body,
            }),
            Some(Canned::Timeout) => Err(ScanError::FetchTimeout {
                url: url.to_string(),
            }),
            Some(Canned::Failure(message)) => Err(ScanError::FetchError {
                url: url.to_string(),
                message: message.to_string(),
            }),
            None => Err(ScanError::FetchError {
                url: url.to_string(),
                message: "dns error: no such host".to_string(),
            }),
        }
    }
}

/// Builds a page with the given title, body text and anchors
pub fn page(title: Option<&str>, text: &str, hrefs: &[&str]) -> String {
    let head = title
        .map(|t| format!("<title>{}</title>", t))
        .unwrap_or_default();
    let anchors = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect::<String>();
    format!(
        "<html><head>{}</head><body><p>{}</p>{}</body></html>",
        head, text, anchors
    )
}
