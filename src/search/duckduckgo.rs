use crate::error::{Result, ScanError};
use crate::search::SearchProvider;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use scraper::{Html, Selector};
use std::collections::VecDeque;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

static RESULT_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.result__a").expect("result selector is valid"));
static NAV_FORMS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".nav-link form").expect("nav selector is valid"));
static NAMED_INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input[name]").expect("input selector is valid"));
static SUBMIT_INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"input[type="submit"]"#).expect("submit selector is valid"));

/// Search provider backed by DuckDuckGo's HTML-only endpoint
pub struct DuckDuckGo {
    client: Client,
    endpoint: String,
}

impl DuckDuckGo {
    pub fn new(endpoint: &str, timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(user_agent)
            .map_err(|e| ScanError::Config(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
        })
    }

    fn request_page(&self, query: &str, request: &PageRequest) -> Result<String> {
        let builder = match request {
            PageRequest::First => self.client.get(&self.endpoint).query(&[("q", query)]),
            PageRequest::Next(form) => self.client.post(&self.endpoint).form(form),
        };

        let response = builder.send().map_err(|e| search_error(&self.endpoint, e))?;
        if !response.status().is_success() {
            return Err(ScanError::NonSuccessStatus {
                url: self.endpoint.clone(),
                status: response.status().as_u16(),
            });
        }

        response.text().map_err(|e| search_error(&self.endpoint, e))
    }
}

impl SearchProvider for DuckDuckGo {
    fn search<'a>(
        &'a self,
        query: &str,
        max_results: usize,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(SearchResults {
            engine: self,
            query: query.to_string(),
            buffered: VecDeque::new(),
            next: Some(PageRequest::First),
            remaining: max_results,
        })
    }
}

enum PageRequest {
    First,
    /// Hidden fields of the "Next" form on the previous page
    Next(Vec<(String, String)>),
}

/// Result URLs, fetching another page of results only when the buffer runs dry
struct SearchResults<'a> {
    engine: &'a DuckDuckGo,
    query: String,
    buffered: VecDeque<String>,
    next: Option<PageRequest>,
    remaining: usize,
}

impl SearchResults<'_> {
    fn load_next_page(&mut self) {
        let Some(request) = self.next.take() else {
            return;
        };

        match self.engine.request_page(&self.query, &request) {
            Ok(html) => {
                let page = parse_results_page(&html);
                ::log::debug!("Search page returned {} results", page.links.len());
                if !page.links.is_empty() {
                    self.buffered.extend(page.links);
                    self.next = page.next_form.map(PageRequest::Next);
                }
            }
            Err(e) => {
                ::log::warn!("Search for '{}' stopped: {}", self.query, e);
            }
        }
    }
}

impl Iterator for SearchResults<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining == 0 {
            return None;
        }
        if self.buffered.is_empty() {
            self.load_next_page();
        }

        let link = self.buffered.pop_front()?;
        self.remaining -= 1;
        Some(link)
    }
}

/// Links and pagination form found on one results page
#[derive(Debug, Default)]
pub struct ResultsPage {
    pub links: Vec<String>,
    pub next_form: Option<Vec<(String, String)>>,
}

/// Parses a DuckDuckGo HTML results page
pub fn parse_results_page(html: &str) -> ResultsPage {
    let document = Html::parse_document(html);

    let links = document
        .select(&RESULT_LINKS)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(unwrap_result_link)
        .collect();

    let next_form = document
        .select(&NAV_FORMS)
        .find(|form| {
            form.select(&SUBMIT_INPUTS).any(|submit| {
                submit
                    .value()
                    .attr("value")
                    .is_some_and(|value| value.to_ascii_lowercase().contains("next"))
            })
        })
        .map(|form| {
            form.select(&NAMED_INPUTS)
                .filter(|input| input.value().attr("type") != Some("submit"))
                .filter_map(|input| {
                    let name = input.value().attr("name")?;
                    let value = input.value().attr("value").unwrap_or_default();
                    Some((name.to_string(), value.to_string()))
                })
                .collect()
        });

    ResultsPage { links, next_form }
}

/// Turns a result `href` into the target URL.
///
/// DuckDuckGo wraps targets in `/l/?uddg=<url>` redirects; those are unwrapped.
/// Ads and other DuckDuckGo-internal links yield `None`.
pub fn unwrap_result_link(href: &str) -> Option<String> {
    let absolute = if href.starts_with("//") {
        format!("https:{}", href)
    } else if href.starts_with('/') {
        format!("https://duckduckgo.com{}", href)
    } else {
        href.to_string()
    };

    let url = Url::parse(&absolute).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }

    let host = url.host_str()?;
    if host == "duckduckgo.com" || host.ends_with(".duckduckgo.com") {
        if url.path() != "/l/" {
            return None;
        }
        return url
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, target)| target.into_owned())
            .filter(|target| target.starts_with("http"));
    }

    Some(href.to_string())
}

fn search_error(endpoint: &str, error: reqwest::Error) -> ScanError {
    if error.is_timeout() {
        ScanError::FetchTimeout {
            url: endpoint.to_string(),
        }
    } else {
        ScanError::FetchError {
            url: endpoint.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESULTS_PAGE: &str = r#"<html><body>
        <div class="result results_links">
            <a class="result__a" href="https://duckduckgo.com/y.js?ad_domain=ads.com&u3=x">Sponsored</a>
        </div>
        <div class="result results_links">
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rev.com%2Ffreelancers%2Ftranscription&amp;rut=abc">Rev</a>
        </div>
        <div class="result results_links">
            <a class="result__a" href="https://www.gotranscript.com/transcription-jobs">GoTranscript</a>
        </div>
        <div class="nav-link">
            <form action="/html/" method="post">
                <input type="submit" class="btn btn--alt" value="Next" />
                <input type="hidden" name="q" value="audio transcription jobs" />
                <input type="hidden" name="s" value="10" />
                <input type="hidden" name="dc" value="11" />
                <input type="hidden" name="nextParams" />
            </form>
        </div>
    </body></html>"#;

    #[test]
    fn test_parse_results_page() {
        let page = parse_results_page(RESULTS_PAGE);

        assert_eq!(
            page.links,
            vec![
                "https://www.rev.com/freelancers/transcription",
                "https://www.gotranscript.com/transcription-jobs"
            ]
        );

        let form = page.next_form.expect("next form should be found");
        assert_eq!(
            form,
            vec![
                ("q".to_string(), "audio transcription jobs".to_string()),
                ("s".to_string(), "10".to_string()),
                ("dc".to_string(), "11".to_string()),
                ("nextParams".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn test_last_page_has_no_next_form() {
        let html = r#"<div class="nav-link"><form action="/html/" method="post">
            <input type="submit" value="Previous" />
            <input type="hidden" name="s" value="0" />
        </form></div>"#;
        let page = parse_results_page(html);

        assert!(page.links.is_empty());
        assert!(page.next_form.is_none());
    }

    #[test]
    fn test_unwrap_result_link() {
        assert_eq!(
            unwrap_result_link("https://example.com/job").as_deref(),
            Some("https://example.com/job")
        );
        assert_eq!(
            unwrap_result_link("/l/?uddg=http%3A%2F%2Fa.com%2F1").as_deref(),
            Some("http://a.com/1")
        );
        assert_eq!(unwrap_result_link("https://duckduckgo.com/y.js?ad=1"), None);
        assert_eq!(unwrap_result_link("javascript:void(0)"), None);
        assert_eq!(unwrap_result_link("not a link"), None);
    }
}
