use crate::error::{Result, ScanError};
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

/// Response of a single page request
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub content_type: Option<String>,
    /// Body text. Left empty for non-200 responses.
    pub body: String,
}

impl FetchedPage {
    /// Fails with `NonSuccessStatus` for anything but a 200 response
    pub fn ensure_ok(&self, url: &str) -> Result<()> {
        if self.status == 200 {
            Ok(())
        } else {
            Err(ScanError::NonSuccessStatus {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Retrieves a page over the network
pub trait PageFetcher {
    /// Fetch `url`. Timeouts and transport failures are returned as
    /// `FetchTimeout` / `FetchError`; any HTTP status is a successful fetch.
    fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

impl<T: PageFetcher + ?Sized> PageFetcher for &T {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP fetcher with a fixed per-request timeout and no retries
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(user_agent)
            .map_err(|e| ScanError::Config(format!("invalid user agent: {}", e)))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage> {
        ::log::debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| request_error(url, e))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let body = if status == 200 {
            response.text().map_err(|e| request_error(url, e))?
        } else {
            String::new()
        };

        Ok(FetchedPage {
            status,
            content_type,
            body,
        })
    }
}

fn request_error(url: &str, error: reqwest::Error) -> ScanError {
    if error.is_timeout() {
        ScanError::FetchTimeout {
            url: url.to_string(),
        }
    } else {
        ScanError::FetchError {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(status: u16) -> FetchedPage {
        FetchedPage {
            status,
            content_type: None,
            body: String::new(),
        }
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(page(200).ensure_ok("https://a.com").is_ok());

        for status in [201, 204, 301, 404, 500] {
            match page(status).ensure_ok("https://a.com") {
                Err(ScanError::NonSuccessStatus { status: s, .. }) => assert_eq!(s, status),
                other => panic!("unexpected result for {}: {:?}", status, other),
            }
        }
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let result = HttpFetcher::new(Duration::from_secs(5), "bad\nagent");
        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_malformed_url_is_fetch_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(5), "job-sift-test").unwrap();
        let result = fetcher.fetch("not a url");
        assert!(matches!(result, Err(ScanError::FetchError { .. })));
    }
}
