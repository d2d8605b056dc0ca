use serde::{Deserialize, Serialize};

/// Configuration for filtering search results before they are fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkFilterConfig {
    /// Drop any URL containing one of these strings (case-sensitive substring match)
    #[serde(default = "default_excluded_domains")]
    pub excluded_domains: Vec<String>,
}

/// Job boards whose result pages are aggregators
fn default_excluded_domains() -> Vec<String> {
    vec!["flexjobs.com".to_string(), "totaljobs.com".to_string()]
}

impl Default for LinkFilterConfig {
    fn default() -> Self {
        Self {
            excluded_domains: default_excluded_domains(),
        }
    }
}

/// Filter applied to discovered links
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    config: LinkFilterConfig,
}

impl LinkFilter {
    /// Create a new link filter from configuration
    pub fn new(config: LinkFilterConfig) -> Self {
        Self { config }
    }

    /// Determine if a discovered URL should be evaluated.
    ///
    /// This is a plain substring test, so `notflexjobs.com.example` is dropped too.
    pub fn should_keep(&self, url: &str) -> bool {
        !self
            .config
            .excluded_domains
            .iter()
            .any(|domain| url.contains(domain.as_str()))
    }

    /// Keeps the URLs that pass the filter, in their original order
    pub fn apply<I>(&self, urls: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        urls.into_iter()
            .filter(|url| {
                let keep = self.should_keep(url);
                if !keep {
                    ::log::debug!("Dropping excluded link: {}", url);
                }
                keep
            })
            .collect()
    }
}
