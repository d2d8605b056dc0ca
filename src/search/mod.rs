pub mod duckduckgo;

pub use duckduckgo::DuckDuckGo;

use crate::filter::LinkFilter;

/// A search engine that turns a text query into candidate URLs
pub trait SearchProvider {
    /// Lazily yields at most `max_results` result URLs in ranking order.
    ///
    /// Provider failures end the sequence early; they are never surfaced as errors.
    fn search<'a>(&'a self, query: &str, max_results: usize)
    -> Box<dyn Iterator<Item = String> + 'a>;
}

impl<T: SearchProvider + ?Sized> SearchProvider for &T {
    fn search<'a>(
        &'a self,
        query: &str,
        max_results: usize,
    ) -> Box<dyn Iterator<Item = String> + 'a> {
        (**self).search(query, max_results)
    }
}

/// Runs `query` against `provider` and drops excluded links.
///
/// Order is preserved and duplicates are kept.
pub fn discover_links(
    provider: &dyn SearchProvider,
    query: &str,
    max_results: usize,
    filter: &LinkFilter,
) -> Vec<String> {
    ::log::info!("Searching for '{}' (up to {} results)", query, max_results);
    let links = filter.apply(provider.search(query, max_results));
    ::log::info!("Discovered {} candidate links", links.len());
    links
}
