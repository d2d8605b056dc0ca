use scraper::{Html, Selector};
use std::sync::LazyLock;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));
static ANCHORS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));
static META_DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("meta selector is valid")
});

const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// A fetched page parsed into a queryable document
pub struct ParsedPage {
    document: Html,
}

impl ParsedPage {
    /// Parses raw HTML. Malformed markup is repaired by the parser, never rejected.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Text of the first `<title>` element, if there is one
    pub fn title(&self) -> Option<String> {
        self.document
            .select(&TITLE)
            .next()
            .map(|title| title.text().collect::<String>())
    }

    /// `href` values of every anchor in the document
    pub fn links(&self) -> Vec<String> {
        let links = self
            .document
            .select(&ANCHORS)
            .filter_map(|e| e.value().attr("href"))
            .map(|s| s.to_string())
            .collect::<Vec<String>>();

        ::log::debug!("HTML parser found {} links", links.len());
        links
    }

    /// `content` of `<meta name="description">`.
    ///
    /// The outer option tells whether the tag exists, the inner one whether it
    /// carries a `content` attribute.
    pub fn meta_description(&self) -> Option<Option<String>> {
        self.document
            .select(&META_DESCRIPTION)
            .next()
            .map(|meta| meta.value().attr("content").map(|c| c.to_string()))
    }

    /// Visible text of the document, concatenated in document order.
    ///
    /// Text inside `<script>`, `<style>` and `<template>` is left out.
    pub fn text(&self) -> String {
        self.document
            .root_element()
            .descendants()
            .filter_map(|node| node.value().as_text().map(|text| (node, text)))
            .filter(|(node, _)| {
                !node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| NON_CONTENT_ELEMENTS.contains(&element.name()))
                })
            })
            .map(|(_, text)| &**text)
            .collect()
    }
}

/// Parses HTML content and only extracts links (no text)
pub fn parse_links_only(html: &str) -> Vec<String> {
    ParsedPage::parse(html).links()
}
