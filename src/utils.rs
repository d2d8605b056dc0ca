/// Returns the network location of a URL or href, exactly as written.
///
/// This is the authority text between `//` and the next `/`, `?` or `#`, so case,
/// explicit ports and userinfo are kept (`http://A.com:80/` gives `A.com:80`).
/// Relative references, `mailto:`/`javascript:` links and anything without a
/// `//` authority yield an empty string. Scheme-relative references
/// (`//host/path`) keep their host.
pub fn network_location(raw: &str) -> String {
    let raw = raw.trim();
    let rest = match raw.split_once(':') {
        Some((scheme, rest)) if is_scheme(scheme) => rest,
        _ => raw,
    };

    let Some(authority) = rest.strip_prefix("//") else {
        return String::new();
    };
    let end = authority.find(['/', '?', '#']).unwrap_or(authority.len());
    authority[..end].to_string()
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Percentage of `hrefs` pointing away from `domain`, 0 when there are none.
pub fn external_link_percentage<S: AsRef<str>>(domain: &str, hrefs: &[S]) -> f64 {
    if hrefs.is_empty() {
        return 0.0;
    }

    let external = hrefs
        .iter()
        .map(|href| network_location(href.as_ref()))
        .filter(|location| !location.is_empty() && location != domain)
        .count();

    external as f64 * 100.0 / hrefs.len() as f64
}
