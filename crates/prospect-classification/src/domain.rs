//! Source domain extraction and tender-domain matching.

use std::sync::LazyLock;

use regex::Regex;

static HOST: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*://)?(?:[^@/?#]*@)?([^/:?#]+)").ok()
});

/// Lower-cased host of `url`, without credentials, port, or a leading `www.`.
pub fn extract_domain(url: &str) -> Option<String> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let host = HOST
        .as_ref()?
        .captures(trimmed)?
        .get(1)?
        .as_str()
        .to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host).to_string();
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Case-insensitive substring match against the tender-domain patterns.
pub fn is_tender_domain(domain: &str, patterns: &[String]) -> bool {
    let domain = domain.to_ascii_lowercase();
    patterns
        .iter()
        .any(|p| !p.is_empty() && domain.contains(&p.to_ascii_lowercase()))
}
