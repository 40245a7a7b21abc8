//! Link classification for rendered bodies.
//!
//! The checks here are string and domain heuristics: an external link counts
//! as authoritative when its host ends in `.gov` or `.edu` or belongs to an
//! allow-listed domain, and anchor text is generic when it matches a small set
//! of placeholder phrases.

use serde::Serialize;
use url::Url;

use crate::html::collapse_whitespace;
use crate::parse::HtmlPage;
use crate::Result;

/// Anchor texts that say nothing about their destination.
pub const GENERIC_ANCHORS: &[&str] = &["click here", "read more", "here", "learn more", "this link", "link"];

const AUTHORITATIVE_SUFFIXES: &[&str] = &[".gov", ".edu"];

/// Where an anchor points relative to the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Same host as the site, or a root-relative path.
    Internal,
    /// Any other absolute http(s) destination.
    External,
    /// In-page `#fragment` reference such as a citation marker.
    Fragment,
}

/// A hyperlink found in a rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
    pub anchor: String,
    pub kind: LinkKind,
    pub opens_new_context: bool,
    pub no_referrer: bool,
}

/// Anchor links grouped by kind.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkReport {
    pub internal: Vec<Link>,
    pub external: Vec<Link>,
    pub fragments: Vec<Link>,
}

impl LinkReport {
    /// Links whose anchor text is a generic placeholder.
    pub fn generic_anchors(&self) -> impl Iterator<Item = &Link> {
        self.internal
            .iter()
            .chain(&self.external)
            .filter(|link| is_generic_anchor(&link.anchor))
    }
}

/// Collects and classifies every `<a href>` in `html` against `site`.
///
/// # Example
///
/// ```rust
/// use postsmith_core::audit_links;
/// use url::Url;
///
/// let site = Url::parse("https://www.solartopps.com/").unwrap();
/// let html = r##"<p><a href="/contact/">our contact page</a> <a href="#citation-1">[1]</a></p>"##;
/// let report = audit_links(html, &site).unwrap();
/// assert_eq!(report.internal.len(), 1);
/// assert_eq!(report.fragments.len(), 1);
/// ```
pub fn audit_links(html: &str, site: &Url) -> Result<LinkReport> {
    let page = HtmlPage::parse_fragment(html);
    let mut report = LinkReport::default();

    for anchor in page.select("a[href]")? {
        let Some(href) = anchor.attr("href") else { continue };
        let rel = anchor.attr("rel").unwrap_or_default();
        let kind = classify(href, site);
        let link = Link {
            href: href.to_string(),
            anchor: collapse_whitespace(&anchor.text()),
            kind,
            opens_new_context: anchor.attr("target") == Some("_blank"),
            no_referrer: rel.split_whitespace().any(|r| r == "noreferrer"),
        };

        match kind {
            LinkKind::Internal => report.internal.push(link),
            LinkKind::External => report.external.push(link),
            LinkKind::Fragment => report.fragments.push(link),
        }
    }

    Ok(report)
}

fn classify(href: &str, site: &Url) -> LinkKind {
    if href.starts_with('#') {
        return LinkKind::Fragment;
    }

    match Url::parse(href) {
        Ok(url) if url.host_str() == site.host_str() => LinkKind::Internal,
        Ok(_) => LinkKind::External,
        Err(_) => LinkKind::Internal,
    }
}

/// Whether `href` points at a `.gov`/`.edu` host or an allow-listed domain.
///
/// Allow-list entries match the host itself and any subdomain.
pub fn is_authoritative(href: &str, allow_list: &[String]) -> bool {
    let Ok(url) = Url::parse(href) else { return false };
    let Some(host) = url.host_str() else { return false };
    let host = host.to_ascii_lowercase();

    if AUTHORITATIVE_SUFFIXES.iter().any(|suffix| host.ends_with(suffix)) {
        return true;
    }

    allow_list.iter().any(|domain| {
        let domain = domain.to_ascii_lowercase();
        host == domain || host.ends_with(&format!(".{domain}"))
    })
}

/// Whether the anchor text is one of [`GENERIC_ANCHORS`] (case-insensitive).
pub fn is_generic_anchor(anchor: &str) -> bool {
    let normalized = collapse_whitespace(anchor).to_lowercase();
    let normalized = normalized.trim_end_matches(['.', '!', ':']);
    normalized.is_empty() || GENERIC_ANCHORS.contains(&normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn site() -> Url {
        Url::parse("https://www.solartopps.com/").unwrap()
    }

    #[rstest]
    #[case("https://www.energy.gov/solar", true)]
    #[case("https://www.nrel.gov/", true)]
    #[case("https://web.mit.edu/solar", true)]
    #[case("https://www.iea.org/reports", true)]
    #[case("https://iea.org/", true)]
    #[case("https://notiea.org/", false)]
    #[case("https://blog.example.com/solar", false)]
    #[case("/relative/path", false)]
    fn test_is_authoritative(#[case] href: &str, #[case] expected: bool) {
        let allow = vec!["iea.org".to_string()];
        assert_eq!(is_authoritative(href, &allow), expected);
    }

    #[rstest]
    #[case("click here", true)]
    #[case("Click Here", true)]
    #[case("  read   more ", true)]
    #[case("here.", true)]
    #[case("", true)]
    #[case("commercial solar services page", false)]
    #[case("Read more about net metering", false)]
    fn test_is_generic_anchor(#[case] anchor: &str, #[case] expected: bool) {
        assert_eq!(is_generic_anchor(anchor), expected);
    }

    #[test]
    fn test_audit_links() {
        let html = r##"
            <p>See our <a href="https://www.solartopps.com/commercial-solar/">commercial solar services page</a>.</p>
            <p><a href="https://www.energy.gov/solar" target="_blank" rel="noopener noreferrer">Department of Energy solar office</a></p>
            <p>Claim<a href="#citation-1" class="citation">[1]</a></p>
        "##;
        let report = audit_links(html, &site()).unwrap();

        assert_eq!(report.internal.len(), 1);
        assert_eq!(report.external.len(), 1);
        assert_eq!(report.fragments.len(), 1);
        assert!(report.external[0].opens_new_context);
        assert!(report.external[0].no_referrer);
        assert!(!report.internal[0].opens_new_context);
        assert_eq!(report.generic_anchors().count(), 0);
    }

    #[test]
    fn test_audit_flags_generic_anchor() {
        let html = r#"<a href="https://example.com/">click here</a>"#;
        let report = audit_links(html, &site()).unwrap();
        assert_eq!(report.generic_anchors().count(), 1);
    }

    #[test]
    fn test_relative_links_are_internal() {
        let report = audit_links(r#"<a href="/about/">about our installers</a>"#, &site()).unwrap();
        assert_eq!(report.internal.len(), 1);
        assert_eq!(report.internal[0].kind, LinkKind::Internal);
    }
}
