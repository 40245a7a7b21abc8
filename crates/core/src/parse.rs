//! HTML parsing and text extraction.
//!
//! This module provides the [`HtmlPage`] and [`Element`] types used to read
//! rendered posts back, count their visible words, and pull readable text out
//! of fetched reference pages.
//!
//! # Example
//!
//! ```rust
//! use postsmith_core::HtmlPage;
//!
//! let html = r#"
//!     <html>
//!         <head><title>Title</title><style>p { color: red }</style></head>
//!         <body><h1>Heading</h1><p>Paragraph</p></body>
//!     </html>
//! "#;
//!
//! let page = HtmlPage::parse(html);
//! assert_eq!(page.title(), Some("Title".to_string()));
//! assert_eq!(page.visible_text(), "Heading Paragraph");
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::html::collapse_whitespace;
use crate::{PostsmithError, Result};

/// Elements whose text never reaches the reader.
const HIDDEN_TAGS: &[&str] = &["head", "title", "script", "style", "noscript", "template"];

/// Containers tried, in order, when looking for the readable part of a page.
const MAIN_CONTENT_SELECTORS: &[&str] =
    &["article", "main", ".post-content", ".article-body", ".entry-content", ".content", "body"];

/// A parsed HTML document or fragment.
pub struct HtmlPage {
    html: Html,
}

impl HtmlPage {
    /// Parses a full HTML document.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Parses an HTML fragment such as an article body.
    pub fn parse_fragment(html: &str) -> Self {
        Self { html: Html::parse_fragment(html) }
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`PostsmithError::HtmlParse`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use postsmith_core::HtmlPage;
    ///
    /// let page = HtmlPage::parse_fragment(r#"<p class="c">First</p><p class="c">Second</p>"#);
    /// assert_eq!(page.select("p.c").unwrap().len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|element| Element { element }).collect())
    }

    /// Text of the first `<title>` element, whitespace-collapsed.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| collapse_whitespace(&el.text().collect::<String>()))
    }

    /// Gets meta tag content by `name` or `property` attribute.
    pub fn meta_content(&self, attr: &str) -> Option<String> {
        for key in ["name", "property"] {
            let selector = format!("meta[{}=\"{}\"]", key, attr);
            if let Ok(elements) = self.select(&selector)
                && let Some(el) = elements.first()
                && let Some(content) = el.attr("content")
            {
                return Some(content.to_string());
            }
        }

        None
    }

    /// Text the reader actually sees, with markup removed.
    ///
    /// Text nodes are joined with single spaces so that adjacent block
    /// elements never glue words together; `<head>`, scripts and styles are
    /// skipped.
    pub fn visible_text(&self) -> String {
        let body = Selector::parse("body").ok().and_then(|sel| self.html.select(&sel).next());
        visible_text_of(body.unwrap_or_else(|| self.html.root_element()))
    }

    /// Readable text of the main content container.
    ///
    /// Prefers `<article>`, then `<main>`, then common CMS content classes,
    /// then the whole body.
    pub fn main_text(&self) -> String {
        for selector in MAIN_CONTENT_SELECTORS {
            let Ok(sel) = Selector::parse(selector) else { continue };
            if let Some(element) = self.html.select(&sel).next() {
                let text = visible_text_of(element);
                if !text.is_empty() {
                    return text;
                }
            }
        }

        self.visible_text()
    }

    /// Value written after a bold label, e.g. `<strong>Slug:</strong> my-post`.
    ///
    /// The label is matched case-insensitively and must end with a colon
    /// inside the bold element. The value is the text that follows up to the
    /// next element.
    pub fn labeled_field(&self, label: &str) -> Option<String> {
        let selector = Selector::parse("strong, b").ok()?;

        for el in self.html.select(&selector) {
            let text = collapse_whitespace(&el.text().collect::<String>());
            let Some(name) = text.strip_suffix(':') else { continue };
            if !name.trim().eq_ignore_ascii_case(label) {
                continue;
            }

            let mut value = String::new();
            let mut sibling = el.next_sibling();
            while let Some(node) = sibling {
                match node.value().as_text() {
                    Some(text) => value.push_str(text),
                    None => break,
                }
                sibling = node.next_sibling();
            }

            let value = collapse_whitespace(&value);
            if !value.is_empty() {
                return Some(value);
            }
        }

        None
    }
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use postsmith_core::HtmlPage;
///
/// let page = HtmlPage::parse_fragment(r#"<a href="https://example.com">Link text</a>"#);
/// let link = &page.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PostsmithError::HtmlParse(format!("Invalid selector: {}", e)))
}

fn visible_text_of(element: ElementRef<'_>) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in element.descendants() {
        let Some(text) = node.value().as_text() else { continue };
        let hidden = node
            .ancestors()
            .any(|ancestor| ancestor.value().as_element().is_some_and(|el| HIDDEN_TAGS.contains(&el.name())));
        if !hidden {
            parts.push(&**text);
        }
    }

    collapse_whitespace(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <meta name="description" content="A short description.">
            <meta property="og:title" content="OG Title">
            <title>
                Test   Page
            </title>
            <script type="application/ld+json">{"headline": "hidden"}</script>
        </head>
        <body>
            <section class="post-meta"><p><strong>Slug:</strong> test-page </p></section>
            <h1>Heading</h1>
            <p class="content">Paragraph 1</p>
            <p class="content">Paragraph 2</p>
            <a href="https://example.com">Link</a>
            <style>.content { color: red; }</style>
        </body>
        </html>
    "#;

    #[test]
    fn test_title_collapses_whitespace() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        assert_eq!(page.title(), Some("Test Page".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        let elements = page.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Paragraph 1");
        assert_eq!(elements[1].text(), "Paragraph 2");
    }

    #[test]
    fn test_invalid_selector() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        assert!(matches!(page.select("[[invalid"), Err(PostsmithError::HtmlParse(_))));
    }

    #[test]
    fn test_meta_content() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        assert_eq!(page.meta_content("description"), Some("A short description.".to_string()));
        assert_eq!(page.meta_content("og:title"), Some("OG Title".to_string()));
        assert_eq!(page.meta_content("keywords"), None);
    }

    #[test]
    fn test_visible_text_skips_hidden() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        let text = page.visible_text();

        assert!(text.starts_with("Slug: test-page Heading Paragraph 1 Paragraph 2 Link"));
        assert!(!text.contains("hidden"));
        assert!(!text.contains("color"));
        assert!(!text.contains("Test Page"));
    }

    #[test]
    fn test_visible_text_separates_blocks() {
        let page = HtmlPage::parse_fragment("<p>Hello world</p><p>Second paragraph</p>");
        assert_eq!(page.visible_text(), "Hello world Second paragraph");
    }

    #[test]
    fn test_labeled_field() {
        let page = HtmlPage::parse(SAMPLE_HTML);
        assert_eq!(page.labeled_field("slug"), Some("test-page".to_string()));
        assert_eq!(page.labeled_field("Author"), None);
    }

    #[test]
    fn test_main_text_prefers_article() {
        let html = r#"<html><body><nav>Menu</nav><article><p>Story text</p></article><footer>Legal</footer></body></html>"#;
        assert_eq!(HtmlPage::parse(html).main_text(), "Story text");
    }

    #[test]
    fn test_main_text_falls_back_to_body() {
        let html = r#"<html><body><div>Just a div</div><script>var x = 1;</script></body></html>"#;
        assert_eq!(HtmlPage::parse(html).main_text(), "Just a div");
    }
}
