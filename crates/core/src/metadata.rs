//! Metadata extraction from an existing document.
//!
//! This is the read-back half of the pipeline: it takes a rendered post (one
//! produced here or supplied from elsewhere) and recovers the title,
//! description and slug needed to publish it.
//!
//! Sources, in order:
//! - title: the `<title>` element
//! - description: `<meta name="description">`
//! - slug: a `<strong>Slug:</strong> value` field in the body, else the
//!   normalized title

use serde::Serialize;

use crate::error::MetadataField;
use crate::html::collapse_whitespace;
use crate::parse::HtmlPage;
use crate::slug::normalize_slug_or_default;
use crate::{PostsmithError, Result};

/// Title, description and slug read back from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedMetadata {
    pub title: String,
    pub description: String,
    pub slug: String,
}

/// Extracts publishing metadata from HTML text.
///
/// All three values are whitespace-collapsed. A title or description that is
/// present but blank counts as missing.
///
/// # Errors
///
/// Returns [`PostsmithError::MetadataExtraction`] naming the first missing
/// field (title before description).
///
/// # Example
///
/// ```rust
/// use postsmith_core::extract_metadata;
///
/// let html = r#"<html><head><title>Solar  Guide</title>
///     <meta name="description" content="All about solar."></head>
///     <body><p><strong>Slug:</strong> solar-guide-2025</p></body></html>"#;
///
/// let meta = extract_metadata(html).unwrap();
/// assert_eq!(meta.title, "Solar Guide");
/// assert_eq!(meta.slug, "solar-guide-2025");
/// ```
pub fn extract_metadata(document: &str) -> Result<ExtractedMetadata> {
    let page = HtmlPage::parse(document);

    let title = page
        .title()
        .filter(|t| !t.is_empty())
        .ok_or(PostsmithError::MetadataExtraction { field: MetadataField::Title })?;

    let description = page
        .meta_content("description")
        .map(|d| collapse_whitespace(&d))
        .filter(|d| !d.is_empty())
        .ok_or(PostsmithError::MetadataExtraction { field: MetadataField::Description })?;

    let slug = match page.labeled_field("slug") {
        Some(slug) => slug,
        None => {
            tracing::debug!(%title, "no slug field in document, deriving from title");
            normalize_slug_or_default(&title)
        }
    };

    Ok(ExtractedMetadata { title, description, slug })
}
