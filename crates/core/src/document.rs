//! The packaged document and its HTML rendering.
//!
//! This module defines [`Document`], the immutable result of generation. It
//! combines the synthesized metadata, the assembled body and the structured
//! data block, and renders them as a standalone HTML page whose head carries
//! the title, description and schema and whose body exposes the slug in a
//! labeled metadata section.

use std::fmt::Write;

use serde::Serialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use url::Url;

use crate::assemble::ArticleBody;
use crate::config::{GeneratorConfig, LengthBounds};
use crate::error::MetadataField;
use crate::html::{char_len, count_words, escape_html};
use crate::parse::HtmlPage;
use crate::schema::SchemaBlock;
use crate::slug::is_valid_slug;
use crate::synthesize::MetadataDraft;
use crate::{PostsmithError, Result};

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(iso_date, Date, ISO_DATE);

/// Final metadata of a packaged document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentMetadata {
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    /// Words of visible body text, markup excluded.
    pub word_count: usize,
    #[serde(with = "iso_date")]
    pub date_published: Date,
}

/// A complete, validated post.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    pub metadata: DocumentMetadata,
    /// Focus keyword, secondary keywords and reference topic terms.
    pub keywords: Vec<String>,
    pub canonical_url: Url,
    pub image_url: Url,
    pub organization: String,
    /// The article body as HTML.
    pub body: String,
    pub schema: SchemaBlock,
}

/// Combines metadata, body and schema into a [`Document`].
///
/// The word count is recomputed from the body's visible text.
///
/// # Errors
///
/// - [`PostsmithError::WordCountShortfall`] if the body has fewer than
///   `min_word_count` words.
/// - [`PostsmithError::MetadataBounds`] if the title or description length is
///   outside its bounds, or the slug is malformed.
pub fn package(draft: &MetadataDraft, body: &ArticleBody, schema: SchemaBlock, config: &GeneratorConfig) -> Result<Document> {
    let word_count = count_words(&HtmlPage::parse_fragment(&body.html).visible_text());
    if word_count < config.min_word_count {
        return Err(PostsmithError::WordCountShortfall { count: word_count, min: config.min_word_count });
    }

    check_length(MetadataField::Title, &draft.title, &config.title_bounds)?;
    check_length(MetadataField::Description, &draft.meta_description, &config.description_bounds)?;
    if !is_valid_slug(&draft.slug) {
        let length = char_len(&draft.slug);
        return Err(PostsmithError::MetadataBounds { field: MetadataField::Slug, length, min: 1, max: length.max(1) });
    }

    let mut keywords = draft.keywords();
    for term in &body.topic_terms {
        if !keywords.iter().any(|k| k.eq_ignore_ascii_case(term)) {
            keywords.push(term.clone());
        }
    }

    let document = Document {
        metadata: DocumentMetadata {
            title: draft.title.clone(),
            slug: draft.slug.clone(),
            meta_description: draft.meta_description.clone(),
            word_count,
            date_published: draft.date_published,
        },
        keywords,
        canonical_url: config.canonical_url(&draft.slug)?,
        image_url: config.image_url(&draft.slug)?,
        organization: config.organization.clone(),
        body: body.html.clone(),
        schema,
    };

    tracing::info!(slug = %document.metadata.slug, words = word_count, "packaged document");
    Ok(document)
}

fn check_length(field: MetadataField, text: &str, bounds: &LengthBounds) -> Result<()> {
    let length = char_len(text);
    if bounds.contains(length) {
        Ok(())
    } else {
        Err(PostsmithError::MetadataBounds { field, length, min: bounds.min, max: bounds.max })
    }
}

impl Document {
    /// Renders the standalone HTML page.
    pub fn render(&self) -> Result<String> {
        let meta = &self.metadata;
        let title = escape_html(&meta.title);
        let description = escape_html(&meta.meta_description);
        let canonical = escape_html(self.canonical_url.as_str());
        let image = escape_html(self.image_url.as_str());
        let organization = escape_html(&self.organization);
        let json_ld = self.schema.to_json_ld()?;
        let published = self.metadata.date_published.format(ISO_DATE)?;

        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"UTF-8\">\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
        let _ = writeln!(html, "<title>{title}</title>");
        let _ = writeln!(html, "<meta name=\"description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta name=\"keywords\" content=\"{}\">", escape_html(&self.keywords.join(", ")));
        let _ = writeln!(html, "<meta name=\"author\" content=\"{organization}\">");
        let _ = writeln!(html, "<link rel=\"canonical\" href=\"{canonical}\">");

        let _ = writeln!(html, "<meta property=\"og:type\" content=\"article\">");
        let _ = writeln!(html, "<meta property=\"og:title\" content=\"{title}\">");
        let _ = writeln!(html, "<meta property=\"og:description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta property=\"og:url\" content=\"{canonical}\">");
        let _ = writeln!(html, "<meta property=\"og:image\" content=\"{image}\">");
        let _ = writeln!(html, "<meta property=\"og:site_name\" content=\"{organization}\">");
        let _ = writeln!(html, "<meta property=\"article:published_time\" content=\"{published}\">");

        let _ = writeln!(html, "<meta name=\"twitter:card\" content=\"summary_large_image\">");
        let _ = writeln!(html, "<meta name=\"twitter:title\" content=\"{title}\">");
        let _ = writeln!(html, "<meta name=\"twitter:description\" content=\"{description}\">");
        let _ = writeln!(html, "<meta name=\"twitter:image\" content=\"{image}\">");

        let _ = writeln!(html, "<script type=\"application/ld+json\">\n{json_ld}\n</script>");
        html.push_str("</head>\n<body>\n");

        html.push_str("<section class=\"post-meta\">\n");
        let _ = writeln!(html, "<p><strong>Slug:</strong> {}</p>", escape_html(&meta.slug));
        let _ = writeln!(html, "<p><strong>Published:</strong> {published}</p>");
        let _ = writeln!(html, "<p><strong>Word count:</strong> {}</p>", meta.word_count);
        html.push_str("</section>\n");

        html.push_str(&self.body);
        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}
