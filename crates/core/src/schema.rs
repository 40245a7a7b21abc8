//! Schema.org `BlogPosting` structured data.

use serde::Serialize;
use time::Date;
use url::Url;

use crate::Result;
use crate::config::GeneratorConfig;
use crate::synthesize::MetadataDraft;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organization {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebPage {
    #[serde(rename = "@type")]
    pub kind: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

/// A JSON-LD `BlogPosting` block.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaBlock {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub headline: String,
    pub description: String,
    pub image: String,
    pub author: Organization,
    pub publisher: Organization,
    #[serde(with = "iso_date")]
    pub date_published: Date,
    #[serde(with = "iso_date")]
    pub date_modified: Date,
    pub main_entity_of_page: WebPage,
}

impl SchemaBlock {
    /// Pretty-printed JSON for embedding in a `<script type="application/ld+json">` element.
    ///
    /// `</` is escaped so that no value can close the script element early.
    pub fn to_json_ld(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?.replace("</", "<\\/"))
    }
}

/// Builds the structured-data block for a post at `canonical_url`.
///
/// `dateModified` equals `datePublished`. Author and publisher are the
/// configured organization; the publisher carries the logo.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{GeneratorConfig, emit_schema, synthesize};
///
/// let config = GeneratorConfig::default();
/// let draft = synthesize("solar inverters", &[], None, None, &config).unwrap();
/// let url = config.canonical_url(&draft.slug).unwrap();
/// let schema = emit_schema(&draft, &url, &config).unwrap();
/// assert_eq!(schema.kind, "BlogPosting");
/// ```
pub fn emit_schema(draft: &MetadataDraft, canonical_url: &Url, config: &GeneratorConfig) -> Result<SchemaBlock> {
    let image = config.image_url(&draft.slug)?;

    Ok(SchemaBlock {
        context: "https://schema.org",
        kind: "BlogPosting",
        headline: draft.title.clone(),
        description: draft.meta_description.clone(),
        image: image.to_string(),
        author: Organization { kind: "Organization", name: config.organization.clone(), logo: None },
        publisher: Organization {
            kind: "Organization",
            name: config.organization.clone(),
            logo: Some(ImageObject { kind: "ImageObject", url: config.logo_url.to_string() }),
        },
        date_published: draft.date_published,
        date_modified: draft.date_published,
        main_entity_of_page: WebPage { kind: "WebPage", id: canonical_url.to_string() },
    })
}
