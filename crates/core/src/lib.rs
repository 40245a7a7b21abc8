pub mod assemble;
pub mod chart;
pub mod config;
pub mod document;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod generator;
pub mod html;
pub mod keyword;
pub mod links;
pub mod metadata;
pub mod parse;
pub mod publish;
pub mod schema;
pub mod slug;
pub mod synthesize;
pub(crate) mod templates;

pub use assemble::{ArticleBody, assemble};
pub use chart::{ChartSpec, DataPoint, DataPoints, render_chart};
pub use config::{GeneratorConfig, GeneratorConfigBuilder, LengthBounds, LinkSpec};
pub use document::{Document, DocumentMetadata, package};
pub use error::{MetadataField, PostsmithError, Result};
pub use fetch::{FetchConfig, ReferenceSource};
pub use fetch::{fetch_file, fetch_url, load_reference};
pub use formatters::{document_to_json, metadata_to_json};
pub use generator::{GenerationRequest, Generator, generate};
#[doc(hidden)]
pub use html::{collapse_whitespace, count_words, escape_html};
pub use keyword::Keyword;
pub use links::{Link, LinkKind, LinkReport, audit_links, is_authoritative, is_generic_anchor};
pub use metadata::{ExtractedMetadata, extract_metadata};
#[doc(hidden)]
pub use parse::{Element, HtmlPage};
pub use publish::{
    PublishOutcome, PublishPayload, PublishResponse, PublishState, PublishStatus, Publisher, PublisherConfig, publish,
};
pub use schema::{SchemaBlock, emit_schema};
pub use slug::{FALLBACK_SLUG, is_valid_slug, normalize_slug, normalize_slug_or_default};
pub use synthesize::{MetadataDraft, synthesize};
