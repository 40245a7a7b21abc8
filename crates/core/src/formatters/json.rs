use crate::Result;
use crate::document::{Document, DocumentMetadata};
use serde::Serialize;

/// Convert a document to `{ metadata, canonical_url, html }`.
pub fn document_to_json(document: &Document, pretty: bool) -> Result<String> {
    #[derive(Serialize)]
    struct Compact<'a> {
        metadata: &'a DocumentMetadata,
        canonical_url: &'a str,
        html: String,
    }

    let compact = Compact { metadata: &document.metadata, canonical_url: document.canonical_url.as_str(), html: document.render()? };
    to_json(&compact, pretty)
}

/// Convert metadata, a publish payload or a publish response to JSON
pub fn metadata_to_json<T: Serialize>(metadata: &T, pretty: bool) -> Result<String> {
    to_json(metadata, pretty)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}
