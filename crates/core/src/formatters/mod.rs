pub mod json;

pub use json::{document_to_json, metadata_to_json};
