//! Error types for Postsmith operations.
//!
//! This module defines the main error type [`PostsmithError`] which represents
//! every failure that can occur while loading reference material, assembling a
//! document, reading one back, or publishing it.
//!
//! # Example
//!
//! ```rust
//! use postsmith_core::{PostsmithError, Result};
//!
//! fn require_keyword(keyword: &str) -> Result<&str> {
//!     if keyword.trim().is_empty() {
//!         return Err(PostsmithError::InvalidKeyword);
//!     }
//!     Ok(keyword)
//! }
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A required metadata field of a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataField {
    Title,
    Description,
    Slug,
}

impl fmt::Display for MetadataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Slug => "slug",
        };
        f.write_str(name)
    }
}

/// Main error type for generation and publishing operations.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{MetadataField, PostsmithError, extract_metadata};
///
/// match extract_metadata("<html><head><title>Only a title here</title></head></html>") {
///     Err(PostsmithError::MetadataExtraction { field: MetadataField::Description }) => {}
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PostsmithError {
    /// The keyword was empty or whitespace-only.
    #[error("Keyword must not be empty")]
    InvalidKeyword,

    /// Slug normalization produced nothing usable.
    ///
    /// Returned when the input contained no ASCII letters or digits.
    /// Callers are expected to substitute a fallback slug.
    #[error("Cannot build a slug from {input:?}: no letters or digits")]
    EmptyInput { input: String },

    /// Content assembly was requested without a keyword.
    #[error("Cannot assemble content without a keyword")]
    InsufficientContent,

    /// Malformed `label:value` chart data.
    #[error("Invalid data points: {0}")]
    InvalidDataPoints(String),

    /// Reference material was empty after loading.
    #[error("Reference material from {channel} is empty")]
    EmptyReference { channel: String },

    /// A synthesized metadata field fell outside its length bounds.
    ///
    /// This indicates a defect in synthesis rather than bad user input.
    #[error("{field} length {length} is outside the allowed range {min}..={max}")]
    MetadataBounds { field: MetadataField, length: usize, min: usize, max: usize },

    /// The packaged body is shorter than the configured minimum.
    #[error("Document has {count} words, below the minimum of {min}")]
    WordCountShortfall { count: usize, min: usize },

    /// A required field is missing from a document being read back.
    #[error("Missing required metadata field: {field}")]
    MetadataExtraction { field: MetadataField },

    /// The publishing API rejected the credentials (401/403).
    #[error("Authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    /// The publishing API returned any other non-success status.
    #[error("Upload failed with status {status}: {body}")]
    Upload { status: u16, body: String },

    /// The publishing API answered with something that is not a post object.
    #[error("Unexpected response from publishing API: {0}")]
    InvalidResponse(String),

    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when an HTTP request exceeds the configured timeout duration.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, typically from an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParse(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File exceeds the configured size limit.
    #[error("File {path} is {size} bytes, larger than the {max} byte limit")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    /// File content is not valid UTF-8.
    #[error("File {0} is not valid UTF-8")]
    InvalidEncoding(PathBuf),

    /// Wraps standard I/O errors for file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid generator or publisher configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A date could not be written in its ISO form.
    #[error("Date formatting failed: {0}")]
    DateFormat(#[from] time::error::Format),

    /// JSON serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for PostsmithError.
///
/// This is a convenience alias for `std::result::Result<T, PostsmithError>`.
pub type Result<T> = std::result::Result<T, PostsmithError>;
