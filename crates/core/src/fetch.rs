//! Reference material loading from pasted text, URLs and files.
//!
//! Reference material only seeds topic terms; it is read once per request
//! and never copied into the output.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::parse::HtmlPage;
use crate::{PostsmithError, Result};

/// Largest reference file accepted, in bytes (16 MiB).
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// HTTP and file limits for loading reference material.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: format!("postsmith/{} (+https://www.solartopps.com/)", env!("CARGO_PKG_VERSION")),
            max_file_size: MAX_FILE_SIZE,
        }
    }
}

/// Where reference material comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    Text(String),
    Url(String),
    File(PathBuf),
}

impl ReferenceSource {
    fn channel(&self) -> String {
        match self {
            Self::Text(_) => "pasted text".to_string(),
            Self::Url(url) => url.clone(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Loads reference material and trims it.
///
/// # Errors
///
/// Propagates fetch and file errors, and returns
/// [`PostsmithError::EmptyReference`] when nothing but whitespace was loaded.
pub async fn load_reference(source: &ReferenceSource, config: &FetchConfig) -> Result<String> {
    let raw = match source {
        ReferenceSource::Text(text) => text.clone(),
        ReferenceSource::Url(url) => fetch_url(url, config).await?,
        ReferenceSource::File(path) => fetch_file(path, config)?,
    };

    let text = raw.trim();
    if text.is_empty() {
        return Err(PostsmithError::EmptyReference { channel: source.channel() });
    }

    tracing::debug!(channel = %source.channel(), chars = text.chars().count(), "loaded reference material");
    Ok(text.to_string())
}

/// Fetches a page and returns the readable text of its main content.
///
/// Only `http` and `https` URLs are accepted. The main content is the first
/// non-empty `<article>`, `<main>` or common content container, falling back
/// to `<body>`; scripts and styles are dropped.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| PostsmithError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(PostsmithError::InvalidUrl(format!("unsupported scheme {:?}, expected http or https", parsed_url.scheme())));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(PostsmithError::Http)?;

    tracing::debug!(url = %parsed_url, "fetching reference page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| timeout_or_http(e, config.timeout))?
        .error_for_status()?;

    let html = response.text().await.map_err(|e| timeout_or_http(e, config.timeout))?;
    Ok(HtmlPage::parse(&html).main_text())
}

fn timeout_or_http(error: reqwest::Error, timeout: u64) -> PostsmithError {
    if error.is_timeout() { PostsmithError::Timeout { timeout } } else { PostsmithError::Http(error) }
}

/// Reads a UTF-8 text file of at most `config.max_file_size` bytes.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &Path, config: &FetchConfig) -> Result<String> {
    if !path.exists() {
        return Err(PostsmithError::FileNotFound(path.to_path_buf()));
    }

    let size = fs::metadata(path)?.len();
    if size > config.max_file_size {
        return Err(PostsmithError::FileTooLarge { path: path.to_path_buf(), size, max: config.max_file_size });
    }

    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| PostsmithError::InvalidEncoding(path.to_path_buf()))
}
