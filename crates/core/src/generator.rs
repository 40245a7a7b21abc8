//! Main entry point for document generation.
//!
//! [`Generator`] runs the whole pipeline for one request: metadata synthesis
//! and body assembly, then the schema block, then packaging.

use crate::assemble::assemble;
use crate::chart::DataPoints;
use crate::config::GeneratorConfig;
use crate::document::{Document, package};
use crate::fetch::{FetchConfig, ReferenceSource, load_reference};
use crate::keyword::Keyword;
use crate::schema::emit_schema;
use crate::synthesize::synthesize;
use crate::Result;

/// Inputs for a single generation.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{DataPoints, GenerationRequest};
///
/// let request = GenerationRequest::new("commercial solar financing")
///     .secondary_keywords(["power purchase agreements", "tax equity"])
///     .data_points(DataPoints::parse("2022:12,2023:18,2024:27").unwrap());
/// assert_eq!(request.keyword(), "commercial solar financing");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    keyword: String,
    secondary_keywords: Vec<String>,
    reference: Option<String>,
    custom_slug: Option<String>,
    data_points: Option<DataPoints>,
}

impl GenerationRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), ..Self::default() }
    }

    pub fn secondary_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secondary_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Reference text that has already been loaded.
    pub fn reference(mut self, text: impl Into<String>) -> Self {
        self.reference = Some(text.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.custom_slug = Some(slug.into());
        self
    }

    pub fn data_points(mut self, points: DataPoints) -> Self {
        self.data_points = Some(points);
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Runs the generation pipeline with a fixed configuration.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{GenerationRequest, Generator};
///
/// let generator = Generator::new();
/// let document = generator.generate(&GenerationRequest::new("solar water heaters")).unwrap();
/// assert_eq!(document.metadata.slug, "solar-water-heaters");
/// assert!(document.metadata.word_count >= 1500);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with default settings.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    /// Creates a generator with a custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a complete document.
    ///
    /// The keyword is checked before any other work, so an invalid request
    /// never produces partial output.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PostsmithError::InvalidKeyword`] for a blank keyword,
    /// [`crate::PostsmithError::Config`] when the configuration fails
    /// [`GeneratorConfig::validate`], and propagates synthesis and packaging
    /// errors.
    pub fn generate(&self, request: &GenerationRequest) -> Result<Document> {
        let keyword = Keyword::new(&request.keyword)?;
        self.config.validate()?;
        tracing::debug!(keyword = %keyword, "generating document");

        let reference = request.reference.as_deref();
        let draft = synthesize(
            keyword.as_str(),
            &request.secondary_keywords,
            reference,
            request.custom_slug.as_deref(),
            &self.config,
        )?;
        let body = assemble(
            keyword.as_str(),
            &request.secondary_keywords,
            reference,
            request.data_points.as_ref(),
            &self.config,
        )?;

        let canonical_url = self.config.canonical_url(&draft.slug)?;
        let schema = emit_schema(&draft, &canonical_url, &self.config)?;
        package(&draft, &body, schema, &self.config)
    }

    /// Loads reference material from `source`, then generates.
    pub async fn generate_with_reference(
        &self, request: GenerationRequest, source: &ReferenceSource, fetch_config: &FetchConfig,
    ) -> Result<Document> {
        Keyword::new(&request.keyword)?;
        let reference = load_reference(source, fetch_config).await?;
        self.generate(&request.reference(reference))
    }
}

/// Generates a document for `keyword` with default settings.
pub fn generate(keyword: &str) -> Result<Document> {
    Generator::new().generate(&GenerationRequest::new(keyword))
}
