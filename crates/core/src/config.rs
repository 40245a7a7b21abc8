//! Generator configuration.
//!
//! Every threshold the pipeline enforces lives in [`GeneratorConfig`] and is
//! passed explicitly to each component, so tests can vary limits freely.
//! Configuration can be built in code with [`GeneratorConfigBuilder`] or read
//! from a TOML file:
//!
//! ```toml
//! min_word_count = 1800
//! organization = "Example Energy"
//! site_url = "https://www.example.com"
//!
//! [internal_link]
//! href = "https://www.example.com/services/"
//! anchor = "residential solar services"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use time::Date;
use url::Url;

use crate::chart::ChartSpec;
use crate::links::{is_authoritative, is_generic_anchor};
use crate::templates;
use crate::{PostsmithError, Result};

const CONFIG_DIR_NAME: &str = "postsmith";
const CONFIG_FILE_NAME: &str = "config.toml";

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Inclusive character-length limits with a preferred sub-range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
    pub optimal_min: usize,
    pub optimal_max: usize,
}

impl LengthBounds {
    pub const fn new(min: usize, max: usize, optimal_min: usize, optimal_max: usize) -> Self {
        Self { min, max, optimal_min, optimal_max }
    }

    pub fn contains(&self, length: usize) -> bool {
        (self.min..=self.max).contains(&length)
    }

    pub fn is_optimal(&self, length: usize) -> bool {
        (self.optimal_min..=self.optimal_max).contains(&length)
    }

    fn is_consistent(&self) -> bool {
        self.min <= self.optimal_min && self.optimal_min <= self.optimal_max && self.optimal_max <= self.max
    }
}

/// A hyperlink with its descriptive anchor text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkSpec {
    pub href: String,
    pub anchor: String,
}

impl LinkSpec {
    pub fn new(href: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self { href: href.into(), anchor: anchor.into() }
    }
}

/// Configuration for document generation.
///
/// # Example
///
/// ```rust
/// use postsmith_core::GeneratorConfig;
///
/// let config = GeneratorConfig::builder()
///     .min_word_count(1800)
///     .h2_count(8)
///     .h3_count(12)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Minimum visible words in the body (default: 1500).
    pub min_word_count: usize,

    /// Number of `<h2>` headings, including conclusion and references (default: 11).
    pub h2_count: usize,

    /// Number of `<h3>` headings spread across topical sections (default: 20).
    pub h3_count: usize,

    /// Number of inline citation markers and reference entries (default: 7).
    pub citation_count: usize,

    /// Minimum keyword occurrences in visible body text (default: 5).
    pub min_keyword_occurrences: usize,

    /// The keyword must appear within this many words of the first paragraph (default: 150).
    pub intro_keyword_window: usize,

    /// Title length limits (default: 30–70, optimal 50–60).
    pub title_bounds: LengthBounds,

    /// Meta description length limits (default: 120–160, optimal 150–160).
    pub description_bounds: LengthBounds,

    /// Organization credited as author and publisher.
    pub organization: String,

    /// Root of the site the post is published on.
    pub site_url: Url,

    /// Publisher logo used in structured data.
    pub logo_url: Url,

    /// The single internal link placed in the body.
    pub internal_link: LinkSpec,

    /// Outbound citations; only authoritative ones are rendered.
    pub external_links: Vec<LinkSpec>,

    /// Hosts accepted as authoritative in addition to `.gov` and `.edu`.
    pub authority_allow_list: Vec<String>,

    /// Dataset rendered when the request carries no data points.
    pub default_chart: ChartSpec,

    /// Fixed publication date; today's date when unset.
    #[serde(with = "iso_date::option")]
    pub publish_date: Option<Date>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_word_count: 1500,
            h2_count: 11,
            h3_count: 20,
            citation_count: 7,
            min_keyword_occurrences: 5,
            intro_keyword_window: 150,
            title_bounds: LengthBounds::new(30, 70, 50, 60),
            description_bounds: LengthBounds::new(120, 160, 150, 160),
            organization: "SolarTopps".to_string(),
            site_url: Url::parse("https://www.solartopps.com/").expect("static URL is valid"),
            logo_url: Url::parse("https://www.solartopps.com/logo.png").expect("static URL is valid"),
            internal_link: LinkSpec::new(
                "https://www.solartopps.com/commercial-solar/",
                "commercial solar services page",
            ),
            external_links: vec![
                LinkSpec::new(
                    "https://www.energy.gov/eere/solar/homeowners-guide-going-solar",
                    "U.S. Department of Energy homeowner's guide to going solar",
                ),
                LinkSpec::new(
                    "https://www.nrel.gov/solar/",
                    "National Renewable Energy Laboratory solar research",
                ),
            ],
            authority_allow_list: vec!["iea.org".to_string(), "irena.org".to_string(), "seia.org".to_string()],
            default_chart: ChartSpec::default(),
            publish_date: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new builder for GeneratorConfig.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Loads configuration from TOML.
    ///
    /// An explicit `path` must exist. Without one, the user config file
    /// (`<config dir>/postsmith/config.toml`) is used when present, and the
    /// defaults otherwise. The loaded configuration is validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) if !path.exists() => return Err(PostsmithError::FileNotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|p| p.exists()),
        };

        let config = match path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading generator config");
                let raw = fs::read_to_string(&path)?;
                Self::from_toml(&raw)?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| PostsmithError::Config(e.to_string()))
    }

    /// `<config dir>/postsmith/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Rejects configurations the generator cannot satisfy.
    pub fn validate(&self) -> Result<()> {
        let max_h2 = templates::TOPICAL_SECTIONS.len() + 2;
        if !(3..=max_h2).contains(&self.h2_count) {
            return Err(PostsmithError::Config(format!("h2_count must be between 3 and {max_h2}, got {}", self.h2_count)));
        }

        let max_h3 = self.topical_section_count() * templates::SUBSECTIONS_PER_SECTION;
        if self.h3_count > max_h3 {
            return Err(PostsmithError::Config(format!(
                "h3_count {} exceeds the {max_h3} subsections available for {} topical sections",
                self.h3_count,
                self.topical_section_count()
            )));
        }

        if self.citation_count == 0 {
            return Err(PostsmithError::Config("citation_count must be at least 1".to_string()));
        }

        if self.intro_keyword_window == 0 {
            return Err(PostsmithError::Config("intro_keyword_window must be at least 1".to_string()));
        }

        for (name, bounds) in [("title_bounds", &self.title_bounds), ("description_bounds", &self.description_bounds)] {
            if !bounds.is_consistent() {
                return Err(PostsmithError::Config(format!("{name} must satisfy min <= optimal_min <= optimal_max <= max")));
            }
        }

        for link in std::iter::once(&self.internal_link).chain(&self.external_links) {
            if is_generic_anchor(&link.anchor) {
                return Err(PostsmithError::Config(format!("anchor text {:?} is not descriptive", link.anchor)));
            }
        }

        if self.authoritative_links().next().is_none() {
            return Err(PostsmithError::Config(
                "at least one external link must point to a .gov, .edu or allow-listed host".to_string(),
            ));
        }

        Ok(())
    }

    /// Sections between the introduction and the conclusion.
    pub fn topical_section_count(&self) -> usize {
        self.h2_count.saturating_sub(2)
    }

    /// External links that pass the authority heuristic.
    pub fn authoritative_links(&self) -> impl Iterator<Item = &LinkSpec> {
        self.external_links
            .iter()
            .filter(|link| is_authoritative(&link.href, &self.authority_allow_list))
    }

    /// `<site_url>/blog/<slug>/`.
    pub fn canonical_url(&self, slug: &str) -> Result<Url> {
        self.site_url
            .join(&format!("blog/{slug}/"))
            .map_err(|e| PostsmithError::InvalidUrl(e.to_string()))
    }

    /// Featured image location for a slug.
    pub fn image_url(&self, slug: &str) -> Result<Url> {
        self.site_url
            .join(&format!("images/{slug}-featured.jpg"))
            .map_err(|e| PostsmithError::InvalidUrl(e.to_string()))
    }

    /// The configured publication date, or today's UTC date.
    pub fn resolve_publish_date(&self) -> Date {
        self.publish_date.unwrap_or_else(|| time::OffsetDateTime::now_utc().date())
    }
}

/// Builder for GeneratorConfig.
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: GeneratorConfig::default() }
    }

    pub fn min_word_count(mut self, value: usize) -> Self {
        self.config.min_word_count = value;
        self
    }

    pub fn h2_count(mut self, value: usize) -> Self {
        self.config.h2_count = value;
        self
    }

    pub fn h3_count(mut self, value: usize) -> Self {
        self.config.h3_count = value;
        self
    }

    pub fn citation_count(mut self, value: usize) -> Self {
        self.config.citation_count = value;
        self
    }

    pub fn min_keyword_occurrences(mut self, value: usize) -> Self {
        self.config.min_keyword_occurrences = value;
        self
    }

    pub fn intro_keyword_window(mut self, value: usize) -> Self {
        self.config.intro_keyword_window = value;
        self
    }

    pub fn title_bounds(mut self, value: LengthBounds) -> Self {
        self.config.title_bounds = value;
        self
    }

    pub fn description_bounds(mut self, value: LengthBounds) -> Self {
        self.config.description_bounds = value;
        self
    }

    pub fn organization(mut self, value: impl Into<String>) -> Self {
        self.config.organization = value.into();
        self
    }

    pub fn site_url(mut self, value: Url) -> Self {
        self.config.site_url = value;
        self
    }

    pub fn internal_link(mut self, value: LinkSpec) -> Self {
        self.config.internal_link = value;
        self
    }

    pub fn external_links(mut self, value: Vec<LinkSpec>) -> Self {
        self.config.external_links = value;
        self
    }

    pub fn default_chart(mut self, value: ChartSpec) -> Self {
        self.config.default_chart = value;
        self
    }

    /// Pins the publication date, making output reproducible.
    pub fn publish_date(mut self, value: Date) -> Self {
        self.config.publish_date = Some(value);
        self
    }

    /// Builds the config.
    pub fn build(self) -> GeneratorConfig {
        self.config
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_word_count, 1500);
        assert_eq!(config.h2_count, 11);
        assert_eq!(config.h3_count, 20);
        assert_eq!(config.citation_count, 7);
        assert_eq!(config.title_bounds, LengthBounds::new(30, 70, 50, 60));
        assert_eq!(config.description_bounds, LengthBounds::new(120, 160, 150, 160));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::builder()
            .min_word_count(900)
            .h2_count(5)
            .h3_count(6)
            .publish_date(date!(2025 - 03 - 01))
            .build();
        assert_eq!(config.min_word_count, 900);
        assert_eq!(config.topical_section_count(), 3);
        assert_eq!(config.resolve_publish_date(), date!(2025 - 03 - 01));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_heading_counts() {
        assert!(GeneratorConfig::builder().h2_count(2).build().validate().is_err());
        assert!(GeneratorConfig::builder().h2_count(99).build().validate().is_err());
        assert!(GeneratorConfig::builder().h2_count(4).h3_count(10).build().validate().is_err());
    }

    #[test]
    fn test_validate_intro_window() {
        assert!(GeneratorConfig::builder().intro_keyword_window(0).build().validate().is_err());
        assert!(GeneratorConfig::builder().intro_keyword_window(1).build().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_generic_anchor() {
        let config = GeneratorConfig::builder()
            .internal_link(LinkSpec::new("https://www.solartopps.com/contact/", "Click here"))
            .build();
        assert!(matches!(config.validate(), Err(PostsmithError::Config(_))));
    }

    #[test]
    fn test_validate_requires_authoritative_link() {
        let config = GeneratorConfig::builder()
            .external_links(vec![LinkSpec::new("https://blog.example.com/solar", "an industry blog post")])
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bounds_consistency() {
        let config = GeneratorConfig::builder().title_bounds(LengthBounds::new(60, 50, 55, 55)).build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_canonical_url() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.canonical_url("solar-costs").unwrap().as_str(),
            "https://www.solartopps.com/blog/solar-costs/"
        );
    }

    #[test]
    fn test_from_toml() {
        let raw = r#"
            min_word_count = 1800
            organization = "Example Energy"
            site_url = "https://www.example.com/"
            publish_date = "2025-06-30"

            [internal_link]
            href = "https://www.example.com/services/"
            anchor = "residential solar services"
        "#;
        let config = GeneratorConfig::from_toml(raw).unwrap();
        assert_eq!(config.min_word_count, 1800);
        assert_eq!(config.organization, "Example Energy");
        assert_eq!(config.internal_link.anchor, "residential solar services");
        assert_eq!(config.publish_date, Some(date!(2025 - 06 - 30)));
        assert_eq!(config.h2_count, 11);
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(matches!(GeneratorConfig::from_toml("min_word_count = \"lots\""), Err(PostsmithError::Config(_))));
    }

    #[test]
    fn test_load_explicit_missing() {
        let result = GeneratorConfig::load(Some(Path::new("/nonexistent/postsmith.toml")));
        assert!(matches!(result, Err(PostsmithError::FileNotFound(_))));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("postsmith.toml");
        fs::write(&path, "citation_count = 4\n").unwrap();

        let config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.citation_count, 4);
    }
}
