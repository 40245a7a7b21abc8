//! Metadata synthesis: title, meta description and slug for a keyword.
//!
//! Titles and descriptions are chosen from fixed templates and fitted to the
//! configured [`LengthBounds`]. Lengths are measured in characters.

use serde::Serialize;
use time::Date;

use crate::config::{GeneratorConfig, LengthBounds};
use crate::error::MetadataField;
use crate::html::char_len;
use crate::keyword::{Keyword, clean_secondary, topic_terms};
use crate::slug::{FALLBACK_SLUG, normalize_slug};
use crate::{PostsmithError, Result};

const TITLE_TEMPLATES: &[&str] = &[
    "{kw}: The Complete Expert Guide to Costs and Savings ({year})",
    "{kw}: Complete Expert Guide for {year}",
    "{kw}: Expert Guide {year}",
    "{kw} Guide {year}",
    "{kw}",
];

const DESCRIPTION_LEAD: &str = "Discover everything you need to know about {kw} in our expert guide.";

const DESCRIPTION_CTAS: &[&str] =
    &["Get practical tips, real costs and expert advice from {org}.", "Expert advice from {org}."];

const DESCRIPTION_PADS: &[&str] =
    &["Read the full guide today.", "Start planning now.", "Updated for {year}.", "Learn more inside."];

const TRAILING_SEPARATORS: &[char] = &[' ', ',', ':', ';', '-', '|', '.'];

/// Title, slug and description for a keyword, before the body exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataDraft {
    pub keyword: Keyword,
    pub title: String,
    pub slug: String,
    pub meta_description: String,
    pub secondary_keywords: Vec<String>,
    pub date_published: Date,
}

impl MetadataDraft {
    /// Keyword first, then secondary keywords, for the `keywords` meta tag.
    pub fn keywords(&self) -> Vec<String> {
        std::iter::once(self.keyword.to_string()).chain(self.secondary_keywords.iter().cloned()).collect()
    }
}

/// Derives title, slug and meta description for `keyword`.
///
/// The slug is `custom_slug` when it normalizes to something non-empty,
/// otherwise the normalized keyword, otherwise [`FALLBACK_SLUG`].
///
/// # Errors
///
/// - [`PostsmithError::InvalidKeyword`] when the keyword is blank.
/// - [`PostsmithError::MetadataBounds`] when no template can be fitted to the
///   configured bounds, which only happens with unusual bound settings.
///
/// # Example
///
/// ```rust
/// use postsmith_core::{GeneratorConfig, synthesize};
///
/// let config = GeneratorConfig::default();
/// let draft = synthesize("home battery storage", &[], None, None, &config).unwrap();
/// assert_eq!(draft.slug, "home-battery-storage");
/// assert!(config.title_bounds.contains(draft.title.chars().count()));
/// ```
pub fn synthesize(
    keyword: &str, secondary_keywords: &[String], reference: Option<&str>, custom_slug: Option<&str>,
    config: &GeneratorConfig,
) -> Result<MetadataDraft> {
    let keyword = Keyword::new(keyword)?;
    let date_published = config.resolve_publish_date();
    let year = date_published.year().to_string();

    let title = synthesize_title(&keyword, &year, &config.organization, &config.title_bounds)?;

    let terms = reference.map(|text| topic_terms(text, &keyword, 2)).unwrap_or_default();
    let meta_description =
        synthesize_description(&keyword, &year, &config.organization, &terms, &config.description_bounds)?;

    let slug = custom_slug
        .and_then(|custom| normalize_slug(custom).ok())
        .or_else(|| normalize_slug(keyword.as_str()).ok())
        .unwrap_or_else(|| {
            tracing::warn!(keyword = %keyword, "keyword has no slug characters, using fallback slug");
            FALLBACK_SLUG.to_string()
        });

    tracing::debug!(%title, %slug, description_len = char_len(&meta_description), "synthesized metadata");

    Ok(MetadataDraft {
        keyword,
        title,
        slug,
        meta_description,
        secondary_keywords: clean_secondary(secondary_keywords),
        date_published,
    })
}

/// Picks the first template in the optimal range, else the in-bounds template
/// closest to it. Overlong keywords are cut at a word boundary and short
/// results are padded with the organization name.
fn synthesize_title(keyword: &Keyword, year: &str, organization: &str, bounds: &LengthBounds) -> Result<String> {
    let candidates: Vec<String> = TITLE_TEMPLATES
        .iter()
        .map(|template| template.replace("{kw}", keyword.as_str()).replace("{year}", year))
        .collect();

    if let Some(optimal) = candidates.iter().find(|c| bounds.is_optimal(char_len(c))) {
        return Ok(optimal.clone());
    }

    let closest = candidates
        .iter()
        .filter(|c| bounds.contains(char_len(c)))
        .min_by_key(|c| distance_to_optimal(char_len(c), bounds));
    if let Some(title) = closest {
        return Ok(title.clone());
    }

    let mut title = keyword.to_string();
    if char_len(&title) > bounds.max {
        tracing::warn!(keyword = %keyword, max = bounds.max, "keyword longer than title limit, truncating");
        title = truncate_at_word(&title, bounds.max);
        if char_len(&title) < bounds.min {
            title = truncate_at_char(keyword.as_str(), bounds.max);
        }
    }
    if char_len(&title) < bounds.min {
        let padded = format!("{title} | {organization}");
        if char_len(&padded) <= bounds.max {
            tracing::warn!(%title, "title shorter than minimum, padding with organization");
            title = padded;
        }
    }

    check_bounds(MetadataField::Title, &title, bounds)?;
    Ok(title)
}

/// Lead sentence, then the longest call to action that fits, then short pad
/// clauses until the optimal minimum is reached.
fn synthesize_description(
    keyword: &Keyword, year: &str, organization: &str, terms: &[String], bounds: &LengthBounds,
) -> Result<String> {
    let mut description = DESCRIPTION_LEAD.replace("{kw}", keyword.as_str());
    if char_len(&description) > bounds.max {
        tracing::warn!(keyword = %keyword, "description lead too long, truncating");
        let cut = truncate_at_word(&description, bounds.max.saturating_sub(3));
        description = format!("{cut}...");
    }

    let ctas = DESCRIPTION_CTAS.iter().map(|cta| cta.replace("{org}", organization));
    for cta in ctas {
        if try_append(&mut description, &cta, bounds.max) {
            break;
        }
    }

    let mut pads: Vec<String> = Vec::new();
    if let [first, second, ..] = terms {
        pads.push(format!("Covers {first} and {second}."));
    }
    pads.extend(DESCRIPTION_PADS.iter().map(|pad| pad.replace("{year}", year)));

    for pad in &pads {
        if char_len(&description) >= bounds.optimal_min {
            break;
        }
        try_append(&mut description, pad, bounds.max);
    }

    check_bounds(MetadataField::Description, &description, bounds)?;
    Ok(description)
}

fn try_append(text: &mut String, sentence: &str, max: usize) -> bool {
    if char_len(text) + 1 + char_len(sentence) > max {
        return false;
    }
    text.push(' ');
    text.push_str(sentence);
    true
}

fn distance_to_optimal(length: usize, bounds: &LengthBounds) -> usize {
    if length < bounds.optimal_min {
        bounds.optimal_min - length
    } else {
        length.saturating_sub(bounds.optimal_max)
    }
}

/// Cuts `text` to at most `max` characters, preferring the last whitespace
/// before the limit, and drops trailing separators.
pub(crate) fn truncate_at_word(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }

    let end = text.char_indices().nth(max).map_or(text.len(), |(index, _)| index);
    let (head, rest) = text.split_at(end);

    let cut = if rest.starts_with(char::is_whitespace) {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(index) => &head[..index],
            None => head,
        }
    };

    cut.trim_end_matches(TRAILING_SEPARATORS).to_string()
}

/// Cuts `text` to at most `max` characters regardless of word boundaries,
/// then drops trailing separators.
fn truncate_at_char(text: &str, max: usize) -> String {
    let cut: String = text.chars().take(max).collect();
    cut.trim_end_matches(TRAILING_SEPARATORS).to_string()
}

fn check_bounds(field: MetadataField, text: &str, bounds: &LengthBounds) -> Result<()> {
    let length = char_len(text);
    if bounds.contains(length) {
        Ok(())
    } else {
        Err(PostsmithError::MetadataBounds { field, length, min: bounds.min, max: bounds.max })
    }
}
