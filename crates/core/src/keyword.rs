//! The focus keyword and keyword-density helpers.

use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::html::collapse_whitespace;
use crate::{PostsmithError, Result};

/// A non-empty, whitespace-normalized focus keyword.
///
/// Case is preserved for display; matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// # Errors
    ///
    /// Returns [`PostsmithError::InvalidKeyword`] if `raw` is empty or whitespace-only.
    pub fn new(raw: &str) -> Result<Self> {
        let keyword = collapse_whitespace(raw);
        if keyword.is_empty() {
            return Err(PostsmithError::InvalidKeyword);
        }
        Ok(Self(keyword))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Occurrences of this keyword in `text`, ignoring case.
    pub fn occurrences_in(&self, text: &str) -> usize {
        count_occurrences(text, &self.0)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-overlapping, case-insensitive occurrences of `needle` in `haystack`.
///
/// Whitespace in both is normalized first, so a keyword that wraps across
/// lines in the source still counts.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    let needle = collapse_whitespace(needle).to_lowercase();
    if needle.is_empty() {
        return 0;
    }
    collapse_whitespace(haystack).to_lowercase().matches(&needle).count()
}

/// Cleans a secondary keyword list: whitespace is collapsed, blanks and
/// repeats (ignoring case) are dropped, and first-seen order is kept.
pub fn clean_secondary<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for term in terms {
        let term = collapse_whitespace(term.as_ref());
        if term.is_empty() || cleaned.iter().any(|t| t.eq_ignore_ascii_case(&term)) {
            continue;
        }
        cleaned.push(term);
    }
    cleaned
}

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]*[A-Za-z]").expect("word pattern compiles"));

const STOP_WORDS: &[&str] = &[
    "about", "after", "also", "because", "been", "before", "being", "between", "both", "could", "does", "each",
    "even", "every", "from", "have", "here", "into", "just", "like", "made", "make", "many", "more", "most", "much",
    "only", "other", "over", "same", "should", "some", "such", "than", "that", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "under", "very", "well", "were", "what", "when", "where", "which",
    "while", "will", "with", "within", "without", "would", "your",
];

/// The most frequent content words of `text`, excluding stop words and the
/// keyword's own words.
///
/// Words shorter than four letters are ignored. Ties are broken by first
/// appearance, so the result is stable for a given input.
pub fn topic_terms(text: &str, keyword: &Keyword, limit: usize) -> Vec<String> {
    let keyword_words: Vec<String> = keyword.as_str().split_whitespace().map(str::to_lowercase).collect();
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, found) in WORD.find_iter(text).enumerate() {
        let word = found.as_str().to_lowercase();
        if word.chars().count() < 4 || STOP_WORDS.contains(&word.as_str()) || keyword_words.contains(&word) {
            continue;
        }
        counts.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> =
        counts.into_iter().map(|(word, (count, first))| (word, count, first)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.into_iter().take(limit).map(|(word, _, _)| word).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_normalizes_whitespace() {
        let keyword = Keyword::new("  solar   panel\ncosts ").unwrap();
        assert_eq!(keyword.as_str(), "solar panel costs");
    }

    #[test]
    fn test_keyword_rejects_blank() {
        assert!(matches!(Keyword::new(""), Err(PostsmithError::InvalidKeyword)));
        assert!(matches!(Keyword::new(" \t\n"), Err(PostsmithError::InvalidKeyword)));
    }

    #[test]
    fn test_count_occurrences() {
        let text = "Solar Panels are great. solar panels\nsave money. SOLAR PANELS!";
        assert_eq!(count_occurrences(text, "solar panels"), 3);
        assert_eq!(count_occurrences(text, "wind"), 0);
        assert_eq!(count_occurrences(text, "  "), 0);
    }

    #[test]
    fn test_topic_terms_ranked_by_frequency() {
        let keyword = Keyword::new("solar panels").unwrap();
        let text = "Inverters convert power. Batteries store power. Inverters fail sometimes; \
                    batteries rarely do. Solar panels feed inverters with power from the panels.";
        let terms = topic_terms(text, &keyword, 3);
        assert_eq!(terms, vec!["inverters".to_string(), "power".to_string(), "batteries".to_string()]);
    }

    #[test]
    fn test_topic_terms_skip_stop_words() {
        let keyword = Keyword::new("roofing").unwrap();
        let terms = topic_terms("This that with from their roofing roofing shingles", &keyword, 5);
        assert_eq!(terms, vec!["shingles".to_string()]);
    }

    #[test]
    fn test_clean_secondary() {
        let cleaned = clean_secondary(&["net metering", " ", "Net  Metering", "battery storage"]);
        assert_eq!(cleaned, vec!["net metering".to_string(), "battery storage".to_string()]);
    }
}
