//! URL slug normalization.

use crate::{PostsmithError, Result};

/// Slug used when a title or keyword has no usable characters.
pub const FALLBACK_SLUG: &str = "blog-post";

/// Converts arbitrary text into a lowercase, hyphen-separated slug.
///
/// Every run of characters outside `[a-z0-9]` (after lowercasing) becomes a
/// single hyphen, and leading/trailing hyphens are dropped. The result always
/// matches `^[a-z0-9]+(-[a-z0-9]+)*$`.
///
/// # Errors
///
/// Returns [`PostsmithError::EmptyInput`] when nothing remains, e.g. for input
/// made entirely of punctuation.
///
/// # Example
///
/// ```rust
/// use postsmith_core::normalize_slug;
///
/// assert_eq!(normalize_slug("Solar Panel Costs | 2025!").unwrap(), "solar-panel-costs-2025");
/// assert!(normalize_slug("?!").is_err());
/// ```
pub fn normalize_slug(text: &str) -> Result<String> {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() { Err(PostsmithError::EmptyInput { input: text.to_string() }) } else { Ok(slug) }
}

/// Normalizes `text`, substituting [`FALLBACK_SLUG`] when it has no usable characters.
pub fn normalize_slug_or_default(text: &str) -> String {
    normalize_slug(text).unwrap_or_else(|_| FALLBACK_SLUG.to_string())
}

/// Checks the `^[a-z0-9]+(-[a-z0-9]+)*$` shape without a regex.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use rstest::rstest;

    #[rstest]
    #[case("solar panel installation costs 2025", "solar-panel-installation-costs-2025")]
    #[case("Complete Guide to Solar Panel Installation | SolarTopps", "complete-guide-to-solar-panel-installation-solartopps")]
    #[case("  --Leading and trailing--  ", "leading-and-trailing")]
    #[case("multiple   spaces___and---hyphens", "multiple-spaces-and-hyphens")]
    #[case("Café Résumé", "caf-r-sum")]
    #[case("ÀÉÎ 42", "42")]
    #[case("UPPER", "upper")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_slug(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("!!! ??? ---")]
    #[case("日本語")]
    fn test_normalize_empty(#[case] input: &str) {
        assert!(matches!(normalize_slug(input), Err(PostsmithError::EmptyInput { .. })));
    }

    #[test]
    fn test_output_shape() {
        let pattern = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
        let inputs = [
            "Hello, World!",
            "a",
            "-a-",
            "Rust & WebAssembly: a 2025 guide?",
            "tabs\tand\nnewlines",
            "emoji 🌞 power",
        ];
        for input in inputs {
            let slug = normalize_slug(input).unwrap();
            assert!(pattern.is_match(&slug), "{slug:?} from {input:?}");
            assert!(is_valid_slug(&slug));
        }
    }

    #[test]
    fn test_fallback() {
        assert_eq!(normalize_slug_or_default("***"), FALLBACK_SLUG);
        assert_eq!(normalize_slug_or_default("Solar"), "solar");
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("solar-2025"));
        assert!(!is_valid_slug("solar--2025"));
        assert!(!is_valid_slug("-solar"));
        assert!(!is_valid_slug("Solar"));
        assert!(!is_valid_slug(""));
    }
}
