//! Small text helpers shared by the renderers and the extractor.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Collapses runs of whitespace to single spaces and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Counts whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of characters, which is what the length bounds are measured in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
