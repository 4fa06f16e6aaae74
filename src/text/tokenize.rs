use unicode_segmentation::UnicodeSegmentation;

/// Word tokens per UAX #29 word boundaries.
///
/// Whitespace and punctuation are not tokens; "Hello, world!" tokenizes to
/// `["Hello", "world"]`.
pub fn words(text: &str) -> Vec<&str> {
    text.unicode_words().collect()
}

/// Line tokens. Interior empty lines are kept so they can match across the
/// two inputs; a trailing newline does not produce a final empty token.
pub fn lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Extended grapheme clusters, so character-level diffs never split a
/// combining sequence.
pub fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}
