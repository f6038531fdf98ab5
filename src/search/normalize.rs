//! Text canonicalization for indexed content and search input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Any character in a Unicode punctuation category.
static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}").unwrap());

/// Anything that is not a Unicode decimal digit.
static NON_DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Remove punctuation and surrounding whitespace.
///
/// Trimming happens after stripping too, so text like `"! hi"` does not
/// keep the space that followed the removed punctuation.
fn strip_punctuation(text: &str) -> String {
    PUNCTUATION_RE.replace_all(text.trim(), "").trim().to_string()
}

/// Canonical form of text written into the index.
///
/// Leading and trailing whitespace (newlines included) is trimmed and every
/// punctuation character is removed. Everything else is kept in order.
///
/// # Example
///
/// ```
/// use conversation_search::search::normalize_for_indexing;
///
/// assert_eq!(normalize_for_indexing("  Bob!\n"), "Bob");
/// assert_eq!(normalize_for_indexing("+1 (555) 123-4567"), "+1 555 1234567");
/// ```
pub fn normalize_for_indexing(text: &str) -> String {
    strip_punctuation(text)
}

/// Canonical form of user search input.
///
/// The text is normalized like indexed content. When the input contains
/// digits, an `OR` branch with just those digits is appended so formatted
/// phone numbers still find the digit runs stored in the index.
///
/// # Example
///
/// ```
/// use conversation_search::search::normalize_for_query;
///
/// assert_eq!(normalize_for_query("alice"), "alice");
/// assert_eq!(normalize_for_query("555-1234"), "5551234 OR 5551234");
/// assert_eq!(normalize_for_query("(555) 123"), "555 123 OR 555123");
/// ```
pub fn normalize_for_query(text: &str) -> String {
    let trimmed = text.trim();
    let normalized_chars = strip_punctuation(trimmed);
    let normalized_digits = NON_DIGIT_RE.replace_all(trimmed, "");

    if normalized_digits.is_empty() {
        normalized_chars
    } else {
        format!("{} OR {}", normalized_chars, normalized_digits)
    }
}
