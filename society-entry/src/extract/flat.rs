use regex::Regex;
use std::sync::LazyLock;

// one letter, optional hyphen, digits: "A-101", "b202"
static FLAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]-?[0-9]+").expect("flat pattern compiles"));

/// First flat-like token, kept exactly as typed.
pub fn first_flat_reference(text: &str) -> Option<String> {
    FLAT.find(text).map(|m| m.as_str().to_string())
}
