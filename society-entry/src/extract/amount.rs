use regex::Regex;
use std::sync::LazyLock;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit-run pattern compiles"));

/// First run of ASCII digits in the text, as whole rupees.
///
/// Returns 0 when there is no digit run, or when the run does not fit in a
/// u64. Flat numbers are not skipped: in "A-101 paid 500" the amount is 101.
pub fn first_amount(text: &str) -> u64 {
    DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
