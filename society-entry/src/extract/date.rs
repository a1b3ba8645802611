use regex::Regex;
use std::sync::LazyLock;

use crate::types::OccurredOn;

// D{1,2} sep M{1,2} sep Y{2,4}, sep is "/" or "-"
static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{2,4})").expect("date pattern compiles")
});

/// First day-month-year date in the text.
///
/// Two-digit years are read as 20YY. Day and month are not range checked, so
/// "45/13/2025" comes back as 2025-13-45.
pub fn first_date(text: &str) -> Option<OccurredOn> {
    let caps = DATE.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = match &caps[3] {
        y if y.len() == 2 => format!("20{y}"),
        y => y.to_string(),
    };
    Some(OccurredOn::new(year, month, day))
}
