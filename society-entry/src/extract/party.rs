/// Words that describe the entry rather than name a person.
const STOP_WORDS: [&str; 7] = ["maintenance", "received", "expense", "paid", "from", "to", "for"];

fn is_name_like(word: &str) -> bool {
    word.chars().count() > 2
        && !word.chars().any(|c| c.is_ascii_digit())
        && !STOP_WORDS.contains(&word.to_lowercase().as_str())
}

/// Coarse party-name guess: the first two words that are longer than two
/// characters, carry no digit and are not stop words.
///
/// No grammar here. Category words ("electricity") and narration words slip
/// through.
pub fn guess_party_name(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().filter(|w| is_name_like(w)).take(2).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}
