//! Text cleanup applied before tokenization
//!
//! Keeps word characters, whitespace and the punctuation the sentence
//! splitter needs (`. , ! ? ; :`). Everything else is dropped silently.

/// Punctuation that survives normalization
const KEPT_PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c)
}

/// Normalize raw text: drop disallowed characters, collapse whitespace runs
/// to a single space, trim both ends.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().filter(|&c| is_kept(c)) {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }

    out
}

/// Whitespace word count, the length measure used for every metric
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
