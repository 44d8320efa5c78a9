//! Small string helpers shared by the catalogs and the responder rules.

const TERM_PUNCTUATION: &[char] = &['?', '.', '!', ','];

/// Lowercase and trim a raw query.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Drops trailing `? . ! ,` and surrounding whitespace from an extracted term.
pub fn clean_term(term: &str) -> String {
    term.trim()
        .trim_end_matches(|c: char| TERM_PUNCTUATION.contains(&c) || c.is_whitespace())
        .trim()
        .to_string()
}

/// Either string contains the other. Callers pass lowercased text.
pub fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

pub fn capitalize_first(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn char_len(term: &str) -> usize {
    term.chars().count()
}
