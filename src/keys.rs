//! Key derivation for catalog rows: first letters, subject keys and the
//! display labels built from them.
//!
//! Subject keys are lowercase with the *first* space replaced by a hyphen
//! (`"Social Sciences"` becomes `"social-sciences"`). Only the first space is
//! touched, so `"social sciences education"` becomes
//! `"social-sciences education"`, and turning a key back into a phrase only
//! restores that one hyphen.

/// Letter used for rows whose name is empty.
pub const BLANK_LETTER: char = '#';

/// First character of `name` (after trimming), lowercased.
pub fn letter_key(name: &str) -> char {
    match name.trim().chars().next() {
        Some(c) => c.to_lowercase().next().unwrap_or(c),
        None => BLANK_LETTER,
    }
}

/// Normalize a subject string into a key: trim, lowercase, first space to hyphen.
pub fn subject_key(subject: &str) -> String {
    subject.trim().to_lowercase().replacen(' ', "-", 1)
}

/// Parse a raw subject attribute like `"History, Social Sciences"` into keys.
///
/// Tokens are separated by a comma followed by one whitespace character; a bare
/// comma does not split. Empty tokens and duplicates are dropped, first
/// occurrence wins.
pub fn parse_subjects(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else { return Vec::new() };
    let mut keys: Vec<String> = Vec::new();
    for token in split_comma_space(raw) {
        let key = subject_key(token);
        if !key.is_empty() && !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

fn split_comma_space(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut it = s.char_indices().peekable();
    while let Some((i, c)) = it.next() {
        if c != ',' {
            continue;
        }
        if let Some(&(j, next)) = it.peek() {
            if next.is_whitespace() {
                out.push(&s[start..i]);
                start = j + next.len_utf8();
                it.next();
            }
        }
    }
    out.push(&s[start..]);
    out
}

/// Turn a key back into a phrase for matching/captions. Only the first hyphen
/// is restored, mirroring [`subject_key`].
pub fn subject_phrase(key: &str) -> String {
    key.replacen('-', " ", 1)
}

/// Menu label for a subject key: every hyphen-separated part is capitalized and
/// the parts are joined with spaces.
pub fn subject_label(key: &str) -> String {
    key.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

/// Caption text for a phrase: every space-separated word is capitalized.
pub fn title_case(phrase: &str) -> String {
    phrase.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
