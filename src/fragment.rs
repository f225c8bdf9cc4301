//! Turn an address fragment into a filter action.

use crate::menu::{Action, ResetFragment};

/// Route a fragment such as `#b`, `#/history` or `#all`.
///
/// Anything up to the last `/` is treated as a path prefix and dropped. What
/// remains is `Reset` when empty or `all`, a letter when it is a single
/// character, and a subject key otherwise.
pub fn route(fragment: &str) -> Action {
    let f = fragment.trim();
    let f = f.strip_prefix('#').unwrap_or(f);
    let f = match f.rfind('/') {
        Some(i) => &f[i + 1..],
        None => f,
    };
    if f.is_empty() || f == ResetFragment::MARKER {
        return Action::Reset;
    }
    let mut chars = f.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Action::ShowLetter(c.to_lowercase().next().unwrap_or(c)),
        _ => Action::ShowSubject(f.to_lowercase()),
    }
}
