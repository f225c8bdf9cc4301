//! A small CSS selector subset: compound selectors built from a tag name (or
//! `*`), `#id`, `.class`, `[attr]` and `[attr=value]`, joined by the
//! descendant combinator (whitespace).

use super::{NodeId, Page};
use crate::error::{FilterError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(String, Option<String>)>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attributes.is_empty()
    }

    fn matches(&self, page: &Page, id: NodeId) -> bool {
        let Some(name) = page.tag_name(id) else { return false };
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(name) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if page.attribute(id, "id") != Some(want.as_str()) {
                return false;
            }
        }
        if !self.classes.is_empty() {
            let classes = page.attribute(id, "class").unwrap_or("");
            if !self
                .classes
                .iter()
                .all(|c| classes.split_whitespace().any(|have| have == c))
            {
                return false;
            }
        }
        self.attributes.iter().all(|(name, value)| {
            match (page.attribute(id, name), value) {
                (Some(have), Some(want)) => have == want,
                (Some(_), None) => true,
                (None, _) => false,
            }
        })
    }
}

/// Parsed selector; a chain of compounds where each one must match an
/// ancestor of the element matched by the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Compound>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self> {
        let err = |reason: &str| FilterError::Selector {
            selector: source.to_string(),
            reason: reason.to_string(),
        };
        let mut steps = Vec::new();
        let mut cur = Compound::default();
        let mut chars = source.chars().peekable();
        while let Some(&c) = chars.peek() {
            match c {
                c if c.is_whitespace() => {
                    chars.next();
                    if !cur.is_empty() {
                        steps.push(std::mem::take(&mut cur));
                    }
                }
                '*' => {
                    chars.next();
                    if !cur.is_empty() {
                        return Err(err("`*` must come first in a compound selector"));
                    }
                    cur.tag = Some("*".to_string());
                }
                '.' => {
                    chars.next();
                    let ident = take_ident(&mut chars);
                    if ident.is_empty() {
                        return Err(err("expected class name after `.`"));
                    }
                    cur.classes.push(ident);
                }
                '#' => {
                    chars.next();
                    let ident = take_ident(&mut chars);
                    if ident.is_empty() {
                        return Err(err("expected id after `#`"));
                    }
                    cur.id = Some(ident);
                }
                '[' => {
                    chars.next();
                    let name = take_ident(&mut chars);
                    if name.is_empty() {
                        return Err(err("expected attribute name after `[`"));
                    }
                    let value = match chars.next() {
                        Some(']') => None,
                        Some('=') => {
                            let v = take_value(&mut chars).ok_or_else(|| err("unterminated attribute value"))?;
                            if chars.next() != Some(']') {
                                return Err(err("expected `]`"));
                            }
                            Some(v)
                        }
                        _ => return Err(err("expected `]` or `=`")),
                    };
                    cur.attributes.push((name, value));
                }
                c if is_ident_char(c) => {
                    if !cur.is_empty() {
                        return Err(err("tag name must come first in a compound selector"));
                    }
                    cur.tag = Some(take_ident(&mut chars));
                }
                other => return Err(err(&format!("unsupported character `{}`", other))),
            }
        }
        if !cur.is_empty() {
            steps.push(cur);
        }
        if steps.is_empty() {
            return Err(err("empty selector"));
        }
        for step in &mut steps {
            if step.tag.as_deref() == Some("*") {
                step.tag = None;
            }
        }
        Ok(Self { steps })
    }

    /// Whether element `id` matches, looking up ancestors for outer steps.
    pub fn matches(&self, page: &Page, id: NodeId) -> bool {
        let Some((last, outer)) = self.steps.split_last() else { return false };
        if !last.matches(page, id) {
            return false;
        }
        let mut ancestor = page.parent(id);
        for step in outer.iter().rev() {
            loop {
                match ancestor {
                    Some(a) if step.matches(page, a) => {
                        ancestor = page.parent(a);
                        break;
                    }
                    Some(a) => ancestor = page.parent(a),
                    None => return false,
                }
            }
        }
        true
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        out.push(c);
        chars.next();
    }
    out
}

fn take_value(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<String> {
    match chars.peek().copied() {
        Some(q @ ('"' | '\'')) => {
            chars.next();
            let mut out = String::new();
            for c in chars.by_ref() {
                if c == q {
                    return Some(out);
                }
                out.push(c);
            }
            None
        }
        _ => Some(take_ident(chars)),
    }
}
