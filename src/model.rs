use indexmap::IndexSet;
use serde::Serialize;

use crate::keys::{letter_key, parse_subjects, subject_key};

// ────────────────────────────────────────────────────────────────────────────
// SourceRow – what the document reports for one matched row
// ────────────────────────────────────────────────────────────────────────────

/// Raw data read from one row element before any keys are derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRow<N> {
    /// Handle to the row node in the document.
    pub element: N,
    /// Text of the row's first link, if it has one.
    pub link_text: Option<String>,
    /// Full text content of the row; used when the link text is missing or blank.
    pub text: String,
    /// Raw subject attribute value, if present.
    pub subjects: Option<String>,
}

impl<N> SourceRow<N> {
    pub fn new(element: N, link_text: impl Into<String>, subjects: Option<&str>) -> Self {
        let link_text = link_text.into();
        Self {
            element,
            text: link_text.clone(),
            link_text: Some(link_text),
            subjects: subjects.map(str::to_string),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RowRecord
// ────────────────────────────────────────────────────────────────────────────

/// One catalog entry with its derived letter and subject keys.
///
/// `element` is a handle into the document; the record never owns the node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct RowRecord<N> {
    pub name: String,
    pub letter: char,
    pub subjects: Vec<String>,
    #[serde(skip)]
    pub element: N,
}

impl<N> RowRecord<N> {
    pub fn from_source(row: SourceRow<N>) -> Self {
        let name = row
            .link_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| row.text.trim())
            .to_string();
        Self {
            letter: letter_key(&name),
            subjects: parse_subjects(row.subjects.as_deref()),
            name,
            element: row.element,
        }
    }

    /// Whether this record is visible under `field = value`. `value` is
    /// expected in key form (see [`Field::normalize`]).
    pub fn matches(&self, field: Field, value: &str) -> bool {
        match field {
            Field::Letter => {
                let mut chars = value.chars();
                chars.next() == Some(self.letter) && chars.next().is_none()
            }
            Field::Subject => self.subjects.iter().any(|s| s == value),
        }
    }
}

/// Which record attribute a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Letter,
    Subject,
}

impl Field {
    /// Parse a field name (`"letter"` / `"subject"`). Anything else is `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "letter" => Some(Field::Letter),
            "subject" => Some(Field::Subject),
            _ => None,
        }
    }

    /// Bring a filter value into the form stored on records. Subjects accept
    /// either the phrase (`"social sciences"`) or the key (`"social-sciences"`).
    pub fn normalize(self, value: &str) -> String {
        match self {
            Field::Letter => value.to_lowercase(),
            Field::Subject => subject_key(value),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CatalogIndex
// ────────────────────────────────────────────────────────────────────────────

/// Records in document order plus the unique letters (first-seen order) and
/// unique subjects (sorted case-insensitively). Built once, never mutated.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "")]
pub struct CatalogIndex<N> {
    records: Vec<RowRecord<N>>,
    letters: IndexSet<char>,
    subjects: Vec<String>,
}

impl<N> CatalogIndex<N> {
    pub fn build(rows: impl IntoIterator<Item = SourceRow<N>>) -> Self {
        let mut records = Vec::new();
        let mut letters = IndexSet::new();
        let mut subjects: IndexSet<String> = IndexSet::new();
        for row in rows {
            let record = RowRecord::from_source(row);
            letters.insert(record.letter);
            for s in &record.subjects {
                if !subjects.contains(s) {
                    subjects.insert(s.clone());
                }
            }
            records.push(record);
        }
        let mut subjects: Vec<String> = subjects.into_iter().collect();
        subjects.sort_by_cached_key(|s| s.to_lowercase());
        Self {
            records,
            letters,
            subjects,
        }
    }

    pub fn records(&self) -> &[RowRecord<N>] {
        &self.records
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }

    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching `field = value` in document order. `value` must
    /// already be normalized.
    pub fn matching<'a>(
        &'a self,
        field: Field,
        value: &'a str,
    ) -> impl Iterator<Item = &'a RowRecord<N>> + 'a {
        self.records.iter().filter(move |r| r.matches(field, value))
    }
}
