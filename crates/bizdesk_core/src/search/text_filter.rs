//! Case-insensitive substring filter for record lists.
//!
//! # Responsibility
//! - Match a trimmed free-text query against each record's searchable fields.
//!
//! # Invariants
//! - Blank (empty or whitespace-only) queries match every record.
//! - Matching is plain substring, never token or fuzzy.
//! - Absent fields are skipped; stored values are compared untrimmed.
//! - Output keeps input order; filtering is idempotent.

/// Accessor returning one searchable field of a record, `None` when absent.
pub type FieldAccessor<T> = fn(&T) -> Option<&str>;

/// Record kinds that expose a fixed list of searchable text fields.
pub trait Searchable: 'static {
    /// Fields checked in order; the first hit wins.
    const SEARCH_FIELDS: &'static [FieldAccessor<Self>];
}

/// Normalized free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    /// Trims and lowercases `raw` once so matching stays allocation-light.
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns whether this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns the normalized (trimmed, lowercased) query text.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns whether any searchable field of `record` contains the query.
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if self.is_empty() {
            return true;
        }

        T::SEARCH_FIELDS
            .iter()
            .filter_map(|field| field(record))
            .any(|value| contains_ignore_case(value, &self.needle))
    }
}

/// Returns references to the records matching `query`, in input order.
pub fn filter_refs<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let query = TextQuery::new(query);
    records
        .iter()
        .filter(|record| query.matches(*record))
        .collect()
}

/// Returns owned copies of the records matching `query`, in input order.
///
/// A blank query returns the whole list unchanged.
pub fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    filter_refs(records, query).into_iter().cloned().collect()
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }

    if haystack.is_ascii() && needle_lower.is_ascii() {
        let needle = needle_lower.as_bytes();
        return haystack
            .as_bytes()
            .windows(needle.len())
            .any(|window| window.eq_ignore_ascii_case(needle));
    }

    haystack.to_lowercase().contains(needle_lower)
}
