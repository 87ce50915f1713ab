//! Line-oriented parsing of numbered `Label: value` records
//!
//! A section fragment is cut into sub-records at each line that starts with
//! `<integer>. `, and each sub-record is folded line by line into a
//! [`FieldMap`]. The same parser serves every entity kind; only the
//! [`LabelTable`] differs.

use regex::Regex;
use std::sync::LazyLock;

/// `<integer>. ` at the start of a line (after optional markdown decoration)
static RE_RECORD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t*]*\d+\.[ \t]").expect("record marker pattern is valid")
});

/// Leading list marker on a key or line: `1. `, `-`, `*` or `•`
///
/// A number needs whitespace after its dot, so `3.5M` is left alone.
static RE_LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+\.\s+|[-*•]\s*)").expect("list marker pattern is valid")
});

/// Canonical lowercase label → field, for one entity kind
#[derive(Debug, Clone, Copy)]
pub struct LabelTable<F: 'static> {
    entries: &'static [(&'static str, F)],
}

impl<F: Copy> LabelTable<F> {
    /// Build a table from `(label, field)` pairs; labels must be lowercase
    pub const fn new(entries: &'static [(&'static str, F)]) -> Self {
        Self { entries }
    }

    /// Field for an already-normalized key
    pub fn lookup(&self, key: &str) -> Option<F> {
        self.entries
            .iter()
            .find(|(label, _)| *label == key)
            .map(|&(_, field)| field)
    }
}

/// Recognized fields of one sub-record, in the order they were found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<F> {
    fields: Vec<(F, String)>,
}

impl<F: Copy + PartialEq> FieldMap<F> {
    /// An empty mapping
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Value for a field, if it was present
    pub fn get(&self, field: F) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Number of recognized fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no recognized field was found
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Add a field unless it is already present; the first occurrence wins
    fn with(mut self, field: F, value: String) -> Self {
        if self.get(field).is_none() {
            self.fields.push((field, value));
        }
        self
    }
}

impl<F: Copy + PartialEq> Default for FieldMap<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Copy + PartialEq> FromIterator<(F, String)> for FieldMap<F> {
    fn from_iter<I: IntoIterator<Item = (F, String)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FieldMap::new(), |map, (field, value)| map.with(field, value))
    }
}

/// Cut a fragment into numbered sub-records
///
/// Each sub-record starts at its marker and keeps all following lines up
/// to the next marker. Non-blank text before the first marker is kept as a
/// leading sub-record.
pub fn split_records(fragment: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = RE_RECORD_MARKER
        .find_iter(fragment)
        .map(|m| m.start())
        .collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }

    starts
        .iter()
        .enumerate()
        .map(|(idx, &start)| {
            let end = starts.get(idx + 1).copied().unwrap_or(fragment.len());
            &fragment[start..end]
        })
        .filter(|record| !record.trim().is_empty())
        .collect()
}

/// Split one line into a normalized key and trimmed value
///
/// Only the first colon separates; later colons belong to the value.
/// Returns `None` when either side is empty.
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_value) = line.split_once(':')?;

    let key = normalize_key(raw_key);
    let mut value = raw_value.trim();
    // `**Label:** value` leaves the closing emphasis on the value side
    if raw_key.contains('*') {
        value = value.trim_start_matches('*').trim_start();
    }

    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value.to_string()))
}

/// Lowercase a key after stripping list markers and emphasis
pub fn normalize_key(raw: &str) -> String {
    let stripped = RE_LIST_MARKER.replace(raw, "");
    stripped
        .trim_matches(|c: char| c == '*' || c == '_' || c.is_whitespace())
        .to_lowercase()
}

/// Fold the lines of one sub-record into a field mapping
pub fn parse_record<F: Copy + PartialEq>(record: &str, labels: &LabelTable<F>) -> FieldMap<F> {
    record
        .lines()
        .filter_map(parse_line)
        .filter_map(|(key, value)| labels.lookup(&key).map(|field| (field, value)))
        .collect()
}

/// Parse every sub-record of a fragment, preserving order
///
/// An empty fragment yields no mappings.
pub fn parse_records<F: Copy + PartialEq>(fragment: &str, labels: &LabelTable<F>) -> Vec<FieldMap<F>> {
    split_records(fragment)
        .into_iter()
        .map(|record| parse_record(record, labels))
        .collect()
}

/// Strip a leading list marker from a free-text line
pub(crate) fn strip_list_marker(line: &str) -> &str {
    match RE_LIST_MARKER.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Field {
        Name,
    }

    const LABELS: LabelTable<Field> = LabelTable::new(&[("name", Field::Name)]);

    proptest! {
        /// Property: one mapping per numbered sub-record, never more
        #[test]
        fn test_mapping_count_matches_records(names in prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 0..8)) {
            let fragment: String = names
                .iter()
                .enumerate()
                .map(|(i, name)| format!("{}. Name: {}\nNotes: n/a\n", i + 1, name))
                .collect();
            let maps = parse_records(&fragment, &LABELS);
            prop_assert_eq!(maps.len(), names.len());
            for (map, name) in maps.iter().zip(&names) {
                prop_assert_eq!(map.get(Field::Name), Some(name.trim()));
            }
        }

        /// Property: everything after the first colon is the value
        #[test]
        fn test_value_is_everything_after_first_colon(value in "[^\\s][^\\n]{0,30}") {
            let line = format!("Name: {}", value);
            let (key, parsed) = parse_line(&line).unwrap();
            prop_assert_eq!(key, "name");
            prop_assert_eq!(parsed, value.trim());
        }
    }
}
