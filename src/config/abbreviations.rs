//! Abbreviation dictionary loading.
//!
//! The dictionary is a flat JSON object mapping full terms to their
//! abbreviations. Loading is fail-open: a missing or malformed file logs a
//! warning and yields an empty table, so downstream stages run as a no-op
//! pass-through. Abbreviation compression is a best-effort enhancement,
//! not a correctness-critical operation.

use std::path::Path;

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};

/// Default location of the abbreviation dictionary
pub const DEFAULT_ABBREVIATIONS_PATH: &str = "config/abbreviations.json";

/// One dictionary entry with its precompiled match pattern.
#[derive(Debug, Clone)]
pub struct AbbrEntry {
    /// The long-form term as authored (case preserved)
    pub term: String,
    /// The replacement text, inserted with exactly this casing
    pub abbreviation: String,
    /// Case-insensitive whole-word pattern for `term`
    pub pattern: Regex,
}

/// An ordered, immutable mapping of full terms to abbreviations.
///
/// Entry order is the JSON authoring order and is load-bearing: the
/// substitution engine applies entries in this order, and when two terms'
/// patterns overlap the earlier entry's replacement removes that text
/// before the later pattern is evaluated.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTable {
    entries: Vec<AbbrEntry>,
}

impl AbbreviationTable {
    /// Load the dictionary from a JSON file.
    ///
    /// Never fails: missing file, unreadable file, or malformed JSON all
    /// log a warning and return an empty table.
    pub fn load(path: &Path) -> Self {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!(
                    "Failed to read abbreviation file {}: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        let map: IndexMap<String, String> = match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                log::warn!(
                    "Malformed abbreviation file {}: {}",
                    path.display(),
                    e
                );
                return Self::default();
            }
        };

        let table = Self::from_entries(map);
        log::info!(
            "Loaded {} abbreviations from {}",
            table.len(),
            path.display()
        );
        table
    }

    /// Build a table from in-memory (term, abbreviation) pairs, preserving
    /// iteration order. Empty terms are skipped with a log line.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|(term, abbreviation)| {
                if term.is_empty() {
                    log::warn!("Skipping abbreviation entry with empty term");
                    return None;
                }
                match compile_word_pattern(&term) {
                    Some(pattern) => Some(AbbrEntry {
                        term,
                        abbreviation,
                        pattern,
                    }),
                    None => {
                        log::warn!("Skipping unmatchable abbreviation term {:?}", term);
                        None
                    }
                }
            })
            .collect();

        Self { entries }
    }

    /// Entries in authoring order.
    pub fn entries(&self) -> &[AbbrEntry] {
        &self.entries
    }

    /// Case-insensitive lookup of a term's abbreviation.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.term.eq_ignore_ascii_case(term))
            .map(|e| e.abbreviation.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compile the whole-word, case-insensitive pattern for a term.
///
/// A match succeeds only when the matched span is not adjacent to another
/// alphanumeric/underscore character on either side. The term itself is
/// escaped, so dictionary keys containing regex metacharacters match
/// literally.
fn compile_word_pattern(term: &str) -> Option<Regex> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn table_of(pairs: &[(&str, &str)]) -> AbbreviationTable {
        AbbreviationTable::from_entries(
            pairs
                .iter()
                .map(|(t, a)| (t.to_string(), a.to_string())),
        )
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let table = AbbreviationTable::load(&PathBuf::from("no/such/file.json"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_malformed_json_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let table = AbbreviationTable::load(&path);
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_preserves_authoring_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abbr.json");
        std::fs::write(
            &path,
            r#"{"Database": "DB", "Data": "D", "approximately": "approx."}"#,
        )
        .unwrap();

        let table = AbbreviationTable::load(&path);
        let terms: Vec<&str> = table.entries().iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["Database", "Data", "approximately"]);
    }

    #[test]
    fn test_case_insensitive_lookup_preserves_stored_case() {
        let table = table_of(&[("Figure", "Fig.")]);
        assert_eq!(table.get("figure"), Some("Fig."));
        assert_eq!(table.get("FIGURE"), Some("Fig."));
        assert_eq!(table.get("Table"), None);
        assert_eq!(table.entries()[0].term, "Figure");
    }

    #[test]
    fn test_empty_terms_are_skipped() {
        let table = table_of(&[("", "x"), ("Figure", "Fig.")]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_metacharacters_match_literally() {
        let table = table_of(&[("C++ Standard", "C++ Std")]);
        let entry = &table.entries()[0];
        assert!(entry.pattern.is_match("the C++ Standard says"));
        assert!(!entry.pattern.is_match("the Cxx Standard says"));
    }
}
