//! Whole-word abbreviation substitution.
//!
//! Pure functions of (text, table): no I/O, no shared state. Matching is
//! case-insensitive against the page text, but the inserted replacement is
//! always the abbreviation's stored casing; the original casing of the
//! matched occurrence is not preserved.

use std::collections::BTreeMap;

use regex::NoExpand;
use serde::Serialize;

use crate::config::AbbreviationTable;

/// Replacement statistics for one term within a single document run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// The abbreviation that was substituted in
    pub abbreviation: String,
    /// Total occurrences replaced across all pages, always >= 1
    pub count: u64,
}

/// Aggregate per-term replacement statistics for one document run.
///
/// A term is present iff it was replaced at least once; entries with a
/// count of zero are never recorded. Iteration is lexicographic by term,
/// which is the order the reference pages list replacements in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReplacementRecord {
    entries: BTreeMap<String, Replacement>,
}

impl ReplacementRecord {
    fn add(&mut self, term: &str, abbreviation: &str, count: u64) {
        if count == 0 {
            return;
        }
        self.entries
            .entry(term.to_string())
            .and_modify(|r| r.count += count)
            .or_insert_with(|| Replacement {
                abbreviation: abbreviation.to_string(),
                count,
            });
    }

    /// Entries sorted lexicographically by term.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Replacement)> {
        self.entries.iter().map(|(term, r)| (term.as_str(), r))
    }

    pub fn get(&self, term: &str) -> Option<&Replacement> {
        self.entries.get(term)
    }

    /// Number of distinct terms replaced.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total occurrences replaced across all terms.
    pub fn total_replacements(&self) -> u64 {
        self.entries.values().map(|r| r.count).sum()
    }
}

/// Replace all whole-word occurrences of each table entry in `text`,
/// accumulating per-term counts into `record`. Returns the substituted
/// text and the number of replacements made on this page.
///
/// Entries are applied in table (authoring) order. When one term's pattern
/// overlaps another's, the earlier entry's replacement removes that text
/// before the later pattern is evaluated. This order-dependence is the
/// documented contract, not a conflict-resolution algorithm: reordering a
/// dictionary with overlapping keys changes the output.
pub fn substitute_into(
    text: &str,
    table: &AbbreviationTable,
    record: &mut ReplacementRecord,
) -> (String, u64) {
    let mut text = text.to_string();
    let mut page_count = 0u64;

    for entry in table.entries() {
        let matches = entry.pattern.find_iter(&text).count() as u64;
        if matches == 0 {
            continue;
        }
        // NoExpand: abbreviations are literal text, never $-expansions
        text = entry
            .pattern
            .replace_all(&text, NoExpand(&entry.abbreviation))
            .into_owned();
        record.add(&entry.term, &entry.abbreviation, matches);
        page_count += matches;
    }

    (text, page_count)
}

/// Substitute a single page. Returns the new text and the number of
/// replacements made.
pub fn substitute(text: &str, table: &AbbreviationTable) -> (String, u64) {
    let mut record = ReplacementRecord::default();
    substitute_into(text, table, &mut record)
}

/// Substitute every page in order, aggregating counts across the run.
pub fn substitute_all(
    pages: &[String],
    table: &AbbreviationTable,
) -> (Vec<String>, ReplacementRecord) {
    let mut record = ReplacementRecord::default();
    let substituted = pages
        .iter()
        .map(|page| substitute_into(page, table, &mut record).0)
        .collect();
    (substituted, record)
}
