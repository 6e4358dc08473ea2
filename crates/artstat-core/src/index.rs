//! In-memory artwork index.
//!
//! The `ArtworkIndex` maps lowercased names and titles to parsed records. It is
//! built once from a full set of records and is read-only afterwards.
//!
//! ## Architecture
//!
//! - A `Vec<ArtworkRecord>` stores every loaded record in load order
//! - An `IndexMap<String, usize>` maps lookup keys to record positions
//!
//! The key map preserves insertion order, so every scan over the index
//! (fuzzy matching, listing, deduplication) sees entries in the order the
//! loader produced them. Re-inserting an existing key replaces the record it
//! points at but keeps the key's original position.

use crate::search::SearchQuery;
use crate::types::{ArtworkRecord, IndexStats};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// The immutable lookup index over all loaded artworks.
///
/// ## Example
///
/// ```rust
/// use artstat_core::{ArtworkIndex, ArtworkRecord, ArtworkStatus};
///
/// let index = ArtworkIndex::from_records(vec![
///     ArtworkRecord::new("orca", "orca.md")
///         .with_title("Digital Orca")
///         .with_status(ArtworkStatus::InPlace),
/// ]);
///
/// assert!(index.get("ORCA").is_some());
/// assert!(index.get("digital orca").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct ArtworkIndex {
    /// All loaded records, including ones shadowed by key collisions
    records: Vec<ArtworkRecord>,

    /// Lowercased name/title to record position
    keys: IndexMap<String, usize>,

    /// When the index was built
    loaded_at: DateTime<Utc>,
}

impl Default for ArtworkIndex {
    fn default() -> Self {
        Self::from_records(Vec::new())
    }
}

impl ArtworkIndex {
    /// Build an index from records in load order.
    ///
    /// Each record is keyed by its lowercased name, and additionally by its
    /// lowercased title when that differs. Later records win on collisions.
    pub fn from_records(records: impl IntoIterator<Item = ArtworkRecord>) -> Self {
        let records: Vec<ArtworkRecord> = records.into_iter().collect();
        let mut keys = IndexMap::with_capacity(records.len() * 2);

        for (idx, record) in records.iter().enumerate() {
            if let Some(previous) = keys.insert(record.name_lower.clone(), idx) {
                debug!(key = %record.name_lower, previous, current = idx, "Name key replaced");
            }

            if record.has_distinct_title() {
                if let Some(previous) = keys.insert(record.title_lower.clone(), idx) {
                    debug!(key = %record.title_lower, previous, current = idx, "Title key replaced");
                }
            }
        }

        ArtworkIndex {
            records,
            keys,
            loaded_at: Utc::now(),
        }
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of lookup keys.
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Look up a record by name or title, ignoring case.
    pub fn get(&self, key: &str) -> Option<&ArtworkRecord> {
        self.get_lower(&key.to_lowercase())
    }

    /// Look up a record by an already lowercased key.
    fn get_lower(&self, key_lower: &str) -> Option<&ArtworkRecord> {
        self.keys.get(key_lower).map(|&idx| &self.records[idx])
    }

    /// Iterate `(key, record)` pairs in index order.
    ///
    /// A record indexed under both its name and its title is yielded twice.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ArtworkRecord)> + '_ {
        self.keys
            .iter()
            .map(|(key, &idx)| (key.as_str(), &self.records[idx]))
    }

    /// Iterate reachable records with one entry per title, first occurrence wins.
    pub fn unique_by_title(&self) -> impl Iterator<Item = &ArtworkRecord> + '_ {
        let mut seen: HashSet<&str> = HashSet::new();
        self.entries()
            .filter_map(move |(_, record)| seen.insert(record.title.as_str()).then_some(record))
    }

    /// All entries matching a query, in index order.
    pub fn search(&self, query: &SearchQuery) -> Vec<(&str, &ArtworkRecord)> {
        self.entries()
            .filter(|(key, record)| query.matches(key, record))
            .collect()
    }

    /// The first entry matching a query, in index order.
    pub fn search_first(&self, query: &SearchQuery) -> Option<&ArtworkRecord> {
        self.entries()
            .find(|(key, record)| query.matches(key, record))
            .map(|(_, record)| record)
    }

    /// Distinct non-empty neighbourhoods, sorted.
    pub fn neighborhoods(&self) -> Vec<&str> {
        self.entries()
            .map(|(_, record)| record.neighborhood.as_str())
            .filter(|n| !n.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Every loaded record in load order, including shadowed ones.
    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    /// Get statistics about the index.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            record_count: self.records.len(),
            key_count: self.keys.len(),
            in_place_count: self
                .unique_by_title()
                .filter(|r| r.status.is_in_place())
                .count(),
            neighborhood_count: self.neighborhoods().len(),
            loaded_at: self.loaded_at,
        }
    }
}
