//! Matching over the artwork index.
//!
//! This module provides the matching primitives the query engine is built on:
//! - Substring matching against keys and titles (case-insensitive)
//! - Filtering by installation status and neighbourhood
//!
//! Every match works on pre-lowercased text, so a query is lowercased once
//! when it is built and never again during a scan.

use crate::types::ArtworkRecord;
use std::collections::HashSet;
use std::sync::Arc;

/// A compiled query ready for matching against index entries.
#[derive(Clone)]
pub struct SearchQuery {
    /// The matcher implementation
    matcher: Arc<dyn Matcher>,

    /// Optional filters to apply after matching
    filters: Vec<SearchFilter>,
}

impl std::fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchQuery")
            .field("filters", &self.filters)
            .finish()
    }
}

impl SearchQuery {
    /// Create a fuzzy query (case-insensitive substring).
    ///
    /// An entry matches when its key or its record's title contains the
    /// pattern. An empty pattern matches every entry.
    ///
    /// # Example
    /// ```
    /// use artstat_core::SearchQuery;
    /// let query = SearchQuery::substring("orca");
    /// ```
    pub fn substring(pattern: &str) -> Self {
        SearchQuery {
            matcher: Arc::new(SubstringMatcher::new(pattern)),
            filters: Vec::new(),
        }
    }

    /// A query that matches every entry, for filter-only scans.
    pub fn all() -> Self {
        Self::substring("")
    }

    /// Add a filter to the query.
    pub fn with_filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Check if an index entry matches this query.
    ///
    /// First applies the matcher to the entry key, then all filters.
    pub fn matches(&self, key: &str, record: &ArtworkRecord) -> bool {
        self.matcher.matches(key, record) && self.filters.iter().all(|f| f.matches(record))
    }
}

/// Filters to narrow matches.
#[derive(Debug, Clone)]
pub enum SearchFilter {
    /// Only artworks whose status is exactly "In place"
    InPlace,

    /// Only artworks whose neighbourhood contains this (lowercased) text
    Neighborhood(String),
}

impl SearchFilter {
    /// Build a neighbourhood filter, lowercasing the pattern.
    pub fn neighborhood(pattern: &str) -> Self {
        SearchFilter::Neighborhood(pattern.to_lowercase())
    }

    /// Check if a record passes this filter.
    pub fn matches(&self, record: &ArtworkRecord) -> bool {
        match self {
            SearchFilter::InPlace => record.status.is_in_place(),
            // Records without a neighbourhood never match a real filter
            SearchFilter::Neighborhood(pattern) => {
                pattern.is_empty()
                    || (!record.neighborhood_lower.is_empty()
                        && record.neighborhood_lower.contains(pattern.as_str()))
            }
        }
    }
}

// === Matcher Implementations ===

/// Trait for key matching implementations.
trait Matcher: Send + Sync {
    /// Check if an entry matches. `key` is already lowercased.
    fn matches(&self, key: &str, record: &ArtworkRecord) -> bool;
}

/// Case-insensitive substring matcher over key and title.
struct SubstringMatcher {
    pattern_lower: String,
}

impl SubstringMatcher {
    fn new(pattern: &str) -> Self {
        SubstringMatcher {
            pattern_lower: pattern.to_lowercase(),
        }
    }
}

impl Matcher for SubstringMatcher {
    fn matches(&self, key: &str, record: &ArtworkRecord) -> bool {
        if self.pattern_lower.is_empty() {
            return true;
        }
        key.contains(&self.pattern_lower) || record.title_lower.contains(&self.pattern_lower)
    }
}

// === Query Parsing ===

/// Split a comma-separated list of artwork names.
///
/// Tokens are trimmed, empty tokens are dropped, and repeated tokens
/// (compared case-insensitively) keep only their first occurrence.
pub fn parse_name_list(input: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_lowercase()))
        .map(str::to_string)
        .collect()
}
