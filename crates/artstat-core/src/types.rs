//! Core data types for artstat.
//!
//! This module defines the records produced by the loader and consumed by the
//! query engine. Records carry pre-computed lowercase forms of the fields that
//! queries match against, so lookups never re-lowercase the index.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Installation status of an artwork.
///
/// Only the exact text `"In place"` means the work is currently installed.
/// Every other value is kept verbatim so it can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArtworkStatus {
    /// Currently installed
    InPlace,

    /// Anything else: removed, in storage, unknown, ...
    NotInPlace(String),
}

impl ArtworkStatus {
    /// The sentinel text for an installed work
    pub const IN_PLACE: &'static str = "In place";

    /// Status used when a record has no status section
    pub const UNKNOWN: &'static str = "Unknown";

    /// Parse free text into a status. Matching is exact and case-sensitive.
    pub fn parse(text: &str) -> Self {
        if text == Self::IN_PLACE {
            ArtworkStatus::InPlace
        } else {
            ArtworkStatus::NotInPlace(text.to_string())
        }
    }

    /// The status used when none was recorded
    pub fn unknown() -> Self {
        ArtworkStatus::NotInPlace(Self::UNKNOWN.to_string())
    }

    pub fn is_in_place(&self) -> bool {
        matches!(self, ArtworkStatus::InPlace)
    }

    /// The original status text
    pub fn as_str(&self) -> &str {
        match self {
            ArtworkStatus::InPlace => Self::IN_PLACE,
            ArtworkStatus::NotInPlace(text) => text,
        }
    }
}

impl fmt::Display for ArtworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single artwork, parsed from one record file.
///
/// ## Design Notes
///
/// - `name` is the file stem and is always present
/// - `title` falls back to `name` when the record has no title
/// - `*_lower` fields are pre-computed for case-insensitive matching
#[derive(Debug, Clone)]
pub struct ArtworkRecord {
    /// File stem of the record (e.g., "Digital Orca")
    pub name: String,

    /// Title of the work as written in the record
    pub title: String,

    /// Installation status
    pub status: ArtworkStatus,

    /// Location on site (empty when absent)
    pub location: String,

    /// Neighbourhood (empty when absent)
    pub neighborhood: String,

    /// Description, already truncated by the loader
    pub description: String,

    /// File the record was read from
    pub source: PathBuf,

    pub name_lower: String,
    pub title_lower: String,
    pub neighborhood_lower: String,
}

impl ArtworkRecord {
    /// Create a record with every optional field defaulted.
    ///
    /// The title defaults to the name and the status to `"Unknown"`.
    pub fn new(name: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        let name = name.into();
        let name_lower = name.to_lowercase();
        ArtworkRecord {
            title: name.clone(),
            title_lower: name_lower.clone(),
            name,
            name_lower,
            status: ArtworkStatus::unknown(),
            location: String::new(),
            neighborhood: String::new(),
            neighborhood_lower: String::new(),
            description: String::new(),
            source: source.into(),
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self.title_lower = self.title.to_lowercase();
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: ArtworkStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the on-site location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the neighbourhood
    pub fn with_neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = neighborhood.into();
        self.neighborhood_lower = self.neighborhood.to_lowercase();
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// True when the title differs from the name, ignoring case
    pub fn has_distinct_title(&self) -> bool {
        self.title_lower != self.name_lower
    }
}

/// Statistics about a loaded index
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Number of records that were loaded
    pub record_count: usize,

    /// Number of lookup keys (names plus distinct titles, after collisions)
    pub key_count: usize,

    /// Number of reachable records that are in place
    pub in_place_count: usize,

    /// Number of distinct non-empty neighbourhoods
    pub neighborhood_count: usize,

    /// When the index was built
    pub loaded_at: DateTime<Utc>,
}
