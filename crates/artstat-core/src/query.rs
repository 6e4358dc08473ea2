//! Query engine over a loaded artwork index.
//!
//! The engine answers five read-only questions:
//!
//! - `status`: one artwork by name or title, with fuzzy fallback
//! - `list_active`: installed artworks, optionally near a neighbourhood
//! - `compare`: several artworks side by side
//! - `list_by_neighborhood`: every artwork in a neighbourhood
//! - `list_known_neighborhoods`: the distinct neighbourhoods on record
//!
//! Each operation returns a report value. Reports borrow from the index and
//! render to the user-facing text through `Display`. Bad input (a missing name,
//! a list with no names in it) is itself a report, never an error, so every
//! query produces text.

use crate::config::QueryConfig;
use crate::index::ArtworkIndex;
use crate::search::{parse_name_list, SearchFilter, SearchQuery};
use crate::types::ArtworkRecord;
use std::fmt;
use tracing::debug;

/// Convert a caller-supplied limit to a count, treating negatives as zero.
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
}

/// Answers queries against an immutable index.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    index: ArtworkIndex,
    config: QueryConfig,
}

impl QueryEngine {
    /// Create an engine that owns `index`.
    pub fn new(index: ArtworkIndex, config: QueryConfig) -> Self {
        QueryEngine { index, config }
    }

    /// The index queries run against.
    pub fn index(&self) -> &ArtworkIndex {
        &self.index
    }

    /// Look up one artwork by name or title.
    ///
    /// An exact (case-insensitive) key match wins. Otherwise every index entry
    /// whose key or title contains the query is reported as a similar match.
    pub fn status(&self, name: &str, include_details: bool) -> StatusReport<'_> {
        let name = name.trim();
        if name.is_empty() {
            return StatusReport::MissingName;
        }

        if let Some(record) = self.index.get(name) {
            return StatusReport::Found {
                record,
                include_details,
            };
        }

        let matches: Vec<&ArtworkRecord> = self
            .index
            .search(&SearchQuery::substring(name))
            .into_iter()
            .map(|(_, record)| record)
            .collect();

        debug!(query = %name, matches = matches.len(), "No exact match, fuzzy lookup");

        if matches.is_empty() {
            StatusReport::NotFound {
                query: name.to_string(),
            }
        } else {
            StatusReport::Similar {
                query: name.to_string(),
                matches,
                preview: self.config.fuzzy_preview,
            }
        }
    }

    /// List installed artworks sorted by title.
    ///
    /// A blank neighbourhood means no filter. `limit` falls back to the
    /// configured default.
    pub fn list_active(&self, neighborhood: Option<&str>, limit: Option<usize>) -> ActiveListing<'_> {
        let filter = neighborhood
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let mut query = SearchQuery::all().with_filter(SearchFilter::InPlace);
        if let Some(ref n) = filter {
            query = query.with_filter(SearchFilter::neighborhood(n));
        }

        ActiveListing {
            matches: self.unique_sorted(&query),
            limit: limit.unwrap_or(self.config.default_list_limit),
            neighborhood: filter,
        }
    }

    /// Compare several comma-separated artworks.
    ///
    /// Each name resolves to an exact match, else to the first fuzzy match in
    /// index order, else to "not found".
    pub fn compare(&self, names: &str) -> CompareReport<'_> {
        if names.is_empty() {
            return CompareReport::MissingNames;
        }

        let names = parse_name_list(names);
        if names.is_empty() {
            return CompareReport::InvalidFormat;
        }

        let mut comparison = Comparison::default();
        for name in names {
            let resolved = self
                .index
                .get(&name)
                .or_else(|| self.index.search_first(&SearchQuery::substring(&name)));

            match resolved {
                Some(record) if record.status.is_in_place() => comparison.in_place.push(record),
                Some(record) => comparison.not_in_place.push(record),
                None => comparison.not_found.push(name),
            }
        }

        debug!(
            compared = comparison.len(),
            not_found = comparison.not_found.len(),
            "Compared artworks"
        );
        CompareReport::Compared(comparison)
    }

    /// List every artwork in a neighbourhood, any status, sorted by title.
    pub fn list_by_neighborhood(
        &self,
        neighborhood: &str,
        limit: Option<usize>,
    ) -> NeighborhoodListing<'_> {
        let neighborhood = neighborhood.trim();
        if neighborhood.is_empty() {
            return NeighborhoodListing::MissingNeighborhood;
        }

        let query = SearchQuery::all().with_filter(SearchFilter::neighborhood(neighborhood));

        NeighborhoodListing::Listed {
            neighborhood: neighborhood.to_string(),
            matches: self.unique_sorted(&query),
            limit: limit.unwrap_or(self.config.default_neighborhood_limit),
        }
    }

    /// Every distinct neighbourhood on record, sorted.
    pub fn list_known_neighborhoods(&self) -> NeighborhoodsReport<'_> {
        NeighborhoodsReport {
            neighborhoods: self.index.neighborhoods(),
        }
    }

    /// Dedup by title first, then filter, then sort by title.
    fn unique_sorted(&self, query: &SearchQuery) -> Vec<&ArtworkRecord> {
        let mut matches: Vec<&ArtworkRecord> = self
            .index
            .unique_by_title()
            .filter(|record| query.matches(&record.name_lower, record))
            .collect();
        matches.sort_by(|a, b| a.title.cmp(&b.title));
        matches
    }
}

/// Result of a `status` lookup.
#[derive(Debug, Clone)]
pub enum StatusReport<'a> {
    /// No name was given
    MissingName,

    /// An exact match
    Found {
        record: &'a ArtworkRecord,
        include_details: bool,
    },

    /// No exact match, but some entries contain the query
    Similar {
        query: String,
        matches: Vec<&'a ArtworkRecord>,
        preview: usize,
    },

    /// Nothing matched
    NotFound { query: String },
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReport::MissingName => write!(f, "Error: No artwork name provided"),
            StatusReport::Found {
                record,
                include_details,
            } => {
                write!(f, "Artwork: {}\nStatus: {}", record.title, record.status)?;
                if *include_details {
                    write!(f, "\n\n{}", details(record))?;
                }
                Ok(())
            }
            StatusReport::Similar {
                query,
                matches,
                preview,
            } => {
                write!(
                    f,
                    "Could not find exact match for '{}', but found {} similar artwork(s):\n\n",
                    query,
                    matches.len()
                )?;
                for (i, record) in matches.iter().take(*preview).enumerate() {
                    writeln!(f, "{}. {} - Status: {}", i + 1, record.title, record.status)?;
                }
                if matches.len() > *preview {
                    write!(f, "\nAnd {} more matches.", matches.len() - preview)?;
                }
                Ok(())
            }
            StatusReport::NotFound { query } => {
                write!(f, "No artwork found matching '{}'", query)
            }
        }
    }
}

/// Labelled detail lines for the non-empty optional fields.
fn details(record: &ArtworkRecord) -> String {
    let mut lines = Vec::new();
    if !record.location.is_empty() {
        lines.push(format!("Location: {}", record.location));
    }
    if !record.neighborhood.is_empty() {
        lines.push(format!("Neighborhood: {}", record.neighborhood));
    }
    if !record.description.is_empty() {
        lines.push(format!("Description excerpt: {}", record.description));
    }

    if lines.is_empty() {
        "No additional details available".to_string()
    } else {
        lines.join("\n")
    }
}

/// Result of `list_active`.
#[derive(Debug, Clone)]
pub struct ActiveListing<'a> {
    /// Neighbourhood filter, if any
    pub neighborhood: Option<String>,

    /// Every matching artwork, sorted by title
    pub matches: Vec<&'a ArtworkRecord>,

    /// Maximum number of artworks shown
    pub limit: usize,
}

impl<'a> ActiveListing<'a> {
    /// The artworks that fit under the limit.
    pub fn shown(&self) -> &[&'a ArtworkRecord] {
        &self.matches[..self.matches.len().min(self.limit)]
    }

    /// How many matches did not fit under the limit.
    pub fn remaining(&self) -> usize {
        self.matches.len().saturating_sub(self.limit)
    }
}

impl fmt::Display for ActiveListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches.is_empty() {
            return match &self.neighborhood {
                Some(n) => write!(f, "No active artworks found in the {} neighborhood", n),
                None => write!(f, "No active artworks found"),
            };
        }

        write!(f, "Found {} active artworks", self.matches.len())?;
        if let Some(n) = &self.neighborhood {
            write!(f, " in or near {}", n)?;
        }
        write!(f, " (showing {}):\n\n", self.shown().len())?;

        for (i, record) in self.shown().iter().enumerate() {
            write!(f, "{}. {}", i + 1, record.title)?;
            if !record.location.is_empty() {
                write!(f, " - Located at: {}", record.location)?;
            }
            if !record.neighborhood.is_empty() {
                write!(f, " ({})", record.neighborhood)?;
            }
            writeln!(f)?;
        }

        if self.remaining() > 0 {
            write!(f, "\nThere are {} more active artworks.", self.remaining())?;
        }
        Ok(())
    }
}

/// Resolved artworks from `compare`, bucketed by status.
#[derive(Debug, Clone, Default)]
pub struct Comparison<'a> {
    pub in_place: Vec<&'a ArtworkRecord>,
    pub not_in_place: Vec<&'a ArtworkRecord>,
    /// Input names that resolved to nothing, as given
    pub not_found: Vec<String>,
}

impl Comparison<'_> {
    /// Number of names compared.
    pub fn len(&self) -> usize {
        self.in_place.len() + self.not_in_place.len() + self.not_found.len()
    }
}

/// Result of `compare`.
#[derive(Debug, Clone)]
pub enum CompareReport<'a> {
    /// The input was empty
    MissingNames,

    /// The input held only commas and whitespace
    InvalidFormat,

    Compared(Comparison<'a>),
}

impl fmt::Display for CompareReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let comparison = match self {
            CompareReport::MissingNames => return write!(f, "Error: No artwork names provided"),
            CompareReport::InvalidFormat => {
                return write!(
                    f,
                    "Error: Invalid input format. Please provide a comma-separated list of artwork names."
                )
            }
            CompareReport::Compared(comparison) => comparison,
        };

        write!(f, "Artwork Status Comparison:\n\n")?;

        if !comparison.in_place.is_empty() {
            writeln!(f, "Currently in place:")?;
            for (i, record) in comparison.in_place.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, record.title)?;
            }
            writeln!(f)?;
        }

        if !comparison.not_in_place.is_empty() {
            writeln!(f, "Not currently in place:")?;
            for (i, record) in comparison.not_in_place.iter().enumerate() {
                writeln!(f, "{}. {} ({})", i + 1, record.title, record.status)?;
            }
            writeln!(f)?;
        }

        if !comparison.not_found.is_empty() {
            writeln!(f, "Not found in database:")?;
            for (i, name) in comparison.not_found.iter().enumerate() {
                writeln!(f, "{}. {}", i + 1, name)?;
            }
        }

        Ok(())
    }
}

/// Result of `list_by_neighborhood`.
#[derive(Debug, Clone)]
pub enum NeighborhoodListing<'a> {
    /// No neighbourhood was given
    MissingNeighborhood,

    Listed {
        neighborhood: String,
        matches: Vec<&'a ArtworkRecord>,
        limit: usize,
    },
}

impl fmt::Display for NeighborhoodListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (neighborhood, matches, limit) = match self {
            NeighborhoodListing::MissingNeighborhood => {
                return write!(f, "Error: No neighborhood provided")
            }
            NeighborhoodListing::Listed {
                neighborhood,
                matches,
                limit,
            } => (neighborhood, matches, *limit),
        };

        if matches.is_empty() {
            return write!(f, "No artworks found in the {} neighborhood.", neighborhood);
        }

        let shown = matches.len().min(limit);
        write!(
            f,
            "Found {} artworks in {} (showing {}):\n\n",
            matches.len(),
            neighborhood,
            shown
        )?;

        for (i, record) in matches.iter().take(shown).enumerate() {
            writeln!(f, "{}. {} - Status: {}", i + 1, record.title, record.status)?;
        }

        if matches.len() > limit {
            write!(
                f,
                "\nThere are {} more artworks in this neighborhood.",
                matches.len() - limit
            )?;
        }
        Ok(())
    }
}

/// Result of `list_known_neighborhoods`.
#[derive(Debug, Clone)]
pub struct NeighborhoodsReport<'a> {
    pub neighborhoods: Vec<&'a str>,
}

impl fmt::Display for NeighborhoodsReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.neighborhoods.is_empty() {
            return write!(f, "No known neighborhoods found.");
        }

        write!(f, "Known neighborhoods:\n\n")?;
        let lines: Vec<String> = self
            .neighborhoods
            .iter()
            .map(|n| format!("- {}", n))
            .collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArtworkStatus;

    fn record(name: &str, title: &str, status: &str, neighborhood: &str) -> ArtworkRecord {
        ArtworkRecord::new(name, format!("/art/{}.md", name))
            .with_title(title)
            .with_status(ArtworkStatus::parse(status))
            .with_neighborhood(neighborhood)
    }

    fn make_engine() -> QueryEngine {
        let records = vec![
            record("digital-orca", "Digital Orca", "In place", "Downtown")
                .with_location("Jack Poole Plaza")
                .with_description("A pixelated orca."),
            record("The Drop", "The Drop", "Removed", "Downtown"),
            record("girl-in-wetsuit", "Girl in Wetsuit", "In place", "Stanley Park"),
            record("A Bright Future", "A Bright Future", "In place", ""),
        ];
        QueryEngine::new(ArtworkIndex::from_records(records), QueryConfig::default())
    }

    fn orca_pod(count: usize) -> QueryEngine {
        let records = (0..count).map(|i| {
            record(
                &format!("orca-{:02}", i),
                &format!("Orca {:02}", i),
                "In place",
                "Harbour",
            )
        });
        QueryEngine::new(ArtworkIndex::from_records(records), QueryConfig::default())
    }

    // === status ===

    #[test]
    fn test_status_exact() {
        let engine = make_engine();
        assert_eq!(
            engine.status("Digital Orca", false).to_string(),
            "Artwork: Digital Orca\nStatus: In place"
        );
    }

    #[test]
    fn test_status_case_insensitive() {
        let engine = make_engine();
        assert_eq!(
            engine.status("digital orca", false).to_string(),
            engine.status("DIGITAL ORCA", false).to_string()
        );
    }

    #[test]
    fn test_status_every_record_by_name() {
        let engine = make_engine();
        for record in engine.index().records() {
            let text = engine.status(&record.name, false).to_string();
            assert!(text.contains(&record.title), "{}", text);
            assert!(text.contains(record.status.as_str()), "{}", text);
        }
    }

    #[test]
    fn test_status_details() {
        let engine = make_engine();
        assert_eq!(
            engine.status("digital-orca", true).to_string(),
            "Artwork: Digital Orca\nStatus: In place\n\n\
             Location: Jack Poole Plaza\n\
             Neighborhood: Downtown\n\
             Description excerpt: A pixelated orca."
        );

        assert_eq!(
            engine.status("a bright future", true).to_string(),
            "Artwork: A Bright Future\nStatus: In place\n\nNo additional details available"
        );
    }

    #[test]
    fn test_status_fuzzy() {
        let engine = make_engine();
        let text = engine.status("wetsuit", false).to_string();
        assert_eq!(
            text,
            "Could not find exact match for 'wetsuit', but found 2 similar artwork(s):\n\n\
             1. Girl in Wetsuit - Status: In place\n\
             2. Girl in Wetsuit - Status: In place\n"
        );
    }

    #[test]
    fn test_status_fuzzy_superset() {
        let engine = make_engine();
        for (key, record) in engine.index().entries() {
            let query = &key[1..key.len() - 1];
            if engine.index().get(query).is_some() {
                continue;
            }
            match engine.status(query, false) {
                StatusReport::Similar { matches, .. } => {
                    assert!(matches.iter().any(|m| std::ptr::eq(*m, record)));
                }
                other => panic!("expected fuzzy matches for {}, got {}", query, other),
            }
        }
    }

    #[test]
    fn test_status_fuzzy_preview_limit() {
        let engine = orca_pod(4);
        // 4 records, each under a name key and a title key
        let text = engine.status("orca", false).to_string();
        assert!(text.contains("found 8 similar artwork(s)"));
        assert!(text.contains("5. "));
        assert!(!text.contains("6. "));
        assert!(text.ends_with("\nAnd 3 more matches."));
    }

    #[test]
    fn test_status_not_found_and_missing() {
        let engine = make_engine();
        assert_eq!(
            engine.status("Fake Artwork", false).to_string(),
            "No artwork found matching 'Fake Artwork'"
        );
        assert_eq!(
            engine.status("", false).to_string(),
            "Error: No artwork name provided"
        );
        assert_eq!(
            engine.status("   ", true).to_string(),
            "Error: No artwork name provided"
        );
    }

    // === list_active ===

    #[test]
    fn test_list_active_neighborhood() {
        let engine = make_engine();
        let listing = engine.list_active(Some("Downtown"), Some(5));

        assert_eq!(listing.shown().len(), 1);
        assert_eq!(listing.shown()[0].title, "Digital Orca");
        assert_eq!(
            listing.to_string(),
            "Found 1 active artworks in or near Downtown (showing 1):\n\n\
             1. Digital Orca - Located at: Jack Poole Plaza (Downtown)\n"
        );
    }

    #[test]
    fn test_list_active_no_filter_sorted_and_unique() {
        let engine = make_engine();
        let listing = engine.list_active(None, None);

        let titles: Vec<&str> = listing.matches.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A Bright Future", "Digital Orca", "Girl in Wetsuit"]);
        assert!(listing.matches.iter().all(|r| r.status.is_in_place()));
        assert_eq!(listing.limit, 5);
    }

    #[test]
    fn test_list_active_filter_is_case_insensitive_substring() {
        let engine = make_engine();
        let listing = engine.list_active(Some("stanley"), None);
        assert_eq!(listing.matches.len(), 1);
        assert_eq!(listing.matches[0].title, "Girl in Wetsuit");

        // Blank filter means no filter
        assert_eq!(engine.list_active(Some("  "), None).matches.len(), 3);
    }

    #[test]
    fn test_list_active_truncation() {
        let engine = orca_pod(8);
        let listing = engine.list_active(None, Some(3));

        assert_eq!(listing.matches.len(), 8);
        assert_eq!(listing.shown().len(), 3);
        assert_eq!(listing.remaining(), 5);

        let text = listing.to_string();
        assert!(text.starts_with("Found 8 active artworks (showing 3):\n\n1. Orca 00 (Harbour)\n"));
        assert!(text.ends_with("\nThere are 5 more active artworks."));
    }

    #[test]
    fn test_list_active_zero_limit() {
        let engine = orca_pod(2);
        let listing = engine.list_active(None, Some(clamp_limit(-4)));
        assert!(listing.shown().is_empty());
        assert_eq!(
            listing.to_string(),
            "Found 2 active artworks (showing 0):\n\n\nThere are 2 more active artworks."
        );
    }

    #[test]
    fn test_list_active_empty() {
        let engine = make_engine();
        assert_eq!(
            engine.list_active(Some("Kitsilano"), None).to_string(),
            "No active artworks found in the Kitsilano neighborhood"
        );

        let empty = QueryEngine::new(ArtworkIndex::default(), QueryConfig::default());
        assert_eq!(empty.list_active(None, None).to_string(), "No active artworks found");
    }

    #[test]
    fn test_list_active_dedups_before_filtering() {
        // Two records share a title; the first one seen is not in place
        let records = vec![
            record("first", "Shared Title", "Removed", "Downtown"),
            record("second", "Shared Title", "In place", "Downtown"),
        ];
        let engine = QueryEngine::new(ArtworkIndex::from_records(records), QueryConfig::default());
        assert!(engine.list_active(None, None).matches.is_empty());
    }

    // === compare ===

    #[test]
    fn test_compare_buckets() {
        let engine = make_engine();
        let report = engine.compare("Digital Orca,The Drop,Ghost");

        let CompareReport::Compared(ref comparison) = report else {
            panic!("expected a comparison");
        };
        assert_eq!(comparison.len(), 3);
        assert_eq!(comparison.in_place[0].title, "Digital Orca");
        assert_eq!(comparison.not_in_place[0].title, "The Drop");
        assert_eq!(comparison.not_found, vec!["Ghost".to_string()]);

        assert_eq!(
            report.to_string(),
            "Artwork Status Comparison:\n\n\
             Currently in place:\n1. Digital Orca\n\n\
             Not currently in place:\n1. The Drop (Removed)\n\n\
             Not found in database:\n1. Ghost\n"
        );
    }

    #[test]
    fn test_compare_fuzzy_takes_first_match() {
        let engine = make_engine();
        let CompareReport::Compared(comparison) = engine.compare("orca, wetsuit") else {
            panic!("expected a comparison");
        };
        let titles: Vec<&str> = comparison.in_place.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Digital Orca", "Girl in Wetsuit"]);
    }

    #[test]
    fn test_compare_partitions_distinct_tokens() {
        let engine = make_engine();
        let CompareReport::Compared(comparison) =
            engine.compare(" drop , Ghost,ghost,, Digital Orca ,Nowhere")
        else {
            panic!("expected a comparison");
        };
        assert_eq!(comparison.len(), 4);
        assert_eq!(comparison.not_found, vec!["Ghost".to_string(), "Nowhere".to_string()]);
    }

    #[test]
    fn test_compare_omits_empty_buckets() {
        let engine = make_engine();
        let text = engine.compare("Ghost").to_string();
        assert_eq!(
            text,
            "Artwork Status Comparison:\n\nNot found in database:\n1. Ghost\n"
        );
    }

    #[test]
    fn test_compare_input_errors() {
        let engine = make_engine();
        let missing = engine.compare("").to_string();
        let invalid = engine.compare(" , ,").to_string();

        assert_eq!(missing, "Error: No artwork names provided");
        assert!(invalid.starts_with("Error: Invalid input format."));
        assert_ne!(missing, invalid);
        assert_ne!(missing, engine.status("", false).to_string());
    }

    #[test]
    fn test_compare_whitespace_only_is_invalid_format() {
        let engine = make_engine();
        assert!(matches!(engine.compare("   "), CompareReport::InvalidFormat));
        assert_eq!(
            engine.compare("   ").to_string(),
            engine.compare(" , ").to_string()
        );
    }

    // === neighbourhoods ===

    #[test]
    fn test_list_by_neighborhood() {
        let engine = make_engine();
        assert_eq!(
            engine.list_by_neighborhood("downtown", None).to_string(),
            "Found 2 artworks in downtown (showing 2):\n\n\
             1. Digital Orca - Status: In place\n\
             2. The Drop - Status: Removed\n"
        );
    }

    #[test]
    fn test_list_by_neighborhood_truncation() {
        let engine = orca_pod(12);
        let text = engine.list_by_neighborhood("harb", None).to_string();
        assert!(text.starts_with("Found 12 artworks in harb (showing 10):"));
        assert!(text.ends_with("\nThere are 2 more artworks in this neighborhood."));
    }

    #[test]
    fn test_list_by_neighborhood_empty_and_missing() {
        let engine = make_engine();
        assert_eq!(
            engine.list_by_neighborhood("Kitsilano", Some(3)).to_string(),
            "No artworks found in the Kitsilano neighborhood."
        );
        assert_eq!(
            engine.list_by_neighborhood(" ", None).to_string(),
            "Error: No neighborhood provided"
        );
    }

    #[test]
    fn test_list_known_neighborhoods() {
        let engine = make_engine();
        assert_eq!(
            engine.list_known_neighborhoods().to_string(),
            "Known neighborhoods:\n\n- Downtown\n- Stanley Park"
        );

        let empty = QueryEngine::new(ArtworkIndex::default(), QueryConfig::default());
        assert_eq!(
            empty.list_known_neighborhoods().to_string(),
            "No known neighborhoods found."
        );
    }

    #[test]
    fn test_clamp_limit() {
        assert_eq!(clamp_limit(-1), 0);
        assert_eq!(clamp_limit(0), 0);
        assert_eq!(clamp_limit(7), 7);
    }
}
