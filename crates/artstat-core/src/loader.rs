//! Record loading.
//!
//! The loader turns a directory of markdown records into an [`ArtworkIndex`].
//! Each record is a free-form markdown file with labelled sections:
//!
//! ```text
//! ## Title of Work
//! Digital Orca
//!
//! ## Status
//! In place
//!
//! ## DescriptionOfwork
//! A pixelated orca leaping out of the plaza.
//! Second paragraph of the description.
//!
//! ## LocationOnsite
//! Jack Poole Plaza
//!
//! ## Neighbourhood
//! Downtown
//! ```
//!
//! Single-line sections take the first line after their header. The
//! description takes everything up to the next `##` header. Any section may be
//! missing.
//!
//! Failure isolation: a file that cannot be read or decoded is skipped and
//! reported in the [`LoadReport`]; it never stops the load. A directory that
//! cannot be listed fails the whole load.

use crate::config::RecordsConfig;
use crate::error::{ArtstatError, Result};
use crate::index::ArtworkIndex;
use crate::types::{ArtworkRecord, ArtworkStatus};
use glob::{MatchOptions, Pattern};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

const TITLE_HEADER: &str = "## Title of Work";
const STATUS_HEADER: &str = "## Status";
const DESCRIPTION_HEADER: &str = "## DescriptionOfwork";
const LOCATION_HEADER: &str = "## LocationOnsite";
const NEIGHBORHOOD_HEADER: &str = "## Neighbourhood";

/// Marker appended to truncated descriptions
pub const ELLIPSIS: &str = "...";

/// What happened to one discovered record file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The file was parsed and added to the index
    Loaded { path: PathBuf, name: String },

    /// The file was left out of the index
    Skipped { path: PathBuf, reason: String },
}

impl RecordOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, RecordOutcome::Loaded { .. })
    }
}

/// Per-file outcomes of loading one record directory.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Directory that was scanned
    pub dir: PathBuf,

    /// One outcome per discovered file, in load order
    pub outcomes: Vec<RecordOutcome>,
}

impl LoadReport {
    fn new(dir: &Path) -> Self {
        LoadReport {
            dir: dir.to_path_buf(),
            outcomes: Vec::new(),
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_loaded()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.loaded_count()
    }

    /// Skipped files with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (&Path, &str)> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            RecordOutcome::Skipped { path, reason } => Some((path.as_path(), reason.as_str())),
            RecordOutcome::Loaded { .. } => None,
        })
    }
}

/// Locates labelled sections in a record body.
struct SectionParser {
    title: Regex,
    status: Regex,
    location: Regex,
    neighborhood: Regex,
    description: Regex,
}

impl SectionParser {
    fn new() -> Result<Self> {
        Ok(SectionParser {
            title: header_regex(TITLE_HEADER)?,
            status: header_regex(STATUS_HEADER)?,
            location: header_regex(LOCATION_HEADER)?,
            neighborhood: header_regex(NEIGHBORHOOD_HEADER)?,
            description: header_regex(DESCRIPTION_HEADER)?,
        })
    }

    /// The trimmed first line after a header, if present and non-empty.
    fn single_line<'a>(header: &Regex, content: &'a str) -> Option<&'a str> {
        let found = header.find(content)?;
        let rest = &content[found.end()..];
        let line = rest.split('\n').next().unwrap_or("").trim();

        // The next header directly after this one means the section is empty
        if line.is_empty() || line.starts_with("##") {
            None
        } else {
            Some(line)
        }
    }

    /// The trimmed text after a header up to the next `##` line.
    fn block<'a>(header: &Regex, content: &'a str) -> Option<&'a str> {
        let found = header.find(content)?;
        let rest = &content[found.end()..];
        if rest.starts_with("##") {
            return None;
        }
        let end = rest.find("\n##").unwrap_or(rest.len());
        let text = rest[..end].trim();
        (!text.is_empty()).then_some(text)
    }
}

/// Header text, then optional whitespace, then a line break.
fn header_regex(header: &str) -> Result<Regex> {
    let pattern = format!(r"{}\s*\n", regex::escape(header));
    Regex::new(&pattern).map_err(|e| ArtstatError::InvalidPattern {
        pattern,
        reason: e.to_string(),
    })
}

/// Truncate to `max_chars` characters, appending [`ELLIPSIS`] if anything was cut.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// Loads record directories into an index.
pub struct RecordLoader {
    pattern: Pattern,
    description_max_chars: usize,
    parser: SectionParser,
}

impl RecordLoader {
    /// Create a loader from record settings.
    pub fn new(config: &RecordsConfig) -> Result<Self> {
        let pattern = Pattern::new(&config.pattern).map_err(|e| ArtstatError::InvalidPattern {
            pattern: config.pattern.clone(),
            reason: e.to_string(),
        })?;

        Ok(RecordLoader {
            pattern,
            description_max_chars: config.description_max_chars,
            parser: SectionParser::new()?,
        })
    }

    /// Load every matching record directly inside `dir`.
    ///
    /// Files are processed in ascending file-name order. Unreadable files are
    /// skipped and reported; an unreadable directory is an error.
    #[instrument(skip_all, fields(dir = %dir.display()))]
    pub fn load_dir(&self, dir: &Path) -> Result<(ArtworkIndex, LoadReport)> {
        let paths = self.discover(dir)?;
        let mut report = LoadReport::new(dir);
        let mut records = Vec::with_capacity(paths.len());

        for path in paths {
            match self.load_file(&path) {
                Ok(record) => {
                    debug!(path = %path.display(), title = %record.title, "Loaded record");
                    report.outcomes.push(RecordOutcome::Loaded {
                        path,
                        name: record.name.clone(),
                    });
                    records.push(record);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping record");
                    report.outcomes.push(RecordOutcome::Skipped {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let index = ArtworkIndex::from_records(records);

        info!(
            loaded = report.loaded_count(),
            skipped = report.skipped_count(),
            keys = index.key_count(),
            "Record load complete"
        );

        Ok((index, report))
    }

    /// List matching files in `dir`, sorted by file name.
    fn discover(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| ArtstatError::record_dir(dir, e.to_string()))?;

        // Hidden files are never records
        let options = MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: true,
        };

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ArtstatError::record_dir(dir, e.to_string()))?;
            let path = entry.path();

            let matches = entry
                .file_name()
                .to_str()
                .map_or(false, |name| self.pattern.matches_with(name, options));

            if matches && path.is_file() {
                paths.push(path);
            }
        }

        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!(count = paths.len(), "Discovered record files");
        Ok(paths)
    }

    /// Read and parse a single record file.
    pub fn load_file(&self, path: &Path) -> Result<ArtworkRecord> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ArtstatError::record(path, "file name is not valid UTF-8"))?;

        let content = fs::read_to_string(path).map_err(|e| ArtstatError::record(path, e.to_string()))?;

        Ok(self.parse_record(name, path, &content))
    }

    /// Build a record from a body, applying defaults for missing sections.
    pub fn parse_record(&self, name: &str, source: &Path, content: &str) -> ArtworkRecord {
        let parser = &self.parser;
        let mut record = ArtworkRecord::new(name, source);

        if let Some(title) = SectionParser::single_line(&parser.title, content) {
            record = record.with_title(title);
        }
        if let Some(status) = SectionParser::single_line(&parser.status, content) {
            record = record.with_status(ArtworkStatus::parse(status));
        }
        if let Some(location) = SectionParser::single_line(&parser.location, content) {
            record = record.with_location(location);
        }
        if let Some(neighborhood) = SectionParser::single_line(&parser.neighborhood, content) {
            record = record.with_neighborhood(neighborhood);
        }
        if let Some(description) = SectionParser::block(&parser.description, content) {
            record = record.with_description(truncate_description(
                description,
                self.description_max_chars,
            ));
        }

        record
    }
}

/// Load a record directory with the given settings.
pub fn load_directory(dir: &Path, config: &RecordsConfig) -> Result<(ArtworkIndex, LoadReport)> {
    RecordLoader::new(config)?.load_dir(dir)
}
