//! # artstat Core Library
//!
//! This crate loads a directory of public art records into an in-memory index
//! and answers status, listing, and comparison queries against it.
//!
//! ## Architecture
//!
//! - **Types** (`types`): Artwork records and their installation status
//! - **Loader** (`loader`): Directory scan and section parsing, with a load report
//! - **Index** (`index`): Immutable, insertion-ordered name/title lookup
//! - **Search** (`search`): Substring matching plus filters
//! - **Query** (`query`): The query engine and its text reports
//! - **Config** (`config`): Configuration management
//!
//! ## Example
//!
//! ```rust,ignore
//! use artstat_core::{load_directory, Config, QueryEngine};
//!
//! let config = Config::load()?;
//! let (index, report) = load_directory(&config.records.dir, &config.records)?;
//! let engine = QueryEngine::new(index, config.query);
//!
//! println!("{}", engine.status("Digital Orca", true));
//! println!("{}", engine.list_active(Some("Downtown"), None));
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod query;
pub mod search;
pub mod types;

// Re-export commonly used types
pub use config::{Config, QueryConfig, RecordsConfig};
pub use error::{ArtstatError, Result};
pub use index::ArtworkIndex;
pub use loader::{load_directory, LoadReport, RecordLoader, RecordOutcome};
pub use query::{
    clamp_limit, ActiveListing, CompareReport, Comparison, NeighborhoodListing,
    NeighborhoodsReport, QueryEngine, StatusReport,
};
pub use search::{SearchFilter, SearchQuery};
pub use types::{ArtworkRecord, ArtworkStatus, IndexStats};
