//! Application state management.

use artstat_core::{load_directory, Config, LoadReport, QueryEngine};
use tracing::info;

/// Shared application state.
pub struct App {
    /// Configuration
    pub config: Config,

    /// Query engine over the loaded records
    pub engine: QueryEngine,

    /// Outcome of loading the record directory
    pub report: LoadReport,
}

impl App {
    /// Load the record directory and build the query engine.
    ///
    /// Fails if the record directory cannot be read.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (index, report) = load_directory(&config.records.dir, &config.records)?;

        info!(
            records_dir = %config.records.dir.display(),
            records = index.len(),
            skipped = report.skipped_count(),
            "Application initialized"
        );

        let engine = QueryEngine::new(index, config.query.clone());

        Ok(App {
            config,
            engine,
            report,
        })
    }
}
