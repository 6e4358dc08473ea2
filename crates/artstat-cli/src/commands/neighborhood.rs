//! Neighborhood command - every artwork in one neighbourhood.

use crate::app::App;
use crate::commands::emit;
use crate::OutputFormat;
use artstat_core::clamp_limit;

/// Run the neighborhood command.
pub fn run(app: &App, name: &str, limit: Option<i64>, output: OutputFormat) -> anyhow::Result<()> {
    let listing = app
        .engine
        .list_by_neighborhood(name, limit.map(clamp_limit));
    emit(&listing.to_string(), output)
}
