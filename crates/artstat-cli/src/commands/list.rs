//! List command - artworks currently in place.

use crate::app::App;
use crate::commands::emit;
use crate::OutputFormat;
use artstat_core::clamp_limit;

/// Run the list command.
pub fn run(
    app: &App,
    neighborhood: Option<&str>,
    limit: Option<i64>,
    output: OutputFormat,
) -> anyhow::Result<()> {
    let listing = app
        .engine
        .list_active(neighborhood, limit.map(clamp_limit));
    emit(&listing.to_string(), output)
}
