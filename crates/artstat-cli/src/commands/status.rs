//! Status command - look up one artwork.

use crate::app::App;
use crate::commands::emit;
use crate::OutputFormat;

/// Run the status command.
pub fn run(app: &App, name: &str, details: bool, output: OutputFormat) -> anyhow::Result<()> {
    let report = app.engine.status(name, details);
    emit(&report.to_string(), output)
}
