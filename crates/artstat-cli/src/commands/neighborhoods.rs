//! Neighborhoods command - known neighbourhoods.

use crate::app::App;
use crate::commands::emit;
use crate::OutputFormat;

/// Run the neighborhoods command.
pub fn run(app: &App, output: OutputFormat) -> anyhow::Result<()> {
    emit(&app.engine.list_known_neighborhoods().to_string(), output)
}
