//! Compare command - several artworks side by side.

use crate::app::App;
use crate::commands::emit;
use crate::OutputFormat;

/// Run the compare command.
pub fn run(app: &App, names: &str, output: OutputFormat) -> anyhow::Result<()> {
    emit(&app.engine.compare(names).to_string(), output)
}
