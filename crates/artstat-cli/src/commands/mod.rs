//! Subcommand implementations.

pub mod check;
pub mod compare;
pub mod list;
pub mod neighborhood;
pub mod neighborhoods;
pub mod status;

use crate::OutputFormat;

/// Print a query result as plain text or as a `{"result": ...}` JSON envelope.
pub fn emit(result: &str, output: OutputFormat) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => println!("{}", result),
        OutputFormat::Json => {
            let envelope = serde_json::json!({ "result": result });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }
    Ok(())
}
