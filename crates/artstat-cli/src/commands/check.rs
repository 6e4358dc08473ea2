//! Check command - show the load report and index statistics.

use crate::app::App;
use crate::OutputFormat;

/// Run the check command.
pub fn run(app: &App, output: OutputFormat) -> anyhow::Result<()> {
    let stats = app.engine.index().stats();
    let report = &app.report;

    if let OutputFormat::Json = output {
        let skipped: Vec<serde_json::Value> = report
            .skipped()
            .map(|(path, reason)| {
                serde_json::json!({
                    "path": path.display().to_string(),
                    "reason": reason,
                })
            })
            .collect();

        let value = serde_json::json!({
            "records_dir": report.dir.display().to_string(),
            "loaded": report.loaded_count(),
            "skipped": skipped,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("artstat Record Status");
    println!("=====================");
    println!();
    println!("Record directory: {}", report.dir.display());
    println!();

    if report.outcomes.is_empty() {
        println!(
            "No records found matching '{}'.",
            app.config.records.pattern
        );
        return Ok(());
    }

    println!("Summary:");
    println!("  Records loaded:    {}", report.loaded_count());
    println!("  Records skipped:   {}", report.skipped_count());
    println!("  Lookup keys:       {}", stats.key_count);
    println!("  In place:          {}", stats.in_place_count);
    println!("  Neighborhoods:     {}", stats.neighborhood_count);
    println!(
        "  Loaded at:         {}",
        stats.loaded_at.format("%Y-%m-%d %H:%M:%S")
    );

    if report.skipped_count() > 0 {
        println!();
        println!("Skipped Records:");
        for (path, reason) in report.skipped() {
            println!("  ⚠ {} ({})", path.display(), reason);
        }
    }

    Ok(())
}
