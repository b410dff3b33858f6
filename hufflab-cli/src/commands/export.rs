//! Export command implementation

use crate::output;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

/// Run the analysis and write the complete plain-text report to a file
pub fn export(input_path: &str, channel_rate: f64, target: &Path) -> Result<()> {
    let raw = super::read_input(input_path)?;
    let analysis = hufflab::analyze(&raw, channel_rate)
        .with_context(|| format!("Analysis failed for input: {}", input_path))?;

    let report = hufflab::report::render(&analysis);
    std::fs::write(target, &report)
        .with_context(|| format!("Failed to write report: {}", target.display()))?;

    log::info!("wrote {} bytes to {}", report.len(), target.display());
    if output::use_color() {
        println!(
            "{} Report written to {}",
            "✓".green(),
            target.display().to_string().cyan()
        );
    } else {
        println!("Report written to {}", target.display());
    }

    Ok(())
}
