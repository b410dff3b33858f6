//! Analyze command implementation

use crate::{output, OutputFormat};
use anyhow::{Context, Result};
use hufflab::{Analysis, Statistics, SymbolRow};
use serde::Serialize;

#[derive(Serialize)]
struct AnalysisReport<'a> {
    channel_rate: f64,
    symbols: &'a [SymbolRow],
    statistics: &'a Statistics,
}

/// Analyze a symbol table and print codewords plus efficiency statistics
pub fn analyze(input_path: &str, channel_rate: f64) -> Result<()> {
    let raw = super::read_input(input_path)?;
    let analysis = hufflab::analyze(&raw, channel_rate)
        .with_context(|| format!("Analysis failed for input: {}", input_path))?;
    output::verbose_println(
        1,
        &format!(
            "validated {} symbols, channel rate {}",
            analysis.symbols.len(),
            channel_rate
        ),
    );

    match output::structured() {
        Some(OutputFormat::Json) => {
            output::print_structured(&AnalysisReport {
                channel_rate,
                symbols: &analysis.symbols,
                statistics: &analysis.stats,
            })?;
        }
        Some(_) => {
            // CSV carries the per-symbol rows only
            output::print_structured(&analysis.symbols)?;
        }
        None => print_text(&analysis),
    }

    Ok(())
}

fn print_text(analysis: &Analysis) {
    output::heading("Symbol codes");
    println!();
    println!("Symbol | Probability | Information | Code      | Length");
    println!("-------+-------------+-------------+-----------+-------");
    for row in &analysis.symbols {
        // No color inside the table: escape codes would break the alignment
        println!(
            "{:<6} | {:>11.4} | {:>11.3} | {:<9} | {:>6}",
            row.name, row.probability, row.info, row.code, row.length
        );
    }
    println!();

    let stats = &analysis.stats;
    output::heading("Statistics");
    println!();
    output::stat_line("Entropy (H)", format!("{:.4} bits", stats.entropy));
    output::stat_line("Maximum entropy (Hmax)", format!("{:.4} bits", stats.max_entropy));
    output::stat_line("Average code length (L)", format!("{:.4} bits", stats.avg_length));
    output::stat_line("Coding efficiency", format!("{:.2}%", stats.efficiency * 100.0));
    output::stat_line(
        "Channel efficiency",
        format!("{:.2}%", stats.channel_efficiency * 100.0),
    );
    output::stat_line("Redundancy (relative)", format!("{:.2}%", stats.redundancy * 100.0));
    output::stat_line("Redundancy (absolute)", format!("{:.4} bits", stats.redundancy_bits));
    output::stat_line("Compression ratio", format!("{:.2}x", stats.compression_ratio));
    output::stat_line(
        "Bits saved per 1000 symbols",
        format!("{}", stats.bits_saved),
    );
}
