//! Plain-text analysis report
//!
//! Serializes a complete [`Analysis`] as a framed, aligned text document:
//! input data, the codeword table, the efficiency statistics, the rendered
//! merge tree, per-symbol coding paths and a technical summary. The output
//! is a pure function of the analysis, so callers wanting a timestamp or a
//! file on disk add those themselves.

use crate::analysis::Analysis;
use crate::tree::Branch;
use std::fmt::Write;

const RULE: &str = "═══════════════════════════════════════════════════════════════";

/// Render the full analysis report.
pub fn render(analysis: &Analysis) -> String {
    let mut out = String::new();
    let stats = &analysis.stats;

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "                 HUFFMAN CODING ANALYSIS REPORT");
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    let _ = writeln!(out, "INPUT DATA:");
    let _ = writeln!(out, "-----------");
    for row in &analysis.symbols {
        let _ = writeln!(out, "{}: {:.4}", row.name, row.probability);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "GENERATED CODEWORDS:");
    let _ = writeln!(out, "--------------------");
    let _ = writeln!(out, "Symbol | Probability  | Information | Code      | Length");
    let _ = writeln!(out, "-------+--------------+-------------+-----------+-------");
    for row in &analysis.symbols {
        let _ = writeln!(
            out,
            "{:<6} | {:>12.4} | {:>11.3} | {:<9} | {:>6}",
            row.name, row.probability, row.info, row.code, row.length
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "EFFICIENCY STATISTICS:");
    let _ = writeln!(out, "----------------------");
    let _ = writeln!(out, "Entropy (H):                {:.4} bits", stats.entropy);
    let _ = writeln!(out, "Maximum entropy (Hmax):     {:.4} bits", stats.max_entropy);
    let _ = writeln!(out, "Average code length (L):    {:.4} bits", stats.avg_length);
    let _ = writeln!(out, "Coding efficiency:          {:.2}%", stats.efficiency * 100.0);
    let _ = writeln!(
        out,
        "Channel efficiency:         {:.2}%",
        stats.channel_efficiency * 100.0
    );
    let _ = writeln!(out, "Redundancy:                 {:.4} bits", stats.redundancy_bits);
    let _ = writeln!(out, "Compression ratio:          {:.2}x", stats.compression_ratio);
    let _ = writeln!(out, "Bits saved vs 8-bit code:   {} bits", stats.bits_saved);
    let _ = writeln!(out);

    let _ = writeln!(out, "TREE STRUCTURE:");
    let _ = writeln!(out, "---------------");
    out.push_str(&analysis.tree.render());
    let _ = writeln!(out);

    let _ = writeln!(out, "CODING PATHS:");
    let _ = writeln!(out, "-------------");
    for row in &analysis.symbols {
        let path = analysis
            .tree
            .path_to(&row.name)
            .map_or_else(|| "not found".to_string(), describe_path);
        let _ = writeln!(out, "{}: {}", row.name, path);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "TECHNICAL SUMMARY:");
    let _ = writeln!(out, "------------------");
    let _ = writeln!(out, "Total symbols:              {}", stats.symbol_count);
    let _ = writeln!(out, "Maximum tree depth:         {}", analysis.tree.max_depth());
    let _ = writeln!(out, "Internal nodes:             {}", analysis.tree.internal_count());
    let _ = writeln!(out, "Total nodes:                {}", analysis.tree.total_count());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", RULE);

    out
}

/// Describe a root-to-leaf path as `0 (L) → 1 (R) → …`; an empty path (the
/// root is the leaf) reads `root`.
pub fn describe_path(path: Vec<Branch>) -> String {
    if path.is_empty() {
        return "root".to_string();
    }
    path.iter()
        .map(|b| {
            let side = match b {
                Branch::Left => "L",
                Branch::Right => "R",
            };
            format!("{} ({})", b.bit(), side)
        })
        .collect::<Vec<_>>()
        .join(" → ")
}
