//! One-shot analysis pipeline
//!
//! Ties the stages together: validate the raw table, build the merge tree,
//! assign codewords, compute statistics. The result is a self-contained
//! value; successive runs share nothing.

use crate::code::{assign_codes, CodeMap};
use crate::stats::Statistics;
use crate::table::SymbolTable;
use crate::tree::Node;
use crate::Result;

/// Per-symbol view of an analysis, in input order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymbolRow {
    /// Symbol identifier.
    pub name: String,
    /// Probability of occurrence.
    pub probability: f64,
    /// Information content −log2(p), in bits.
    pub info: f64,
    /// Assigned codeword.
    pub code: String,
    /// Codeword length in bits.
    pub length: usize,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Validated symbols enriched with their codewords, in input order.
    pub symbols: Vec<SymbolRow>,
    /// Root of the merge tree.
    pub tree: Node,
    /// Symbol identifier → codeword.
    pub codes: CodeMap,
    /// Statistics bundle for the table and code.
    pub stats: Statistics,
}

/// Run the full pipeline over a raw text block of `identifier,probability`
/// lines and a channel rate in bits per symbol.
pub fn analyze(input: &str, channel_rate: f64) -> Result<Analysis> {
    let table = SymbolTable::parse(input)?;
    analyze_table(table, channel_rate)
}

/// Run the pipeline over an already-validated table.
pub fn analyze_table(table: SymbolTable, channel_rate: f64) -> Result<Analysis> {
    let tree = Node::build(&table);
    let codes = assign_codes(&tree);
    let stats = Statistics::compute(&table, &codes, channel_rate)?;
    log::debug!(
        "analysis complete: {} symbols, H={:.4}, L={:.4}",
        table.len(),
        stats.entropy,
        stats.avg_length
    );

    let symbols = table
        .symbols()
        .iter()
        .map(|s| {
            // Every validated symbol has a leaf, so a code always exists
            let code = codes.get(&s.name).cloned().unwrap_or_default();
            SymbolRow {
                name: s.name.clone(),
                probability: s.probability,
                info: s.info(),
                length: code.len(),
                code,
            }
        })
        .collect();

    Ok(Analysis {
        symbols,
        tree,
        codes,
        stats,
    })
}
