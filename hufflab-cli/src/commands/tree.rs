//! Tree command implementation

use crate::output;
use anyhow::{Context, Result};
use colored::*;
use hufflab::{assign_codes, Node, SymbolTable};
use serde::Serialize;

#[derive(Serialize)]
struct TreeInfo {
    symbol_count: usize,
    max_depth: usize,
    leaf_count: usize,
    internal_count: usize,
    total_count: usize,
    rendering: String,
}

/// Validate a symbol table and print its Huffman merge tree
pub fn tree(input_path: &str) -> Result<()> {
    let raw = super::read_input(input_path)?;
    let table = SymbolTable::parse(&raw)
        .with_context(|| format!("Invalid symbol table: {}", input_path))?;
    let root = Node::build(&table);

    if output::structured().is_some() {
        // CSV gets the same flat shape as JSON, rendered as a one-row table
        return output::print_structured(&TreeInfo {
            symbol_count: table.len(),
            max_depth: root.max_depth(),
            leaf_count: root.leaf_count(),
            internal_count: root.internal_count(),
            total_count: root.total_count(),
            rendering: root.render(),
        })
        .map_err(Into::into);
    }

    if output::use_color() {
        println!("{}: {} symbols", "Huffman tree".bold(), table.len());
    } else {
        println!("Huffman tree: {} symbols", table.len());
    }
    println!();
    print!("{}", root.render());
    println!();

    let codes = assign_codes(&root);
    output::stat_line("Max depth", root.max_depth().to_string());
    output::stat_line("Internal nodes", root.internal_count().to_string());
    output::stat_line("Total nodes", root.total_count().to_string());
    output::stat_line(
        "Longest codeword",
        codes
            .values()
            .map(|c| c.len())
            .max()
            .unwrap_or(0)
            .to_string(),
    );

    Ok(())
}
