//! Command implementations

pub mod analyze;
pub mod export;
pub mod tree;

use anyhow::{Context, Result};
use std::io::Read;

/// Read the raw symbol table from a file path, or from stdin when the path
/// is `-`.
pub fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read symbol table from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read symbol table: {}", path))
    }
}
