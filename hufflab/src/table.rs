//! Symbol table parsing and validation
//!
//! Raw input is a text block of `identifier,probability` records, one per
//! line. Validation is fail-fast: the first bad record aborts with an error
//! carrying the offending input, and nothing downstream of the validator can
//! fail afterwards.

use crate::{information, Error, Result, PLACEHOLDER_SYMBOL, PROBABILITY_SUM_TOLERANCE};
use std::collections::HashSet;

/// A validated symbol: a visible identifier with its probability of
/// occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Display token identifying the symbol. Unique within one table.
    pub name: String,
    /// Probability of occurrence, in [0, 1].
    pub probability: f64,
}

impl Symbol {
    /// Information content in bits: −log2(p), or 0.0 when p = 0.
    pub fn info(&self) -> f64 {
        information(self.probability)
    }
}

/// An ordered, validated set of symbols (order = input order).
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    /// Parse and validate a raw text block of `identifier,probability` lines.
    ///
    /// Rules, applied per record in order:
    /// - lines without a comma are skipped entirely;
    /// - identifier and probability fields are trimmed;
    /// - an empty identifier becomes [`PLACEHOLDER_SYMBOL`];
    /// - the probability must parse as a real number in [0, 1];
    /// - an identifier may appear only once per batch.
    ///
    /// After the pass, at least two symbols are required and the
    /// probabilities must total 1.0 within [`PROBABILITY_SUM_TOLERANCE`].
    pub fn parse(input: &str) -> Result<Self> {
        let mut symbols = Vec::new();
        let mut seen = HashSet::new();

        for line in input.lines() {
            if !line.contains(',') {
                continue;
            }
            let mut fields = line.split(',');
            let raw_name = fields.next().unwrap_or("").trim();
            let raw_prob = fields.next().unwrap_or("").trim();

            let name = if raw_name.is_empty() {
                PLACEHOLDER_SYMBOL.to_string()
            } else {
                raw_name.to_string()
            };

            let probability: f64 = raw_prob
                .parse()
                .map_err(|_| Error::MalformedRecord(line.to_string()))?;
            if !(0.0..=1.0).contains(&probability) {
                return Err(Error::MalformedRecord(line.to_string()));
            }
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateSymbol(name));
            }

            symbols.push(Symbol { name, probability });
        }

        if symbols.len() < 2 {
            return Err(Error::InsufficientSymbols(symbols.len()));
        }

        let total: f64 = symbols.iter().map(|s| s.probability).sum();
        if (total - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(Error::ProbabilitySumMismatch(total));
        }

        log::debug!("validated {} symbols, total probability {}", symbols.len(), total);
        Ok(Self { symbols })
    }

    /// Build a table directly from symbols, skipping text parsing.
    ///
    /// Applies the same batch-level checks as [`SymbolTable::parse`]
    /// (uniqueness, count, probability range and total).
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        let mut seen = HashSet::new();
        for s in &symbols {
            if !(0.0..=1.0).contains(&s.probability) || !s.probability.is_finite() {
                return Err(Error::MalformedRecord(format!("{},{}", s.name, s.probability)));
            }
            if !seen.insert(s.name.clone()) {
                return Err(Error::DuplicateSymbol(s.name.clone()));
            }
        }
        if symbols.len() < 2 {
            return Err(Error::InsufficientSymbols(symbols.len()));
        }
        let total: f64 = symbols.iter().map(|s| s.probability).sum();
        if (total - 1.0).abs() > PROBABILITY_SUM_TOLERANCE {
            return Err(Error::ProbabilitySumMismatch(total));
        }
        Ok(Self { symbols })
    }

    /// Validated symbols in input order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of symbols in the table.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table is empty (never true for a validated table).
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
