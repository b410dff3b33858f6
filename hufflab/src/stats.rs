//! Information-theoretic statistics for a symbol table and its code
//!
//! All quantities are in bits (base-2 logarithms). Zero-probability symbols
//! contribute nothing to any of the sums, matching the convention
//! 0·log2(0) = 0.

use crate::code::CodeMap;
use crate::table::SymbolTable;
use crate::{Error, Result, BASELINE_BITS};

/// Statistics bundle describing how close a code comes to the entropy bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    /// Number of symbols in the table.
    pub symbol_count: usize,
    /// Source entropy H = Σ −p·log2(p).
    pub entropy: f64,
    /// Maximum entropy Hmax = log2(n) for n symbols.
    pub max_entropy: f64,
    /// Average codeword length L = Σ p·len(code).
    pub avg_length: f64,
    /// Coding efficiency H / L.
    pub efficiency: f64,
    /// Channel efficiency H / channel rate.
    pub channel_efficiency: f64,
    /// Relative redundancy (Hmax − H) / Hmax, 0 when Hmax = 0.
    pub redundancy: f64,
    /// Absolute redundancy L − H, in bits.
    pub redundancy_bits: f64,
    /// Expected bits per symbol at the fixed 8-bit baseline over expected
    /// bits per symbol under the code.
    pub compression_ratio: f64,
    /// Bits saved versus the baseline over a nominal 1000-symbol message.
    pub bits_saved: i64,
}

impl Statistics {
    /// Compute the full statistics bundle.
    ///
    /// `channel_rate` is the bits-per-symbol capacity of the external
    /// channel; it must be finite and positive or the computation fails with
    /// [`Error::InvalidChannelRate`].
    pub fn compute(table: &SymbolTable, codes: &CodeMap, channel_rate: f64) -> Result<Self> {
        if !channel_rate.is_finite() || channel_rate <= 0.0 {
            return Err(Error::InvalidChannelRate(channel_rate));
        }

        let mut entropy = 0.0;
        let mut avg_length = 0.0;
        let mut baseline_bits = 0.0;
        let mut coded_bits = 0.0;

        for symbol in table {
            let p = symbol.probability;
            if p <= 0.0 {
                continue;
            }
            let length = codes.get(&symbol.name).map_or(0, |c| c.len());
            entropy += p * symbol.info();
            avg_length += p * length as f64;
            baseline_bits += p * BASELINE_BITS;
            coded_bits += p * length as f64;
        }

        let max_entropy = (table.len() as f64).log2();
        let redundancy = if max_entropy > 0.0 {
            (max_entropy - entropy) / max_entropy
        } else {
            0.0
        };

        Ok(Self {
            symbol_count: table.len(),
            entropy,
            max_entropy,
            avg_length,
            efficiency: entropy / avg_length,
            channel_efficiency: entropy / channel_rate,
            redundancy,
            redundancy_bits: avg_length - entropy,
            compression_ratio: baseline_bits / coded_bits,
            bits_saved: ((baseline_bits - coded_bits) * 1000.0).round() as i64,
        })
    }
}
