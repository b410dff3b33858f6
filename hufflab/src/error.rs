//! Error types for symbol table validation

use thiserror::Error;

/// Errors reported while validating a symbol table or its parameters.
///
/// Validation fails fast: the first offending record aborts the run and is
/// carried in the error for user display. Tree construction, code assignment
/// and statistics cannot fail once given validated input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A record lacks the separator, its probability fails to parse, or the
    /// probability falls outside [0, 1].
    #[error("malformed record: {0:?}")]
    MalformedRecord(String),

    /// The same identifier appeared twice within one batch.
    #[error("duplicate symbol: {0:?}")]
    DuplicateSymbol(String),

    /// Fewer than two valid symbols were supplied.
    #[error("at least 2 symbols are required, got {0}")]
    InsufficientSymbols(usize),

    /// The probabilities do not sum to 1.0 within tolerance.
    #[error("probabilities must sum to 1.0, got {0}")]
    ProbabilitySumMismatch(f64),

    /// The channel rate is missing, non-finite, or not positive.
    #[error("invalid channel rate: {0}")]
    InvalidChannelRate(f64),

    /// A bit sequence does not decode to a whole number of symbols.
    #[error("bit sequence ended mid-codeword")]
    TruncatedBitSequence,

    /// A bit sequence contains a character other than '0' or '1'.
    #[error("invalid bit {0:?} in sequence")]
    InvalidBit(char),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
