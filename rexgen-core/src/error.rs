//! Error types for pattern parsing and generation
//!
//! This module provides error handling using the `thiserror` crate.
//! Errors are categorized by their source: parsing or generation.

use thiserror::Error;

/// Errors that occur while parsing a pattern
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening `[` with no closing `]` after it
    #[error("unterminated bracket expression starting at position {position}")]
    UnterminatedBracket {
        /// Position of the opening `[` in the pattern
        position: usize,
    },

    /// A `\` at the end of a bracket body with no character to escape
    #[error("escape at position {position} has no following character")]
    DanglingEscape {
        /// Position of the `\` in the pattern
        position: usize,
    },

    /// A range `X-` with no upper bound inside a bracket body
    #[error("character range at position {position} is missing its upper bound")]
    IncompleteRange {
        /// Position of the range's lower bound in the pattern
        position: usize,
    },

    /// A bracket expression whose expansion contains no characters
    #[error("bracket expression at position {position} matches no characters")]
    EmptyBracket {
        /// Position of the opening `[` in the pattern
        position: usize,
    },

    /// A quantifier with no preceding element to apply to
    #[error("quantifier `{quantifier}` at position {position} has no preceding element")]
    DanglingQuantifier {
        /// The quantifier character (`*` or `+`)
        quantifier: char,
        /// Position of the quantifier in the pattern
        position: usize,
    },
}

/// Errors that occur while generating a sample from a tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A `+` quantifier with a repeat bound of 0 has an empty repeat range
    #[error("`+` requires at least one repetition but the repeat bound is 0")]
    EmptyRepeatRange,
}

/// The main error type for pattern operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Errors that occur during parsing
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Errors that occur during generation
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
}

/// Result type alias for pattern operations
pub type Result<T> = std::result::Result<T, PatternError>;
