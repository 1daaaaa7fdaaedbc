//! Rexgen Core Library
//!
//! A pattern-driven random string generator: parses a small regex subset
//! (literals, `.`, bracket sets with ranges and escapes, postfix `*`/`+`)
//! into a tree and synthesizes random strings structurally consistent
//! with it.

pub mod ast;
pub mod error;
pub mod generator;
pub mod parser;
pub mod pattern;

pub use ast::{Node, Tree};
pub use error::{GenerateError, ParseError, PatternError, Result};
pub use generator::generate;
pub use parser::{parse, parse_with_options, ParseOptions, Parser};
pub use pattern::Pattern;
