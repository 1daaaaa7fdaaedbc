//! High-level pattern handle
//!
//! Parses once in the constructor and exposes generation against the
//! immutable tree, the usual parse-once / generate-many flow.

use rand::Rng;

use crate::ast::Tree;
use crate::error::{GenerateError, ParseError};
use crate::generator::generate;
use crate::parser::{parse, parse_with_options, ParseOptions};

/// A compiled generator pattern
#[derive(Debug)]
pub struct Pattern {
    tree: Tree,
}

impl Pattern {
    /// Parse a pattern
    pub fn new(pattern: &str) -> Result<Self, ParseError> {
        let tree = parse(pattern)?;
        Ok(Pattern { tree })
    }

    /// Parse a pattern with explicit parse options
    pub fn with_options(pattern: &str, options: ParseOptions) -> Result<Self, ParseError> {
        let tree = parse_with_options(pattern, options)?;
        Ok(Pattern { tree })
    }

    /// The parsed tree
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Whether the pattern parsed to at least one element
    pub fn matched(&self) -> bool {
        self.tree.matched()
    }

    /// Generate one sample
    pub fn generate<R: Rng>(
        &self,
        max_repeat: usize,
        rng: &mut R,
    ) -> Result<String, GenerateError> {
        generate(&self.tree, max_repeat, rng)
    }

    /// Generate `count` samples sequentially
    ///
    /// Halts on the first generation error; no partial batch is returned.
    pub fn samples<R: Rng>(
        &self,
        count: usize,
        max_repeat: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, GenerateError> {
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(self.generate(max_repeat, rng)?);
        }
        Ok(samples)
    }
}
