//! Parser for generator patterns
//!
//! This module converts a pattern string into a [`Tree`] in one
//! left-to-right scan, then folds quantifier markers onto the element
//! each one follows.
//!
//! Grammar:
//!   pattern    := item*
//!   item       := atom | quantifier
//!   quantifier := '*' | '+'          (wraps the preceding element)
//!   atom       := '.' | bracket | literal
//!   bracket    := '[' body_item* ']'
//!   body_item  := '\' char | char '-' char | char
//!
//! There is no escaping outside bracket bodies; a `\` in open pattern
//! text is an ordinary literal character.

use crate::ast::{Node, Tree};
use crate::error::ParseError;

/// Options controlling how a pattern is scanned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat `\]` inside a bracket body as body content
    ///
    /// Off by default: the scan stops at the first `]` after the opening
    /// `[`, escaped or not, which is the behavior existing patterns rely
    /// on. Turning this on makes the terminator search skip escaped
    /// characters.
    pub escape_aware_brackets: bool,
}

/// A scanned pattern item, before quantifiers are folded
enum Token {
    /// A parsed top-level element
    Element(Node),
    /// A `*` or `+` marker waiting to wrap the preceding element
    Quantifier { symbol: char, position: usize },
}

/// Parser for generator patterns
pub struct Parser {
    chars: Vec<char>,
    position: usize,
    options: ParseOptions,
}

impl Parser {
    /// Create a parser for the given pattern
    ///
    /// Surrounding whitespace is trimmed before scanning; error positions
    /// are relative to the trimmed pattern.
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, ParseOptions::default())
    }

    /// Create a parser with explicit options
    pub fn with_options(pattern: &str, options: ParseOptions) -> Self {
        Parser {
            chars: pattern.trim().chars().collect(),
            position: 0,
            options,
        }
    }

    /// Parse the pattern and return its tree
    pub fn parse(&mut self) -> Result<Tree, ParseError> {
        let tokens = self.scan()?;
        let children = fold_quantifiers(tokens)?;
        Ok(Tree::new(children))
    }

    /// First pass: scan the pattern into a flat token sequence
    fn scan(&mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();
        while let Some(&c) = self.chars.get(self.position) {
            match c {
                '.' => {
                    tokens.push(Token::Element(Node::Any));
                    self.position += 1;
                }
                '[' => tokens.push(Token::Element(self.scan_bracket()?)),
                '*' | '+' => {
                    tokens.push(Token::Quantifier {
                        symbol: c,
                        position: self.position,
                    });
                    self.position += 1;
                }
                _ => {
                    tokens.push(Token::Element(Node::Char(c)));
                    self.position += 1;
                }
            }
        }
        Ok(tokens)
    }

    /// Scan a bracket expression; the position is at the opening `[`
    fn scan_bracket(&mut self) -> Result<Node, ParseError> {
        let open = self.position;
        let close = self
            .find_closing(open + 1)
            .ok_or(ParseError::UnterminatedBracket { position: open })?;
        let set = parse_bracket(&self.chars[open + 1..close], open + 1)?;
        if set.is_empty() {
            return Err(ParseError::EmptyBracket { position: open });
        }
        self.position = close + 1;
        Ok(Node::Bracket(set))
    }

    /// Locate the closing `]`, searching from `from`
    fn find_closing(&self, from: usize) -> Option<usize> {
        if self.options.escape_aware_brackets {
            let mut i = from;
            while i < self.chars.len() {
                match self.chars[i] {
                    '\\' => i += 2,
                    ']' => return Some(i),
                    _ => i += 1,
                }
            }
            None
        } else {
            // Literal scan: the first `]` terminates the body, escaped or not.
            self.chars[from..]
                .iter()
                .position(|&c| c == ']')
                .map(|at| from + at)
        }
    }
}

/// Expand a bracket body into its ordered character sequence
///
/// `offset` is the body's position in the pattern, used for error
/// reporting. Ranges expand inclusively by code point order; a reversed
/// range expands to nothing. The sequence is not deduplicated, so
/// overlapping ranges weight selection toward the repeated characters.
fn parse_bracket(body: &[char], offset: usize) -> Result<Vec<char>, ParseError> {
    let mut set = Vec::new();
    let mut i = 0;
    while i < body.len() {
        let c = body[i];
        if c == '\\' {
            match body.get(i + 1) {
                Some(&escaped) => set.push(escaped),
                None => return Err(ParseError::DanglingEscape { position: offset + i }),
            }
            i += 2;
        } else if body.get(i + 1) == Some(&'-') {
            let end = match body.get(i + 2) {
                Some(&end) => end,
                None => return Err(ParseError::IncompleteRange { position: offset + i }),
            };
            set.extend((c as u32..=end as u32).filter_map(char::from_u32));
            i += 3;
        } else {
            set.push(c);
            i += 1;
        }
    }
    Ok(set)
}

/// Second pass: fold quantifier markers onto the preceding element
///
/// A pure transformation over the scanned sequence: elements are appended
/// in order, and each quantifier re-wraps the most recently folded
/// element. Quantifying a quantified element (`a**`) nests the wrappers.
fn fold_quantifiers(tokens: Vec<Token>) -> Result<Vec<Node>, ParseError> {
    let mut children: Vec<Node> = Vec::new();
    for token in tokens {
        match token {
            Token::Element(node) => children.push(node),
            Token::Quantifier { symbol, position } => {
                let inner = children.pop().ok_or(ParseError::DanglingQuantifier {
                    quantifier: symbol,
                    position,
                })?;
                let wrapped = match symbol {
                    '*' => Node::star(inner),
                    _ => Node::plus(inner),
                };
                children.push(wrapped);
            }
        }
    }
    Ok(children)
}

/// Parse a pattern string into a tree
pub fn parse(pattern: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new(pattern);
    parser.parse()
}

/// Parse a pattern string into a tree with explicit options
pub fn parse_with_options(pattern: &str, options: ParseOptions) -> Result<Tree, ParseError> {
    let mut parser = Parser::with_options(pattern, options);
    parser.parse()
}
