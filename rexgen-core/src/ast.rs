//! Tree data model for parsed patterns
//!
//! This module defines the node types the parser produces and the
//! generator consumes. The supported pattern subset is:
//! - Literal characters
//! - Wildcard (.)
//! - Bracket character sets with ranges and escapes ([a-z0\.])
//! - Postfix quantifiers (*, +)

use std::fmt;

/// A node in a parsed pattern tree
///
/// Leaves hold a direct value; composites wrap exactly one quantified
/// child. The root's children live in [`Tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A literal character
    Char(char),

    /// Any character (dot)
    Any,

    /// A bracket character set, ordered and not deduplicated
    ///
    /// Duplicate entries from overlapping ranges stay in the sequence and
    /// weight random selection toward the duplicated character.
    Bracket(Vec<char>),

    /// Zero or more repetitions of the wrapped element (*)
    Star(Box<Node>),

    /// One or more repetitions of the wrapped element (+)
    Plus(Box<Node>),
}

impl Node {
    /// Wrap an element in a zero-or-more quantifier
    pub fn star(inner: Node) -> Self {
        Node::Star(Box::new(inner))
    }

    /// Wrap an element in a one-or-more quantifier
    pub fn plus(inner: Node) -> Self {
        Node::Plus(Box::new(inner))
    }

    /// The node's display name in rendered trees
    fn name(&self) -> &'static str {
        match self {
            Node::Char(_) => "CHAR",
            Node::Any => "ANY",
            Node::Bracket(_) => "BRACKET",
            Node::Star(_) => "STAR",
            Node::Plus(_) => "PLUS",
        }
    }

    fn render(&self, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:depth$}{}", "", self.name())?;
        match self {
            Node::Char(c) => writeln!(f, ": {}", c),
            Node::Any => writeln!(f),
            Node::Bracket(set) => writeln!(f, ": {:?}", set),
            Node::Star(inner) | Node::Plus(inner) => {
                writeln!(f)?;
                inner.render(depth + 1, f)
            }
        }
    }
}

/// The parsed representation of a pattern
///
/// Owns the root's ordered children. A tree is constructed once per
/// pattern and is read-only afterwards; generation calls share it by
/// reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    children: Vec<Node>,
}

impl Tree {
    /// Create a tree from the root's parsed top-level elements
    pub fn new(children: Vec<Node>) -> Self {
        Tree { children }
    }

    /// The root's children, in pattern order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the pattern parsed to at least one element
    pub fn matched(&self) -> bool {
        !self.children.is_empty()
    }
}

impl fmt::Display for Tree {
    /// Render the tree one node per line, children indented one space
    /// per depth
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROOT")?;
        for child in &self.children {
            child.render(1, f)?;
        }
        Ok(())
    }
}
