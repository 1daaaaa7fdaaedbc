//! Random string synthesis from parsed trees
//!
//! This module walks a [`Tree`] with a caller-supplied random source and
//! produces one string per call. Output structure is determined by the
//! tree; content comes from the random source, which is threaded through
//! explicitly so callers can seed it for reproducible runs.

use rand::Rng;

use crate::ast::{Node, Tree};
use crate::error::GenerateError;

/// Generate one string structurally consistent with the tree
///
/// `max_repeat` is the inclusive upper bound on repetitions for `*` and
/// `+` elements. The call is a pure function of the tree, the bound, and
/// the random source's state; nothing is retained across calls.
pub fn generate<R: Rng>(
    tree: &Tree,
    max_repeat: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    let mut out = String::new();
    for child in tree.children() {
        generate_node(child, max_repeat, rng, &mut out)?;
    }
    Ok(out)
}

fn generate_node<R: Rng>(
    node: &Node,
    max_repeat: usize,
    rng: &mut R,
    out: &mut String,
) -> Result<(), GenerateError> {
    match node {
        Node::Char(c) => out.push(*c),
        // Single-byte alphabet: any code point in [0, 255], printable or not.
        Node::Any => out.push(char::from(rng.gen_range(0u32, 256u32) as u8)),
        Node::Bracket(set) => out.push(set[rng.gen_range(0, set.len())]),
        Node::Star(inner) => {
            let times = rng.gen_range(0, max_repeat + 1);
            for _ in 0..times {
                generate_node(inner, max_repeat, rng, out)?;
            }
        }
        Node::Plus(inner) => {
            if max_repeat == 0 {
                return Err(GenerateError::EmptyRepeatRange);
            }
            let times = rng.gen_range(1, max_repeat + 1);
            for _ in 0..times {
                generate_node(inner, max_repeat, rng, out)?;
            }
        }
    }
    Ok(())
}
