//! Codeword assignment and decoding
//!
//! Codewords are root-to-leaf paths in the merge tree: "0" on a left
//! descent, "1" on a right descent. Because leaves terminate every path, the
//! resulting code is prefix-free by construction.

use crate::tree::Node;
use crate::{Error, Result};
use std::collections::HashMap;

/// Mapping from symbol identifier to codeword (a non-empty string over
/// {0, 1}).
pub type CodeMap = HashMap<String, String>;

/// Assign a codeword to every leaf of the tree.
///
/// Depth-first walk accumulating the path bits; a root that is itself a leaf
/// (single-symbol degenerate case) gets the literal codeword "0".
pub fn assign_codes(root: &Node) -> CodeMap {
    let mut codes = CodeMap::new();
    walk(root, String::new(), &mut codes);
    codes
}

fn walk(node: &Node, path: String, codes: &mut CodeMap) {
    match node {
        Node::Leaf { name, .. } => {
            let code = if path.is_empty() { "0".to_string() } else { path };
            codes.insert(name.clone(), code);
        }
        Node::Internal { left, right, .. } => {
            walk(left, format!("{}0", path), codes);
            walk(right, format!("{}1", path), codes);
        }
    }
}

/// Decode a bit string back into the symbol sequence it encodes.
///
/// Walks the tree bit by bit, emitting a symbol at each leaf and restarting
/// from the root. Fails on characters outside {0, 1} and on sequences that
/// end in the middle of a codeword. On a degenerate single-leaf tree every
/// "0" bit yields the symbol.
pub fn decode(root: &Node, bits: &str) -> Result<Vec<String>> {
    let mut symbols = Vec::new();
    let mut node = root;

    for bit in bits.chars() {
        match bit {
            '0' | '1' => {}
            other => return Err(Error::InvalidBit(other)),
        }
        if let Node::Internal { left, right, .. } = node {
            node = if bit == '0' { left.as_ref() } else { right.as_ref() };
        } else if bit != '0' {
            // Lone-leaf tree: only the degenerate codeword "0" is valid
            return Err(Error::InvalidBit(bit));
        }
        if let Node::Leaf { name, .. } = node {
            symbols.push(name.clone());
            node = root;
        }
    }

    if !std::ptr::eq(node, root) {
        return Err(Error::TruncatedBitSequence);
    }
    Ok(symbols)
}
