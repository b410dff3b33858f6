//! Huffman merge tree construction and structural introspection
//!
//! The tree is a pure value: every node exclusively owns its children and the
//! caller owns the root. A tree is built once per analysis run and replaced
//! wholesale on the next run.

use crate::table::SymbolTable;
use std::fmt;

/// A left/right decision on a root-to-leaf path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Descend into the left child (bit 0).
    Left,
    /// Descend into the right child (bit 1).
    Right,
}

impl Branch {
    /// The code bit this branch contributes.
    pub fn bit(self) -> char {
        match self {
            Branch::Left => '0',
            Branch::Right => '1',
        }
    }
}

/// A node of the Huffman merge tree.
///
/// Leaves carry a symbol; internal nodes carry exactly two children and the
/// sum of their probabilities. There are no unary internal nodes: a tree is
/// either a lone leaf (single-symbol degenerate case) or every internal node
/// is binary.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Symbol-bearing terminal node.
    Leaf {
        /// Symbol identifier.
        name: String,
        /// Probability of the symbol.
        probability: f64,
    },
    /// Merge node combining two subtrees.
    Internal {
        /// Sum of the two children's probabilities.
        probability: f64,
        /// First-selected (lower-priority) subtree; contributes bit 0.
        left: Box<Node>,
        /// Second-selected subtree; contributes bit 1.
        right: Box<Node>,
    },
}

impl Node {
    /// Build the merge tree for a validated symbol table.
    ///
    /// The working set starts as one leaf per symbol in input order. Each
    /// step stable-sorts the set ascending by probability, removes the first
    /// two nodes (first becomes the left child), and appends their merge.
    /// Ties therefore keep their current relative order, and a fresh merge
    /// sorts after existing nodes of equal probability. The procedure is
    /// deterministic for any given input order.
    pub fn build(table: &SymbolTable) -> Self {
        let mut nodes: Vec<Node> = table
            .symbols()
            .iter()
            .map(|s| Node::Leaf {
                name: s.name.clone(),
                probability: s.probability,
            })
            .collect();

        debug_assert!(!nodes.is_empty(), "tables are validated non-empty");

        while nodes.len() > 1 {
            nodes.sort_by(|a, b| a.probability().total_cmp(&b.probability()));
            let left = nodes.remove(0);
            let right = nodes.remove(0);
            log::trace!(
                "merging {} + {} = {}",
                left.probability(),
                right.probability(),
                left.probability() + right.probability()
            );
            nodes.push(Node::Internal {
                probability: left.probability() + right.probability(),
                left: Box::new(left),
                right: Box::new(right),
            });
        }

        // Single-symbol input skips the loop: the lone leaf is the root.
        nodes.pop().unwrap_or(Node::Leaf {
            name: String::new(),
            probability: 0.0,
        })
    }

    /// Probability carried by this node (sum of subtree leaves).
    pub fn probability(&self) -> f64 {
        match self {
            Node::Leaf { probability, .. } => *probability,
            Node::Internal { probability, .. } => *probability,
        }
    }

    /// Whether this node is symbol-bearing.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Longest root-to-leaf edge count. A lone leaf has depth 0.
    pub fn max_depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.max_depth().max(right.max_depth()),
        }
    }

    /// Number of symbol-bearing nodes.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of merge nodes. Always `leaf_count() - 1`.
    pub fn internal_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Total node count, leaves and merge nodes together.
    pub fn total_count(&self) -> usize {
        self.leaf_count() + self.internal_count()
    }

    /// Left/right decisions from the root to the leaf holding `name`, or
    /// `None` if no such leaf exists. A root leaf yields an empty path.
    pub fn path_to(&self, name: &str) -> Option<Vec<Branch>> {
        match self {
            Node::Leaf { name: n, .. } => (n == name).then(Vec::new),
            Node::Internal { left, right, .. } => {
                if let Some(mut path) = left.path_to(name) {
                    path.insert(0, Branch::Left);
                    return Some(path);
                }
                if let Some(mut path) = right.path_to(name) {
                    path.insert(0, Branch::Right);
                    return Some(path);
                }
                None
            }
        }
    }

    /// Human-readable indented dump of the tree, one node per line.
    ///
    /// Leaves render as `name (p)`, merge nodes as bare `p`, probabilities to
    /// three decimals, with `├──`/`└──` connectors distinguishing a node that
    /// has a following sibling from a last child.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, "", true);
        out
    }

    fn render_into(&self, out: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        let label = match self {
            Node::Leaf { name, probability } => format!("{} ({:.3})", name, probability),
            Node::Internal { probability, .. } => format!("{:.3}", probability),
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&label);
        out.push('\n');

        if let Node::Internal { left, right, .. } = self {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            left.render_into(out, &child_prefix, false);
            right.render_into(out, &child_prefix, true);
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::SymbolTable;

    fn table(input: &str) -> SymbolTable {
        SymbolTable::parse(input).expect("test table must validate")
    }

    #[test]
    fn test_two_symbols_merge_once() {
        let root = Node::build(&table("A,0.5\nB,0.5"));
        assert!((root.probability() - 1.0).abs() < 1e-9);
        assert_eq!(root.max_depth(), 1);
        assert_eq!(root.leaf_count(), 2);
        assert_eq!(root.internal_count(), 1);
        assert_eq!(root.total_count(), 3);
    }

    #[test]
    fn test_structural_counts() {
        let root = Node::build(&table("A,0.4\nB,0.2\nC,0.2\nD,0.1\nE,0.1"));
        assert_eq!(root.leaf_count(), 5);
        assert_eq!(root.internal_count(), 4);
        assert_eq!(root.total_count(), 9);
        assert!((root.probability() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // Four equal probabilities: first pass merges A+B, second C+D,
        // final pass merges the two internal nodes.
        let root = Node::build(&table("A,0.25\nB,0.25\nC,0.25\nD,0.25"));
        assert_eq!(root.max_depth(), 2);
        assert_eq!(root.path_to("A"), Some(vec![Branch::Left, Branch::Left]));
        assert_eq!(root.path_to("B"), Some(vec![Branch::Left, Branch::Right]));
        assert_eq!(root.path_to("C"), Some(vec![Branch::Right, Branch::Left]));
        assert_eq!(root.path_to("D"), Some(vec![Branch::Right, Branch::Right]));
    }

    #[test]
    fn test_lower_probability_goes_left() {
        let root = Node::build(&table("A,0.7\nB,0.3"));
        // B has the smaller probability, so it is selected first
        assert_eq!(root.path_to("B"), Some(vec![Branch::Left]));
        assert_eq!(root.path_to("A"), Some(vec![Branch::Right]));
    }

    #[test]
    fn test_path_to_missing_symbol() {
        let root = Node::build(&table("A,0.5\nB,0.5"));
        assert_eq!(root.path_to("Z"), None);
    }

    #[test]
    fn test_single_leaf_root() {
        let root = Node::Leaf {
            name: "A".to_string(),
            probability: 1.0,
        };
        assert_eq!(root.max_depth(), 0);
        assert_eq!(root.leaf_count(), 1);
        assert_eq!(root.internal_count(), 0);
        assert_eq!(root.path_to("A"), Some(vec![]));
    }

    #[test]
    fn test_render_shape() {
        let root = Node::build(&table("A,0.5\nB,0.5"));
        let dump = root.render();
        assert_eq!(dump, "└── 1.000\n    ├── A (0.500)\n    └── B (0.500)\n");
    }

    #[test]
    fn test_render_marks_siblings() {
        let root = Node::build(&table("A,0.5\nB,0.25\nC,0.25"));
        let dump = root.render();
        // Exactly one sibling connector per internal node
        assert_eq!(dump.matches("├──").count(), root.internal_count());
        assert_eq!(dump.lines().count(), root.total_count());
    }
}
