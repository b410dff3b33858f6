//! Property tests for tree structure, code assignment and statistics

use hufflab::{assign_codes, decode, Node, Statistics, Symbol, SymbolTable};
use proptest::prelude::*;

/// Arbitrary validated tables: 2..=12 symbols with integer weights
/// normalized to probabilities summing to 1.
fn arb_table() -> impl Strategy<Value = SymbolTable> {
    prop::collection::vec(1u32..1000, 2..=12).prop_map(|weights| {
        let total: u32 = weights.iter().sum();
        let symbols = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Symbol {
                name: format!("s{}", i),
                probability: w as f64 / total as f64,
            })
            .collect();
        SymbolTable::from_symbols(symbols).expect("normalized weights validate")
    })
}

proptest! {
    #[test]
    fn prop_structural_counts(table in arb_table()) {
        let root = Node::build(&table);
        prop_assert_eq!(root.leaf_count(), table.len());
        prop_assert_eq!(root.internal_count(), table.len() - 1);
        prop_assert_eq!(root.total_count(), 2 * table.len() - 1);
        prop_assert!((root.probability() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn prop_codes_are_prefix_free(table in arb_table()) {
        let codes = assign_codes(&Node::build(&table));
        prop_assert_eq!(codes.len(), table.len());
        let all: Vec<&String> = codes.values().collect();
        for (i, a) in all.iter().enumerate() {
            for (j, b) in all.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a.as_str()));
                }
            }
        }
    }

    #[test]
    fn prop_code_length_matches_leaf_depth(table in arb_table()) {
        let root = Node::build(&table);
        let codes = assign_codes(&root);
        for symbol in &table {
            let path = root.path_to(&symbol.name).expect("leaf exists");
            prop_assert_eq!(codes[&symbol.name].len(), path.len().max(1));
        }
    }

    #[test]
    fn prop_shannon_bound(table in arb_table()) {
        let codes = assign_codes(&Node::build(&table));
        let stats = Statistics::compute(&table, &codes, 1.0).expect("valid rate");
        prop_assert!(stats.avg_length >= stats.entropy - 1e-9);
        prop_assert!(stats.avg_length < stats.entropy + 1.0);
        prop_assert!(stats.efficiency <= 1.0 + 1e-9);
    }

    #[test]
    fn prop_decode_round_trip(table in arb_table(), picks in prop::collection::vec(any::<prop::sample::Index>(), 1..32)) {
        let root = Node::build(&table);
        let codes = assign_codes(&root);

        let message: Vec<&str> = picks
            .iter()
            .map(|ix| table.symbols()[ix.index(table.len())].name.as_str())
            .collect();
        let bits: String = message.iter().map(|s| codes[*s].as_str()).collect();

        let decoded = decode(&root, &bits).expect("well-formed bit sequence");
        prop_assert_eq!(decoded, message);
    }
}
