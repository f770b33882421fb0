use std::collections::BinaryHeap;

use log::debug;

use crate::error::HuffError;
use crate::hist::CountsTable;
use crate::tree::tree_node::{HeapEntry, Node};
use crate::tree::Tree;
use crate::MAX_SYMBOL_VALUE;

/// creates a coding tree from a table with the counts of each symbol
///
/// Symbols with a zero count are skipped, they get no leaf and no code.
/// Fails with [`HuffError::InvalidInput`] when every count is zero, there is
/// nothing to build a tree from.
pub fn build_tree(counts: &CountsTable) -> Result<Tree, HuffError> {
    let leaves: Vec<(u8, u64)> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count != 0)
        .map(|(symbol, count)| (symbol as u8, u64::from(*count)))
        .collect();
    merge_leaves(leaves)
}

/// creates a coding tree from explicit `(symbol, weight)` pairs
///
/// The pairs may arrive in any order, the merge queue is seeded in ascending
/// symbol order so equal inputs build equal trees. Fails with
/// [`HuffError::InvalidInput`] when the slice is empty, a weight is zero or
/// a symbol repeats.
pub fn build_tree_from_weights(weights: &[(u8, u64)]) -> Result<Tree, HuffError> {
    let mut seen = [false; MAX_SYMBOL_VALUE as usize + 1];
    for (symbol, weight) in weights {
        if *weight == 0 {
            return Err(HuffError::InvalidInput(format!(
                "symbol {:#04x} has weight zero, zero weight symbols must be left out",
                symbol
            )));
        }
        if seen[*symbol as usize] {
            return Err(HuffError::InvalidInput(format!(
                "symbol {:#04x} appears more than once",
                symbol
            )));
        }
        seen[*symbol as usize] = true;
    }

    let mut leaves = weights.to_vec();
    leaves.sort_unstable_by_key(|(symbol, _)| *symbol);
    merge_leaves(leaves)
}

/// The greedy merge loop.
///
/// Repeatedly pops the two lightest nodes and pushes them back joined under
/// a fresh parent, until a single root remains. The first pop becomes the
/// left child. `leaves` must be sorted by symbol, the entry sequence numbers
/// continue where the leaves stop so later parents lose weight ties against
/// earlier ones.
fn merge_leaves(leaves: Vec<(u8, u64)>) -> Result<Tree, HuffError> {
    let leaf_count = leaves.len();
    let mut heap = BinaryHeap::with_capacity(leaf_count);
    for (seq, (symbol, weight)) in leaves.into_iter().enumerate() {
        heap.push(HeapEntry::new(Node::leaf(symbol, weight), seq as u32));
    }

    let mut seq = leaf_count as u32;
    let root = loop {
        let first = match heap.pop() {
            Some(entry) => entry,
            None => {
                return Err(HuffError::InvalidInput(
                    "no symbols to build a tree from".to_string(),
                ))
            }
        };
        let second = match heap.pop() {
            Some(entry) => entry,
            None => break first.node,
        };
        heap.push(HeapEntry::new(Node::merge(first.node, second.node), seq));
        seq += 1;
    };

    let tree = Tree { root, leaf_count };
    debug!(
        "built tree: {} leaves, depth {}",
        tree.leaf_count(),
        tree.depth()
    );
    Ok(tree)
}
