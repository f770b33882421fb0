use core::fmt;

use crate::tree::render_tree::render_to;
use crate::tree::tree_node::Node;

/// An immutable coding tree.
///
/// Built once by the builders in [`crate::tree::build_tree`], only read
/// afterwards. The leaves are exactly the distinct symbols the tree was
/// built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    pub(crate) root: Node,
    pub(crate) leaf_count: usize,
}

impl Tree {
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// number of leaves, equals the number of distinct symbols
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Longest root-to-leaf path in edges. A tree of a single leaf has
    /// depth 0.
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        self.for_each_leaf(&mut |_, _, depth| max_depth = max_depth.max(depth));
        max_depth
    }

    /// Total weighted code length in bits, the sum of weight times code
    /// length over all leaves. The code length of a leaf is its depth,
    /// except in the single-leaf tree where the sole symbol still gets a one
    /// bit code.
    pub fn total_weighted_bits(&self) -> u64 {
        let mut total = 0_u64;
        self.for_each_leaf(&mut |_, weight, depth| total += weight * depth.max(1) as u64);
        total
    }

    /// Visits every leaf left to right, handing `(symbol, weight, depth)` to
    /// `fun`. Walks an explicit stack, a heavily skewed tree can be deeper
    /// than the call stack should go.
    pub(crate) fn for_each_leaf<F>(&self, fun: &mut F)
    where
        F: FnMut(u8, u64, usize),
    {
        let mut stack = vec![(&self.root, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            match node {
                Node::Leaf { symbol, weight } => fun(*symbol, *weight, depth),
                Node::Internal { left, right, .. } => {
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
            }
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(self, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::hist::count_simple;
    use crate::tree::build_tree;

    #[test]
    fn test_depth_and_leaf_count() {
        let counts = count_simple(b"abracadabra");
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.leaf_count(), 5);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    fn test_total_weighted_bits() {
        // a:5 b:2 r:2 c:1 d:1 has an optimum of 23 bits
        let counts = count_simple(b"abracadabra");
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.total_weighted_bits(), 23);
    }

    #[test]
    fn test_single_leaf_counts_one_bit_per_symbol() {
        let counts = count_simple(b"zzzzzzz");
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.total_weighted_bits(), 7);
    }

    #[test]
    fn test_leaves_visited_left_to_right() {
        let counts = count_simple(b"abracadabra");
        let tree = build_tree(&counts).unwrap();
        let mut depths = Vec::new();
        tree.for_each_leaf(&mut |symbol, weight, depth| depths.push((symbol, weight, depth)));
        // a=0 c=100 d=101 b=110 r=111 under the reproducible tie-break
        assert_eq!(
            depths,
            vec![
                (b'a', 5, 1),
                (b'c', 1, 3),
                (b'd', 1, 3),
                (b'b', 2, 3),
                (b'r', 2, 3),
            ]
        );
    }
}
