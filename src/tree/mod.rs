pub mod build_tree;
pub mod render_tree;
mod tree;
pub(crate) mod tree_node;
pub use build_tree::{build_tree, build_tree_from_weights};

pub use tree::Tree;
pub use tree_node::Node;

/// the minimum depth a coding tree over `num_symbols` symbols can have, by
/// its binary tree properties. Symbols are always leaves (to uphold the
/// prefix characteristic), so a perfectly balanced tree holds 2^depth of
/// them. The other extreme is the fully skewed chain with depth
/// `num_symbols - 1`.
#[inline]
pub fn minimum_tree_depth(num_symbols: usize) -> usize {
    let min_depth = (num_symbols as f32).log(2.0).ceil() as usize;
    min_depth.max(1)
}

#[test]
fn test_minimum_depth() {
    assert_eq!(minimum_tree_depth(1), 1);
    assert_eq!(minimum_tree_depth(2), 1);
    assert_eq!(minimum_tree_depth(3), 2);
    assert_eq!(minimum_tree_depth(4), 2);
    assert_eq!(minimum_tree_depth(5), 3);
    assert_eq!(minimum_tree_depth(8), 3);
    assert_eq!(minimum_tree_depth(9), 4);
}
