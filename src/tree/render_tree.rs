use core::fmt;

use crate::tree::tree_node::Node;
use crate::tree::Tree;

/// Renders the merge structure as an ASCII tree, mostly useful to eyeball
/// why a symbol ended up with its code length. Left children are listed
/// before right children, matching the 0 before 1 code order.
pub fn render_to<W: fmt::Write>(tree: &Tree, output: &mut W) -> fmt::Result {
    write!(output, "{}", branches(tree.root()))
}

fn branches(node: &Node) -> termtree::Tree<String> {
    match node {
        Node::Leaf { symbol, weight } => {
            termtree::Tree::new(format!("Cnt:{} Symbl:{:?}", weight, *symbol as char))
        }
        Node::Internal { weight, left, right } => termtree::Tree::new(format!("Cnt:{}", weight))
            .with_leaves(vec![branches(left.as_ref()), branches(right.as_ref())]),
    }
}

#[cfg(test)]
mod tests {
    use crate::hist::count_simple;
    use crate::tree::build_tree;

    #[test]
    fn test_render_lists_every_leaf() {
        let counts = count_simple(b"aaab");
        let tree = build_tree(&counts).unwrap();
        let rendered = tree.to_string();
        assert!(rendered.contains("Cnt:4"));
        assert!(rendered.contains("Cnt:3 Symbl:'a'"));
        assert!(rendered.contains("Cnt:1 Symbl:'b'"));
    }

    #[test]
    fn test_render_single_leaf() {
        let counts = count_simple(b"xx");
        let tree = build_tree(&counts).unwrap();
        assert_eq!(tree.to_string().trim_end(), "Cnt:2 Symbl:'x'");
    }
}
