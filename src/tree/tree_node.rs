use core::cmp::Ordering;

/// A node of the coding tree.
///
/// Leaves own a symbol, internal nodes own exactly two children and carry the
/// sum of their weights. Ownership is strictly top down, there are no parent
/// links, so dropping the root drops the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        /// the symbol, limited to a single byte alphabet
        symbol: u8,
        /// the number of occurrences
        weight: u64,
    },
    Internal {
        /// sum of the weights of both children
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub(crate) fn leaf(symbol: u8, weight: u64) -> Self {
        Node::Leaf { symbol, weight }
    }

    /// Joins two nodes under a fresh parent carrying the summed weight.
    pub(crate) fn merge(left: Node, right: Node) -> Self {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[inline]
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Queue entry of the merge loop, a node plus its insertion sequence number.
#[derive(Debug)]
pub(crate) struct HeapEntry {
    pub(crate) node: Node,
    pub(crate) seq: u32,
}

impl HeapEntry {
    pub(crate) fn new(node: Node, seq: u32) -> Self {
        HeapEntry { node, seq }
    }

    fn key(&self) -> (u64, u32) {
        (self.node.weight(), self.seq)
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for HeapEntry {}

impl std::cmp::PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// The priority queue depends on `Ord`.
// Explicitly implement the trait so the queue becomes a min-heap
// instead of a max-heap.
impl std::cmp::Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Notice that the we flip the ordering on the key.
        // The sequence number breaks weight ties in insertion order, which
        // makes the order total and the tree shape reproducible.
        other.key().cmp(&self.key())
    }
}
