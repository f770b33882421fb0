/*!
Code table generation, the encoder side of the tree.

Walking from the root to a leaf and noting 0 for every left turn and 1 for
every right turn yields the leaf's code. Collecting the codes of all leaves
into a table makes encoding a plain lookup per symbol.
*/

use bitstream::BitVec;
use log::log_enabled;
use log::Level::Trace;
use log::*;

use crate::tree::{Node, Tree};
use crate::MAX_SYMBOL_VALUE;

/// The codebook, one bit-string per distinct symbol of the tree.
///
/// Backed by a fixed 256 slot table, symbols without a leaf hold `None`.
/// Codes are kept as [`BitVec`] because a fully skewed 256 symbol tree
/// produces codes up to 255 bits, longer than any fixed integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Option<BitVec>>,
}

impl CodeTable {
    fn empty() -> Self {
        CodeTable {
            codes: vec![None; MAX_SYMBOL_VALUE as usize + 1],
        }
    }

    /// the code for `symbol`, `None` when the symbol has no leaf in the tree
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&BitVec> {
        self.codes[symbol as usize].as_ref()
    }

    /// number of symbols with a code
    pub fn num_codes(&self) -> usize {
        self.iter().count()
    }

    /// Iterates `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitVec)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as u8, code)))
    }

    /// length of the longest code in bits
    pub fn max_code_len(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }
}

/// converts the tree into a table with the code bits for each symbol
///
/// Depth-first walk over an explicit stack, descending left appends a 0,
/// descending right appends a 1, reaching a leaf records the collected bits.
/// The stack replaces recursion, a skewed tree can be 255 levels deep.
///
/// A tree of a single leaf never branches, the bare walk would hand its only
/// symbol the empty code and encode every message to zero bits. That symbol
/// gets the one bit code `0` instead, so each occurrence stays visible in
/// the output.
pub fn tree_to_table(tree: &Tree) -> CodeTable {
    let mut table = CodeTable::empty();

    if let Node::Leaf { symbol, .. } = tree.root() {
        let mut code = BitVec::new();
        code.push(false);
        table.codes[*symbol as usize] = Some(code);
        return table;
    }

    let mut stack = vec![(tree.root(), BitVec::new())];
    while let Some((node, path)) = stack.pop() {
        match node {
            Node::Leaf { symbol, .. } => {
                table.codes[*symbol as usize] = Some(path);
            }
            Node::Internal { left, right, .. } => {
                let mut left_path = path.clone();
                left_path.push(false);
                let mut right_path = path;
                right_path.push(true);
                stack.push((right.as_ref(), right_path));
                stack.push((left.as_ref(), left_path));
            }
        }
    }

    debug!(
        "code table: {} symbols, longest code {} bits",
        table.num_codes(),
        table.max_code_len()
    );
    if log_enabled!(Trace) {
        for (symbol, code) in table.iter() {
            trace!("{:?}: {}", symbol as char, code);
        }
    }

    table
}

/// will validate the table to uphold the prefix property between all pairs
/// of symbols. Quadratic and slow, meant for tests and fuzzing, not for the
/// coding path.
pub fn check_prefix_property(table: &CodeTable) {
    let entries: Vec<(u8, &BitVec)> = table.iter().collect();
    for (pos, (symbol_a, code_a)) in entries.iter().enumerate() {
        for (symbol_b, code_b) in entries.iter().skip(pos + 1) {
            let shared = code_a.len().min(code_b.len());
            assert!(shared > 0, "empty code for {:#04x} or {:#04x}", symbol_a, symbol_b);
            if (0..shared).all(|bit| code_a.get(bit) == code_b.get(bit)) {
                panic!(
                    "invalid prefix detected between {:#04x} ({}) and {:#04x} ({})",
                    symbol_a, code_a, symbol_b, code_b
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hist::count_simple;
    use crate::tree::{build_tree, build_tree_from_weights};

    fn code_str(table: &CodeTable, symbol: u8) -> String {
        table.get(symbol).unwrap().to_string()
    }

    #[test]
    fn test_codes_for_small_alphabet() {
        let counts = count_simple(b"abracadabra");
        let table = tree_to_table(&build_tree(&counts).unwrap());
        assert_eq!(code_str(&table, b'a'), "0");
        assert_eq!(code_str(&table, b'c'), "100");
        assert_eq!(code_str(&table, b'd'), "101");
        assert_eq!(code_str(&table, b'b'), "110");
        assert_eq!(code_str(&table, b'r'), "111");
        assert_eq!(table.num_codes(), 5);
        assert_eq!(table.max_code_len(), 3);
    }

    #[test]
    fn test_absent_symbol_has_no_code() {
        let counts = count_simple(b"aab");
        let table = tree_to_table(&build_tree(&counts).unwrap());
        assert_eq!(table.get(b'z'), None);
    }

    #[test]
    fn test_single_leaf_gets_one_bit_code() {
        let tree = build_tree_from_weights(&[(b'A', 7)]).unwrap();
        let table = tree_to_table(&tree);
        assert_eq!(code_str(&table, b'A'), "0");
        assert_eq!(table.num_codes(), 1);
    }

    #[test]
    fn test_frequent_symbols_get_short_codes() {
        let counts = count_simple(b"aaaaaaaabbbbccd");
        let table = tree_to_table(&build_tree(&counts).unwrap());
        assert!(code_str(&table, b'a').len() < code_str(&table, b'c').len());
        assert!(code_str(&table, b'b').len() <= code_str(&table, b'c').len());
    }

    #[test]
    fn test_fibonacci_weights_build_a_chain() {
        // fibonacci counts force the fully skewed tree, each merge result
        // pairs with the next leaf
        let weights: Vec<(u8, u64)> = [1_u64, 1, 2, 3, 5, 8, 13, 21]
            .iter()
            .enumerate()
            .map(|(symbol, weight)| (symbol as u8, *weight))
            .collect();
        let tree = build_tree_from_weights(&weights).unwrap();
        let table = tree_to_table(&tree);
        assert_eq!(table.max_code_len(), weights.len() - 1);
        // the heaviest symbol sits directly under the root
        assert_eq!(table.get(7).unwrap().len(), 1);
        check_prefix_property(&table);
    }

    #[test]
    fn test_prefix_property_over_full_alphabet() {
        let input: Vec<u8> = (0..=255_u8).flat_map(|symbol| {
            let repeats = (symbol as usize % 7) + 1;
            std::iter::repeat(symbol).take(repeats)
        })
        .collect();
        let counts = count_simple(&input);
        let table = tree_to_table(&build_tree(&counts).unwrap());
        assert_eq!(table.num_codes(), 256);
        check_prefix_property(&table);
    }

    #[test]
    #[should_panic(expected = "invalid prefix")]
    fn test_check_detects_broken_table() {
        let counts = count_simple(b"aabbbcccc");
        let mut table = tree_to_table(&build_tree(&counts).unwrap());
        // overwrite one code with a prefix of another
        let prefix: BitVec = {
            let full = table.get(b'a').unwrap();
            let mut cut = BitVec::new();
            cut.push(full.get(0).unwrap());
            cut
        };
        table.codes[b'b' as usize] = Some(prefix);
        check_prefix_property(&table);
    }
}
