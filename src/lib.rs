/*!
huff_flex is a Huffman coder in Rust, a compressor in the family of entropy encoders (statistical compression).

Huffman coding assigns each symbol a prefix-free binary code whose length
follows the symbol's frequency, frequent symbols get short codes and rare
symbols long ones. The codes fall out of a binary tree built by repeatedly
merging the two lightest nodes, which is provably optimal among per-symbol
codes (no other prefix-free assignment reaches a smaller total bit count).
In comparison to ANS/FSE coders it is limited to whole bits per symbol, but
the tree construction is simple, fast and needs no normalization step.

The pipeline is counts -> tree -> table -> bits, each step a plain function
over the previous result:

```rust
let input = b"abracadabra".to_vec();

let (bits, tree) = huff_flex::compress(&input).unwrap();
let output = huff_flex::decompress(&bits, &tree).unwrap();

assert_eq!(input, output);
```

The original description is in "A Method for the Construction of
Minimum-Redundancy Codes" by David Huffman (1952), still a very readable
paper. "Understanding Compression" by Colton McAnlis and Aleks Haecky covers
the practical side well.
*/

pub use bitstream::BitVec;

pub use crate::compress::encode;
pub use crate::decompress::decode;
pub use crate::decompress::decode_text;
pub use crate::error::HuffError;
pub use crate::hist::count_simple;
pub use crate::hist::distinct_symbols;
pub use crate::hist::CountsTable;
pub use crate::table::check_prefix_property;
pub use crate::table::tree_to_table;
pub use crate::table::CodeTable;
pub use crate::tree::build_tree;
pub use crate::tree::build_tree_from_weights;
pub use crate::tree::minimum_tree_depth;
pub use crate::tree::Tree;

pub mod compress;
pub mod decompress;
pub mod error;
pub mod hist;
pub mod table;
pub mod tree;

/// the alphabet is a single byte, 256 symbols at most
pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

/// Compresses `input` in one call, counts, tree, table, encode.
///
/// Returns the encoded bits together with the tree, decoding needs the tree
/// back. Fails with [`HuffError::InvalidInput`] on empty input, an alphabet
/// cannot be derived from no data.
pub fn compress(input: &[u8]) -> Result<(BitVec, Tree), HuffError> {
    let counts = count_simple(input);
    let tree = build_tree(&counts)?;
    let table = tree_to_table(&tree);
    let bits = encode(input, &table)?;
    Ok((bits, tree))
}

/// Inverse of [`compress`], walks `tree` over `bits` back to the bytes.
pub fn decompress(bits: &BitVec, tree: &Tree) -> Result<Vec<u8>, HuffError> {
    decode(bits, tree)
}
