/*!
Decoding, packed bits in, symbols out.

The decoder needs no table, it walks the tree itself. Starting at the root,
a 0 bit descends left and a 1 bit descends right, reaching a leaf emits the
leaf's symbol and the walk restarts at the root. The prefix property
guarantees the walk never has to guess.
*/

use bitstream::BitVec;
use log::*;

use crate::error::HuffError;
use crate::tree::{Node, Tree};

/// Decodes `bits` against the tree that encoded them.
///
/// The empty bit-string decodes to the empty message. Fails with
/// [`HuffError::MalformedStream`] when the bits run out in the middle of a
/// code, which happens when the stream was truncated or belongs to a
/// different tree.
pub fn decode(bits: &BitVec, tree: &Tree) -> Result<Vec<u8>, HuffError> {
    // a tree of a single leaf never branches. Its symbol carries the one
    // bit code 0, so every 0 bit emits the symbol once and a 1 bit cannot
    // appear.
    if let Node::Leaf { symbol, .. } = tree.root() {
        let mut decoded = Vec::with_capacity(bits.len());
        for (pos, bit) in bits.iter().enumerate() {
            if bit {
                return Err(HuffError::MalformedStream(format!(
                    "unexpected 1 bit at position {} in a single-symbol stream",
                    pos
                )));
            }
            decoded.push(*symbol);
        }
        return Ok(decoded);
    }

    let mut decoded = Vec::new();
    let mut node = tree.root();
    let mut bits_into_code = 0_usize;

    for bit in bits.iter() {
        if let Node::Internal { left, right, .. } = node {
            node = if bit { right.as_ref() } else { left.as_ref() };
            bits_into_code += 1;
        }
        if let Node::Leaf { symbol, .. } = node {
            decoded.push(*symbol);
            node = tree.root();
            bits_into_code = 0;
        }
    }

    if bits_into_code != 0 {
        return Err(HuffError::MalformedStream(format!(
            "bit stream ends {} bits into a code, {} symbols decoded",
            bits_into_code,
            decoded.len()
        )));
    }
    trace!("decoded {} bits into {} symbols", bits.len(), decoded.len());
    Ok(decoded)
}

/// Decodes the textual `'0'`/`'1'` form, the way encoded bit-strings print.
///
/// Any other character fails with [`HuffError::MalformedStream`] before the
/// walk starts.
pub fn decode_text(text: &str, tree: &Tree) -> Result<Vec<u8>, HuffError> {
    let bits: BitVec = text.parse()?;
    decode(&bits, tree)
}
