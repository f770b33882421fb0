/*!
Encoding, symbols in, packed bits out.

Each input byte is replaced by its code from the table, in input order, with
nothing in between. The prefix property of the codes is what keeps the
concatenation decodable.
*/

use bitstream::BitVec;
use log::*;

use crate::error::HuffError;
use crate::table::CodeTable;

/// Encodes `input` against `table`, concatenating the code of every byte.
///
/// An empty input encodes to the empty bit-string. Fails with
/// [`HuffError::UnknownSymbol`] on the first byte the table has no code for,
/// which happens when the table was built from different data than the
/// message.
pub fn encode(input: &[u8], table: &CodeTable) -> Result<BitVec, HuffError> {
    let mut encoded = BitVec::with_capacity(input.len() * table.max_code_len());
    for byte in input {
        match table.get(*byte) {
            Some(code) => encoded.extend_from(code),
            None => return Err(HuffError::UnknownSymbol(*byte)),
        }
    }
    trace!("encoded {} bytes into {} bits", input.len(), encoded.len());
    Ok(encoded)
}
