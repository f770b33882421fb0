/*!

Bitstream handles the bit level building block of the coder: an exact-length
bit-string that is written and read front to back.

Bits are packed MSB first, so the first bit pushed lands in the highest bit of
the first byte. The container never loses track of the exact number of bits,
only the trailing bits of the last byte are padding and they are always 0.

Bit Operations:

number of bits >> 3 == number of bytes
number of bits & 7  == offset inside the last byte

*/

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseBitsError {
    #[error("invalid bit character {found:?} at position {pos}, expected '0' or '1'")]
    InvalidBit { found: char, pos: usize },
}

/// An exact-length bit-string.
///
/// Unlike a plain `Vec<u8>` the container knows how many bits of the last
/// byte are in use, so a 5 bit code stays a 5 bit code and never silently
/// grows to a byte boundary.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitVec {
    pub fn new() -> Self {
        BitVec {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Preallocates space for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        BitVec {
            bytes: Vec::with_capacity((bits + 7) >> 3),
            bit_len: 0,
        }
    }

    /// Number of bits in the container.
    #[inline]
    pub fn len(&self) -> usize {
        self.bit_len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Appends a single bit.
    #[inline]
    pub fn push(&mut self, bit: bool) {
        let byte_index = self.bit_len >> 3;
        let bit_offset = self.bit_len & 7;

        if byte_index == self.bytes.len() {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[byte_index] |= 1 << (7 - bit_offset);
        }
        self.bit_len += 1;
    }

    /// Appends every bit of `other`, first bit of `other` first.
    pub fn extend_from(&mut self, other: &BitVec) {
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Returns the bit at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.bit_len {
            return None;
        }
        let byte = self.bytes[index >> 3];
        Some((byte >> (7 - (index & 7))) & 1 == 1)
    }

    /// Iterates the bits front to back.
    pub fn iter(&self) -> Bits<'_> {
        Bits { bits: self, pos: 0 }
    }

    /// The packed bytes, unused trailing bits of the last byte are 0.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Iterator over the bits of a [`BitVec`], front to back.
pub struct Bits<'a> {
    bits: &'a BitVec,
    pos: usize,
}

impl<'a> Iterator for Bits<'a> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        let bit = self.bits.get(self.pos)?;
        self.pos += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bits.bit_len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Bits<'a> {}

impl<'a> IntoIterator for &'a BitVec {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Bits<'a> {
        self.iter()
    }
}

impl fmt::Display for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cap the rendered bits, debug output of long streams is useless
        const MAX_RENDERED: usize = 64;
        write!(f, "BitVec{{ len:{} bits:", self.bit_len)?;
        for bit in self.iter().take(MAX_RENDERED) {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        if self.bit_len > MAX_RENDERED {
            f.write_str("..")?;
        }
        f.write_str(" }")
    }
}

impl FromStr for BitVec {
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = BitVec::with_capacity(s.len());
        for (pos, found) in s.chars().enumerate() {
            match found {
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(ParseBitsError::InvalidBit { found, pos }),
            }
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut bits = BitVec::new();
        bits.push(true);
        bits.push(false);
        bits.push(true);

        assert_eq!(bits.len(), 3);
        assert_eq!(bits.get(0), Some(true));
        assert_eq!(bits.get(1), Some(false));
        assert_eq!(bits.get(2), Some(true));
        assert_eq!(bits.get(3), None);
    }

    #[test]
    fn test_msb_first_packing() {
        let mut bits = BitVec::new();
        bits.push(true);
        bits.push(false);
        bits.push(true);
        assert_eq!(bits.as_bytes(), &[0b1010_0000]);

        for _ in 0..6 {
            bits.push(true);
        }
        assert_eq!(bits.len(), 9);
        assert_eq!(bits.as_bytes(), &[0b1011_1111, 0b1000_0000]);
    }

    #[test]
    fn test_extend_from() {
        let mut bits: BitVec = "101".parse().unwrap();
        let tail: BitVec = "0011".parse().unwrap();
        bits.extend_from(&tail);
        assert_eq!(bits.to_string(), "1010011");
    }

    #[test]
    fn test_display_from_str_round_trip() {
        let text = "0100110111010001";
        let bits: BitVec = text.parse().unwrap();
        assert_eq!(bits.len(), text.len());
        assert_eq!(bits.to_string(), text);
    }

    #[test]
    fn test_from_str_rejects_junk() {
        let err = "0102".parse::<BitVec>().unwrap_err();
        assert_eq!(err, ParseBitsError::InvalidBit { found: '2', pos: 3 });
    }

    #[test]
    fn test_iterator() {
        let bits: BitVec = "110".parse().unwrap();
        let collected: Vec<bool> = bits.iter().collect();
        assert_eq!(collected, vec![true, true, false]);
        assert_eq!(bits.iter().len(), 3);
    }

    #[test]
    fn test_empty() {
        let bits = BitVec::new();
        assert!(bits.is_empty());
        assert_eq!(bits.to_string(), "");
        assert_eq!(bits, "".parse().unwrap());
    }

    #[test]
    fn test_eq_tracks_bit_len() {
        let three: BitVec = "000".parse().unwrap();
        let four: BitVec = "0000".parse().unwrap();
        // same packed byte, different length
        assert_eq!(three.as_bytes(), four.as_bytes());
        assert_ne!(three, four);
    }
}
