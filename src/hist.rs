//! Symbol statistics over a byte alphabet.

use crate::MAX_SYMBOL_VALUE;

pub type CountsTable = [u32; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
///
/// An empty input yields the all-zero table. Counts saturate instead of
/// wrapping, a saturated slot still orders correctly during the tree merge.
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0_u32; MAX_SYMBOL_VALUE as usize + 1];

    for byte in input {
        counts[*byte as usize] = counts[*byte as usize].saturating_add(1);
    }
    counts
}

/// Number of symbols with a non-zero count, the leaf count of the tree built
/// from this table.
#[inline]
pub fn distinct_symbols(counts: &CountsTable) -> usize {
    counts.iter().filter(|count| **count != 0).count()
}
