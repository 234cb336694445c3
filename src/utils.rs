use crate::bit_block::BitBlock;

pub fn div_ceil(n: usize, m: usize) -> usize {
    (n + m - 1) / m
}

/// Bit offset of the `n`-th (0-based) 1-bit within `block`.
/// The block must contain more than `n` 1-bits.
pub fn select1<Block: BitBlock>(mut block: Block, n: usize) -> usize {
    debug_assert!(n < block.ones());
    for _ in 0..n {
        block &= block - Block::one(); // unset the lowest 1-bit
    }
    block.trailing_zeros() as usize
}
