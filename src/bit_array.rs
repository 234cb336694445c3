// A fixed-size bit array backed by a vector of integer blocks, with no acceleration structures.
// Supports random bit read and write, whole-array inversion, sub-array extraction,
// and linear-time rank and select queries.

use std::fmt;

use log::{debug, trace};

use crate::bit_block::BitBlock;
use crate::error::{Error, Result};
use crate::utils::{div_ceil, select1};

/// Bit array stored in 32-bit blocks.
pub type BitArray = PackedBitArray<u32>;

#[derive(Debug, Clone)]
pub struct PackedBitArray<Block: BitBlock> {
    // Store bits in blocks. Each block stores its bits in order from LSB to MSB.
    // Bits of the last block beyond `len` are not part of the array and may hold
    // anything (eg. after `invert`), so every query masks them out.
    blocks: Vec<Block>,
    // Number of bits in this array
    len: usize,
}

impl<Block: BitBlock> PackedBitArray<Block> {
    /// Return an array of `len` bits, each set to `value`.
    pub fn new(len: usize, value: bool) -> Self {
        // The number of blocks should be just enough to represent `len` bits.
        let num_blocks = div_ceil(len, Block::BITS as usize);
        let mut bits = Self {
            blocks: vec![Block::zero(); num_blocks],
            len,
        };
        if value {
            bits.invert();
            bits.clear_trailing_bits();
        }
        trace!("new bit array: {} bits in {} blocks", len, num_blocks);
        bits
    }

    /// Return an array whose `i`-th bit is `bits[i]`.
    pub fn from_bits(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Return the value of the bit at `index`.
    pub fn get(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.bit(index))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<()> {
        self.check_index(index)?;
        let (block_index, bit_offset) = Block::index_offset(index);
        let mask = Block::bit_mask(bit_offset);
        if value {
            self.blocks[block_index] |= mask;
        } else {
            self.blocks[block_index] &= !mask;
        }
        Ok(())
    }

    pub fn toggle(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let (block_index, bit_offset) = Block::index_offset(index);
        self.blocks[block_index] ^= Block::bit_mask(bit_offset);
        Ok(())
    }

    /// Flip every bit, including the unused trailing bits of the last block.
    pub fn invert(&mut self) {
        for block in self.blocks.iter_mut() {
            *block = !*block;
        }
    }

    /// Return a new array holding a copy of bits `from..to`.
    /// `to` is clamped to the length of this array.
    pub fn sub_array(&self, from: usize, to: usize) -> Result<Self> {
        let to = to.min(self.len);
        if from > to {
            return Err(Error::InvalidRange { from, to });
        }
        let mut sub = Self::new(to - from, false);
        if sub.is_empty() {
            return Ok(sub);
        }

        let (start, shift) = Block::index_offset(from);
        if start == Block::block_index(to - 1) {
            debug!("sub_array {}..{}: within block {}", from, to, start);
            sub.blocks[0] = self.blocks[start] >> shift;
        } else {
            debug!(
                "sub_array {}..{}: merging {} blocks from block {} at shift {}",
                from,
                to,
                sub.blocks.len(),
                start,
                shift
            );
            // Each output block takes the high bits of one source block and,
            // unless the range is block-aligned, the low bits of the next one.
            for (i, out) in sub.blocks.iter_mut().enumerate() {
                let block_index = start + i;
                let mut block = self.blocks[block_index] >> shift;
                if shift > 0 {
                    if let Some(&next) = self.blocks.get(block_index + 1) {
                        block |= next << (Block::BITS as usize - shift);
                    }
                }
                *out = block;
            }
        }
        sub.clear_trailing_bits();
        Ok(sub)
    }

    /// Return the number of bits equal to `value` in the half-open prefix `0..index`.
    /// Fails if `index` is not a valid bit index, so the count over the whole
    /// array is only available through `count_ones` and `count_zeros`.
    pub fn rank(&self, value: bool, index: usize) -> Result<usize> {
        self.check_index(index)?;
        let (block_index, bit_offset) = Block::index_offset(index);

        // Add the ones in fully-covered blocks
        let mut ones: usize = self.blocks[..block_index]
            .iter()
            .copied()
            .map(Block::ones)
            .sum();

        // Add any ones in the final partly-covered block
        if bit_offset > 0 {
            let mask = Block::one_mask(bit_offset as u32);
            ones += (self.blocks[block_index] & mask).ones();
        }

        Ok(if value { ones } else { index - ones })
    }

    /// Return the index of the `ith` (0-based) bit equal to `value`.
    pub fn select(&self, value: bool, ith: usize) -> Result<usize> {
        let mut remaining = ith;
        for (block_index, &block) in self.blocks.iter().enumerate() {
            // Count zeros as the ones of the complement
            let block = if value { block } else { !block };
            let block = block & self.live_mask(block_index);
            let ones = block.ones();
            if remaining < ones {
                return Ok((block_index << Block::BIT_WIDTH) + select1(block, remaining));
            }
            remaining -= ones;
        }
        Err(Error::NotFound { value, ith })
    }

    /// Number of 1-bits in the array.
    pub fn count_ones(&self) -> usize {
        (0..self.blocks.len())
            .map(|block_index| self.live_block(block_index).ones())
            .sum()
    }

    /// Number of 0-bits in the array.
    pub fn count_zeros(&self) -> usize {
        self.len - self.count_ones()
    }

    /// Iterate over the bits of the array in index order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |index| self.bit(index))
    }

    /// Bit array length in bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return an immutable reference to the underlying data as a slice
    #[cfg(test)]
    pub(crate) fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                size: self.len,
            });
        }
        Ok(())
    }

    // Unchecked read; `index` must be below `len`.
    fn bit(&self, index: usize) -> bool {
        let (block_index, bit_offset) = Block::index_offset(index);
        self.blocks[block_index] & Block::bit_mask(bit_offset) != Block::zero()
    }

    /// Mask of the bits of block `block_index` that lie inside the array.
    /// All ones except for a partially-filled last block.
    fn live_mask(&self, block_index: usize) -> Block {
        debug_assert!(block_index < self.blocks.len());
        let bit_offset = Block::bit_offset(self.len);
        if block_index + 1 < self.blocks.len() || bit_offset == 0 {
            Block::max_value()
        } else {
            Block::one_mask(bit_offset as u32)
        }
    }

    /// Block `block_index` with the bits past the end of the array cleared.
    fn live_block(&self, block_index: usize) -> Block {
        self.blocks[block_index] & self.live_mask(block_index)
    }

    fn clear_trailing_bits(&mut self) {
        if let Some(last) = self.blocks.len().checked_sub(1) {
            self.blocks[last] = self.live_block(last);
        }
    }
}

impl<Block: BitBlock> PartialEq for PackedBitArray<Block> {
    // Compares only the bits inside the array; trailing bits of the last block are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        debug_assert_eq!(self.blocks.len(), other.blocks.len());
        (0..self.blocks.len())
            .all(|block_index| self.live_block(block_index) == other.live_block(block_index))
    }
}

impl<Block: BitBlock> Eq for PackedBitArray<Block> {}

impl<Block: BitBlock> FromIterator<bool> for PackedBitArray<Block> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut blocks = Vec::new();
        let mut len = 0;
        for value in iter {
            let (block_index, bit_offset) = Block::index_offset(len);
            if bit_offset == 0 {
                blocks.push(Block::zero());
            }
            if value {
                blocks[block_index] |= Block::bit_mask(bit_offset);
            }
            len += 1;
        }
        Self { blocks, len }
    }
}

impl<Block: BitBlock> fmt::Display for PackedBitArray<Block> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitArray: size={}, data=[", self.len)?;
        for (index, bit) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}
