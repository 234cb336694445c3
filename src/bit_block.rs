use core::fmt::Debug;
use core::ops::BitAndAssign;
use core::ops::BitOrAssign;
use core::ops::BitXorAssign;
use num::traits::CheckedShr;
use num::traits::WrappingSub;
use num::PrimInt;
use num::Unsigned;

/// Trait representing an unsigned integer type used as a block of bits,
/// which allows the bit array to be generic over its word width.
pub trait BitBlock:
    PrimInt + Unsigned + WrappingSub + CheckedShr + BitAndAssign + BitOrAssign + BitXorAssign + Debug
{
    const BITS: u32; // number of bits in the representation of this type
    const BIT_WIDTH: u32 = Self::BITS.ilog2(); // bit width

    /// Bit index of the `i`-th bit within its block (mask off the high bits)
    fn bit_offset(i: usize) -> usize {
        i & (Self::BITS - 1) as usize
    }

    /// Block index of the block containing the `i`-th bit
    fn block_index(i: usize) -> usize {
        i >> Self::BIT_WIDTH
    }

    /// Block index and bit offset of the `i`-th bit
    fn index_offset(i: usize) -> (usize, usize) {
        (Self::block_index(i), Self::bit_offset(i))
    }

    /// Return a block with only the `i`-th bit set, for an in-block offset `i`.
    fn bit_mask(offset: usize) -> Self {
        debug_assert!(offset < Self::BITS as usize);
        Self::one() << offset
    }

    /// Return a bit mask with `n` 1-bits set in the low bits.
    fn one_mask(n: u32) -> Self {
        debug_assert!(n <= Self::BITS);
        let max = Self::zero().wrapping_sub(&Self::one());
        max.checked_shr(Self::BITS - n)
            .unwrap_or(Self::zero())
    }

    /// Number of 1-bits in the block, as a usize.
    fn ones(self) -> usize {
        self.count_ones() as usize
    }
}

impl BitBlock for u8 {
    const BITS: u32 = Self::BITS;
}

impl BitBlock for u16 {
    const BITS: u32 = Self::BITS;
}

impl BitBlock for usize {
    const BITS: u32 = Self::BITS;
}

impl BitBlock for u32 {
    const BITS: u32 = Self::BITS;
}

impl BitBlock for u64 {
    const BITS: u32 = Self::BITS;
}

impl BitBlock for u128 {
    const BITS: u32 = Self::BITS;
}
