//! A fixed-length, mutable bit array packed into integer blocks, with
//! bit access and mutation, inversion, sub-array extraction, and linear
//! rank and select queries.
//!
//! ```
//! use packed_bit_array::BitArray;
//!
//! let mut bits = BitArray::from_bits(&[false, true, true, false, true]);
//! bits.toggle(0).unwrap();
//! assert_eq!(bits.rank(true, 4), Ok(3));
//! assert_eq!(bits.select(false, 0), Ok(3));
//! assert_eq!(bits.to_string(), "BitArray: size=5, data=[1, 1, 1, 0, 1]");
//! ```

mod bit_array;
mod bit_block;
mod error;
mod utils;

pub use bit_array::{BitArray, PackedBitArray};
pub use bit_block::BitBlock;
pub use error::{Error, Result};
