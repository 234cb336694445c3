use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by bit array operations. All of them indicate a caller
/// asking for something outside the array.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit-addressed operation was given an index at or past the end.
    #[error("out of index: {index} >= {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// `sub_array` was given a start past its (clamped) end.
    #[error("invalid range: {from} > {to}")]
    InvalidRange { from: usize, to: usize },

    /// `select` was asked for an occurrence that does not exist.
    #[error("bit {} occurs fewer than {} times", bit_digit(.value), .ith + 1)]
    NotFound { value: bool, ith: usize },
}

fn bit_digit(value: &bool) -> u8 {
    u8::from(*value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::IndexOutOfRange { index: 5, size: 5 };
        assert_eq!(err.to_string(), "out of index: 5 >= 5");
        let err = Error::InvalidRange { from: 7, to: 3 };
        assert_eq!(err.to_string(), "invalid range: 7 > 3");
        let err = Error::NotFound {
            value: true,
            ith: 2,
        };
        assert_eq!(err.to_string(), "bit 1 occurs fewer than 3 times");
    }
}
