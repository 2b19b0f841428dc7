use raw_words::WordBufError;

#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum BitVecError {
    #[cfg_attr(
        feature = "std",
        error("position {pos} is out of range for a vector of {nbits} bits")
    )]
    OutOfRange { pos: usize, nbits: usize },

    #[cfg_attr(feature = "std", error("storage error: {0}"))]
    Storage(WordBufError),
}

impl From<WordBufError> for BitVecError {
    fn from(err: WordBufError) -> Self {
        BitVecError::Storage(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitVecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitVecError::OutOfRange { pos, nbits } => {
                write!(
                    f,
                    "position {} is out of range for a vector of {} bits",
                    pos, nbits
                )
            }
            BitVecError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}
