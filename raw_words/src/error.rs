#[cfg(feature = "std")]
use std::collections::TryReserveError;

#[cfg(not(feature = "std"))]
use alloc::collections::TryReserveError;

#[cfg(feature = "std")]
use thiserror::Error;

/// Word buffer errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug)]
pub enum WordBufError {
    /// The backing allocation could not be satisfied
    #[cfg_attr(feature = "std", error("allocation failed: {0}"))]
    Alloc(TryReserveError),

    /// Out-of-bounds access
    #[cfg_attr(feature = "std", error("index {0} out of bounds"))]
    OutOfBounds(usize),
}

impl From<TryReserveError> for WordBufError {
    fn from(err: TryReserveError) -> Self {
        WordBufError::Alloc(err)
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for WordBufError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WordBufError::Alloc(e) => write!(f, "allocation failed: {}", e),
            WordBufError::OutOfBounds(i) => write!(f, "index {} out of bounds", i),
        }
    }
}
