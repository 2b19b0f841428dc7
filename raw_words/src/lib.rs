#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod word_buf;

pub use error::WordBufError;
pub use word_buf::WordBuf;
