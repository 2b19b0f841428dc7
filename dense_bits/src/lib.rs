//! # dense_bits
//!
//! A dynamically resizable bit-vector over packed 64-bit words.
//!
//! ```rust
//! use dense_bits::BitVec;
//!
//! let mut bv = BitVec::new(128).expect("failed to allocate");
//! bv.set(101).unwrap();
//! assert!(bv.get(101).unwrap());
//! assert_eq!(bv.trailing_zeros(), 101);
//!
//! bv.unset(101).unwrap();
//! assert!(!bv.get(101).unwrap());
//! ```
//!
//! ## Resizing
//!
//! ```rust
//! use dense_bits::BitVec;
//!
//! let mut bv = BitVec::new(128).expect("failed to allocate");
//! assert!(bv.set(129).is_err());
//!
//! // Grow; everything below the old size is preserved.
//! bv.resize(140).unwrap();
//! bv.set(129).unwrap();
//!
//! // Shrink; bits past the new size are clamped off.
//! bv.resize(107).unwrap();
//! assert!(bv.get(129).is_err());
//! ```
//!

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitVecError;

mod bit_scan;

pub mod bitvec;

pub use bitvec::BitVec;

/// Storage word backing a [`BitVec`].
pub type Word = u64;

/// Number of bits per storage word.
pub const WORD_BITS: usize = Word::BITS as usize;
