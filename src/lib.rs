//! Exotic cell decoding core for the BOC (Bag of Cells) format.
//!
//! ## `BitString` and `BitReader`
//!
//! [`BitString`] is an immutable sequence of up to [`MAX_BIT_LEN`] bits of
//! cell data. [`BitReader`] is a cursor over it, created for a single decode
//! call. All reads are big-endian and fail with [`Error::OutOfBounds`]
//! when there are not enough bits left.
//!
//! ## Level mask
//!
//! [`LevelMask`] describes for which merkle levels a cell stores its own
//! hash and depth.
//!
//! ## Pruned branches
//!
//! [`ExoticPruned::decode`] validates and parses a pruned branch cell: an
//! exotic leaf which keeps only the hashes and depths of a subtree removed
//! from a Merkle proof. [`ExoticCell::decode`] dispatches exotic cell data
//! by its type byte.
//!
//! ## Checksum
//!
//! [`crc32c`] computes the checksum which the BOC container appends to the
//! serialized cells.
//!
//! [`BitString`]: cell::BitString
//! [`BitReader`]: cell::BitReader
//! [`MAX_BIT_LEN`]: cell::MAX_BIT_LEN
//! [`LevelMask`]: cell::LevelMask
//! [`ExoticCell::decode`]: cell::ExoticCell::decode
//! [`ExoticPruned::decode`]: merkle::ExoticPruned::decode
//! [`Error::OutOfBounds`]: error::Error::OutOfBounds
//! [`crc32c`]: util::crc32c

#![warn(missing_docs)]

macro_rules! ok {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}

pub use self::util::crc32c;

pub mod cell;
pub mod error;
pub mod merkle;
pub mod prelude;
pub mod util;

#[cfg(feature = "serde")]
pub mod serde;

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
