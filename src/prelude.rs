//! The crate prelude.
//!
//! This brings into scope commonly used types.

pub use crate::cell::{
    BitReader, BitString, Cell, CellHash, CellRef, CellType, ExoticCell, LevelMask,
};
pub use crate::error::Error;
pub use crate::merkle::{ExoticPruned, PrunedBranchEntry};
pub use crate::util::crc32c;
