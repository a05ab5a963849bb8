//! Common error types.

use crate::cell::CellType;

/// Error type for cell related errors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// There were not enough bits left in the reader.
    #[error("out of bounds: requested {requested} bits, {remaining} remaining")]
    OutOfBounds {
        /// The number of bits the read needed.
        requested: usize,
        /// The number of bits left in the reader.
        remaining: usize,
    },
    /// Cell type discriminant differs from the expected one.
    #[error("invalid cell type: expected {expected}, got {actual}")]
    InvalidCellType {
        /// Expected type byte.
        expected: u8,
        /// Parsed type byte.
        actual: u8,
    },
    /// Cell layout does not match its declared type.
    #[error("invalid cell structure: {0}")]
    InvalidStructure(#[from] StructureError),
    /// Requested integer does not fit into `u64`.
    #[error("integer of {bits} bits does not fit into u64")]
    IntOverflow {
        /// Requested width in bits.
        bits: u16,
    },
    /// Level mask is outside of the allowed range.
    #[error("invalid level {level} (mask {mask:#05b})")]
    InvalidLevel {
        /// Level computed from the mask.
        level: u8,
        /// Raw mask value.
        mask: u8,
    },
    /// Type byte is not one of the known cell types.
    #[error("unknown cell type {0}")]
    UnknownCellType(u8),
    /// Exotic cell of a known type which has no decoder.
    #[error("unsupported cell type {0:?}")]
    UnsupportedCellType(CellType),
    /// There were not enough bits or refs capacity in the cell.
    #[error("cell overflow")]
    CellOverflow,
    /// Bit length does not fit into the provided data.
    #[error("bit length {bit_len} does not fit into {byte_len} bytes")]
    InvalidBitLen {
        /// Requested bit length.
        bit_len: usize,
        /// Data length in bytes.
        byte_len: usize,
    },
}

/// Structural mismatch details for [`Error::InvalidStructure`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum StructureError {
    /// Cell must not have any references.
    #[error("expected no references, got {count}")]
    UnexpectedReferences {
        /// Actual reference count.
        count: usize,
    },
    /// Total bit length differs from the one implied by the header.
    #[error("expected exactly {expected} bits, got {actual}")]
    BitLenMismatch {
        /// Bit length implied by the level mask.
        expected: usize,
        /// Actual bit length.
        actual: usize,
    },
}
