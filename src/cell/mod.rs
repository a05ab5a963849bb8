//! Cell types and bit-level access.

use std::sync::Arc;

use smallvec::SmallVec;

pub use self::bit_reader::BitReader;
pub use self::bit_string::BitString;
pub use self::level_mask::LevelMask;

use crate::error::Error;
use crate::merkle::ExoticPruned;

mod bit_reader;
mod bit_string;
mod level_mask;

/// Cell data capacity in bits.
pub const MAX_BIT_LEN: u16 = 1023;

/// Maximum number of child cells.
pub const MAX_REF_COUNT: usize = 4;

/// Type alias for a cell hash.
pub type CellHash = [u8; 32];

/// Shared reference to a child cell.
pub type CellRef = Arc<Cell>;

/// Cell type.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellType {
    /// Cell of this type just stores data and references.
    Ordinary,
    /// Exotic cell which was pruned from the original tree of cells
    /// when a Merkle proof has been created.
    PrunedBranch,
    /// Exotic cell with a reference to the cell with a library.
    LibraryReference,
    /// Exotic cell with one hash and one reference.
    MerkleProof,
    /// Exotic cell with two hashes and two references.
    MerkleUpdate,
}

impl CellType {
    /// Type byte of an ordinary cell. Never stored in the data.
    pub const ORDINARY: u8 = 0xff;
    /// Type byte of a pruned branch cell.
    pub const PRUNED_BRANCH: u8 = 1;
    /// Type byte of a library reference cell.
    pub const LIBRARY_REFERENCE: u8 = 2;
    /// Type byte of a Merkle proof cell.
    pub const MERKLE_PROOF: u8 = 3;
    /// Type byte of a Merkle update cell.
    pub const MERKLE_UPDATE: u8 = 4;

    /// Returns whether this cell type is Merkle proof or Merkle update.
    #[inline]
    pub const fn is_merkle(self) -> bool {
        matches!(self, Self::MerkleProof | Self::MerkleUpdate)
    }

    /// Returns whether the cell is not [`Ordinary`].
    ///
    /// [`Ordinary`]: CellType::Ordinary
    #[inline]
    pub const fn is_exotic(self) -> bool {
        !matches!(self, Self::Ordinary)
    }

    /// Returns whether this cell is a pruned branch cell.
    #[inline]
    pub const fn is_pruned_branch(self) -> bool {
        matches!(self, Self::PrunedBranch)
    }

    /// Decodes any cell type from its byte representation.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            Self::ORDINARY => Some(Self::Ordinary),
            _ => Self::from_byte_exotic(byte),
        }
    }

    /// Decodes exotic cell type from the first data byte.
    pub const fn from_byte_exotic(byte: u8) -> Option<Self> {
        Some(match byte {
            Self::PRUNED_BRANCH => Self::PrunedBranch,
            Self::LIBRARY_REFERENCE => Self::LibraryReference,
            Self::MERKLE_PROOF => Self::MerkleProof,
            Self::MERKLE_UPDATE => Self::MerkleUpdate,
            _ => return None,
        })
    }

    /// Encodes cell type as byte.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Ordinary => Self::ORDINARY,
            Self::PrunedBranch => Self::PRUNED_BRANCH,
            Self::LibraryReference => Self::LIBRARY_REFERENCE,
            Self::MerkleProof => Self::MERKLE_PROOF,
            Self::MerkleUpdate => Self::MERKLE_UPDATE,
        }
    }
}

impl From<CellType> for u8 {
    #[inline]
    fn from(cell_type: CellType) -> u8 {
        cell_type.to_byte()
    }
}

/// Parsed contents of an exotic cell.
#[derive(Debug, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum ExoticCell {
    /// Pruned branch with stored hashes and depths.
    PrunedBranch(ExoticPruned),
}

impl ExoticCell {
    /// Dispatches exotic cell data to the decoder of its type.
    pub fn decode(bits: &BitString, references: &[CellRef]) -> Result<Self, Error> {
        let byte = ok!(bits.reader().preload_uint(8)) as u8;
        match CellType::from_byte_exotic(byte) {
            Some(CellType::PrunedBranch) => {
                ExoticPruned::decode(bits, references).map(Self::PrunedBranch)
            }
            Some(ty) => Err(Error::UnsupportedCellType(ty)),
            None => Err(Error::UnknownCellType(byte)),
        }
    }

    /// Returns the type of the parsed cell.
    pub const fn cell_type(&self) -> CellType {
        match self {
            Self::PrunedBranch(_) => CellType::PrunedBranch,
        }
    }
}

/// Cell data with child references.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell {
    exotic: bool,
    bits: BitString,
    references: SmallVec<[CellRef; MAX_REF_COUNT]>,
}

impl Cell {
    /// Creates an ordinary cell.
    pub fn new<I>(bits: BitString, references: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CellRef>,
    {
        Self::with_kind(false, bits, references)
    }

    /// Creates an exotic cell. Its type is stored in the first data byte.
    pub fn new_exotic<I>(bits: BitString, references: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CellRef>,
    {
        Self::with_kind(true, bits, references)
    }

    fn with_kind<I>(exotic: bool, bits: BitString, references: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CellRef>,
    {
        if bits.len() > MAX_BIT_LEN as usize {
            return Err(Error::CellOverflow);
        }

        let mut refs = SmallVec::new();
        for cell in references {
            if refs.len() == MAX_REF_COUNT {
                return Err(Error::CellOverflow);
            }
            refs.push(cell);
        }

        Ok(Self {
            exotic,
            bits,
            references: refs,
        })
    }

    /// Returns whether the cell is not an ordinary one.
    #[inline]
    pub fn is_exotic(&self) -> bool {
        self.exotic
    }

    /// Cell data.
    #[inline]
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    /// Child cells in the stored order.
    #[inline]
    pub fn references(&self) -> &[CellRef] {
        &self.references
    }

    /// Returns the number of child cells.
    #[inline]
    pub fn reference_count(&self) -> usize {
        self.references.len()
    }

    /// Returns the child cell at the specified index.
    #[inline]
    pub fn reference(&self, index: usize) -> Option<&Cell> {
        self.references.get(index).map(|cell| cell.as_ref())
    }

    /// Computes cell type. Exotic cells store it in the first data byte.
    pub fn cell_type(&self) -> Result<CellType, Error> {
        if !self.exotic {
            return Ok(CellType::Ordinary);
        }

        let byte = ok!(self.bits.reader().preload_uint(8)) as u8;
        match CellType::from_byte_exotic(byte) {
            Some(ty) => Ok(ty),
            None => Err(Error::UnknownCellType(byte)),
        }
    }

    /// Parses exotic cell contents. Returns `None` for ordinary cells.
    pub fn parse_exotic(&self) -> Result<Option<ExoticCell>, Error> {
        if !self.exotic {
            return Ok(None);
        }
        ExoticCell::decode(&self.bits, &self.references).map(Some)
    }
}
