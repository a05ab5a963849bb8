use smallvec::SmallVec;

use crate::cell::*;
use crate::error::{Error, StructureError};

/// Bit length of a pruned branch from the config proof produced while voting
/// for slashing. These proofs were generated without the level mask byte.
const LEGACY_CONFIG_PROOF_BIT_LEN: usize = 8 + 256 + 16;

/// Hash and depth of a pruned subtree at one level.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrunedBranchEntry {
    /// Depth of the pruned subtree.
    pub depth: u16,
    /// Hash of the pruned subtree.
    #[cfg_attr(feature = "serde", serde(with = "crate::serde::hash_bytes"))]
    pub hash: CellHash,
}

/// Parsed pruned branch cell.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExoticPruned {
    /// Raw level mask.
    pub mask: u8,
    /// Stored hashes and depths, one per level.
    pub pruned: SmallVec<[PrunedBranchEntry; LevelMask::MAX_LEVEL as usize]>,
}

impl ExoticPruned {
    /// Decodes pruned branch cell data.
    ///
    /// Layout: `type:u8 mask:u8 hashes:[u256; level] depths:[u16; level]`,
    /// where the total length is fixed by the mask.
    pub fn decode(bits: &BitString, references: &[CellRef]) -> Result<Self, Error> {
        match decode_impl(bits, references.len()) {
            Ok(pruned) => Ok(pruned),
            Err(e) => {
                tracing::trace!(bit_len = bits.len(), error = %e, "invalid pruned branch");
                Err(e)
            }
        }
    }

    /// Level mask of the cell.
    #[inline]
    pub const fn level_mask(&self) -> LevelMask {
        LevelMask::new(self.mask)
    }

    /// Cell level.
    #[inline]
    pub const fn level(&self) -> u8 {
        self.level_mask().level()
    }

    /// Stored hash for the specified level.
    pub fn hash(&self, level: u8) -> Option<&CellHash> {
        self.pruned.get(level as usize).map(|entry| &entry.hash)
    }

    /// Stored depth for the specified level.
    pub fn depth(&self, level: u8) -> Option<u16> {
        self.pruned.get(level as usize).map(|entry| entry.depth)
    }
}

fn decode_impl(bits: &BitString, ref_count: usize) -> Result<ExoticPruned, Error> {
    let mut reader = bits.reader();

    let ty = ok!(reader.load_u8());
    if ty != CellType::PRUNED_BRANCH {
        return Err(Error::InvalidCellType {
            expected: CellType::PRUNED_BRANCH,
            actual: ty,
        });
    }

    if ref_count != 0 {
        return Err(StructureError::UnexpectedReferences { count: ref_count }.into());
    }

    let mask = if bits.len() == LEGACY_CONFIG_PROOF_BIT_LEN {
        // Legacy exception for already published proofs, keep it as is.
        // Only this exact length skips the mask byte and the size check.
        LevelMask::new(1)
    } else {
        let mask = LevelMask::new(ok!(reader.load_u8()));
        let level = mask.level();
        if !(1..=LevelMask::MAX_LEVEL).contains(&level) {
            return Err(Error::InvalidLevel {
                level,
                mask: mask.to_byte(),
            });
        }

        let hash_count = mask.apply(level - 1).hash_count() as usize;
        let expected = 8 + 8 + hash_count * (256 + 16);
        if bits.len() != expected {
            return Err(StructureError::BitLenMismatch {
                expected,
                actual: bits.len(),
            }
            .into());
        }

        mask
    };

    let level = mask.level() as usize;

    // All hashes go before all depths
    let mut hashes = [[0u8; 32]; LevelMask::MAX_LEVEL as usize];
    for hash in &mut hashes[..level] {
        *hash = ok!(reader.load_array::<32>());
    }

    let mut pruned = SmallVec::new();
    for hash in hashes.into_iter().take(level) {
        let depth = ok!(reader.load_u16());
        pruned.push(PrunedBranchEntry { depth, hash });
    }

    Ok(ExoticPruned {
        mask: mask.to_byte(),
        pruned,
    })
}
