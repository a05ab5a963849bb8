//! More specific logic for generating arbitrary data.

use arbitrary::{Arbitrary, Result, Unstructured};

use crate::cell::{BitString, CellType, LevelMask};
use crate::merkle::PrunedBranchEntry;

impl<'a> Arbitrary<'a> for PrunedBranchEntry {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        Ok(Self {
            depth: u.arbitrary()?,
            hash: u.arbitrary()?,
        })
    }

    #[inline]
    fn size_hint(_: usize) -> (usize, Option<usize>) {
        (34, Some(34))
    }
}

/// [`Arbitrary`] helper for generating well-formed pruned branch cell data.
#[derive(Debug, Clone)]
pub struct PrunedBranchInput {
    /// Level mask with level in range `1..=3`.
    pub mask: LevelMask,
    /// One entry per level.
    pub entries: Vec<PrunedBranchEntry>,
}

impl PrunedBranchInput {
    /// Encodes the input as `type mask hashes... depths...`.
    pub fn to_bits(&self) -> BitString {
        let mut data = Vec::with_capacity(2 + self.entries.len() * 34);
        data.push(CellType::PRUNED_BRANCH);
        data.push(self.mask.to_byte());
        for entry in &self.entries {
            data.extend_from_slice(&entry.hash);
        }
        for entry in &self.entries {
            data.extend_from_slice(&entry.depth.to_be_bytes());
        }
        BitString::from_bytes(data)
    }
}

impl<'a> Arbitrary<'a> for PrunedBranchInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        // Only contiguous masks have as many stored hashes as levels
        let level = u.int_in_range(1..=LevelMask::MAX_LEVEL)?;
        let mask = LevelMask::from_level(level);

        let mut entries = Vec::with_capacity(level as usize);
        for _ in 0..level {
            entries.push(u.arbitrary()?);
        }

        Ok(Self { mask, entries })
    }

    #[inline]
    fn size_hint(_: usize) -> (usize, Option<usize>) {
        (1 + 34, Some(1 + 34 * 3))
    }
}
