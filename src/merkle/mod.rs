//! Merkle proof cells.

pub use self::pruned_branch::{ExoticPruned, PrunedBranchEntry};

mod pruned_branch;

#[cfg(test)]
mod tests;
