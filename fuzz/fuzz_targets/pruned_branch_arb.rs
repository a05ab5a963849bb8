#![no_main]
use libfuzzer_sys::fuzz_target;

use boc_core::arbitrary::PrunedBranchInput;
use boc_core::prelude::*;

fuzz_target!(|input: PrunedBranchInput| {
    let bits = input.to_bits();
    let parsed = ExoticPruned::decode(&bits, &[]).unwrap();
    assert_eq!(parsed.level_mask(), input.mask);
    assert_eq!(parsed.pruned.as_slice(), input.entries.as_slice());
});
