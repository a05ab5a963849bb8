#![no_main]
use libfuzzer_sys::fuzz_target;

use boc_core::prelude::*;

fuzz_target!(|data: &[u8]| {
    let Some((&trim, data)) = data.split_first() else {
        return;
    };

    let bit_len = (data.len() * 8).saturating_sub((trim % 8) as usize);
    let Ok(bits) = BitString::new(data, bit_len) else {
        return;
    };

    if let Ok(pruned) = ExoticPruned::decode(&bits, &[]) {
        assert_eq!(pruned.pruned.len(), pruned.level() as usize);
        assert!((1..=3).contains(&pruned.level()));
    }
    _ = ExoticCell::decode(&bits, &[]);
});
