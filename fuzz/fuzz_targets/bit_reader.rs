#![no_main]
use libfuzzer_sys::fuzz_target;

use boc_core::prelude::*;

fuzz_target!(|input: (Vec<u8>, Vec<u8>)| {
    let (data, widths) = input;
    let bits = BitString::from_bytes(data);
    let mut reader = bits.reader();

    for width in widths {
        let width = width as u16;
        let remaining = reader.remaining_bits();
        match reader.load_uint(width) {
            Ok(value) => {
                assert_eq!(reader.remaining_bits(), remaining - width as usize);
                if width < 64 {
                    assert!(value < (1u64 << width));
                }
            }
            Err(Error::IntOverflow { bits }) => {
                assert!(bits > 64);
                assert_eq!(reader.remaining_bits(), remaining);
            }
            Err(_) => assert_eq!(reader.remaining_bits(), remaining),
        }
    }
});
