use std::sync::Arc;

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use super::*;
use crate::cell::*;
use crate::error::{Error, StructureError};

fn rng() -> XorShiftRng {
    XorShiftRng::seed_from_u64(0xdeadbeaf)
}

fn random_entries(rng: &mut impl Rng, count: usize) -> Vec<PrunedBranchEntry> {
    (0..count)
        .map(|_| PrunedBranchEntry {
            depth: rng.gen(),
            hash: rng.gen(),
        })
        .collect()
}

/// `type mask hashes... depths...`
fn pruned_branch_data(ty: u8, mask: u8, entries: &[PrunedBranchEntry]) -> Vec<u8> {
    let mut data = vec![ty, mask];
    for entry in entries {
        data.extend_from_slice(&entry.hash);
    }
    for entry in entries {
        data.extend_from_slice(&entry.depth.to_be_bytes());
    }
    data
}

fn empty_child() -> CellRef {
    Arc::new(Cell::new(BitString::default(), []).unwrap())
}

#[test]
fn decode_contiguous_masks() {
    let mut rng = rng();

    for (mask, level) in [(0b001, 1), (0b011, 2), (0b111, 3)] {
        let entries = random_entries(&mut rng, level);
        let bits = BitString::from_bytes(pruned_branch_data(1, mask, &entries));
        assert_eq!(bits.len(), 16 + level * (256 + 16));

        let parsed = ExoticPruned::decode(&bits, &[]).unwrap();
        assert_eq!(parsed.mask, mask);
        assert_eq!(parsed.level() as usize, level);
        assert_eq!(parsed.pruned.as_slice(), entries.as_slice());
    }
}

#[test]
fn hashes_precede_depths() {
    let mut data = vec![1, 0b011];
    data.extend_from_slice(&[0xaa; 32]);
    data.extend_from_slice(&[0xbb; 32]);
    data.extend_from_slice(&[0x00, 0x01, 0x00, 0x02]);

    let parsed = ExoticPruned::decode(&BitString::from_bytes(data), &[]).unwrap();
    assert_eq!(parsed.pruned.len(), 2);
    assert_eq!(parsed.hash(0), Some(&[0xaa; 32]));
    assert_eq!(parsed.depth(0), Some(1));
    assert_eq!(parsed.hash(1), Some(&[0xbb; 32]));
    assert_eq!(parsed.depth(1), Some(2));
    assert_eq!(parsed.hash(2), None);
    assert_eq!(parsed.depth(2), None);
    assert_eq!(parsed.level_mask(), LevelMask::new(0b011));
}

#[test]
fn sparse_masks_are_too_short() {
    let mut rng = rng();

    for mask in [0b010, 0b100, 0b101, 0b110] {
        let mask = LevelMask::new(mask);
        let hash_count = mask.apply(mask.level() - 1).hash_count() as usize;
        assert!(hash_count < mask.level() as usize);

        let entries = random_entries(&mut rng, hash_count);
        let bits = BitString::from_bytes(pruned_branch_data(1, mask.to_byte(), &entries));
        assert_eq!(bits.len(), 16 + hash_count * (256 + 16));

        assert!(matches!(
            ExoticPruned::decode(&bits, &[]),
            Err(Error::OutOfBounds { requested: 256, .. })
        ));
    }
}

#[test]
fn legacy_config_proof_layout() {
    let mut rng = rng();

    for mask_byte in 0..=u8::MAX {
        let mut data = vec![1, mask_byte];
        data.extend((0..33).map(|_| rng.gen::<u8>()));
        let bits = BitString::from_bytes(data.clone());
        assert_eq!(bits.len(), 280);

        let parsed = ExoticPruned::decode(&bits, &[]).unwrap();
        assert_eq!(parsed.mask, 1);
        assert_eq!(parsed.pruned.len(), 1);
        assert_eq!(parsed.pruned[0].hash.as_slice(), &data[1..33]);
        assert_eq!(
            parsed.pruned[0].depth,
            u16::from_be_bytes([data[33], data[34]])
        );
    }
}

#[test]
fn legacy_layout_still_checks_header() {
    let mut data = vec![2];
    data.extend_from_slice(&[0; 34]);
    assert_eq!(
        ExoticPruned::decode(&BitString::from_bytes(data.clone()), &[]),
        Err(Error::InvalidCellType {
            expected: 1,
            actual: 2
        })
    );

    data[0] = 1;
    assert_eq!(
        ExoticPruned::decode(&BitString::from_bytes(data), &[empty_child()]),
        Err(Error::InvalidStructure(
            StructureError::UnexpectedReferences { count: 1 }
        ))
    );
}

#[test]
fn invalid_cell_type() {
    let entries = random_entries(&mut rng(), 1);

    for ty in (0..=u8::MAX).filter(|ty| *ty != CellType::PRUNED_BRANCH) {
        let bits = BitString::from_bytes(pruned_branch_data(ty, 1, &entries));
        assert_eq!(
            ExoticPruned::decode(&bits, &[]),
            Err(Error::InvalidCellType {
                expected: 1,
                actual: ty
            })
        );
    }
}

#[test]
fn references_are_not_allowed() {
    let entries = random_entries(&mut rng(), 1);
    let bits = BitString::from_bytes(pruned_branch_data(1, 1, &entries));
    assert!(ExoticPruned::decode(&bits, &[]).is_ok());

    for count in 1..=MAX_REF_COUNT {
        let references = vec![empty_child(); count];
        assert_eq!(
            ExoticPruned::decode(&bits, &references),
            Err(Error::InvalidStructure(
                StructureError::UnexpectedReferences { count }
            ))
        );
    }

    let cell = Cell::new_exotic(bits, [empty_child()]).unwrap();
    assert!(matches!(
        cell.parse_exotic(),
        Err(Error::InvalidStructure(_))
    ));
}

#[test]
fn invalid_level() {
    let entries = random_entries(&mut rng(), 1);

    for mask in std::iter::once(0).chain(8..=u8::MAX) {
        let bits = BitString::from_bytes(pruned_branch_data(1, mask, &entries));
        assert_eq!(
            ExoticPruned::decode(&bits, &[]),
            Err(Error::InvalidLevel {
                level: LevelMask::new(mask).level(),
                mask,
            })
        );
    }
}

#[test]
fn exact_bit_len() {
    let mut rng = rng();

    for (mask, level) in [(0b001, 1), (0b011, 2), (0b111, 3)] {
        let entries = random_entries(&mut rng, level);
        let mut data = pruned_branch_data(1, mask, &entries);
        let expected = data.len() * 8;
        data.push(0xff);

        for actual in [expected - 16, expected - 1, expected + 1, expected + 8] {
            let bits = BitString::new(&data, actual).unwrap();
            assert_eq!(
                ExoticPruned::decode(&bits, &[]),
                Err(Error::InvalidStructure(StructureError::BitLenMismatch {
                    expected,
                    actual,
                }))
            );
        }

        let bits = BitString::new(&data, expected).unwrap();
        assert!(ExoticPruned::decode(&bits, &[]).is_ok());
    }
}

#[test]
fn truncated_header() {
    assert!(matches!(
        ExoticPruned::decode(&BitString::default(), &[]),
        Err(Error::OutOfBounds {
            requested: 8,
            remaining: 0
        })
    ));
    assert!(matches!(
        ExoticPruned::decode(&BitString::new(&[0x01], 4).unwrap(), &[]),
        Err(Error::OutOfBounds {
            requested: 8,
            remaining: 4
        })
    ));
    assert!(matches!(
        ExoticPruned::decode(&BitString::from_bytes(vec![1]), &[]),
        Err(Error::OutOfBounds {
            requested: 8,
            remaining: 0
        })
    ));
}

#[test]
fn decode_from_many_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BitString>();
    assert_send_sync::<ExoticPruned>();
    assert_send_sync::<Cell>();

    let mut rng = rng();
    let cells = (0..8)
        .map(|_| {
            let entries = random_entries(&mut rng, 3);
            let bits = BitString::from_bytes(pruned_branch_data(1, 0b111, &entries));
            (Cell::new_exotic(bits, []).unwrap(), entries)
        })
        .collect::<Vec<_>>();

    std::thread::scope(|s| {
        for (cell, entries) in &cells {
            s.spawn(move || {
                let Some(ExoticCell::PrunedBranch(parsed)) = cell.parse_exotic().unwrap() else {
                    panic!("expected pruned branch");
                };
                assert_eq!(parsed.pruned.as_slice(), entries.as_slice());
            });
        }
    });
}

#[cfg(feature = "serde")]
#[test]
fn serde_pruned_branch() {
    let mut data = vec![1, 1];
    data.extend_from_slice(&[0xab; 32]);
    data.extend_from_slice(&[0x01, 0x02]);
    let parsed = ExoticPruned::decode(&BitString::from_bytes(data), &[]).unwrap();

    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(
        json,
        format!(
            r#"{{"mask":1,"pruned":[{{"depth":258,"hash":"{}"}}]}}"#,
            "ab".repeat(32)
        )
    );

    let decoded: ExoticPruned = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, parsed);
}
