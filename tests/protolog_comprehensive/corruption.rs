//! Corruption tests: bit flips, torn tails and the payload guard.
//!
//! The checksum covers the payload only. Damage to the length field shows up
//! as truncation or a checksum mismatch; damage to the type ID is invisible.

use proptest::prelude::*;
use protolog::{Error, Reader, ReaderOptions, Record, RecordSection, HEADER_LEN};

use crate::{encode_all, init_tracing, read_all, scan_all};

proptest! {
    #[test]
    fn any_payload_bit_flip_is_detected(
        payload in prop::collection::vec(any::<u8>(), 1..256),
        pos in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let mut wire = encode_all(&[(1, payload.as_slice())]);
        let at = HEADER_LEN + pos.index(payload.len());
        wire[at] ^= 1 << bit;

        let is_mismatch = matches!(read_all(&wire), Err(Error::ChecksumMismatch { .. }));
        prop_assert!(is_mismatch);
        let (seen, err) = scan_all(&wire);
        prop_assert!(seen.is_empty());
        prop_assert!(err.map_or(false, |e| e.is_corruption()));
    }

    #[test]
    fn any_checksum_bit_flip_is_detected(
        payload in prop::collection::vec(any::<u8>(), 0..64),
        bit in 0u32..32,
    ) {
        let mut wire = encode_all(&[(1, payload.as_slice())]);
        let stored = u32::from_le_bytes([wire[4], wire[5], wire[6], wire[7]]);
        wire[4..8].copy_from_slice(&(stored ^ (1 << bit)).to_le_bytes());

        match read_all(&wire) {
            Err(Error::ChecksumMismatch { expected, actual }) => {
                prop_assert_eq!(expected, stored ^ (1 << bit));
                prop_assert_eq!(actual, stored);
            }
            other => prop_assert!(false, "Expected ChecksumMismatch, got {:?}", other),
        }
    }
}

#[test]
fn test_truncation_at_every_offset() {
    init_tracing();
    let records: [(u16, &[u8]); 3] = [(1, b"one"), (2, b""), (3, b"three")];
    let wire = encode_all(&records);

    let mut boundaries = vec![0];
    for (_, payload) in &records {
        let last = *boundaries.last().unwrap_or(&0);
        boundaries.push(last + HEADER_LEN + payload.len());
    }

    for cut in 0..=wire.len() {
        let (seen, err) = scan_all(&wire[..cut]);
        match boundaries.iter().position(|&b| b == cut) {
            Some(n) => {
                assert_eq!(seen.len(), n, "cut at {}", cut);
                assert!(err.is_none(), "cut at {}: {:?}", cut, err);
            }
            None => {
                let err = err.unwrap_or_else(|| panic!("cut at {} not detected", cut));
                assert!(err.is_truncation(), "cut at {}: {:?}", cut, err);
            }
        }
    }
}

#[test]
fn test_truncated_header_reports_bytes_seen() {
    let wire = encode_all(&[(1, b"abc")]);
    match read_all(&wire[..HEADER_LEN - 1]) {
        Err(Error::Truncated {
            section,
            expected,
            actual,
        }) => {
            assert_eq!(section, RecordSection::Header);
            assert_eq!(expected, HEADER_LEN as u64);
            assert_eq!(actual, HEADER_LEN as u64 - 1);
        }
        other => panic!("Expected Truncated, got {:?}", other),
    }
}

#[test]
fn test_length_field_damage() {
    let clean = encode_all(&[(1, b"eight by")]);

    // 8 -> 9: claims one more byte than the stream holds
    let mut longer = clean.clone();
    longer[0] ^= 0x01;
    assert!(matches!(
        read_all(&longer),
        Err(Error::Truncated {
            section: RecordSection::Payload,
            expected: 9,
            actual: 8,
        })
    ));

    // 8 -> 0: empty payload fails the stored checksum
    let mut shorter = clean;
    shorter[0] ^= 0x08;
    assert!(matches!(
        read_all(&shorter),
        Err(Error::ChecksumMismatch { actual: 0, .. })
    ));
}

#[test]
fn test_type_id_damage_goes_undetected() {
    let mut wire = encode_all(&[(1, b"payload")]);
    wire[8] = 0x07;
    assert_eq!(read_all(&wire).unwrap(), vec![Record::new(7, b"payload".to_vec())]);
}

#[test]
fn test_guard_stops_corrupt_length_before_allocating() {
    let mut wire = encode_all(&[(1, b"abc")]);
    wire[..4].copy_from_slice(&u32::MAX.to_le_bytes());

    let mut reader = Reader::with_options(wire.as_slice(), ReaderOptions::strict());
    let err = reader.next_record().unwrap_err();
    assert!(matches!(err, Error::PayloadTooLarge { declared: u32::MAX, .. }));
    assert!(err.is_fatal());
    assert_eq!(reader.buffer_capacity(), 0);
}

#[test]
fn test_trusted_options_skip_verification() {
    let mut wire = encode_all(&[(1, b"trusted")]);
    wire[HEADER_LEN] ^= 0xff;

    assert!(read_all(&wire).unwrap_err().is_corruption());

    let mut reader = Reader::with_options(wire.as_slice(), ReaderOptions::trusted());
    let rec = reader.next_record().unwrap().record().unwrap();
    assert_eq!(rec.payload[1..], b"rusted"[..]);
}
