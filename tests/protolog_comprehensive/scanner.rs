//! Scanner tests: iteration protocol and terminal states.

use std::io::Cursor;

use protolog::{Error, Record, RecordRef, ScanState, Scanner};

use crate::{encode_all, init_tracing, scan_all};

const FIRST: u16 = 0;
const SECOND: u16 = 1;
const THIRD: u16 = 2;

#[test]
fn test_three_types_then_clean_end() {
    let wire = encode_all(&[(FIRST, b"first"), (SECOND, b"second"), (THIRD, b"third")]);

    let (seen, err) = scan_all(&wire);
    assert!(err.is_none());
    assert_eq!(
        seen,
        vec![
            Record::new(FIRST, b"first".to_vec()),
            Record::new(SECOND, b"second".to_vec()),
            Record::new(THIRD, b"third".to_vec()),
        ]
    );
}

#[test]
fn test_empty_stream_scans_nothing() {
    let mut scanner = Scanner::new(std::io::empty());
    assert!(!scanner.scan());
    assert!(scanner.error().is_none());
    assert_eq!(scanner.state(), ScanState::Exhausted);
}

#[test]
fn test_shrinking_then_growing_never_leaks_old_bytes() {
    let wire = encode_all(&[
        (FIRST, &[0xaau8; 100][..]),
        (FIRST, &[0x01u8; 3][..]),
        (FIRST, &b""[..]),
        (FIRST, &[0x02u8; 50][..]),
        (FIRST, &[0x03u8; 150][..]),
    ]);

    let mut scanner = Scanner::new(wire.as_slice());
    let mut lens = Vec::new();
    while scanner.scan() {
        let bytes = scanner.bytes();
        lens.push(bytes.len());
        if let Some(first) = bytes.first() {
            assert!(bytes.iter().all(|b| b == first), "stale bytes in {:?}", bytes);
        }
    }
    assert_eq!(lens, vec![100, 3, 0, 50, 150]);
    assert_eq!(scanner.buffer_capacity(), 150);
    assert!(scanner.error().is_none());
}

#[test]
fn test_record_view_matches_accessors() {
    let wire = encode_all(&[(SECOND, b"view")]);
    let mut scanner = Scanner::new(wire.as_slice());

    assert!(scanner.record().is_none());
    assert!(scanner.scan());
    assert_eq!(
        scanner.record(),
        Some(RecordRef {
            type_id: scanner.type_id(),
            payload: scanner.bytes(),
        })
    );
    assert!(!scanner.scan());
    assert!(scanner.record().is_none());
}

#[test]
fn test_failure_keeps_records_before_it() {
    init_tracing();
    let mut wire = encode_all(&[(FIRST, b"good"), (SECOND, b"also good"), (THIRD, b"bad")]);
    let last = wire.len() - 1;
    wire[last] ^= 0x80;

    let mut scanner = Scanner::buffered(Cursor::new(wire));
    let mut count = 0;
    while scanner.scan() {
        count += 1;
    }
    assert_eq!(count, 2);
    assert_eq!(scanner.state(), ScanState::Failed);
    assert!(!scanner.scan());
    assert!(matches!(
        scanner.into_error(),
        Some(Error::ChecksumMismatch { .. })
    ));
}
