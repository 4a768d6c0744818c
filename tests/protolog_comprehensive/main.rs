//! protolog Comprehensive Test Suite
//!
//! End-to-end tests through the public facade: bytes written by either
//! writer flavor, read back through the pull reader and the scanner.
//!
//! ## Modules
//!
//! - `writer`: byte layout, sink behavior, short writes
//! - `reader`: round trips, ordering, buffer growth, options
//! - `scanner`: iteration protocol, terminal states, buffer reuse
//! - `corruption`: bit flips, truncation at every offset, the payload guard
//! - `files`: file-backed streams, appends, torn-tail recovery
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test protolog_comprehensive
//!
//! # Corruption tests only
//! cargo test --test protolog_comprehensive corruption::
//! ```

use protolog::{Error, MultiTypedWriter, Reader, Record, Scanner};

pub mod corruption;
pub mod scanner;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Route library logs to the test harness output.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Encode `records` back to back with a multi-typed writer.
pub fn encode_all(records: &[(u16, &[u8])]) -> Vec<u8> {
    let mut w = MultiTypedWriter::new(Vec::new());
    for (type_id, payload) in records {
        w.write(*type_id, payload).unwrap();
    }
    w.into_inner()
}

/// Read every record with the pull reader, stopping at the first error.
pub fn read_all(bytes: &[u8]) -> protolog::Result<Vec<Record>> {
    Reader::new(bytes).records().collect()
}

/// Scan every record, returning what was seen and the terminal error.
pub fn scan_all(bytes: &[u8]) -> (Vec<Record>, Option<Error>) {
    let mut scanner = Scanner::new(bytes);
    let mut seen = Vec::new();
    while scanner.scan() {
        seen.push(Record::new(scanner.type_id(), scanner.bytes()));
    }
    (seen, scanner.into_error())
}
