//! # protolog
//!
//! Length-prefixed, checksummed, type-tagged records over any byte stream.
//!
//! Every record is a fixed 10-byte header followed by its payload:
//!
//! ```text
//! [length u32LE][crc32c u32LE][type_id u16LE][payload ...]
//! ```
//!
//! The library only frames bytes. What a payload means, and what each type
//! ID stands for, is up to the caller.
//!
//! ## Quick Start
//!
//! ```ignore
//! use protolog::prelude::*;
//!
//! const LOGIN: u16 = 1;
//! const LOGOUT: u16 = 2;
//!
//! // Write
//! let mut w = MultiTypedWriter::new(Vec::new());
//! w.write(LOGIN, b"alice")?;
//! w.write(LOGOUT, b"alice")?;
//! let bytes = w.into_inner();
//!
//! // Pull records one at a time
//! let mut reader = Reader::new(bytes.as_slice());
//! while let ReadOutcome::Record(rec) = reader.next_record()? {
//!     println!("{} {:?}", rec.type_id, rec.payload);
//! }
//!
//! // Or scan until done
//! let mut scanner = Scanner::new(bytes.as_slice());
//! while scanner.scan() {
//!     handle(scanner.type_id(), scanner.bytes());
//! }
//! if let Some(err) = scanner.error() {
//!     return Err(err.into());
//! }
//! ```
//!
//! ## Crates
//!
//! - [`protolog_core`]: header codec, CRC-32C, record types, options, errors
//! - [`protolog_stream`]: writers, reader and scanner over `std::io`

#![warn(missing_docs)]

pub mod prelude;

// Re-export the building blocks
pub use protolog_core::{
    checksum, crc32c, decode_header, encode_header, encode_record, Error, ReadOutcome,
    ReaderOptions, Record, RecordHeader, RecordRef, RecordSection, Result, HEADER_LEN,
    MAX_PAYLOAD_LEN,
};

// Re-export stream types
pub use protolog_stream::{MultiTypedWriter, Reader, Records, ScanState, Scanner, TypedWriter};
