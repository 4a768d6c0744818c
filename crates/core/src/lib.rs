//! Core types for protolog
//!
//! This crate defines everything about a record that does not touch I/O:
//! - [`RecordHeader`]: the fixed 10-byte header and its codec
//! - [`checksum`]: CRC-32C over payload bytes
//! - [`Record`] / [`RecordRef`] / [`ReadOutcome`]: decoded records
//! - [`ReaderOptions`]: read-side configuration
//! - [`Error`]: the error taxonomy shared by readers and writers
//!
//! ## Wire Format
//!
//! ```text
//! +--------------+----------------+--------------+-------------------+
//! | length u32LE | checksum u32LE | type_id u16LE | payload (length) |
//! +--------------+----------------+--------------+-------------------+
//! ```
//!
//! There is no magic number, version or trailer. A stream is simply a
//! concatenation of records and ends where the bytes end.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checksum;
pub mod error;
pub mod format;
pub mod options;
pub mod record;

pub use checksum::{crc32c, Crc32cHasher};
pub use error::{Error, RecordSection, Result};
pub use format::{
    decode_header, encode_header, encode_record, RecordHeader, HEADER_LEN, MAX_PAYLOAD_LEN,
};
pub use options::ReaderOptions;
pub use record::{ReadOutcome, Record, RecordRef};
