//! On-the-wire byte format for records.
//!
//! This module centralizes the header layout and the routine that frames a
//! payload into a complete record. Keeping serialization apart from the
//! stream handling in `protolog-stream` means the layout is defined in
//! exactly one place.
//!
//! # Module Structure
//!
//! - `record_header`: header layout, encode/decode, whole-record framing

pub mod record_header;

pub use record_header::{
    decode_header, encode_header, encode_record, RecordHeader, HEADER_LEN, MAX_PAYLOAD_LEN,
};
