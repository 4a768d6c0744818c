//! Record header format
//!
//! Every record starts with a fixed 10-byte header:
//!
//! ```text
//! [ payload length (4) ]  offset 0, u32 little-endian
//! [ checksum       (4) ]  offset 4, u32 little-endian, CRC-32C of payload
//! [ type id        (2) ]  offset 8, u16 little-endian
//! [ payload        (N) ]
//! ```
//!
//! The header itself is not covered by the checksum. Decoding accepts any
//! 32-bit length; the largest value (`u32::MAX`) is reserved and rejected
//! when encoding.

use byteorder::{ByteOrder, LittleEndian};

use crate::checksum::crc32c;
use crate::error::{Error, RecordSection, Result};

/// Size of an encoded record header in bytes.
pub const HEADER_LEN: usize = 10;

/// Largest payload a record may carry (2^32 - 2 bytes).
pub const MAX_PAYLOAD_LEN: u32 = u32::MAX - 1;

/// Decoded record header
///
/// Transient: produced by decoding the first [`HEADER_LEN`] bytes of a
/// record and consumed before the next record is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordHeader {
    /// Number of payload bytes following the header
    pub payload_len: u32,
    /// CRC-32C of the payload bytes
    pub checksum: u32,
    /// Caller-defined record type
    pub type_id: u16,
}

impl RecordHeader {
    /// Build the header for `payload`, computing its length and checksum.
    ///
    /// Fails with [`Error::OversizedPayload`] if the payload is too large to
    /// be framed.
    pub fn for_payload(type_id: u16, payload: &[u8]) -> Result<Self> {
        let payload_len = checked_payload_len(payload.len())?;
        Ok(RecordHeader {
            payload_len,
            checksum: crc32c(payload),
            type_id,
        })
    }

    /// Encode into the 10-byte wire layout.
    #[inline]
    pub fn encode(&self) -> [u8; HEADER_LEN] {
        encode_header(self.type_id, self.payload_len, self.checksum)
    }

    /// Decode from the 10-byte wire layout.
    #[inline]
    pub fn decode(buf: &[u8; HEADER_LEN]) -> Self {
        decode_header(buf)
    }

    /// Total bytes this record occupies on the wire (header + payload).
    #[inline]
    pub fn wire_len(&self) -> u64 {
        HEADER_LEN as u64 + self.payload_len as u64
    }

    /// Check `payload` against this header's length and checksum.
    pub fn verify(&self, payload: &[u8]) -> Result<()> {
        if payload.len() as u64 != self.payload_len as u64 {
            return Err(Error::Truncated {
                section: RecordSection::Payload,
                expected: self.payload_len as u64,
                actual: payload.len() as u64,
            });
        }
        let actual = crc32c(payload);
        if actual != self.checksum {
            return Err(Error::ChecksumMismatch {
                expected: self.checksum,
                actual,
            });
        }
        Ok(())
    }
}

/// Validate a payload length for encoding.
///
/// Lengths of `u32::MAX` and above are rejected: `u32::MAX` is reserved.
#[inline]
pub(crate) fn checked_payload_len(len: usize) -> Result<u32> {
    if len as u64 > MAX_PAYLOAD_LEN as u64 {
        return Err(Error::OversizedPayload { len: len as u64 });
    }
    Ok(len as u32)
}

/// Encode header fields into the 10-byte wire layout.
#[inline]
pub fn encode_header(type_id: u16, payload_len: u32, checksum: u32) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    LittleEndian::write_u32(&mut out[0..4], payload_len);
    LittleEndian::write_u32(&mut out[4..8], checksum);
    LittleEndian::write_u16(&mut out[8..10], type_id);
    out
}

/// Decode the 10-byte wire layout into header fields.
///
/// Never fails: every bit pattern is a syntactically valid header.
#[inline]
pub fn decode_header(buf: &[u8; HEADER_LEN]) -> RecordHeader {
    RecordHeader {
        payload_len: LittleEndian::read_u32(&buf[0..4]),
        checksum: LittleEndian::read_u32(&buf[4..8]),
        type_id: LittleEndian::read_u16(&buf[8..10]),
    }
}

/// Frame `payload` as a complete record (header followed by payload).
pub fn encode_record(type_id: u16, payload: &[u8]) -> Result<Vec<u8>> {
    let header = RecordHeader::for_payload(type_id, payload)?;
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&header.encode());
    out.extend_from_slice(payload);
    Ok(out)
}
