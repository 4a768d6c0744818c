//! Error types for record encoding and decoding
//!
//! A single [`Error`] enum covers both sides of the stream. Read-side errors
//! are always fatal for the stream they came from: the format carries no sync
//! markers, so there is no reliable way to find the next record boundary after
//! a truncated or corrupt one.
//!
//! A clean end of stream is not an error. Pull-style reads report it through
//! [`ReadOutcome::EndOfStream`](crate::ReadOutcome::EndOfStream).

use std::fmt;
use std::io;
use thiserror::Error;

/// Which part of a record was being read when the stream ran short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSection {
    /// The fixed 10-byte header
    Header,
    /// The payload declared by the header
    Payload,
}

impl fmt::Display for RecordSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSection::Header => f.write_str("header"),
            RecordSection::Payload => f.write_str("payload"),
        }
    }
}

/// All protolog errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream ended inside a record.
    #[error("truncated record {section}: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Section being read
        section: RecordSection,
        /// Bytes the section requires
        expected: u64,
        /// Bytes actually available
        actual: u64,
    },

    /// Payload bytes do not match the checksum stored in the header.
    #[error("bad checksum: header says {expected:#010x}, payload hashes to {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum stored in the header
        expected: u32,
        /// Checksum computed over the payload
        actual: u32,
    },

    /// Writer-side rejection of a payload at or above the 32-bit length boundary.
    #[error("cannot write record of {len} bytes: payload must be smaller than 4 GiB - 1")]
    OversizedPayload {
        /// Length of the rejected payload
        len: u64,
    },

    /// Reader-side rejection of a header declaring more than the configured limit.
    #[error("record declares {declared} payload bytes, limit is {limit}")]
    PayloadTooLarge {
        /// Length declared by the header
        declared: u32,
        /// Configured limit
        limit: u32,
    },

    /// The sink accepted fewer bytes than the record needs.
    ///
    /// `written` counts header bytes plus any partial payload bytes, so the
    /// caller can truncate back to the last good offset.
    #[error("short write: {written} of {expected} record bytes written")]
    ShortWrite {
        /// Bytes the sink accepted
        written: usize,
        /// Bytes the full record needs
        expected: usize,
        /// Why the sink stopped
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for protolog operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error signals corrupted data.
    pub fn is_corruption(&self) -> bool {
        matches!(self, Error::ChecksumMismatch { .. })
    }

    /// Check if the stream ended inside a record.
    pub fn is_truncation(&self) -> bool {
        matches!(self, Error::Truncated { .. })
    }

    /// Check if this error leaves the stream unusable from this point on.
    ///
    /// Every read-side failure is fatal. `ShortWrite` is fatal for the sink
    /// until the caller truncates the partial tail record. `OversizedPayload`
    /// writes nothing, so the stream stays intact.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::OversizedPayload { .. })
    }

    /// Bytes written to the sink before the error, if the error reports them.
    pub fn bytes_written(&self) -> Option<usize> {
        match self {
            Error::ShortWrite { written, .. } => Some(*written),
            Error::OversizedPayload { .. } => Some(0),
            _ => None,
        }
    }
}
