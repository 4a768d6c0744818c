//! Read-side configuration
//!
//! The format has no sync markers, so a flipped bit in a length field makes
//! the reader try to allocate and read whatever size the header claims before
//! the checksum can catch it. [`ReaderOptions::max_payload_len`] bounds that.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::format::RecordHeader;

/// Payload limit used by [`ReaderOptions::strict`] (16 MiB).
pub const STRICT_MAX_PAYLOAD_LEN: u32 = 16 * 1024 * 1024;

/// Options for readers and scanners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Reject headers declaring more payload bytes than this.
    ///
    /// `None` accepts any 32-bit length.
    pub max_payload_len: Option<u32>,
    /// Verify the CRC-32C of every payload.
    pub verify_checksums: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            max_payload_len: None,
            verify_checksums: true,
        }
    }
}

impl ReaderOptions {
    /// Bounded payloads (16 MiB), checksums verified.
    ///
    /// Use for input from untrusted or possibly damaged sources.
    pub fn strict() -> Self {
        ReaderOptions {
            max_payload_len: Some(STRICT_MAX_PAYLOAD_LEN),
            verify_checksums: true,
        }
    }

    /// No payload bound, no checksum verification.
    ///
    /// Only for streams whose integrity was already established elsewhere.
    pub fn trusted() -> Self {
        ReaderOptions {
            max_payload_len: None,
            verify_checksums: false,
        }
    }

    /// Set the payload limit.
    pub fn with_max_payload_len(mut self, limit: u32) -> Self {
        self.max_payload_len = Some(limit);
        self
    }

    /// Enable or disable checksum verification.
    pub fn with_verify_checksums(mut self, verify: bool) -> Self {
        self.verify_checksums = verify;
        self
    }

    /// Check a decoded header against the payload limit.
    pub fn check_header(&self, header: &RecordHeader) -> Result<()> {
        match self.max_payload_len {
            Some(limit) if header.payload_len > limit => Err(Error::PayloadTooLarge {
                declared: header.payload_len,
                limit,
            }),
            _ => Ok(()),
        }
    }
}
