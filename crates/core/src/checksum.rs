//! CRC-32C (Castagnoli) checksums
//!
//! Records are protected by CRC-32C over the payload bytes only. This is the
//! CRC-32/ISCSI parameterisation: polynomial 0x1EDC6F41, reflected, init and
//! xorout 0xFFFFFFFF.

use crc::{Crc, Digest, CRC_32_ISCSI};

static CASTAGNOLI: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// Compute the CRC-32C of `data`.
#[inline]
pub fn crc32c(data: &[u8]) -> u32 {
    CASTAGNOLI.checksum(data)
}

/// Incremental CRC-32C for payloads that arrive in pieces.
pub struct Crc32cHasher {
    digest: Digest<'static, u32>,
}

impl Crc32cHasher {
    /// Start a new checksum.
    pub fn new() -> Self {
        Crc32cHasher {
            digest: CASTAGNOLI.digest(),
        }
    }

    /// Feed more bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Finish and return the checksum.
    pub fn finalize(self) -> u32 {
        self.digest.finalize()
    }
}

impl Default for Crc32cHasher {
    fn default() -> Self {
        Self::new()
    }
}
