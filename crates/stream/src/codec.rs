//! Record encode/decode over byte streams.
//!
//! Both writer flavors share [`write_record`]; [`Reader`](crate::Reader)
//! and [`Scanner`](crate::Scanner) share [`read_record`]. Nothing here
//! keeps state between calls except the payload buffer owned by the caller.

use std::io::{Read, Write};

use protolog_core::{
    crc32c, Error, ReaderOptions, RecordHeader, RecordSection, Result, HEADER_LEN,
};
use tracing::{debug, trace, warn};

use crate::io::{read_full, write_full};

/// Write one record: header first, then payload.
///
/// Returns `HEADER_LEN + payload.len()` on success. On a short or failed
/// write the error carries the number of bytes the sink accepted.
pub(crate) fn write_record<W: Write + ?Sized>(
    sink: &mut W,
    type_id: u16,
    payload: &[u8],
) -> Result<usize> {
    let header = RecordHeader::for_payload(type_id, payload)?;
    let expected = HEADER_LEN + payload.len();

    write_full(sink, &header.encode()).map_err(|p| Error::ShortWrite {
        written: p.written,
        expected,
        source: p.source,
    })?;

    write_full(sink, payload).map_err(|p| Error::ShortWrite {
        written: HEADER_LEN + p.written,
        expected,
        source: p.source,
    })?;

    trace!(type_id, len = payload.len(), "wrote record");
    Ok(expected)
}

/// Smallest step by which a too-small payload buffer grows.
const GROW_STEP: usize = 64 * 1024;

/// End of the next region of `buf` to fill for a payload of `len` bytes.
///
/// A buffer that already fits the payload is filled in one go. Otherwise it
/// at most doubles per step, so a header declaring far more bytes than the
/// stream holds cannot allocate much beyond what actually arrives.
fn next_fill_end(buf_len: usize, len: usize) -> usize {
    if buf_len >= len {
        len
    } else {
        len.min(buf_len.saturating_mul(2).max(GROW_STEP))
    }
}

/// Read one record into `buf`.
///
/// Returns `Ok(None)` when the source is exhausted before the first header
/// byte. On success the payload occupies `buf[..header.payload_len]`; bytes
/// past that are left over from earlier, larger records. `buf` only grows,
/// and only as payload bytes arrive.
pub(crate) fn read_record<R: Read + ?Sized>(
    src: &mut R,
    buf: &mut Vec<u8>,
    options: &ReaderOptions,
) -> Result<Option<RecordHeader>> {
    let mut hdr = [0u8; HEADER_LEN];
    let got = read_full(src, &mut hdr)?;
    if got == 0 {
        return Ok(None);
    }
    if got < HEADER_LEN {
        warn!(got, "stream ended inside a record header");
        return Err(Error::Truncated {
            section: RecordSection::Header,
            expected: HEADER_LEN as u64,
            actual: got as u64,
        });
    }

    let header = RecordHeader::decode(&hdr);
    if let Err(e) = options.check_header(&header) {
        warn!(
            declared = header.payload_len,
            limit = ?options.max_payload_len,
            "rejecting record above payload limit"
        );
        return Err(e);
    }

    let len = header.payload_len as usize;
    let mut filled = 0;
    while filled < len {
        let end = next_fill_end(buf.len(), len);
        if buf.len() < end {
            debug!(old = buf.len(), new = end, "growing record buffer");
            buf.resize(end, 0);
        }
        filled += read_full(src, &mut buf[filled..end])?;
        if filled < end {
            warn!(expected = len, got = filled, "stream ended inside a record payload");
            return Err(Error::Truncated {
                section: RecordSection::Payload,
                expected: len as u64,
                actual: filled as u64,
            });
        }
    }

    let payload = &buf[..len];
    if options.verify_checksums {
        let actual = crc32c(payload);
        if actual != header.checksum {
            warn!(
                expected = header.checksum,
                actual,
                type_id = header.type_id,
                "bad checksum detected while reading record"
            );
            return Err(Error::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }
    }

    trace!(type_id = header.type_id, len, "read record");
    Ok(Some(header))
}
