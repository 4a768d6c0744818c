//! Blocking I/O helpers that report how far they got.
//!
//! `read_exact` and `write_all` from std discard the byte count on failure.
//! Record framing needs it: a header that ends after zero bytes is a clean
//! end of stream, after three bytes it is truncation, and a short write must
//! tell the caller where the partial record ends.

use std::io::{self, Read, Write};

/// Read until `buf` is full or the source is exhausted.
///
/// Returns the number of bytes read; less than `buf.len()` means end of
/// stream. `Interrupted` reads are retried.
pub(crate) fn read_full<R: Read + ?Sized>(src: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match src.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// A write that stopped early.
#[derive(Debug)]
pub(crate) struct PartialWrite {
    /// Bytes the sink accepted before stopping
    pub written: usize,
    /// Why it stopped
    pub source: io::Error,
}

/// Write all of `buf`, or report how many bytes made it.
///
/// A sink that accepts zero bytes is reported as `WriteZero`, as
/// `write_all` does. `Interrupted` writes are retried.
pub(crate) fn write_full<W: Write + ?Sized>(
    sink: &mut W,
    buf: &[u8],
) -> std::result::Result<(), PartialWrite> {
    let mut written = 0;
    while written < buf.len() {
        match sink.write(&buf[written..]) {
            Ok(0) => {
                return Err(PartialWrite {
                    written,
                    source: io::Error::new(
                        io::ErrorKind::WriteZero,
                        "sink accepted no more bytes",
                    ),
                })
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => return Err(PartialWrite { written, source }),
        }
    }
    Ok(())
}
