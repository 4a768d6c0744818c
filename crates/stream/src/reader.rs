//! Pull-style record reader
//!
//! Each call to [`Reader::next_record`] decodes exactly one record:
//!
//! ```ignore
//! let mut reader = Reader::buffered(File::open("events.log")?);
//! loop {
//!     match reader.next_record()? {
//!         ReadOutcome::Record(rec) => dispatch(rec.type_id, rec.payload),
//!         ReadOutcome::EndOfStream => break,
//!     }
//! }
//! ```
//!
//! The returned payload borrows the reader's buffer and is only valid until
//! the next call. Use [`RecordRef::to_record`](protolog_core::RecordRef::to_record)
//! or [`Reader::records`] to keep records around.

use std::io::{BufReader, Read};

use protolog_core::{ReadOutcome, ReaderOptions, Record, RecordRef, Result};

use crate::codec::read_record;

/// Decodes records one at a time from a byte source.
///
/// Any error is fatal for the stream: there is no way to resynchronize on
/// the next record boundary, so keep calling at your own risk.
#[derive(Debug)]
pub struct Reader<R: Read> {
    inner: R,
    buf: Vec<u8>,
    options: ReaderOptions,
}

impl<R: Read> Reader<R> {
    /// Create a reader with default options.
    ///
    /// The source is used as-is; see [`Reader::buffered`] for unbuffered
    /// sources such as files and sockets.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReaderOptions::default())
    }

    /// Create a reader with explicit options.
    pub fn with_options(inner: R, options: ReaderOptions) -> Self {
        Reader {
            inner,
            buf: Vec::new(),
            options,
        }
    }

    /// Decode the next record.
    ///
    /// Returns [`ReadOutcome::EndOfStream`] if the source ends cleanly on a
    /// record boundary, or an error if it ends inside a record, the payload
    /// fails its checksum, or the source itself fails.
    pub fn next_record(&mut self) -> Result<ReadOutcome<'_>> {
        match read_record(&mut self.inner, &mut self.buf, &self.options)? {
            Some(header) => Ok(ReadOutcome::Record(RecordRef {
                type_id: header.type_id,
                payload: &self.buf[..header.payload_len as usize],
            })),
            None => Ok(ReadOutcome::EndOfStream),
        }
    }

    /// Iterate over owned copies of the remaining records.
    ///
    /// The iterator ends after the end of stream or after yielding the
    /// first error.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }

    /// Size of the reusable payload buffer.
    ///
    /// Grows to fit the largest record read so far and never shrinks.
    pub fn buffer_capacity(&self) -> usize {
        self.buf.len()
    }

    /// Options in effect.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    ///
    /// Reading from it directly desynchronizes the record stream.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the reader, returning the source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Reader<BufReader<R>> {
    /// Create a reader that buffers `inner`.
    pub fn buffered(inner: R) -> Self {
        Self::new(BufReader::new(inner))
    }
}

/// Iterator over owned records, created by [`Reader::records`].
#[derive(Debug)]
pub struct Records<'a, R: Read> {
    reader: &'a mut Reader<R>,
    done: bool,
}

impl<'a, R: Read> Iterator for Records<'a, R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_record() {
            Ok(ReadOutcome::Record(rec)) => Some(Ok(rec.to_record())),
            Ok(ReadOutcome::EndOfStream) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<'a, R: Read> std::iter::FusedIterator for Records<'a, R> {}
