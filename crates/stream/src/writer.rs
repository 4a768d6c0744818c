//! Record writers
//!
//! Two flavors over one encoding routine:
//! - [`TypedWriter`]: the type ID is fixed when the writer is built
//! - [`MultiTypedWriter`]: the type ID is passed with every record
//!
//! Writers append to whatever sink they are given. They never open, seek,
//! truncate or close it, and they add no buffering of their own: wrap the
//! sink in a `BufWriter` if small writes are expensive, and call
//! [`flush`](TypedWriter::flush) before relying on the data being durable.
//!
//! # Partial records
//!
//! If the sink stops accepting bytes mid-record, the write fails with
//! [`Error::ShortWrite`](protolog_core::Error::ShortWrite) and reports how
//! many bytes of the record reached the sink. The stream then ends in a
//! partial record; truncate it back to the last good offset before
//! appending again.

use std::io::Write;

use protolog_core::Result;

use crate::codec::write_record;

/// Writes records that all share one type ID.
#[derive(Debug)]
pub struct TypedWriter<W: Write> {
    type_id: u16,
    inner: W,
}

impl<W: Write> TypedWriter<W> {
    /// Create a writer that tags every record with `type_id`.
    pub fn new(type_id: u16, inner: W) -> Self {
        TypedWriter { type_id, inner }
    }

    /// Append one record.
    ///
    /// Returns the number of bytes written (10-byte header plus payload).
    pub fn write(&mut self, payload: &[u8]) -> Result<usize> {
        write_record(&mut self.inner, self.type_id, payload)
    }

    /// The type ID stamped on every record.
    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    ///
    /// Writing to it directly will corrupt the record stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Writes records whose type ID varies per record.
#[derive(Debug)]
pub struct MultiTypedWriter<W: Write> {
    inner: W,
}

impl<W: Write> MultiTypedWriter<W> {
    /// Create a writer over `inner`.
    pub fn new(inner: W) -> Self {
        MultiTypedWriter { inner }
    }

    /// Append one record tagged with `type_id`.
    ///
    /// Returns the number of bytes written (10-byte header plus payload).
    pub fn write(&mut self, type_id: u16, payload: &[u8]) -> Result<usize> {
        write_record(&mut self.inner, type_id, payload)
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the writer, returning the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
