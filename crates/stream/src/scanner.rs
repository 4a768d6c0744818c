//! Scanner: sequential record access
//!
//! ```ignore
//! let mut scanner = Scanner::buffered(File::open("events.log")?);
//! while scanner.scan() {
//!     dispatch(scanner.type_id(), scanner.bytes());
//! }
//! if let Some(err) = scanner.error() {
//!     return Err(err.into());
//! }
//! ```
//!
//! ## State machine
//!
//! ```text
//!            scan() == true
//!           +-------------+
//!           v             |
//!        [Ready] ---------+
//!         |    |
//!  end of |    | any other failure
//!  stream v    v
//! [Exhausted] [Failed]
//! ```
//!
//! `Exhausted` and `Failed` are terminal; every later `scan()` returns
//! false. A clean end of stream leaves [`Scanner::error`] empty.

use std::io::{BufReader, Read};

use protolog_core::{Error, ReaderOptions, RecordHeader, RecordRef};

use crate::codec::read_record;

/// Where a [`Scanner`] is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// More records may follow.
    Ready,
    /// The stream ended cleanly.
    Exhausted,
    /// Decoding failed; see [`Scanner::error`].
    Failed,
}

/// Reads records one by one, stopping at the first error or the end.
#[derive(Debug)]
pub struct Scanner<R: Read> {
    inner: R,
    buf: Vec<u8>,
    /// Valid bytes of `buf` for the current record
    size: usize,
    header: Option<RecordHeader>,
    state: ScanState,
    err: Option<Error>,
    options: ReaderOptions,
}

impl<R: Read> Scanner<R> {
    /// Create a scanner with default options.
    pub fn new(inner: R) -> Self {
        Self::with_options(inner, ReaderOptions::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_options(inner: R, options: ReaderOptions) -> Self {
        Scanner {
            inner,
            buf: Vec::new(),
            size: 0,
            header: None,
            state: ScanState::Ready,
            err: None,
            options,
        }
    }

    /// Advance to the next record.
    ///
    /// Returns true if a record was decoded; its contents are available
    /// through [`type_id`](Self::type_id) and [`bytes`](Self::bytes) until
    /// the next call.
    pub fn scan(&mut self) -> bool {
        if self.state != ScanState::Ready {
            return false;
        }
        match read_record(&mut self.inner, &mut self.buf, &self.options) {
            Ok(Some(header)) => {
                self.size = header.payload_len as usize;
                self.header = Some(header);
                true
            }
            Ok(None) => {
                self.clear_current();
                self.state = ScanState::Exhausted;
                false
            }
            Err(e) => {
                self.clear_current();
                self.state = ScanState::Failed;
                self.err = Some(e);
                false
            }
        }
    }

    fn clear_current(&mut self) {
        self.size = 0;
        self.header = None;
    }

    /// Type ID of the current record.
    ///
    /// Only meaningful after `scan()` returned true; 0 otherwise.
    pub fn type_id(&self) -> u16 {
        self.header.map_or(0, |h| h.type_id)
    }

    /// Payload of the current record.
    ///
    /// Borrowed from the scanner's buffer, which the next `scan()`
    /// overwrites. Copy it to keep it. Empty when there is no current
    /// record.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.size]
    }

    /// The current record, if `scan()` last returned true.
    pub fn record(&self) -> Option<RecordRef<'_>> {
        self.header.map(|h| RecordRef {
            type_id: h.type_id,
            payload: &self.buf[..self.size],
        })
    }

    /// The error that stopped scanning.
    ///
    /// `None` while scanning and after a clean end of stream.
    pub fn error(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Size of the reusable payload buffer.
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
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Unwrap the scanner, returning the source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Consume the scanner, returning the error that stopped it, if any.
    pub fn into_error(self) -> Option<Error> {
        self.err
    }
}

impl<R: Read> Scanner<BufReader<R>> {
    /// Create a scanner that buffers `inner`.
    pub fn buffered(inner: R) -> Self {
        Self::new(BufReader::new(inner))
    }
}
