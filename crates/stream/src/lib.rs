//! Record streams for protolog
//!
//! This crate reads and writes records over caller-supplied byte streams:
//! - [`TypedWriter`]: every record carries the same type ID
//! - [`MultiTypedWriter`]: type ID chosen per record
//! - [`Reader`]: pull-style, one record per call, clean end reported as
//!   [`ReadOutcome::EndOfStream`]
//! - [`Scanner`]: `scan()` / accessor loop that stops at the first error or
//!   the end of the stream
//!
//! Streams are never opened or closed here. Any `std::io::Read` or
//! `std::io::Write` works, including `&mut` references to one.
//!
//! All operations block on the underlying stream. Instances hold a reusable
//! buffer and the stream position, so they take `&mut self` and are not
//! meant to be shared between threads without external locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod codec;
mod io;
pub mod reader;
pub mod scanner;
pub mod writer;

pub use protolog_core::{Error, ReadOutcome, ReaderOptions, Record, RecordRef, Result};
pub use reader::{Reader, Records};
pub use scanner::{ScanState, Scanner};
pub use writer::{MultiTypedWriter, TypedWriter};
