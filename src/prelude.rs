//! Convenient imports for protolog.
//!
//! ```ignore
//! use protolog::prelude::*;
//!
//! let mut w = TypedWriter::new(7, Vec::new());
//! w.write(b"hello")?;
//! ```

// Writers
pub use crate::{MultiTypedWriter, TypedWriter};

// Readers
pub use crate::{ReadOutcome, Reader, ScanState, Scanner};

// Records and configuration
pub use crate::{Record, RecordRef, ReaderOptions};

// Error handling
pub use crate::{Error, Result};
