//! Decoded records
//!
//! Readers hand out [`RecordRef`]s that borrow the reader's reusable payload
//! buffer. The borrow ends at the next read, which the compiler enforces:
//! a `RecordRef` cannot outlive the `&mut` call that produced it. Callers that
//! need to keep a record copy it with [`RecordRef::to_record`].

/// A record borrowed from a reader's internal buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordRef<'a> {
    /// Caller-defined record type
    pub type_id: u16,
    /// Payload bytes, exactly as long as the header declared
    pub payload: &'a [u8],
}

impl<'a> RecordRef<'a> {
    /// Copy into an owned [`Record`].
    pub fn to_record(&self) -> Record {
        Record {
            type_id: self.type_id,
            payload: self.payload.to_vec(),
        }
    }
}

/// An owned record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Record {
    /// Caller-defined record type
    pub type_id: u16,
    /// Payload bytes
    pub payload: Vec<u8>,
}

impl Record {
    /// Create a record.
    pub fn new(type_id: u16, payload: impl Into<Vec<u8>>) -> Self {
        Record {
            type_id,
            payload: payload.into(),
        }
    }

    /// Borrow as a [`RecordRef`].
    pub fn as_record_ref(&self) -> RecordRef<'_> {
        RecordRef {
            type_id: self.type_id,
            payload: &self.payload,
        }
    }
}

impl From<RecordRef<'_>> for Record {
    fn from(r: RecordRef<'_>) -> Self {
        r.to_record()
    }
}

/// Outcome of a successful pull-style read.
///
/// Fatal conditions travel in the `Err` side of the surrounding `Result`;
/// a clean end of stream is an ordinary outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome<'a> {
    /// A record was decoded and verified.
    Record(RecordRef<'a>),
    /// The stream ended on a record boundary.
    EndOfStream,
}

impl<'a> ReadOutcome<'a> {
    /// The record, if one was read.
    pub fn record(self) -> Option<RecordRef<'a>> {
        match self {
            ReadOutcome::Record(r) => Some(r),
            ReadOutcome::EndOfStream => None,
        }
    }

    /// Check for the end of stream.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, ReadOutcome::EndOfStream)
    }
}
