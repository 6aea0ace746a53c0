//! Core data types for the record log.

use bytes::Bytes;

/// Offset of a record in the log.
///
/// Offsets are zero-based, monotonically increasing integers assigned to each
/// record at append time. The offset is the record's position in the log, so
/// the log can be read back as records `0..len`.
pub type Offset = u64;

/// A record stored in the log.
///
/// Records are the unit of data written to and read from the log. The payload
/// is an opaque byte sequence; the log does not interpret or validate it.
///
/// # Offset Assignment
///
/// The `offset` field is ignored on input: [`RecordLog::append`] overwrites
/// it with the position the record was stored at, and that offset is echoed
/// back to the caller. Once appended, a record's content and offset never
/// change.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use recordlog::Record;
///
/// let record = Record {
///     value: Bytes::from(r#"{"id": "123", "amount": 99.99}"#),
///     offset: 0,
/// };
/// ```
///
/// [`RecordLog::append`]: crate::RecordLog::append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The record payload.
    ///
    /// Values can contain any byte sequence.
    pub value: Bytes,

    /// The offset assigned to this record at append time.
    pub offset: Offset,
}
