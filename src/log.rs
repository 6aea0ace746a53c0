//! Core log implementation with append and read APIs.
//!
//! This module provides the [`RecordLog`] struct, the primary entry point for
//! storing and retrieving records. It exposes the write operation
//! ([`append`]) and the point-lookup read operation ([`read`]).
//!
//! [`append`]: RecordLog::append
//! [`read`]: RecordLog::read

use std::sync::RwLock;

use crate::error::{Error, Result};
use crate::model::{Offset, Record};

/// An in-memory append-only log of records.
///
/// The log owns an ordered sequence of records where the index is the offset.
/// Offsets are assigned in strictly increasing order starting at 0, with no
/// gaps, in the order appends acquire the write lock. Records are never
/// updated or removed once stored.
///
/// # Thread Safety
///
/// `RecordLog` is designed to be shared across threads. All methods take
/// `&self`; the record sequence is guarded by a reader/writer lock, so
/// appends are exclusive while reads may proceed concurrently with each
/// other. A read never observes a partially appended record.
///
/// # Example
///
/// ```
/// use bytes::Bytes;
/// use recordlog::{Record, RecordLog};
///
/// let log = RecordLog::new();
///
/// let offset = log.append(Record {
///     value: Bytes::from("hello"),
///     offset: 0,
/// });
/// assert_eq!(offset, 0);
///
/// let record = log.read(offset).unwrap();
/// assert_eq!(record.value, Bytes::from("hello"));
/// ```
#[derive(Debug, Default)]
pub struct RecordLog {
    records: RwLock<Vec<Record>>,
}

impl RecordLog {
    /// Creates a new, empty log.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends a record to the log and returns its assigned offset.
    ///
    /// The record's `offset` field is overwritten with the position the
    /// record is stored at. The length read, the insert, and the offset
    /// assignment happen under the write lock as one indivisible step, so
    /// two concurrent appends never receive the same offset.
    ///
    /// Appending cannot fail: the log has no capacity limit and performs no
    /// duplicate detection.
    pub fn append(&self, mut record: Record) -> Offset {
        let mut records = self.records.write().unwrap();
        let offset = records.len() as Offset;
        record.offset = offset;
        records.push(record);
        offset
    }

    /// Reads the record stored at `offset`.
    ///
    /// Returns a clone of the record, observing all appends that completed
    /// before this read acquired the lock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OffsetNotFound`] if `offset` has not been assigned,
    /// including any read against an empty log.
    pub fn read(&self, offset: Offset) -> Result<Record> {
        let records = self.records.read().unwrap();
        records
            .get(offset as usize)
            .cloned()
            .ok_or(Error::OffsetNotFound(offset))
    }

    /// Returns the number of records in the log.
    ///
    /// Equal to the next offset that will be assigned.
    pub fn len(&self) -> u64 {
        self.records.read().unwrap().len() as u64
    }

    /// Returns `true` if no records have been appended.
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }
}
