//! recordlog - a minimal append-only record log service.
//!
//! The log owns an ordered sequence of records and assigns each appended
//! record a monotonically increasing offset, starting at 0 with no gaps.
//! Records are immutable once appended; the only operations are `append`
//! and point lookup by offset.
//!
//! # Architecture
//!
//! The core is [`RecordLog`], an in-memory sequence guarded by a
//! reader/writer lock: appends take exclusive access for the length-read,
//! offset assignment, and insert; reads share access and only ever observe
//! fully appended records. The optional `http-server` feature adds a JSON
//! HTTP boundary that maps log failures to status codes.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use recordlog::{Record, RecordLog};
//!
//! let log = RecordLog::new();
//!
//! // Append a record; the log assigns the offset
//! let offset = log.append(Record {
//!     value: Bytes::from("hello"),
//!     offset: 0,
//! });
//! assert_eq!(offset, 0);
//!
//! // Read it back by offset
//! let record = log.read(offset).unwrap();
//! assert_eq!(record.value, Bytes::from("hello"));
//!
//! // Offsets past the end fail with a distinct error
//! assert!(log.read(1).is_err());
//! ```

mod error;
mod log;
mod model;
#[cfg(feature = "http-server")]
pub mod server;

pub use error::{Error, Result};
pub use log::RecordLog;
pub use model::{Offset, Record};
