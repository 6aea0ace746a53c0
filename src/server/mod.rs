//! JSON HTTP server for the record log.
//!
//! The server is a thin adapter over [`RecordLog`](crate::RecordLog): it
//! decodes request bodies, invokes the log, and encodes the result back to
//! the caller. `OffsetNotFound` becomes 404, a malformed body becomes 400,
//! and anything else becomes 500.

mod config;
pub mod error;
pub mod handlers;
mod http;
pub mod metrics;
mod middleware;
pub mod request;
pub mod response;

pub use config::{CliArgs, ServerConfig};
pub use http::LogServer;
