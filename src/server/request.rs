//! HTTP request types for the log server.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as};

use crate::model::{Offset, Record};
use crate::Error;

/// Wire representation of a record.
///
/// Payloads travel base64-encoded in JSON. The `offset` field is optional on
/// input (the log assigns it) and always set on output.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    #[serde_as(as = "Base64")]
    pub value: Bytes,
    #[serde(default)]
    pub offset: Offset,
}

impl From<WireRecord> for Record {
    fn from(wire: WireRecord) -> Self {
        Record {
            value: wire.value,
            offset: wire.offset,
        }
    }
}

impl From<Record> for WireRecord {
    fn from(record: Record) -> Self {
        WireRecord {
            value: record.value,
            offset: record.offset,
        }
    }
}

/// Request body for POST /api/v1/log/append.
///
/// Carries the single record the caller wants appended under the `record`
/// key. Any caller-supplied offset inside the record is ignored.
#[derive(Debug, Deserialize)]
pub struct AppendRequest {
    pub record: WireRecord,
}

impl AppendRequest {
    /// Parse an append request from a raw JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|e| Error::InvalidInput(format!("Invalid JSON: {}", e)))
    }
}

/// Request body for GET /api/v1/log/read.
///
/// Carries the offset to look up under the `offset` key.
#[derive(Debug, Deserialize)]
pub struct ReadRequest {
    pub offset: Offset,
}

impl ReadRequest {
    /// Parse a read request from a raw JSON body.
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|e| Error::InvalidInput(format!("Invalid JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_append_request_from_json() {
        // given - base64 encoded payload: "hello" -> "aGVsbG8="
        let json = br#"{"record": {"value": "aGVsbG8="}}"#;

        // when
        let request = AppendRequest::from_json(json).unwrap();

        // then
        assert_eq!(request.record.value, Bytes::from("hello"));
        assert_eq!(request.record.offset, 0);
    }

    #[test]
    fn should_accept_caller_supplied_offset() {
        // given - the offset is carried through parsing; the log overwrites it
        let json = br#"{"record": {"value": "aGVsbG8=", "offset": 42}}"#;

        // when
        let request = AppendRequest::from_json(json).unwrap();

        // then
        assert_eq!(request.record.offset, 42);
    }

    #[test]
    fn should_return_error_for_missing_record() {
        // given
        let json = br#"{"offset": 3}"#;

        // when
        let result = AppendRequest::from_json(json);

        // then
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid JSON"));
    }

    #[test]
    fn should_return_error_for_invalid_base64_payload() {
        // given
        let json = br#"{"record": {"value": "not base64!!"}}"#;

        // when
        let result = AppendRequest::from_json(json);

        // then
        assert!(result.is_err());
    }

    #[test]
    fn should_return_error_for_invalid_json() {
        // given
        let body = b"not valid json";

        // when
        let result = AppendRequest::from_json(body);

        // then
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid JSON"));
    }

    #[test]
    fn should_parse_read_request() {
        // given
        let json = br#"{"offset": 7}"#;

        // when
        let request = ReadRequest::from_json(json).unwrap();

        // then
        assert_eq!(request.offset, 7);
    }

    #[test]
    fn should_return_error_for_missing_offset() {
        // given
        let json = br#"{}"#;

        // when
        let result = ReadRequest::from_json(json);

        // then
        assert!(result.is_err());
    }

    #[test]
    fn should_return_error_for_negative_offset() {
        // given - offsets are unsigned
        let json = br#"{"offset": -1}"#;

        // when
        let result = ReadRequest::from_json(json);

        // then
        assert!(result.is_err());
    }

    #[test]
    fn should_convert_wire_record_to_model() {
        // given
        let wire = WireRecord {
            value: Bytes::from("payload"),
            offset: 3,
        };

        // when
        let record: Record = wire.into();

        // then
        assert_eq!(record.value, Bytes::from("payload"));
        assert_eq!(record.offset, 3);
    }
}
