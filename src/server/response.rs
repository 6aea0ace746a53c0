//! HTTP response types for the log server.

use axum::Json;
use serde::Serialize;

use super::request::WireRecord;
use crate::model::Offset;
use crate::{Error, Result};

/// Response body for POST /api/v1/log/append.
///
/// Tells the caller what offset the log stored the record under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppendResponse {
    pub offset: Offset,
}

/// Response body for GET /api/v1/log/read.
///
/// Carries the record the caller asked for, with its assigned offset set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadResponse {
    pub record: WireRecord,
}

/// Encode a response as JSON.
///
/// Serialization failure surfaces as [`Error::Encoding`] so the boundary can
/// report a server-side fault instead of panicking.
pub(super) fn to_json_response<T: Serialize>(response: &T) -> Result<Json<serde_json::Value>> {
    let value = serde_json::to_value(response)
        .map_err(|e| Error::Encoding(format!("Failed to encode response: {}", e)))?;
    Ok(Json(value))
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;

    #[test]
    fn should_serialize_append_response_with_offset_key() {
        // given
        let response = AppendResponse { offset: 3 };

        // when
        let json = serde_json::to_string(&response).unwrap();

        // then
        assert_eq!(json, r#"{"offset":3}"#);
    }

    #[test]
    fn should_serialize_read_response_with_base64_value() {
        // given - "hello" -> "aGVsbG8="
        let response = ReadResponse {
            record: WireRecord {
                value: Bytes::from("hello"),
                offset: 1,
            },
        };

        // when
        let json = serde_json::to_string(&response).unwrap();

        // then
        assert_eq!(json, r#"{"record":{"value":"aGVsbG8=","offset":1}}"#);
    }

    #[test]
    fn should_encode_response_to_json_value() {
        // given
        let response = AppendResponse { offset: 0 };

        // when
        let Json(value) = to_json_response(&response).unwrap();

        // then
        assert_eq!(value["offset"], 0);
    }
}
