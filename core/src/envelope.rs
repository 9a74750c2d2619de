//! Response envelope handling.
//!
//! Every API answer is a JSON object with a `status` discriminator. `OK`
//! carries the payload in `result`; anything else carries a human-readable
//! `comment`. A missing field is reported by name.

use serde_json::Value;
use tracing::warn;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Status value of a successful call.
pub const STATUS_OK: &str = "OK";

/// Checks the envelope in `body` and returns the `result` payload.
pub fn check_envelope(body: &str) -> Result<Value, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    unwrap_envelope(value)
}

/// Like `check_envelope`, but reports a non-JSON body on a non-2xx status as
/// `HttpError` so proxy and gateway failures keep their status code.
pub fn check_response(response: HttpResponse) -> Result<Value, ApiError> {
    match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => unwrap_envelope(value),
        Err(_) if !(200..300).contains(&response.status) => Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        }),
        Err(e) => Err(ApiError::Deserialization(e.to_string())),
    }
}

fn unwrap_envelope(mut value: Value) -> Result<Value, ApiError> {
    let Some(envelope) = value.as_object_mut() else {
        warn!("response is not a JSON object");
        return Err(ApiError::missing_field("status"));
    };

    let status = match envelope.get("status") {
        Some(status) => status.clone(),
        None => {
            warn!("response has no status field");
            return Err(ApiError::missing_field("status"));
        }
    };

    if status.as_str() == Some(STATUS_OK) {
        return envelope
            .remove("result")
            .ok_or_else(|| ApiError::missing_field("result"));
    }

    match envelope.remove("comment") {
        Some(Value::String(comment)) => {
            warn!(%status, %comment, "request failed");
            Err(ApiError::Remote { comment })
        }
        Some(other) => {
            warn!(%status, comment = %other, "request failed");
            Err(ApiError::Remote {
                comment: other.to_string(),
            })
        }
        None => {
            warn!(%status, "failed response has no comment field");
            Err(ApiError::missing_field("comment"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_returns_result_verbatim() {
        let result = check_envelope(r#"{"status":"OK","result":[{"handle":"tourist"}]}"#).unwrap();
        assert_eq!(result, json!([{"handle": "tourist"}]));
    }

    #[test]
    fn ok_with_null_result_is_still_a_result() {
        let result = check_envelope(r#"{"status":"OK","result":null}"#).unwrap();
        assert!(result.is_null());
    }

    #[test]
    fn failed_carries_comment() {
        let err = check_envelope(r#"{"status":"FAILED","comment":"handles: User with handle nobody not found"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), "handles: User with handle nobody not found");
        assert!(matches!(err, ApiError::Remote { .. }));
    }

    #[test]
    fn missing_status() {
        let err = check_envelope(r#"{"result":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { field } if field == "status"));
    }

    #[test]
    fn non_object_is_missing_status() {
        let err = check_envelope("[1,2,3]").unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { field } if field == "status"));
    }

    #[test]
    fn missing_comment() {
        let err = check_envelope(r#"{"status":"FAILED"}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { field } if field == "comment"));
    }

    #[test]
    fn missing_result() {
        let err = check_envelope(r#"{"status":"OK"}"#).unwrap_err();
        assert!(matches!(err, ApiError::MalformedResponse { field } if field == "result"));
    }

    #[test]
    fn not_json() {
        let err = check_envelope("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn failed_envelope_on_http_400_is_remote() {
        let response = HttpResponse {
            status: 400,
            body: r#"{"status":"FAILED","comment":"count: Field should contain only digits"}"#
                .to_string(),
        };
        let err = check_response(response).unwrap_err();
        assert_eq!(err.to_string(), "count: Field should contain only digits");
    }

    #[test]
    fn html_on_http_503_is_http_error() {
        let response = HttpResponse {
            status: 503,
            body: "<html>Service Unavailable</html>".to_string(),
        };
        let err = check_response(response).unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 503, .. }));
    }

    #[test]
    fn garbage_on_http_200_is_deserialization_error() {
        let response = HttpResponse {
            status: 200,
            body: "garbage".to_string(),
        };
        let err = check_response(response).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
