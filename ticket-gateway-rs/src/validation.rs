//! Ticket Gateway Input Validation
//!
//! Request validation for the ticket gateway, serving as the first line of
//! defense against malformed inputs. Produces field-level error reports so
//! that the categorization engine only ever sees well-formed tickets.

use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde_json::Value;

use categorization_engine::Severity;

/// Default maximum request payload size (1MB)
pub const MAX_PAYLOAD_SIZE: usize = 1024 * 1024;

/// Error response for validation failures
#[derive(Debug, serde::Serialize)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub code: u16,
    pub details: Option<Vec<String>>,
}

/// Validation error for ticket requests
#[derive(Debug, thiserror::Error)]
pub enum ApiValidationError {
    #[error("Invalid request format: {0}")]
    InvalidFormat(String),

    #[error("Content type must be {0}")]
    ContentType(String),

    #[error("Request payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Ticket validation failed")]
    Ticket { details: Vec<String> },
}

impl ApiValidationError {
    /// Convert to HTTP status code and error response
    pub fn to_response(&self) -> (StatusCode, Json<ValidationErrorResponse>) {
        let (status, code, details) = match self {
            Self::InvalidFormat(_) => (StatusCode::BAD_REQUEST, 400, None),
            Self::ContentType(_) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, 415, None),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, 413, None),
            Self::Ticket { details } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                422,
                Some(details.clone()),
            ),
        };

        (
            status,
            Json(ValidationErrorResponse {
                error: self.to_string(),
                code,
                details,
            }),
        )
    }
}

/// Validate the Content-Type header
pub fn validate_content_type(headers: &HeaderMap, expected: &str) -> Result<(), ApiValidationError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if !content_type.starts_with(expected) {
        return Err(ApiValidationError::ContentType(format!(
            "Expected content type '{}', got '{}'",
            expected, content_type
        )));
    }

    Ok(())
}

/// Parse a request body into JSON, enforcing the payload size limit
pub fn sanitize_json_input(json_str: &str) -> Result<Value, ApiValidationError> {
    if json_str.len() > MAX_PAYLOAD_SIZE {
        return Err(ApiValidationError::PayloadTooLarge(format!(
            "Payload size ({} bytes) exceeds maximum allowed size ({} bytes)",
            json_str.len(),
            MAX_PAYLOAD_SIZE
        )));
    }

    serde_json::from_str::<Value>(json_str.trim())
        .map_err(|e| ApiValidationError::InvalidFormat(format!("Invalid JSON: {}", e)))
}

/// Validate a categorize request body field by field.
///
/// Collects every problem instead of stopping at the first, so a client gets
/// one complete report per bad request.
pub fn validate_ticket_request(payload: &Value) -> Result<(), ApiValidationError> {
    let obj = match payload.as_object() {
        Some(obj) => obj,
        None => {
            return Err(ApiValidationError::Ticket {
                details: vec!["body: expected a JSON object".to_string()],
            });
        }
    };

    let mut details = Vec::new();

    match obj.get("channel") {
        None => details.push("channel: field is required".to_string()),
        Some(Value::String(_)) => {}
        Some(_) => details.push("channel: expected a string".to_string()),
    }

    match obj.get("severity") {
        None => details.push("severity: field is required".to_string()),
        Some(Value::String(s)) => {
            if let Err(e) = s.parse::<Severity>() {
                details.push(format!("severity: {}", e));
            }
        }
        Some(_) => details.push("severity: expected a string".to_string()),
    }

    match obj.get("summary") {
        None => details.push("summary: field is required".to_string()),
        Some(Value::String(_)) => {}
        Some(_) => details.push("summary: expected a string".to_string()),
    }

    if details.is_empty() {
        Ok(())
    } else {
        Err(ApiValidationError::Ticket { details })
    }
}

/// Generate middleware config for payload limits
pub fn payload_limit_config() -> tower_http::limit::RequestBodyLimitLayer {
    tower_http::limit::RequestBodyLimitLayer::new(MAX_PAYLOAD_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use serde_json::json;

    #[test]
    fn test_validate_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        assert!(validate_content_type(&headers, "application/json").is_ok());
        assert!(validate_content_type(&headers, "application/xml").is_err());
        assert!(validate_content_type(&HeaderMap::new(), "application/json").is_err());
    }

    #[test]
    fn test_content_type_accepts_charset_suffix() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        assert!(validate_content_type(&headers, "application/json").is_ok());
    }

    #[test]
    fn test_sanitize_json_input() {
        assert!(sanitize_json_input(r#"{"channel": "email"}"#).is_ok());
        assert!(sanitize_json_input(r#"{"channel": "email""#).is_err());

        let oversized = "x".repeat(MAX_PAYLOAD_SIZE + 1);
        match sanitize_json_input(&oversized) {
            Err(ApiValidationError::PayloadTooLarge(_)) => {}
            other => panic!("expected PayloadTooLarge, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_validate_ticket_request_accepts_valid_ticket() {
        let payload = json!({
            "channel": "email",
            "severity": "high",
            "summary": "database error"
        });
        assert!(validate_ticket_request(&payload).is_ok());
    }

    #[test]
    fn test_validate_ticket_request_reports_all_missing_fields() {
        let err = validate_ticket_request(&json!({})).unwrap_err();
        match err {
            ApiValidationError::Ticket { details } => {
                assert_eq!(details.len(), 3);
                assert!(details.iter().any(|d| d.starts_with("channel:")));
                assert!(details.iter().any(|d| d.starts_with("severity:")));
                assert!(details.iter().any(|d| d.starts_with("summary:")));
            }
            other => panic!("expected Ticket error, got {}", other),
        }
    }

    #[test]
    fn test_validate_ticket_request_rejects_unknown_severity() {
        let payload = json!({
            "channel": "email",
            "severity": "urgent",
            "summary": "help"
        });
        let err = validate_ticket_request(&payload).unwrap_err();
        match err {
            ApiValidationError::Ticket { details } => {
                assert_eq!(details.len(), 1);
                assert!(details[0].contains("severity"));
                assert!(details[0].contains("'urgent'"));
            }
            other => panic!("expected Ticket error, got {}", other),
        }
    }

    #[test]
    fn test_validate_ticket_request_rejects_wrong_field_types() {
        let payload = json!({
            "channel": 7,
            "severity": "low",
            "summary": ["not", "a", "string"]
        });
        let err = validate_ticket_request(&payload).unwrap_err();
        match err {
            ApiValidationError::Ticket { details } => {
                assert_eq!(details.len(), 2);
            }
            other => panic!("expected Ticket error, got {}", other),
        }
    }

    #[test]
    fn test_validate_ticket_request_rejects_non_object_body() {
        assert!(validate_ticket_request(&json!("a string")).is_err());
        assert!(validate_ticket_request(&json!([1, 2, 3])).is_err());
    }
}
