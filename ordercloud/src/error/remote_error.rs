//! Domain errors: the API answered with a non-success status.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single entry from the `Errors` array of an OrderCloud error body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorDetail {
    /// Machine-readable code, e.g. `IdExists` or `NotFound`.
    #[serde(default)]
    pub error_code: String,
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Extra context the API attached to the error, if any.
    #[serde(default)]
    pub data: Option<Value>,
}

/// The remote endpoint responded with a non-2xx status.
///
/// Carries the status code, the response body (parsed as JSON when possible,
/// otherwise kept as a JSON string) and the platform's structured error list.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::error::RemoteError;
///
/// let body = br#"{"Errors":[{"ErrorCode":"IdExists","Message":"Conflict"}]}"#;
/// let err = RemoteError::from_response(409, body);
///
/// assert_eq!(err.status(), 409);
/// assert!(err.is_conflict());
/// assert_eq!(err.error_code(), Some("IdExists"));
/// assert_eq!(err.message(), Some("Conflict"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteError {
    status: u16,
    body: Value,
    errors: Vec<ErrorDetail>,
}

impl RemoteError {
    /// Builds a domain error from a failed response's status and raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let body = match serde_json::from_slice::<Value>(body) {
            Ok(value) => value,
            Err(_) if body.is_empty() => Value::Null,
            Err(_) => Value::String(String::from_utf8_lossy(body).into_owned()),
        };

        let errors = body
            .get("Errors")
            .cloned()
            .and_then(|errors| serde_json::from_value::<Vec<ErrorDetail>>(errors).ok())
            .unwrap_or_default();

        Self {
            status,
            body,
            errors,
        }
    }

    /// HTTP status code returned by the API.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Response body as returned by the API.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Structured errors from the body's `Errors` array.
    pub fn errors(&self) -> &[ErrorDetail] {
        &self.errors
    }

    /// Code of the first reported error.
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().map(|e| e.error_code.as_str())
    }

    /// Message of the first reported error, falling back to a top-level
    /// `Message` field or a plain-text body.
    pub fn message(&self) -> Option<&str> {
        if let Some(first) = self.errors.first() {
            return Some(first.message.as_str());
        }
        match &self.body {
            Value::String(text) if !text.is_empty() => Some(text.as_str()),
            other => other.get("Message").and_then(Value::as_str),
        }
    }

    /// Returns `true` for 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }

    /// Returns `true` for 403 responses.
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// Returns `true` for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for 409 responses.
    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.error_code(), self.message()) {
            (Some(code), Some(message)) => {
                write!(f, "OrderCloud HTTP {}: {code}: {message}", self.status)
            }
            (None, Some(message)) => write!(f, "OrderCloud HTTP {}: {message}", self.status),
            _ => write!(f, "OrderCloud HTTP {}", self.status),
        }
    }
}

impl std::error::Error for RemoteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_platform_error_list() {
        let body = br#"{"Errors":[{"ErrorCode":"NotFound","Message":"Order not found","Data":{"ObjectType":"Order","ObjectID":"abc"}}]}"#;
        let err = RemoteError::from_response(404, body);

        assert!(err.is_not_found());
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.error_code(), Some("NotFound"));
        assert_eq!(err.errors()[0].data.as_ref().unwrap()["ObjectID"], "abc");
        assert_eq!(
            err.to_string(),
            "OrderCloud HTTP 404: NotFound: Order not found"
        );
    }

    #[test]
    fn keeps_top_level_message_bodies() {
        let err = RemoteError::from_response(409, br#"{"Message":"Conflict"}"#);
        assert!(err.is_conflict());
        assert!(err.errors().is_empty());
        assert_eq!(err.error_code(), None);
        assert_eq!(err.message(), Some("Conflict"));
        assert_eq!(err.body()["Message"], "Conflict");
    }

    #[test]
    fn keeps_non_json_bodies_as_text() {
        let err = RemoteError::from_response(502, b"Bad Gateway");
        assert_eq!(err.body(), &Value::String("Bad Gateway".to_string()));
        assert_eq!(err.message(), Some("Bad Gateway"));
    }

    #[test]
    fn empty_body_is_null() {
        let err = RemoteError::from_response(401, b"");
        assert!(err.is_unauthorized());
        assert_eq!(err.body(), &Value::Null);
        assert_eq!(err.message(), None);
        assert_eq!(err.to_string(), "OrderCloud HTTP 401");
    }
}
