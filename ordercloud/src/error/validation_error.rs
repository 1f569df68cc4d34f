//! Request encoding and response decoding errors.

use thiserror::Error;

/// Errors while converting between typed models and JSON.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A successful response body could not be parsed into the expected type.
    #[error("JSON parse error: {0}")]
    JsonParse(#[source] serde_json::Error),

    /// A request body could not be serialized.
    #[error("JSON serialize error: {0}")]
    JsonSerialize(#[source] serde_json::Error),
}

impl ValidationError {
    /// Returns `true` if this error came from decoding a response.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}
