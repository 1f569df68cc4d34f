//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration or operation descriptors.
///
/// These usually indicate a programmer error or a bad environment value.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL cannot have path segments appended (e.g. `mailto:`).
    #[error("Base URL cannot carry a path: {url}")]
    CannotBeABase {
        /// The offending URL.
        url: String,
    },

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A path template placeholder had no value.
    #[error("Operation {operation} is missing path parameter {{{param}}}")]
    MissingPathParam {
        /// Operation whose template was being rendered.
        operation: &'static str,
        /// Placeholder name without braces.
        param: String,
    },

    /// A path parameter rendered to a segment the URL would drop or collapse
    /// (empty, `.` or `..`).
    #[error("Operation {operation} has an invalid value {value:?} for path parameter {{{param}}}")]
    InvalidPathParam {
        /// Operation whose template was being rendered.
        operation: &'static str,
        /// Placeholder name without braces.
        param: String,
        /// The rejected value.
        value: String,
    },

    /// A timeout value could not be parsed.
    #[error("Invalid timeout value: {value}")]
    InvalidTimeout {
        /// The raw value that failed to parse.
        value: String,
    },

    /// A default header name or value is invalid.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header problem.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field() {
        let err = ConfigError::missing_field("base_api_url");
        assert_eq!(err.to_string(), "Missing required field: base_api_url");
    }

    #[test]
    fn missing_path_param_keeps_braces() {
        let err = ConfigError::MissingPathParam {
            operation: "Orders.Get",
            param: "orderID".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Operation Orders.Get is missing path parameter {orderID}"
        );
    }

    #[test]
    fn invalid_url() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err = ConfigError::from(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }
}
