//! Declarative operation descriptors.
//!
//! Each API operation is one `const` [`Operation`]: an identifier used in
//! tracing and errors, the HTTP verb, and a path template with `{param}`
//! placeholders. Façades hold tables of these and hand them to the
//! dispatcher.

use crate::error::ConfigError;
use crate::method::RestMethod;

/// A single REST operation of the OrderCloud API.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::{Operation, RestMethod};
///
/// const GET_ORDER: Operation =
///     Operation::new("Orders.Get", RestMethod::Get, "/orders/{direction}/{orderID}");
///
/// assert_eq!(GET_ORDER.path_params(), vec!["direction", "orderID"]);
///
/// let segments = GET_ORDER
///     .render(&[("direction", "Incoming"), ("orderID", "a/b")])
///     .unwrap();
/// assert_eq!(segments, vec!["orders", "Incoming", "a/b"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    id: &'static str,
    method: RestMethod,
    path: &'static str,
}

impl Operation {
    /// Declares an operation.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self { id, method, path }
    }

    /// Identifier in `Resource.Action` form.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// HTTP verb.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Path template relative to the API version root.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Placeholder names in the order they appear in the template.
    pub fn path_params(&self) -> Vec<&'static str> {
        let mut params = Vec::new();
        let mut rest = self.path;
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start + 1..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + 1 + len];
            if !name.is_empty() {
                params.push(name);
            }
            rest = &rest[start + 1 + len + 1..];
        }
        params
    }

    /// Substitutes path parameters and returns the unencoded path segments.
    ///
    /// Every value stays inside the segment its placeholder occupied, so an
    /// identifier containing `/` or `?` is never split. Encoding happens when
    /// the segments are appended to the request URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingPathParam`] if a placeholder has no value
    /// and [`ConfigError::InvalidPathParam`] if a value would render an empty,
    /// `.` or `..` segment.
    pub fn render(&self, params: &[(&str, &str)]) -> Result<Vec<String>, ConfigError> {
        self.path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.render_segment(segment, params))
            .collect()
    }

    fn render_segment(&self, segment: &str, params: &[(&str, &str)]) -> Result<String, ConfigError> {
        let mut rendered = String::with_capacity(segment.len());
        let mut rest = segment;
        let mut last_param = None;

        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start + 1..].find('}') else {
                break;
            };
            let name = &rest[start + 1..start + 1 + len];
            let value = params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| ConfigError::MissingPathParam {
                    operation: self.id,
                    param: name.to_string(),
                })?;

            rendered.push_str(&rest[..start]);
            rendered.push_str(value);
            last_param = Some((name, value));
            rest = &rest[start + 1 + len + 1..];
        }

        rendered.push_str(rest);

        // Empty and dot segments are dropped or resolved by URL normalization.
        if let Some((param, value)) = last_param {
            if matches!(rendered.as_str(), "" | "." | "..") {
                return Err(ConfigError::InvalidPathParam {
                    operation: self.id,
                    param: param.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(rendered)
    }
}
