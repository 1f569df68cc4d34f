//! HTTP verbs used by OrderCloud operations.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by OrderCloud API operations.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::RestMethod;
///
/// let method = RestMethod::Patch;
/// assert!(method.has_body());
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - list or fetch a resource.
    Get,
    /// HTTP POST - create a resource or trigger an action.
    Post,
    /// HTTP PUT - create or fully replace a resource.
    Put,
    /// HTTP PATCH - partially update a resource.
    Patch,
    /// HTTP DELETE - remove a resource.
    Delete,
}

impl RestMethod {
    /// Returns `true` if requests with this method may carry a JSON body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}
