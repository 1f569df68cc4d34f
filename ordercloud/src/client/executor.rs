//! Client construction and shared state.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::auth::{TokenScope, Tokens};
use crate::config::{self, SdkConfig};
use crate::error::{ApiError, ClientError, ConfigError};
use crate::operation::Operation;
use crate::query::QueryParams;

use super::Dispatch;

/// Builder for configuring an [`OrderCloud`] client.
#[derive(Debug, Default)]
pub struct OrderCloudBuilder {
    config: SdkConfig,
    default_headers: HeaderMap,
    tokens: Tokens,
}

impl OrderCloudBuilder {
    /// Starts from an existing configuration.
    pub fn config(mut self, config: SdkConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the API host, e.g. `https://sandboxapi.ordercloud.io`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_api_url = base_url.into();
        self
    }

    /// Sets the API version path segment (default `v1`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = version.into();
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = OrderCloud::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.config.client_id = Some(client_id.into());
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ConfigError> {
        let name = HeaderName::try_from(name.as_ref()).map_err(|e| ConfigError::InvalidHeader {
            message: format!("invalid header name: {e}"),
        })?;
        let value =
            HeaderValue::try_from(value.as_ref()).map_err(|e| ConfigError::InvalidHeader {
                message: format!("invalid header value: {e}"),
            })?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Seeds the stored access token.
    pub fn access_token(self, token: impl Into<String>) -> Self {
        self.tokens.set_access_token(token);
        self
    }

    /// Seeds the stored impersonation token.
    pub fn impersonation_token(self, token: impl Into<String>) -> Self {
        self.tokens.set_impersonation_token(token);
        self
    }

    /// Builds the [`OrderCloud`] client.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<OrderCloud, ApiError> {
        let base_url = config::parse_base_url(self.config.base_api_url.trim())?;
        let api_version = self.config.api_version.trim_matches('/').to_string();
        if api_version.is_empty() {
            return Err(ConfigError::missing_field("api_version").into());
        }

        let http = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(OrderCloud {
            inner: Arc::new(Inner {
                http,
                base_url,
                api_version,
                config: self.config,
                tokens: self.tokens,
            }),
        })
    }
}

#[derive(Debug)]
struct Inner {
    http: reqwest::Client,
    base_url: Url,
    api_version: String,
    config: SdkConfig,
    tokens: Tokens,
}

/// Async client for the OrderCloud API.
///
/// Cloning is cheap; clones share one connection pool, configuration and
/// token store. Resource façades are borrowed from the client:
///
/// ```rust,ignore
/// use ordercloud::{OrderCloud, RequestOptions};
/// use ordercloud::models::OrderDirection;
///
/// let client = OrderCloud::builder().access_token("token").build()?;
/// let order = client
///     .orders()
///     .get(OrderDirection::Incoming, "order123", &RequestOptions::default())
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderCloud {
    inner: Arc<Inner>,
}

impl OrderCloud {
    pub fn builder() -> OrderCloudBuilder {
        OrderCloudBuilder::default()
    }

    /// Creates a client for the production API with no stored tokens.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        Self::builder().build()
    }

    /// Creates a client from `ORDERCLOUD_*` environment variables, including
    /// `ORDERCLOUD_ACCESS_TOKEN` and `ORDERCLOUD_IMPERSONATION_TOKEN`.
    ///
    /// ## Errors
    ///
    /// Returns an error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ApiError> {
        let mut builder = Self::builder().config(SdkConfig::from_env()?);
        if let Some(token) = std::env::var(config::ENV_ACCESS_TOKEN).ok().filter(|t| !t.is_empty()) {
            builder = builder.access_token(token);
        }
        if let Some(token) = std::env::var(config::ENV_IMPERSONATION_TOKEN)
            .ok()
            .filter(|t| !t.is_empty())
        {
            builder = builder.impersonation_token(token);
        }
        builder.build()
    }

    pub fn config(&self) -> &SdkConfig {
        &self.inner.config
    }

    /// Runtime token store.
    pub fn tokens(&self) -> &Tokens {
        &self.inner.tokens
    }

    /// Starts a call for `operation` using the tokens of `scope`.
    ///
    /// Façade methods are built on this; it is public so operations without a
    /// façade method can still be called.
    pub fn dispatch(&self, operation: &'static Operation, scope: TokenScope) -> Dispatch<'_> {
        Dispatch::new(self, operation, scope)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }

    /// Builds `{base}/{version}{path}?{query}` for an operation.
    pub(crate) fn endpoint_url(
        &self,
        operation: &Operation,
        path_params: &[(&str, &str)],
        query: &QueryParams,
    ) -> Result<Url, ConfigError> {
        let segments = operation.render(path_params)?;

        let mut url = self.inner.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ConfigError::CannotBeABase {
                    url: self.inner.base_url.to_string(),
                })?;
            path.pop_if_empty();
            path.extend(self.inner.api_version.split('/').filter(|s| !s.is_empty()));
            path.extend(&segments);
        }

        let pairs = query.to_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;

    const GET_ORDER: Operation =
        Operation::new("Orders.Get", RestMethod::Get, "/orders/{direction}/{orderID}");

    fn client(base: &str) -> OrderCloud {
        OrderCloud::builder().base_url(base).build().unwrap()
    }

    #[test]
    fn url_includes_version_and_encoded_segments() {
        let client = client("https://api.ordercloud.io");
        let url = client
            .endpoint_url(
                &GET_ORDER,
                &[("direction", "Incoming"), ("orderID", "a/b c")],
                &QueryParams::new(),
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.ordercloud.io/v1/orders/Incoming/a%2Fb%20c"
        );
    }

    #[test]
    fn dot_segments_never_reach_the_url() {
        let client = client("https://api.ordercloud.io");
        for id in ["..", ".", ""] {
            let err = client
                .endpoint_url(
                    &GET_ORDER,
                    &[("direction", "Incoming"), ("orderID", id)],
                    &QueryParams::new(),
                )
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidPathParam { .. }), "{id:?}: {err}");
        }
    }

    #[test]
    fn base_path_is_preserved() {
        let client = client("https://proxy.example.com/ordercloud/");
        let mut query = QueryParams::new();
        query.insert("page", 2u32);
        let url = client
            .endpoint_url(&GET_ORDER, &[("direction", "Outgoing"), ("orderID", "o1")], &query)
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://proxy.example.com/ordercloud/v1/orders/Outgoing/o1?page=2"
        );
    }

    #[test]
    fn build_rejects_bad_configuration() {
        let err = OrderCloud::builder().base_url("::nope").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::InvalidUrl(_))));

        let err = OrderCloud::builder().api_version("/").build().unwrap_err();
        assert!(matches!(err, ApiError::Config(ConfigError::MissingField { .. })));

        let err = OrderCloud::builder()
            .default_header("bad header", "x")
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHeader { .. }));
    }

    #[test]
    fn clones_share_tokens() {
        let client = OrderCloud::builder().access_token("a").build().unwrap();
        let clone = client.clone();
        clone.tokens().set_access_token("b");
        assert_eq!(client.tokens().access_token().as_deref(), Some("b"));
        assert_eq!(client.config().api_version, "v1");
    }
}
