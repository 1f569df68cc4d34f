//! The request dispatcher.

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, instrument, warn, Span};

use crate::auth::TokenScope;
use crate::error::{AuthError, ClientError, DispatchError, ValidationError};
use crate::operation::Operation;
use crate::query::{EncodeQuery, QueryParams};
use crate::response::ResponseFormat;

use super::{OrderCloud, RequestOptions};

/// One pending call: an operation plus its path parameters, query and body.
///
/// Created by [`OrderCloud::dispatch`]; nothing is sent until
/// [`send`](Self::send). Errors are raw [`DispatchError`]s; callers that want
/// the public error surface pass them through
/// [`ApiError::normalize`](crate::ApiError::normalize).
///
/// ## Examples
///
/// ```rust,ignore
/// use ordercloud::response::JsonFormat;
/// use ordercloud::{ApiError, TokenScope};
///
/// let supplier: Supplier = client
///     .dispatch(&ops::GET, TokenScope::Normal)
///     .path("supplierID", "acme")
///     .send::<JsonFormat<Supplier>>(&RequestOptions::default())
///     .await
///     .map_err(ApiError::normalize)?;
/// ```
#[must_use = "a dispatch does nothing until `send` is awaited"]
#[derive(Debug)]
pub struct Dispatch<'a> {
    client: &'a OrderCloud,
    operation: &'static Operation,
    scope: TokenScope,
    path_params: Vec<(&'static str, String)>,
    query: QueryParams,
    body: Option<Result<Vec<u8>, ValidationError>>,
}

impl<'a> Dispatch<'a> {
    pub(crate) fn new(client: &'a OrderCloud, operation: &'static Operation, scope: TokenScope) -> Self {
        Self {
            client,
            operation,
            scope,
            path_params: Vec::new(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Supplies a value for a `{name}` placeholder in the path template.
    pub fn path(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.path_params.push((name, value.into()));
        self
    }

    /// Adds query parameters. Later values replace earlier ones.
    pub fn query(mut self, params: &impl EncodeQuery) -> Self {
        for (key, value) in params.encode_query().iter() {
            self.query.insert(key, value.clone());
        }
        self
    }

    /// Sets the JSON request body.
    ///
    /// Serialization failures are reported by [`send`](Self::send).
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Self {
        debug_assert!(
            self.operation.method().has_body(),
            "{} does not take a request body",
            self.operation.id()
        );
        self.body = Some(serde_json::to_vec(body).map_err(ValidationError::JsonSerialize));
        self
    }

    /// Sends the request and parses a successful response with `F`.
    ///
    /// Exactly one HTTP request is made. No retries, no pagination.
    ///
    /// ## Errors
    ///
    /// - [`DispatchError::Auth`] if the scope needs a token that is not stored
    /// - [`DispatchError::Config`] if the URL cannot be built
    /// - [`DispatchError::Validation`] if the body cannot be serialized or a
    ///   successful response cannot be parsed
    /// - [`DispatchError::Transport`] if no response arrives or the call is
    ///   cancelled
    /// - [`DispatchError::Response`] for any non-2xx status
    #[instrument(
        name = "ordercloud_request",
        skip(self, options),
        fields(
            operation = self.operation.id(),
            http.method = %self.operation.method(),
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn send<F>(self, options: &RequestOptions) -> Result<F::Output, DispatchError>
    where
        F: ResponseFormat,
    {
        let Self {
            client,
            operation,
            scope,
            path_params,
            query,
            body,
        } = self;

        let token = client
            .tokens()
            .resolve(scope, options.access_token.as_deref(), operation.id())?;

        let params: Vec<(&str, &str)> = path_params
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        let url = client.endpoint_url(operation, &params, &query)?;
        Span::current().record("http.url", url.as_str());

        let body = body.transpose()?;

        let mut request = client
            .http()
            .request(operation.method().to_reqwest(), url)
            .header(ACCEPT, F::content_type());

        if let Some(token) = token {
            let value = HeaderValue::try_from(format!("Bearer {token}"))
                .map_err(|_| AuthError::InvalidToken)?;
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        debug!(
            impersonating = scope.is_impersonating(),
            "dispatching request"
        );

        let exchange = async {
            let response = request.send().await.map_err(ClientError::Request)?;
            let status = response.status();
            let bytes = response.bytes().await.map_err(ClientError::Request)?;
            Ok::<_, ClientError>((status, bytes))
        };

        let (status, bytes) = match &options.cancel {
            Some(cancel) => tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    debug!("request cancelled");
                    return Err(ClientError::Cancelled.into());
                }
                result = exchange => result?,
            },
            None => exchange.await?,
        };

        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            warn!(status = status_code, "request rejected by API");

            return Err(DispatchError::Response {
                status: status_code,
                body: bytes,
            });
        }

        Span::current().record("otel.status_code", "OK");
        debug!(status = status_code, bytes = bytes.len(), "response received");

        Ok(F::parse(bytes).await?)
    }
}
