//! Async, strongly-typed client for the OrderCloud commerce REST API.
//!
//! Resources (orders, suppliers, message senders, OpenID Connect
//! configurations) are exposed as façades borrowed from an [`OrderCloud`]
//! client. Every façade method sends one HTTP request and returns a typed
//! model or an [`ApiError`].
//!
//! ## Features
//!
//! - **Scoped impersonation**: `as_impersonated()` returns a façade that
//!   sends the impersonation token; other façades are unaffected
//! - **List encoding**: search, sort, paging and arbitrary field filters
//!   through [`ListOptions`](query::ListOptions)
//! - **Read and write views**: full models for responses, all-optional
//!   `Partial*` models for request bodies
//! - **Layered errors**: API rejections ([`RemoteError`](error::RemoteError))
//!   are kept apart from transport failures ([`ClientError`](error::ClientError))
//! - **Tracing**: each request runs in an `ordercloud_request` span
//!
//! ## Example
//!
//! ```rust,ignore
//! use ordercloud::models::OrderDirection;
//! use ordercloud::query::{ListOptions, OrderListOptions};
//! use ordercloud::{OrderCloud, RequestOptions};
//!
//! let client = OrderCloud::builder()
//!     .access_token(std::env::var("ORDERCLOUD_ACCESS_TOKEN")?)
//!     .build()?;
//! let opts = RequestOptions::default();
//!
//! let open = OrderListOptions::from(
//!     ListOptions::new().filter("Status", "Open").page_size(50),
//! );
//! let page = client.orders().list(OrderDirection::Incoming, &open, &opts).await?;
//! for order in page.items {
//!     println!("{} {}", order.id, order.total);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod models;
pub mod operation;
pub mod prelude;
pub mod query;
pub mod resources;
pub mod response;

// Re-exports for convenience
pub use auth::{TokenScope, Tokens};
pub use client::{Dispatch, OrderCloud, OrderCloudBuilder, RequestOptions};
pub use config::SdkConfig;
pub use error::{ApiError, AuthError, ClientError, ConfigError, RemoteError, ValidationError};
pub use method::RestMethod;
pub use operation::Operation;
