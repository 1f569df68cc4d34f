//! Layered error types for the OrderCloud client.
//!
//! The hierarchy separates "the server rejected this" from "the server was
//! never reached":
//! - [`ApiError`] - Top-level error returned by every façade method
//! - [`RemoteError`] - The API answered with a non-success status (domain error)
//! - [`ClientError`] - No response was received (network, timeout, cancellation)
//! - [`ValidationError`] - Request body encoding or response decoding failures
//! - [`AuthError`] - Token selection failures detected before dispatch
//! - [`ConfigError`] - Client configuration and path template errors
//!
//! [`DispatchError`] is the raw failure produced by the dispatcher; façades
//! turn it into an [`ApiError`] with [`ApiError::normalize`].

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod dispatch_error;
mod remote_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use dispatch_error::DispatchError;
pub use remote_error::{ErrorDetail, RemoteError};
pub use validation_error::ValidationError;
