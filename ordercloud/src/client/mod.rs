//! HTTP client and request dispatch.
//!
//! [`OrderCloud`] owns the connection pool, configuration and token store.
//! [`Dispatch`] performs one call for one [`Operation`](crate::Operation).

mod dispatch;
mod executor;
mod options;

pub use dispatch::Dispatch;
pub use executor::{OrderCloud, OrderCloudBuilder};
pub use options::RequestOptions;
