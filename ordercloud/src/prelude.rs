//! Common imports.
//!
//! ```rust
//! use ordercloud::prelude::*;
//! ```

pub use crate::error::{ApiError, RemoteError};
pub use crate::models::{ListPage, OrderDirection};
pub use crate::query::{Filters, ListOptions, OrderListOptions, SortBy};
pub use crate::{OrderCloud, RequestOptions, TokenScope};
