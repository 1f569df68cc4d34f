//! Resource façades.
//!
//! Each façade is a `Copy` handle borrowed from the client. It carries the
//! [`TokenScope`] its calls use: handles from the client start in
//! [`TokenScope::Normal`], and `as_impersonated()` returns a new handle in
//! [`TokenScope::Impersonating`]. Handles are never mutated, so the scope
//! of one call can not leak into another.
//!
//! Every method sends exactly one request and converts failures with
//! [`ApiError::normalize`](crate::ApiError::normalize).

mod message_senders;
mod open_id_connects;
mod orders;
mod suppliers;

pub use message_senders::MessageSenders;
pub use open_id_connects::OpenIdConnects;
pub use orders::Orders;
pub use suppliers::Suppliers;

use crate::auth::TokenScope;
use crate::client::OrderCloud;

impl OrderCloud {
    /// Orders, in both directions.
    pub fn orders(&self) -> Orders<'_> {
        Orders::new(self, TokenScope::Normal)
    }

    /// Suppliers.
    pub fn suppliers(&self) -> Suppliers<'_> {
        Suppliers::new(self, TokenScope::Normal)
    }

    /// Message senders and their assignments.
    pub fn message_senders(&self) -> MessageSenders<'_> {
        MessageSenders::new(self, TokenScope::Normal)
    }

    /// OpenID Connect configurations.
    pub fn open_id_connects(&self) -> OpenIdConnects<'_> {
        OpenIdConnects::new(self, TokenScope::Normal)
    }
}
