//! Typed models for the resources this client covers.
//!
//! Primary resources come in two views generated from one declaration: the
//! read view (`Order`) returned by the API and the write view
//! (`PartialOrder`) sent as create/update/patch bodies. Models with extended
//! properties are generic over `Xp`, defaulting to `serde_json::Value`.

#[macro_use]
mod macros;

mod enums;
mod list_page;
mod message_sender;
mod open_id_connect;
mod order;
mod supplier;

pub use enums::{ApprovalStatus, Environment, MessageType, OrderDirection, OrderStatus, PartyType};
pub use list_page::{ListPage, Meta};
pub use message_sender::{
    MessageCCListenerAssignment, MessageSender, MessageSenderAssignment, MessageSenderOrderEventBody,
    MessageSenderPayload, OrderSubmitPayload, PartialMessageSender,
};
pub use open_id_connect::{OpenIdConnect, PartialOpenIdConnect};
pub use order::{
    Address, Order, OrderApproval, OrderApprovalInfo, OrderPromotion, OrderSplitResult, PartialAddress,
    PartialOrder, PartialShipment, PartialUser, Shipment, User,
};
pub use supplier::{PartialSupplier, Supplier};
