//! Option structs for operations that take extra scalar query parameters.

use super::{EncodeQuery, ListOptions, QueryParams};
use crate::models::PartyType;

/// Options for listing orders.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::query::{EncodeQuery, ListOptions, OrderListOptions};
///
/// let options = OrderListOptions::new()
///     .buyer_id("buyer1")
///     .from_date("2024-01-01")
///     .list(ListOptions::new().page_size(5));
///
/// let query = options.encode_query();
/// assert!(query.contains_key("buyerID"));
/// assert!(query.contains_key("pageSize"));
/// assert!(!query.contains_key("supplierID"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListOptions {
    /// ID of the buyer.
    pub buyer_id: Option<String>,
    /// ID of the supplier.
    pub supplier_id: Option<String>,
    /// Lower bound of the order creation date range.
    pub from: Option<String>,
    /// Upper bound of the order creation date range.
    pub to: Option<String>,
    pub list: ListOptions,
}

impl OrderListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buyer_id(mut self, id: impl Into<String>) -> Self {
        self.buyer_id = Some(id.into());
        self
    }

    pub fn supplier_id(mut self, id: impl Into<String>) -> Self {
        self.supplier_id = Some(id.into());
        self
    }

    pub fn from_date(mut self, date: impl Into<String>) -> Self {
        self.from = Some(date.into());
        self
    }

    pub fn to_date(mut self, date: impl Into<String>) -> Self {
        self.to = Some(date.into());
        self
    }

    pub fn list(mut self, list: ListOptions) -> Self {
        self.list = list;
        self
    }
}

impl From<ListOptions> for OrderListOptions {
    fn from(list: ListOptions) -> Self {
        Self {
            list,
            ..Self::default()
        }
    }
}

impl EncodeQuery for OrderListOptions {
    fn encode_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("buyerID", self.buyer_id.clone());
        params.insert_opt("supplierID", self.supplier_id.clone());
        params.insert_opt("from", self.from.clone());
        params.insert_opt("to", self.to.clone());
        self.list.encode_into(&mut params);
        params
    }
}

/// Identifies the party an assignment applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentScope {
    pub buyer_id: Option<String>,
    pub user_id: Option<String>,
    pub user_group_id: Option<String>,
    pub supplier_id: Option<String>,
}

impl AssignmentScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buyer_id(mut self, id: impl Into<String>) -> Self {
        self.buyer_id = Some(id.into());
        self
    }

    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn user_group_id(mut self, id: impl Into<String>) -> Self {
        self.user_group_id = Some(id.into());
        self
    }

    pub fn supplier_id(mut self, id: impl Into<String>) -> Self {
        self.supplier_id = Some(id.into());
        self
    }
}

impl EncodeQuery for AssignmentScope {
    fn encode_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("buyerID", self.buyer_id.clone());
        params.insert_opt("userID", self.user_id.clone());
        params.insert_opt("userGroupID", self.user_group_id.clone());
        params.insert_opt("supplierID", self.supplier_id.clone());
        params
    }
}

/// Options for listing message sender assignments.
///
/// This listing has no search, sort or filter support.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSenderAssignmentListOptions {
    pub buyer_id: Option<String>,
    pub message_sender_id: Option<String>,
    pub user_id: Option<String>,
    pub user_group_id: Option<String>,
    /// Level of the assignment.
    pub level: Option<PartyType>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub supplier_id: Option<String>,
}

impl MessageSenderAssignmentListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buyer_id(mut self, id: impl Into<String>) -> Self {
        self.buyer_id = Some(id.into());
        self
    }

    pub fn message_sender_id(mut self, id: impl Into<String>) -> Self {
        self.message_sender_id = Some(id.into());
        self
    }

    pub fn user_id(mut self, id: impl Into<String>) -> Self {
        self.user_id = Some(id.into());
        self
    }

    pub fn user_group_id(mut self, id: impl Into<String>) -> Self {
        self.user_group_id = Some(id.into());
        self
    }

    pub fn level(mut self, level: PartyType) -> Self {
        self.level = Some(level);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn supplier_id(mut self, id: impl Into<String>) -> Self {
        self.supplier_id = Some(id.into());
        self
    }
}

impl EncodeQuery for MessageSenderAssignmentListOptions {
    fn encode_query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert_opt("buyerID", self.buyer_id.clone());
        params.insert_opt("messageSenderID", self.message_sender_id.clone());
        params.insert_opt("userID", self.user_id.clone());
        params.insert_opt("userGroupID", self.user_group_id.clone());
        params.insert_opt("level", self.level.map(|level| level.to_string()));
        params.insert_opt("page", self.page);
        params.insert_opt("pageSize", self.page_size);
        params.insert_opt("supplierID", self.supplier_id.clone());
        params
    }
}
