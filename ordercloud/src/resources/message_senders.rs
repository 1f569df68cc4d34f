//! Message senders façade.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenScope;
use crate::client::{Dispatch, OrderCloud, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    ListPage, MessageCCListenerAssignment, MessageSender, MessageSenderAssignment, PartialMessageSender,
};
use crate::operation::Operation;
use crate::query::{AssignmentScope, ListOptions, MessageSenderAssignmentListOptions};
use crate::response::{EmptyFormat, JsonFormat};

/// Operation table for `/messagesenders`.
pub mod ops {
    use crate::method::RestMethod::{Delete, Get, Patch, Post, Put};
    use crate::operation::Operation;

    pub const LIST: Operation = Operation::new("MessageSenders.List", Get, "/messagesenders");
    pub const CREATE: Operation = Operation::new("MessageSenders.Create", Post, "/messagesenders");
    pub const GET: Operation =
        Operation::new("MessageSenders.Get", Get, "/messagesenders/{messageSenderID}");
    pub const SAVE: Operation =
        Operation::new("MessageSenders.Save", Put, "/messagesenders/{messageSenderID}");
    pub const DELETE: Operation =
        Operation::new("MessageSenders.Delete", Delete, "/messagesenders/{messageSenderID}");
    pub const PATCH: Operation =
        Operation::new("MessageSenders.Patch", Patch, "/messagesenders/{messageSenderID}");
    pub const DELETE_ASSIGNMENT: Operation = Operation::new(
        "MessageSenders.DeleteAssignment",
        Delete,
        "/messagesenders/{messageSenderID}/assignments",
    );
    pub const LIST_ASSIGNMENTS: Operation = Operation::new(
        "MessageSenders.ListAssignments",
        Get,
        "/messagesenders/assignments",
    );
    pub const SAVE_ASSIGNMENT: Operation = Operation::new(
        "MessageSenders.SaveAssignment",
        Post,
        "/messagesenders/assignments",
    );
    pub const LIST_CC_LISTENER_ASSIGNMENTS: Operation = Operation::new(
        "MessageSenders.ListCCListenerAssignments",
        Get,
        "/messagesenders/CCListenerAssignments",
    );
    pub const SAVE_CC_LISTENER_ASSIGNMENT: Operation = Operation::new(
        "MessageSenders.SaveCCListenerAssignment",
        Post,
        "/messagesenders/CCListenerAssignments",
    );

    pub const ALL: [Operation; 11] = [
        LIST,
        CREATE,
        GET,
        SAVE,
        DELETE,
        PATCH,
        DELETE_ASSIGNMENT,
        LIST_ASSIGNMENTS,
        SAVE_ASSIGNMENT,
        LIST_CC_LISTENER_ASSIGNMENTS,
        SAVE_CC_LISTENER_ASSIGNMENT,
    ];
}

/// Message senders façade.
pub struct MessageSenders<'a, Xp = Value> {
    client: &'a OrderCloud,
    scope: TokenScope,
    _xp: PhantomData<fn() -> Xp>,
}

impl<Xp> Clone for MessageSenders<'_, Xp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Xp> Copy for MessageSenders<'_, Xp> {}

impl<Xp> fmt::Debug for MessageSenders<'_, Xp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSenders")
            .field("scope", &self.scope)
            .finish()
    }
}

impl<'a, Xp> MessageSenders<'a, Xp> {
    pub(crate) fn new(client: &'a OrderCloud, scope: TokenScope) -> Self {
        Self {
            client,
            scope,
            _xp: PhantomData,
        }
    }

    /// Returns a handle whose calls use the impersonation token.
    pub fn as_impersonated(self) -> Self {
        Self::new(self.client, TokenScope::Impersonating)
    }

    /// Alias of [`as_impersonated`](Self::as_impersonated).
    pub fn as_(self) -> Self {
        self.as_impersonated()
    }

    /// Returns a handle that reads and writes `xp` as `T`.
    pub fn with_xp<T>(self) -> MessageSenders<'a, T> {
        MessageSenders::new(self.client, self.scope)
    }

    pub fn scope(&self) -> TokenScope {
        self.scope
    }

    fn call(&self, operation: &'static Operation) -> Dispatch<'a> {
        self.client.dispatch(operation, self.scope)
    }

    /// Removes the sender's assignment for the given party.
    pub async fn delete_assignment(
        &self,
        message_sender_id: &str,
        scope: &AssignmentScope,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call(&ops::DELETE_ASSIGNMENT)
            .path("messageSenderID", message_sender_id)
            .query(scope)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn list_assignments(
        &self,
        options: &MessageSenderAssignmentListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<MessageSenderAssignment>, ApiError> {
        self.call(&ops::LIST_ASSIGNMENTS)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates or updates an assignment.
    pub async fn save_assignment(
        &self,
        assignment: &MessageSenderAssignment,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call(&ops::SAVE_ASSIGNMENT)
            .json(assignment)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn list_cc_listener_assignments(
        &self,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<MessageCCListenerAssignment>, ApiError> {
        self.call(&ops::LIST_CC_LISTENER_ASSIGNMENTS)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates or updates a CC listener assignment.
    pub async fn save_cc_listener_assignment(
        &self,
        assignment: &MessageCCListenerAssignment,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call(&ops::SAVE_CC_LISTENER_ASSIGNMENT)
            .json(assignment)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }
}

impl<Xp> MessageSenders<'_, Xp>
where
    Xp: Serialize + DeserializeOwned + Send + Sync,
{
    pub async fn list(
        &self,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<MessageSender<Xp>>, ApiError> {
        self.call(&ops::LIST)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates a message sender. `Name`, `MessageTypes`, `URL` and
    /// `SharedKey` are required by the API.
    pub async fn create(
        &self,
        sender: &PartialMessageSender<Xp>,
        request: &RequestOptions,
    ) -> Result<MessageSender<Xp>, ApiError> {
        self.call(&ops::CREATE)
            .json(sender)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn get(
        &self,
        message_sender_id: &str,
        request: &RequestOptions,
    ) -> Result<MessageSender<Xp>, ApiError> {
        self.call(&ops::GET)
            .path("messageSenderID", message_sender_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates or replaces a message sender.
    pub async fn save(
        &self,
        message_sender_id: &str,
        sender: &PartialMessageSender<Xp>,
        request: &RequestOptions,
    ) -> Result<MessageSender<Xp>, ApiError> {
        self.call(&ops::SAVE)
            .path("messageSenderID", message_sender_id)
            .json(sender)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn delete(
        &self,
        message_sender_id: &str,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call(&ops::DELETE)
            .path("messageSenderID", message_sender_id)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn patch(
        &self,
        message_sender_id: &str,
        sender: &PartialMessageSender<Xp>,
        request: &RequestOptions,
    ) -> Result<MessageSender<Xp>, ApiError> {
        self.call(&ops::PATCH)
            .path("messageSenderID", message_sender_id)
            .json(sender)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }
}
