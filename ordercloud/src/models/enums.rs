//! Enumerations shared by several models and operations.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Direction of an order from the current user's perspective.
///
/// Used as the `{direction}` path segment of every order operation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum OrderDirection {
    /// Orders placed with the current user's organization.
    Incoming,
    /// Orders placed by the current user's organization.
    Outgoing,
}

/// Lifecycle state of an order.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum OrderStatus {
    #[default]
    Unsubmitted,
    AwaitingApproval,
    Declined,
    Open,
    Completed,
    Canceled,
}

/// Events a message sender can be notified about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum MessageType {
    OrderDeclined,
    OrderSubmitted,
    ShipmentCreated,
    ForgottenPassword,
    OrderSubmittedForYourApproval,
    OrderSubmittedForApproval,
    OrderApproved,
    OrderSubmittedForYourApprovalHasBeenApproved,
    OrderSubmittedForYourApprovalHasBeenDeclined,
    NewUserInvitation,
}

/// Level at which an assignment applies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString, Serialize, Deserialize,
)]
pub enum PartyType {
    User,
    Group,
    Company,
}

/// State of a single approval on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Declined,
}

/// Platform environment a webhook payload originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, Serialize, Deserialize)]
pub enum Environment {
    Production,
    Staging,
    Sandbox,
    /// Any environment this client does not know by name.
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn direction_renders_as_path_segment() {
        assert_eq!(OrderDirection::Incoming.as_ref(), "Incoming");
        assert_eq!("Outgoing".parse::<OrderDirection>().unwrap(), OrderDirection::Outgoing);
        assert_eq!(OrderDirection::iter().count(), 2);
    }

    #[test]
    fn status_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::AwaitingApproval).unwrap(),
            "\"AwaitingApproval\""
        );
        assert_eq!(OrderStatus::default(), OrderStatus::Unsubmitted);
    }

    #[test]
    fn unknown_environment_is_other() {
        let env: Environment = serde_json::from_str("\"Qa\"").unwrap();
        assert_eq!(env, Environment::Other);
        let env: Environment = serde_json::from_str("\"Sandbox\"").unwrap();
        assert_eq!(env, Environment::Sandbox);
    }

    #[test]
    fn message_types_round_trip_names() {
        for kind in MessageType::iter() {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{kind}\""));
        }
    }
}
