//! Saga messages and the closed set of message types.

use crate::model::Payload;
use actor_framework::ActorPath;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Every command and event exchanged by the saga actors.
///
/// The serialized names are part of the external interface and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    /// Customer → processor: please order this book.
    OrderBookCmd,
    /// Processor → order actor.
    CreateOrderCmd,
    /// Order actor → processor, then processor → order actor.
    OrderCreatedEvt,
    /// Processor → account actor.
    ChargeCreditcardCmd,
    /// Account actor → processor, then processor → order actor.
    AccountChargedEvt,
    /// Processor → inventory actor.
    ShipBookCmd,
    /// Inventory actor → processor, then processor → order actor.
    BookShippedEvt,
}

impl MessageType {
    pub const ALL: [MessageType; 7] = [
        MessageType::OrderBookCmd,
        MessageType::CreateOrderCmd,
        MessageType::OrderCreatedEvt,
        MessageType::ChargeCreditcardCmd,
        MessageType::AccountChargedEvt,
        MessageType::ShipBookCmd,
        MessageType::BookShippedEvt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::OrderBookCmd => "ORDER_BOOK_CMD",
            MessageType::CreateOrderCmd => "CREATE_ORDER_CMD",
            MessageType::OrderCreatedEvt => "ORDER_CREATED_EVT",
            MessageType::ChargeCreditcardCmd => "CHARGE_CREDITCARD_CMD",
            MessageType::AccountChargedEvt => "ACCOUNT_CHARGED_EVT",
            MessageType::ShipBookCmd => "SHIP_BOOK_CMD",
            MessageType::BookShippedEvt => "BOOK_SHIPPED_EVT",
        }
    }
}

impl Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The message type of the bookstore [`ActorSystem`](actor_framework::ActorSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// `None` only for the wake-up message sent to customers at startup.
    pub kind: Option<MessageType>,
    pub payload: Payload,
    pub sender: Option<ActorPath>,
}

impl Message {
    pub fn new(kind: MessageType, payload: Payload) -> Self {
        Self {
            kind: Some(kind),
            payload,
            sender: None,
        }
    }

    /// An untyped, empty message. Customers react to it by placing their order.
    pub fn wake() -> Self {
        Self {
            kind: None,
            payload: Payload::default(),
            sender: None,
        }
    }

    pub fn from_sender(mut self, sender: &ActorPath) -> Self {
        self.sender = Some(sender.clone());
        self
    }

    pub fn is(&self, kind: MessageType) -> bool {
        self.kind == Some(kind)
    }
}
