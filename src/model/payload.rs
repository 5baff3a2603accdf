//! The data carried by every saga message.
//!
//! All fields are optional: a payload is an *overlay*. Merging it into a state
//! overwrites exactly the fields it carries and leaves the others alone
//! (last write wins, per field). Merging is a pure function of `(state, payload)`,
//! so merging the same payload twice changes nothing the second time.

use crate::model::{Book, CustomerId, OrderId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<Book>,
}

impl Payload {
    /// What a customer sends when ordering: `{book, customerId}`.
    pub fn order_request(customer_id: CustomerId, book: Book) -> Self {
        Self {
            customer_id: Some(customer_id),
            order_id: None,
            book: Some(book),
        }
    }

    /// Returns the payload with `order_id` set, as the processor does on `ORDER_BOOK_CMD`.
    pub fn with_order_id(mut self, order_id: OrderId) -> Self {
        self.order_id = Some(order_id);
        self
    }

    /// Overlays `other` on top of `self`.
    pub fn merge(&mut self, other: &Payload) {
        if let Some(customer_id) = &other.customer_id {
            self.customer_id = Some(customer_id.clone());
        }
        if let Some(order_id) = &other.order_id {
            self.order_id = Some(order_id.clone());
        }
        if let Some(book) = &other.book {
            self.book = Some(book.clone());
        }
    }
}
