//! Naming scheme of the bookstore actors.
//!
//! External monitoring tools identify actors by these names, so they are fixed:
//!
//! | Actor | Segment | Lives under |
//! |-------|---------|-------------|
//! | Order processor | `orderprocessor-<id>` | system root |
//! | Inventory | `inventory` | system root |
//! | Customer | `customer-<customerId>` | system root |
//! | Order | `order-<orderId>` | its processor |
//! | Account | `account-<orderId>` | its processor |
//!
//! The helpers build [`ActorPath`] values from structured ids. They never check
//! that the actor exists.

use crate::model::{CustomerId, OrderId};
use actor_framework::ActorPath;

pub const INVENTORY: &str = "inventory";
pub const ORDER_PREFIX: &str = "order-";
pub const ACCOUNT_PREFIX: &str = "account-";
pub const PROCESSOR_PREFIX: &str = "orderprocessor-";
pub const CUSTOMER_PREFIX: &str = "customer-";

pub fn order_name(order_id: &OrderId) -> String {
    format!("{ORDER_PREFIX}{order_id}")
}

pub fn account_name(order_id: &OrderId) -> String {
    format!("{ACCOUNT_PREFIX}{order_id}")
}

pub fn processor_name(processor_id: &str) -> String {
    format!("{PROCESSOR_PREFIX}{processor_id}")
}

pub fn customer_name(customer_id: &CustomerId) -> String {
    format!("{CUSTOMER_PREFIX}{customer_id}")
}

pub fn processor_address(system: &str, processor_id: &str) -> ActorPath {
    ActorPath::from_segments(system, [processor_name(processor_id)])
}

pub fn inventory_address(system: &str) -> ActorPath {
    ActorPath::from_segments(system, [INVENTORY])
}

pub fn customer_address(system: &str, customer_id: &CustomerId) -> ActorPath {
    ActorPath::from_segments(system, [customer_name(customer_id)])
}

pub fn order_address(processor: &ActorPath, order_id: &OrderId) -> ActorPath {
    processor.child(order_name(order_id))
}

pub fn account_address(processor: &ActorPath, order_id: &OrderId) -> ActorPath {
    processor.child(account_name(order_id))
}

/// Recovers the order id from an `order-<orderId>` path.
pub fn order_id_of(path: &ActorPath) -> Option<OrderId> {
    path.name()?
        .strip_prefix(ORDER_PREFIX)
        .map(|id| OrderId(id.to_string()))
}
