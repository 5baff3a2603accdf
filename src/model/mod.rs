//! Domain data: identifiers, books, payloads and saga messages.
//!
//! Everything here is plain data with `serde` derives. Behaviour lives in the
//! actor modules.

pub mod book;
pub mod ids;
pub mod message;
pub mod payload;

pub use book::Book;
pub use ids::{CustomerId, OrderId};
pub use message::{Message, MessageType};
pub use payload::Payload;
