//! Read-side access to the running saga from outside the actor system.

pub mod order_client;

pub use order_client::*;
