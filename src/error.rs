//! Error types for the bookstore saga.

use crate::model::MessageType;
use actor_framework::{ActorPath, FrameworkError};
use thiserror::Error;

/// Errors raised by saga actors and by the lifecycle/client layer.
#[derive(Debug, Error, PartialEq)]
pub enum SagaError {
    /// An event reached the processor without the order id needed to route it.
    #[error("{0} carries no order id")]
    MissingOrderId(MessageType),

    /// The path does not name an order actor.
    #[error("Not an order actor: {0}")]
    NotAnOrder(ActorPath),

    /// Waiting for orders to complete took longer than allowed.
    #[error("Timed out: {completed} of {expected} orders shipped")]
    Timeout { completed: usize, expected: usize },

    /// The actor runtime refused an operation.
    #[error("Actor runtime error: {0}")]
    Framework(#[from] FrameworkError),
}

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Unknown match mode {0:?}, expected strict or permissive")]
    UnknownMatchMode(String),
}
