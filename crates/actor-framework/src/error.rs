//! # Framework Errors
//!
//! This module defines the common error types used throughout the actor framework.
//! Handler errors stay with the actor that produced them (see
//! [`SystemEvent::HandlerFailed`](crate::SystemEvent::HandlerFailed)); the variants
//! here are the ones a *caller* of the runtime can observe.

use crate::address::ActorPath;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor already exists: {0}")]
    DuplicateActor(ActorPath),
    #[error("Invalid actor name: {0:?}")]
    InvalidName(String),
    #[error("Path {path} does not belong to system {system}")]
    ForeignPath { path: ActorPath, system: String },
    #[error("Actor not found: {0}")]
    NotFound(ActorPath),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State of {0} has a different type")]
    StateMismatch(ActorPath),
    #[error("Unknown duplicate policy: {0}")]
    UnknownPolicy(String),
}
