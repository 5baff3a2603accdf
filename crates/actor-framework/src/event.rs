//! # System Events
//!
//! The runtime never returns delivery failures to the sender: dispatch is
//! fire-and-forget. What it does instead is publish a [`SystemEvent`] on a
//! broadcast bus that any number of observers can subscribe to through
//! [`ActorSystem::events`](crate::ActorSystem::events).
//!
//! Dead letters, failing handlers and panicking handlers all show up here,
//! which makes the bus the natural place for monitoring and for tests that
//! want to assert that "nothing happened".

use crate::address::ActorPath;

#[derive(Debug, Clone, PartialEq)]
pub enum SystemEvent {
    /// A new actor was registered.
    Spawned { path: ActorPath },
    /// A spawn reused a live path; the previous actor no longer receives messages.
    Replaced { path: ActorPath },
    /// A message was addressed to a path with no live actor.
    DeadLetter { to: ActorPath, message: String },
    /// A handler returned an error. The actor kept its previous state.
    HandlerFailed { path: ActorPath, error: String },
    /// A handler panicked. The actor kept its previous state.
    HandlerPanicked { path: ActorPath, reason: String },
}

impl SystemEvent {
    /// The path the event is about.
    pub fn path(&self) -> &ActorPath {
        match self {
            SystemEvent::Spawned { path }
            | SystemEvent::Replaced { path }
            | SystemEvent::HandlerFailed { path, .. }
            | SystemEvent::HandlerPanicked { path, .. } => path,
            SystemEvent::DeadLetter { to, .. } => to,
        }
    }

    /// True for events that signal something went wrong.
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            SystemEvent::DeadLetter { .. }
                | SystemEvent::HandlerFailed { .. }
                | SystemEvent::HandlerPanicked { .. }
        )
    }
}
