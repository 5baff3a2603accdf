//! # Mailbox Messages
//!
//! Everything an actor task receives goes through one unbounded channel. User
//! messages are wrapped in [`ActorRequest::Deliver`]; the runtime also uses the
//! same channel to ask the actor for a copy of its state between two messages,
//! so a snapshot never observes a half-applied handler.

use std::any::Any;
use std::fmt::Debug;
use tokio::sync::oneshot;

/// Anything that can be dispatched to an actor.
///
/// Blanket-implemented for every `Send + Debug + 'static` type, so a plain enum
/// or struct works as the message type of an [`ActorSystem`](crate::ActorSystem).
/// `Debug` is required because every delivery and dead letter is traced.
pub trait Message: Send + Debug + 'static {}

impl<T: Send + Debug + 'static> Message for T {}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<T>;

/// Type-erased copy of an actor's state.
pub type StateSnapshot = Box<dyn Any + Send>;

/// Internal message type sent to an actor task.
#[derive(Debug)]
pub enum ActorRequest<M> {
    /// A user message, processed by the actor's handler.
    Deliver { message: M },
    /// A request for a clone of the current state.
    Snapshot { respond_to: Response<StateSnapshot> },
}
