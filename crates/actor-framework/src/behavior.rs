//! # Actor Behaviour Traits
//!
//! The [`Actor`] trait defines what an actor does with a message. It is a
//! *reducer*: given the previous state, a message and the actor's context it
//! produces the next state.
//!
//! ```text
//! (previous_state, message, context) -> next_state
//! ```
//!
//! The runtime guarantees that `handle` is never called concurrently for the same
//! actor, so the state needs no locking. Different actors run in parallel.
//!
//! Actors that keep nothing between messages implement [`StatelessActor`] instead
//! and are spawned with [`ActorSystem::spawn_stateless`](crate::ActorSystem::spawn_stateless).
//!
//! # Errors
//! Each actor defines its own error type. Returning `Err` does not stop the actor:
//! the runtime keeps the previous state, logs the error and publishes
//! [`SystemEvent::HandlerFailed`](crate::SystemEvent::HandlerFailed).

use crate::context::ActorContext;
use crate::message::Message;
use async_trait::async_trait;
use std::fmt::Debug;

/// A stateful actor.
///
/// ```rust
/// use actor_framework::{Actor, ActorContext, ActorSystem, SystemConfig};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// struct Counter;
///
/// #[async_trait]
/// impl Actor<u32> for Counter {
///     type State = u32;
///     type Error = Infallible;
///
///     async fn handle(&self, state: &u32, msg: u32, _ctx: &ActorContext<u32>) -> Result<u32, Infallible> {
///         Ok(state + msg)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let system = ActorSystem::<u32>::new(SystemConfig::new("demo"));
///     let counter = system.spawn(&system.root(), "counter", Counter, 0).unwrap();
///     system.dispatch(&counter, 2);
///     system.dispatch(&counter, 3);
///     assert_eq!(system.snapshot::<u32>(&counter).await, Ok(5));
/// }
/// ```
#[async_trait]
pub trait Actor<M: Message>: Send + Sync + 'static {
    /// The state owned by one instance of this actor.
    type State: Clone + Send + Sync + Debug + 'static;

    /// The error type for this actor.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Process one message and return the next state.
    async fn handle(
        &self,
        state: &Self::State,
        msg: M,
        ctx: &ActorContext<M>,
    ) -> Result<Self::State, Self::Error>;
}

/// An actor that keeps no state across invocations.
#[async_trait]
pub trait StatelessActor<M: Message>: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn handle(&self, msg: M, ctx: &ActorContext<M>) -> Result<(), Self::Error>;
}

/// Adapter that runs a [`StatelessActor`] through the stateful machinery with `()` state.
pub(crate) struct Stateless<A>(pub(crate) A);

#[async_trait]
impl<M, A> Actor<M> for Stateless<A>
where
    M: Message,
    A: StatelessActor<M>,
{
    type State = ();
    type Error = A::Error;

    async fn handle(&self, _state: &(), msg: M, ctx: &ActorContext<M>) -> Result<(), A::Error> {
        self.0.handle(msg, ctx).await
    }
}
