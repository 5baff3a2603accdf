//! # Probe Actors & Testing Guide
//!
//! Testing actors is awkward because they answer by *dispatching*, not by
//! returning values. A [`Probe`] is a stand-in actor that records every message it
//! receives and hands it to the test through a [`ProbeReceiver`].
//!
//! ## When to use Probes vs Real Actors
//!
//! | Feature | Probe | Real Actor |
//! |---------|-------|------------|
//! | **State** | None, just a recording | Real state transitions |
//! | **Use Case** | Asserting what an actor *sends* | Testing the whole choreography |
//! | **Timing** | Records the arrival instant | Not observable |
//!
//! ## Testing Strategies
//!
//! <details>
//! <summary><b>Pattern 1: Actor under a probe parent</b></summary>
//!
//! Spawn the actor under test *below* a probe, so that everything it sends to its
//! parent lands in the probe.
//!
//! ```rust
//! use actor_framework::probe::spawn_probe;
//! use actor_framework::{Actor, ActorContext, ActorSystem, SystemConfig};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! struct Echo;
//!
//! #[async_trait]
//! impl Actor<String> for Echo {
//!     type State = ();
//!     type Error = Infallible;
//!     async fn handle(&self, _: &(), msg: String, ctx: &ActorContext<String>) -> Result<(), Infallible> {
//!         if let Some(parent) = ctx.parent() {
//!             ctx.dispatch(&parent, format!("echo: {msg}"));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::<String>::new(SystemConfig::new("test"));
//!     let (parent, mut probe) = spawn_probe(&system, &system.root(), "parent").unwrap();
//!     let echo = system.spawn(&parent, "echo", Echo, ()).unwrap();
//!
//!     system.dispatch(&echo, "hi".to_string());
//!     let received = probe.expect_message().await.unwrap();
//!     assert_eq!(received.message, "echo: hi");
//! }
//! ```
//! </details>
//!
//! <details>
//! <summary><b>Pattern 2: Full system</b></summary>
//!
//! Spawn every real actor and poll [`ActorSystem::snapshot`](crate::ActorSystem::snapshot)
//! until the state settles. See the integration tests of the bookstore crate.
//! </details>

use crate::address::ActorPath;
use crate::behavior::Actor;
use crate::context::ActorContext;
use crate::error::FrameworkError;
use crate::message::Message;
use crate::system::ActorSystem;
use async_trait::async_trait;
use std::convert::Infallible;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// How long [`ProbeReceiver::expect_message`] waits before giving up.
pub const DEFAULT_EXPECT_TIMEOUT: Duration = Duration::from_secs(5);

/// A message captured by a [`Probe`], with the instant it was handled.
#[derive(Debug)]
pub struct Received<M> {
    pub message: M,
    pub at: Instant,
}

/// Recording actor. Forwards everything it receives to its [`ProbeReceiver`].
pub struct Probe<M> {
    sender: mpsc::UnboundedSender<Received<M>>,
}

#[async_trait]
impl<M: Message> Actor<M> for Probe<M> {
    type State = ();
    type Error = Infallible;

    async fn handle(&self, _state: &(), msg: M, _ctx: &ActorContext<M>) -> Result<(), Infallible> {
        // The test may have dropped its receiver; that only means nobody is watching.
        let _ = self.sender.send(Received {
            message: msg,
            at: Instant::now(),
        });
        Ok(())
    }
}

/// Test-side end of a [`Probe`].
pub struct ProbeReceiver<M> {
    receiver: mpsc::UnboundedReceiver<Received<M>>,
}

impl<M> ProbeReceiver<M> {
    /// Waits up to [`DEFAULT_EXPECT_TIMEOUT`] for the next message.
    pub async fn expect_message(&mut self) -> Option<Received<M>> {
        self.expect_message_within(DEFAULT_EXPECT_TIMEOUT).await
    }

    /// Waits up to `timeout` for the next message.
    pub async fn expect_message_within(&mut self, timeout: Duration) -> Option<Received<M>> {
        tokio::time::timeout(timeout, self.receiver.recv())
            .await
            .ok()
            .flatten()
    }

    /// Returns the next message only if it has already arrived.
    pub fn try_message(&mut self) -> Option<Received<M>> {
        self.receiver.try_recv().ok()
    }
}

/// Spawns a [`Probe`] at `parent + name` and returns its path and receiver.
pub fn spawn_probe<M: Message>(
    system: &ActorSystem<M>,
    parent: &ActorPath,
    name: &str,
) -> Result<(ActorPath, ProbeReceiver<M>), FrameworkError> {
    let (sender, receiver) = mpsc::unbounded_channel();
    let path = system.spawn(parent, name, Probe { sender }, ())?;
    Ok((path, ProbeReceiver { receiver }))
}
