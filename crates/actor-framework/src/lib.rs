//! # Actor Framework
//!
//! This crate provides a small, path-addressed actor runtime on top of Tokio.
//! Actors are named by hierarchical [`ActorPath`]s, receive messages through
//! fire-and-forget [`dispatch`](ActorSystem::dispatch), and mutate their own state
//! one message at a time.
//!
//! ## Actor Model
//!
//! - Isolated state (no shared memory, no locks inside actors)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates race conditions
//! - Actors are created dynamically by other actors (children live under their parent's path)
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model) - Foundational concurrency pattern by Carl Hewitt
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Behaviour Layer** ([`Actor`], [`StatelessActor`]) - your reducer `(state, message, ctx) -> state`
//! 2. **Runtime Layer** ([`ActorSystem`]) - registry, mailboxes, timers, fault isolation
//! 3. **Addressing Layer** ([`ActorPath`]) - plain values, resolved at dispatch time
//!
//! ## Delivery Semantics
//!
//! Dispatch is **at-most-once**: there are no acknowledgements and no retries.
//! A message to a path with no live actor is dropped and reported on the
//! [`SystemEvent`] bus as a dead letter. Per actor, messages are processed in
//! arrival order. Across actors there is no ordering guarantee.
//!
//! ## Quick Example
//!
//! ```rust
//! use actor_framework::{ActorContext, ActorSystem, StatelessActor, SystemConfig};
//! use async_trait::async_trait;
//! use std::convert::Infallible;
//!
//! struct Greeter;
//!
//! #[async_trait]
//! impl StatelessActor<String> for Greeter {
//!     type Error = Infallible;
//!     async fn handle(&self, msg: String, ctx: &ActorContext<String>) -> Result<(), Infallible> {
//!         tracing::info!(me = ctx.name(), %msg, "hello");
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let system = ActorSystem::<String>::new(SystemConfig::new("demo"));
//!     let greeter = system.spawn_stateless("greeter", Greeter).unwrap();
//!     system.dispatch(&greeter, "world".to_string());
//!     system.shutdown().await;
//! }
//! ```
//!
//! ## Testing
//!
//! The [`probe`] module provides a recording actor for asserting what an actor sends.

mod actor;
pub mod address;
pub mod behavior;
pub mod config;
pub mod context;
pub mod error;
pub mod event;
pub mod message;
pub mod probe;
pub mod system;

// Re-export core types for convenience
pub use address::ActorPath;
pub use behavior::{Actor, StatelessActor};
pub use config::{DuplicatePolicy, SystemConfig};
pub use context::ActorContext;
pub use error::FrameworkError;
pub use event::SystemEvent;
pub use message::{ActorRequest, Message, Response, StateSnapshot};
pub use system::ActorSystem;
