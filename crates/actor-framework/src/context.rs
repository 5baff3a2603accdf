//! # Actor Context
//!
//! Every call to a handler receives an [`ActorContext`]. It tells the actor who it
//! is (`path`, `name`, `parent`) and gives it a handle to the runtime so it can
//! dispatch, schedule and spawn without holding references to other actors.
//!
//! The runtime handle is passed explicitly instead of living in a global. An
//! actor can only reach the system it was spawned into.

use crate::address::ActorPath;
use crate::behavior::Actor;
use crate::error::FrameworkError;
use crate::message::Message;
use crate::system::ActorSystem;
use std::time::Duration;

pub struct ActorContext<M: Message> {
    path: ActorPath,
    system: ActorSystem<M>,
}

impl<M: Message> Clone for ActorContext<M> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            system: self.system.clone(),
        }
    }
}

impl<M: Message> ActorContext<M> {
    pub(crate) fn new(path: ActorPath, system: ActorSystem<M>) -> Self {
        Self { path, system }
    }

    /// This actor's own address.
    pub fn self_path(&self) -> &ActorPath {
        &self.path
    }

    /// This actor's own path segment.
    pub fn name(&self) -> &str {
        self.path.name().unwrap_or_default()
    }

    /// The address of the actor (or system root) this actor was spawned under.
    pub fn parent(&self) -> Option<ActorPath> {
        self.path.parent()
    }

    pub fn system(&self) -> &ActorSystem<M> {
        &self.system
    }

    /// See [`ActorSystem::dispatch`].
    pub fn dispatch(&self, to: &ActorPath, message: M) {
        self.system.dispatch(to, message);
    }

    /// See [`ActorSystem::dispatch_after`].
    pub fn dispatch_after(&self, delay: Duration, to: ActorPath, message: M) {
        self.system.dispatch_after(delay, to, message);
    }

    /// Spawns a stateful actor one level below this one.
    pub fn spawn_child<A: Actor<M>>(
        &self,
        name: &str,
        actor: A,
        initial_state: A::State,
    ) -> Result<ActorPath, FrameworkError> {
        self.system.spawn(&self.path, name, actor, initial_state)
    }
}
