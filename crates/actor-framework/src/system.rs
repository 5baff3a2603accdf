//! # Actor System
//!
//! The [`ActorSystem`] is the registry that maps [`ActorPath`]s to live mailboxes.
//! It is the only object shared between actors, and it is shared by handle: every
//! [`ActorContext`] carries a clone, nothing is global.
//!
//! ## Operations
//!
//! * **spawn / spawn_stateless**: register a new actor under `parent + name` and start its task.
//! * **dispatch**: resolve a path and enqueue a message. Fire-and-forget: unresolved
//!   paths are dropped and reported as [`SystemEvent::DeadLetter`], never to the caller.
//! * **dispatch_after**: same, after a delay, from a timer task.
//! * **snapshot**: ask an actor for a clone of its state, served between two messages.
//! * **shutdown**: close every mailbox and wait for the actor tasks to drain.
//!
//! The registry sits behind a `std::sync::RwLock`. Lookups and inserts are short and
//! never held across an `.await`.

use crate::actor::ActorCell;
use crate::address::ActorPath;
use crate::behavior::{Actor, Stateless, StatelessActor};
use crate::config::{DuplicatePolicy, SystemConfig};
use crate::context::ActorContext;
use crate::error::FrameworkError;
use crate::event::SystemEvent;
use crate::message::{ActorRequest, Message};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

struct Mailbox<M> {
    sender: mpsc::UnboundedSender<ActorRequest<M>>,
    handle: JoinHandle<()>,
}

struct SystemInner<M> {
    config: SystemConfig,
    registry: RwLock<HashMap<ActorPath, Mailbox<M>>>,
    /// Tasks of replaced actors. They drain their mailbox and exit on their own.
    retired: Mutex<Vec<JoinHandle<()>>>,
    events: broadcast::Sender<SystemEvent>,
}

/// Handle to a running actor system. Cheap to clone.
pub struct ActorSystem<M: Message> {
    inner: Arc<SystemInner<M>>,
}

impl<M: Message> Clone for ActorSystem<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: Message> ActorSystem<M> {
    pub fn new(config: SystemConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        info!(system = %config.name, policy = %config.duplicate_policy, "Actor system started");
        Self {
            inner: Arc::new(SystemInner {
                config,
                registry: RwLock::new(HashMap::new()),
                retired: Mutex::new(Vec::new()),
                events,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.config.name
    }

    pub fn config(&self) -> &SystemConfig {
        &self.inner.config
    }

    /// Path of the system root. Top-level actors are spawned under it.
    pub fn root(&self) -> ActorPath {
        ActorPath::root(self.name())
    }

    /// Spawns a stateful actor at `parent + name`.
    ///
    /// # Errors
    /// - [`FrameworkError::InvalidName`] if `name` is empty or contains `/`.
    /// - [`FrameworkError::ForeignPath`] if `parent` belongs to another system.
    /// - [`FrameworkError::DuplicateActor`] if the path is live and the policy is
    ///   [`DuplicatePolicy::Reject`].
    pub fn spawn<A: Actor<M>>(
        &self,
        parent: &ActorPath,
        name: &str,
        actor: A,
        initial_state: A::State,
    ) -> Result<ActorPath, FrameworkError> {
        if name.is_empty() || name.contains('/') {
            return Err(FrameworkError::InvalidName(name.to_string()));
        }
        if parent.system() != self.name() {
            return Err(FrameworkError::ForeignPath {
                path: parent.clone(),
                system: self.name().to_string(),
            });
        }

        let path = parent.child(name);
        let mut registry = self.write_registry();
        let replaced = registry.contains_key(&path);
        if replaced && self.inner.config.duplicate_policy == DuplicatePolicy::Reject {
            return Err(FrameworkError::DuplicateActor(path));
        }

        let (sender, receiver) = mpsc::unbounded_channel();
        let ctx = ActorContext::new(path.clone(), self.clone());
        let handle = tokio::spawn(ActorCell::new(actor, initial_state, receiver, ctx).run());
        // Dropping the previous sender closes its channel; that task drains and exits.
        let previous = registry.insert(path.clone(), Mailbox { sender, handle });
        drop(registry);
        if let Some(Mailbox { handle, .. }) = previous {
            self.inner
                .retired
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(handle);
        }

        if replaced {
            info!(actor = %path, "Replaced");
            self.publish(SystemEvent::Replaced { path: path.clone() });
        } else {
            debug!(actor = %path, "Spawned");
            self.publish(SystemEvent::Spawned { path: path.clone() });
        }
        Ok(path)
    }

    /// Spawns an actor without persisted state directly under the system root.
    pub fn spawn_stateless<A: StatelessActor<M>>(
        &self,
        name: &str,
        actor: A,
    ) -> Result<ActorPath, FrameworkError> {
        let root = self.root();
        self.spawn(&root, name, Stateless(actor), ())
    }

    /// Enqueues `message` for the actor at `to`.
    ///
    /// Never blocks and never fails from the caller's point of view. If no live
    /// actor answers to `to`, the message is dropped and a
    /// [`SystemEvent::DeadLetter`] is published.
    pub fn dispatch(&self, to: &ActorPath, message: M) {
        let undelivered = {
            let registry = self.read_registry();
            match registry.get(to) {
                Some(mailbox) => mailbox
                    .sender
                    .send(ActorRequest::Deliver { message })
                    .err()
                    .and_then(|e| match e.0 {
                        ActorRequest::Deliver { message } => Some(message),
                        ActorRequest::Snapshot { .. } => None,
                    }),
                None => Some(message),
            }
        };

        if let Some(message) = undelivered {
            debug!(to = %to, ?message, "Dead letter");
            self.publish(SystemEvent::DeadLetter {
                to: to.clone(),
                message: format!("{message:?}"),
            });
        }
    }

    /// Dispatches `message` to `to` once `delay` has elapsed.
    ///
    /// The wait happens on a separate timer task; the caller returns immediately.
    /// There is no cancellation: once scheduled, the dispatch always happens.
    pub fn dispatch_after(&self, delay: Duration, to: ActorPath, message: M) {
        let system = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            system.dispatch(&to, message);
        });
    }

    /// Returns a clone of the state of the actor at `path`.
    ///
    /// The request is queued behind any messages already in the mailbox.
    ///
    /// # Errors
    /// - [`FrameworkError::NotFound`] if no actor lives at `path`.
    /// - [`FrameworkError::ActorClosed`] / [`FrameworkError::ActorDropped`] if it stopped.
    /// - [`FrameworkError::StateMismatch`] if its state is not an `S`.
    pub async fn snapshot<S: Clone + Send + 'static>(
        &self,
        path: &ActorPath,
    ) -> Result<S, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        {
            let registry = self.read_registry();
            let mailbox = registry
                .get(path)
                .ok_or_else(|| FrameworkError::NotFound(path.clone()))?;
            mailbox
                .sender
                .send(ActorRequest::Snapshot { respond_to })
                .map_err(|_| FrameworkError::ActorClosed)?;
        }
        let state = response.await.map_err(|_| FrameworkError::ActorDropped)?;
        state
            .downcast::<S>()
            .map(|s| *s)
            .map_err(|_| FrameworkError::StateMismatch(path.clone()))
    }

    pub fn contains(&self, path: &ActorPath) -> bool {
        self.read_registry().contains_key(path)
    }

    /// Live direct children of `parent`, sorted by path.
    pub fn children(&self, parent: &ActorPath) -> Vec<ActorPath> {
        let mut children: Vec<ActorPath> = self
            .read_registry()
            .keys()
            .filter(|path| path.is_child_of(parent))
            .cloned()
            .collect();
        children.sort();
        children
    }

    /// Number of live actors.
    pub fn len(&self) -> usize {
        self.read_registry().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribes to the [`SystemEvent`] bus. Only events published after the call are seen.
    pub fn events(&self) -> broadcast::Receiver<SystemEvent> {
        self.inner.events.subscribe()
    }

    pub(crate) fn publish(&self, event: SystemEvent) {
        // No subscribers is not an error.
        let _ = self.inner.events.send(event);
    }

    /// Closes every mailbox and waits for all actor tasks to finish, including
    /// the tasks of actors that were replaced.
    ///
    /// Messages already queued are still processed. Dispatches made while
    /// draining (including pending `dispatch_after` timers) become dead letters.
    pub async fn shutdown(&self) {
        let drained: Vec<(ActorPath, Mailbox<M>)> = self.write_registry().drain().collect();
        info!(system = %self.name(), actors = drained.len(), "Shutting down");

        let mut handles: Vec<JoinHandle<()>> = self
            .inner
            .retired
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for (_, Mailbox { sender, handle }) in drained {
            drop(sender);
            handles.push(handle);
        }
        for handle in handles {
            let _ = handle.await;
        }
        info!(system = %self.name(), "Actor system stopped");
    }

    fn read_registry(&self) -> RwLockReadGuard<'_, HashMap<ActorPath, Mailbox<M>>> {
        self.inner
            .registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write_registry(&self) -> RwLockWriteGuard<'_, HashMap<ActorPath, Mailbox<M>>> {
        self.inner
            .registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
