//! # Actor Cell
//!
//! This module defines the `ActorCell`, the task that owns one actor's state and
//! the receiving end of its mailbox. It is the "server" half of every actor.
//!
//! **Concurrency Model**:
//! Each cell processes its mailbox *sequentially* in a loop, so the state is owned
//! exclusively by the task and needs no `Mutex`. Thousands of cells run in parallel.
//!
//! **Fault isolation**:
//! Each handler invocation runs in its own Tokio task that the loop awaits before
//! taking the next message. FIFO order is unchanged, but a panic inside the
//! handler surfaces as a `JoinError` instead of tearing down the loop. Both
//! errors and panics leave the previous state in place.

use crate::behavior::Actor;
use crate::context::ActorContext;
use crate::event::SystemEvent;
use crate::message::{ActorRequest, Message};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

pub(crate) struct ActorCell<M: Message, A: Actor<M>> {
    actor: Arc<A>,
    state: A::State,
    receiver: mpsc::UnboundedReceiver<ActorRequest<M>>,
    ctx: ActorContext<M>,
}

impl<M: Message, A: Actor<M>> ActorCell<M, A> {
    pub(crate) fn new(
        actor: A,
        state: A::State,
        receiver: mpsc::UnboundedReceiver<ActorRequest<M>>,
        ctx: ActorContext<M>,
    ) -> Self {
        Self {
            actor: Arc::new(actor),
            state,
            receiver,
            ctx,
        }
    }

    /// Runs the actor's event loop, processing requests until the mailbox closes.
    pub(crate) async fn run(mut self) {
        let path = self.ctx.self_path().clone();
        info!(actor = %path, "Actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                ActorRequest::Deliver { message } => {
                    debug!(actor = %path, ?message, "Deliver");
                    let actor = Arc::clone(&self.actor);
                    let state = self.state.clone();
                    let ctx = self.ctx.clone();
                    let outcome =
                        tokio::spawn(async move { actor.handle(&state, message, &ctx).await })
                            .await;

                    match outcome {
                        Ok(Ok(next)) => {
                            self.state = next;
                        }
                        Ok(Err(e)) => {
                            warn!(actor = %path, error = %e, "Handler failed");
                            self.ctx.system().publish(SystemEvent::HandlerFailed {
                                path: path.clone(),
                                error: e.to_string(),
                            });
                        }
                        Err(join_error) if join_error.is_panic() => {
                            let reason = panic_reason(join_error.into_panic());
                            error!(actor = %path, %reason, "Handler panicked");
                            self.ctx.system().publish(SystemEvent::HandlerPanicked {
                                path: path.clone(),
                                reason,
                            });
                        }
                        Err(join_error) => {
                            warn!(actor = %path, error = %join_error, "Handler cancelled");
                        }
                    }
                }
                ActorRequest::Snapshot { respond_to } => {
                    debug!(actor = %path, "Snapshot");
                    let _ = respond_to.send(Box::new(self.state.clone()));
                }
            }
        }

        info!(actor = %path, state = ?self.state, "Shutdown");
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
