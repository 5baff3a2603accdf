//! # Order Actor
//!
//! One order actor exists per order. It is the saga's audit trail: every message
//! it receives is appended to its stage log and merged into its state.
//!
//! It is also the only actor that turns a command into an event. On
//! `CREATE_ORDER_CMD` it reports `ORDER_CREATED_EVT` back to its parent, the
//! order processor, which continues the saga from there.
//!
//! ## Structure
//!
//! - [`state`] - [`OrderState`] and its [`Stage`] log

pub mod state;

pub use state::{OrderState, Stage};

use crate::address::order_name;
use crate::error::SagaError;
use crate::model::{Message, MessageType, OrderId};
use actor_framework::{Actor, ActorContext, ActorPath, FrameworkError};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

pub struct OrderActor;

#[async_trait]
impl Actor<Message> for OrderActor {
    type State = OrderState;
    type Error = SagaError;

    async fn handle(
        &self,
        state: &OrderState,
        msg: Message,
        ctx: &ActorContext<Message>,
    ) -> Result<OrderState, SagaError> {
        debug!(order = %ctx.self_path(), kind = ?msg.kind, "Order received message");

        if msg.is(MessageType::CreateOrderCmd) {
            if let Some(parent) = ctx.parent() {
                info!(order = %ctx.self_path(), "Order created");
                ctx.dispatch(
                    &parent,
                    Message::new(MessageType::OrderCreatedEvt, msg.payload.clone())
                        .from_sender(ctx.self_path()),
                );
            }
        }

        let next = state.apply(&msg, Utc::now());
        debug!(order = %ctx.self_path(), stages = next.stages.len(), "Order state updated");
        Ok(next)
    }
}

/// Spawns the order actor for `order_id` below the calling actor.
pub fn spawn(
    ctx: &ActorContext<Message>,
    order_id: &OrderId,
) -> Result<ActorPath, FrameworkError> {
    ctx.spawn_child(&order_name(order_id), OrderActor, OrderState::new(order_id.clone()))
}
