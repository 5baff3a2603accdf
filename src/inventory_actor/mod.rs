//! # Inventory Actor
//!
//! The single warehouse of the deployment. On a ship command it ships at once
//! and reports `BOOK_SHIPPED_EVT`.
//!
//! The report goes to the processor address the actor was built with, not to
//! its parent. Both are the same actor in the standard deployment, but only the
//! configured processor is contractually the recipient.
//!
//! There is no stock tracking: the state is simply the last accepted payload.

use crate::address::INVENTORY;
use crate::config::MatchMode;
use crate::error::SagaError;
use crate::model::{Message, MessageType, Payload};
use actor_framework::{Actor, ActorContext, ActorPath, ActorSystem, FrameworkError};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct InventoryActor {
    pub processor: ActorPath,
    pub match_mode: MatchMode,
}

#[async_trait]
impl Actor<Message> for InventoryActor {
    type State = Payload;
    type Error = SagaError;

    async fn handle(
        &self,
        state: &Payload,
        msg: Message,
        ctx: &ActorContext<Message>,
    ) -> Result<Payload, SagaError> {
        if !self.match_mode.accepts(&msg, MessageType::ShipBookCmd) {
            debug!(inventory = %ctx.self_path(), kind = ?msg.kind, "Ignoring message");
            return Ok(state.clone());
        }

        info!(
            inventory = %ctx.self_path(),
            order_id = ?msg.payload.order_id,
            "Shipping book"
        );
        ctx.dispatch(
            &self.processor,
            Message::new(MessageType::BookShippedEvt, msg.payload.clone())
                .from_sender(ctx.self_path()),
        );
        Ok(msg.payload)
    }
}

/// Spawns the inventory at `<system>://inventory`.
pub fn spawn(
    system: &ActorSystem<Message>,
    processor: ActorPath,
    match_mode: MatchMode,
) -> Result<ActorPath, FrameworkError> {
    system.spawn(
        &system.root(),
        INVENTORY,
        InventoryActor {
            processor,
            match_mode,
        },
        Payload::default(),
    )
}
