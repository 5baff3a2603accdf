//! # Account Actor
//!
//! One account actor is spawned per order. It stands in for a payment gateway:
//! on a charge command it waits a random [`ChargeDelay`] and then reports
//! `ACCOUNT_CHARGED_EVT` to its parent. The wait runs on a timer task, so the
//! actor is free to take its next message immediately.
//!
//! Its state is the payload of the last command it accepted.

use crate::address::account_name;
use crate::config::{ChargeDelay, MatchMode};
use crate::error::SagaError;
use crate::model::{Message, MessageType, OrderId, Payload};
use actor_framework::{Actor, ActorContext, ActorPath, FrameworkError};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct AccountActor {
    pub charge_delay: ChargeDelay,
    pub match_mode: MatchMode,
}

#[async_trait]
impl Actor<Message> for AccountActor {
    type State = Payload;
    type Error = SagaError;

    async fn handle(
        &self,
        state: &Payload,
        msg: Message,
        ctx: &ActorContext<Message>,
    ) -> Result<Payload, SagaError> {
        if !self
            .match_mode
            .accepts(&msg, MessageType::ChargeCreditcardCmd)
        {
            debug!(account = %ctx.self_path(), kind = ?msg.kind, "Ignoring message");
            return Ok(state.clone());
        }

        let Some(parent) = ctx.parent() else {
            return Ok(msg.payload);
        };
        let delay = self.charge_delay.sample();
        info!(account = %ctx.self_path(), ?delay, "Charging credit card");
        ctx.dispatch_after(
            delay,
            parent,
            Message::new(MessageType::AccountChargedEvt, msg.payload.clone())
                .from_sender(ctx.self_path()),
        );
        Ok(msg.payload)
    }
}

/// Spawns the account actor for `order_id` below the calling actor.
pub fn spawn(
    ctx: &ActorContext<Message>,
    order_id: &OrderId,
    charge_delay: ChargeDelay,
    match_mode: MatchMode,
) -> Result<ActorPath, FrameworkError> {
    ctx.spawn_child(
        &account_name(order_id),
        AccountActor {
            charge_delay,
            match_mode,
        },
        Payload::default(),
    )
}
