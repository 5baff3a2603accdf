//! # Order Processor
//!
//! The choreography engine. It keeps no state of its own: every step is chosen
//! from the type of the incoming message alone, and the progress of an order
//! lives in that order's stage log.
//!
//! | Incoming | Action |
//! |----------|--------|
//! | `ORDER_BOOK_CMD` | new order id, spawn `order-<id>`, send it `CREATE_ORDER_CMD` |
//! | `ORDER_CREATED_EVT` | spawn `account-<id>`, send it `CHARGE_CREDITCARD_CMD`, forward to the order |
//! | `ACCOUNT_CHARGED_EVT` | send `SHIP_BOOK_CMD` to the inventory, forward to the order |
//! | `BOOK_SHIPPED_EVT` | forward to the order |
//!
//! Anything else is ignored.

use crate::account_actor;
use crate::address::{account_address, inventory_address, order_address, processor_name};
use crate::config::{ChargeDelay, MatchMode};
use crate::error::SagaError;
use crate::model::{Message, MessageType, OrderId};
use crate::order_actor;
use actor_framework::{Actor, ActorContext, ActorPath, ActorSystem, FrameworkError};
use async_trait::async_trait;
use tracing::{debug, info};

pub struct OrderProcessor {
    /// Handed to every account actor this processor spawns.
    pub charge_delay: ChargeDelay,
    pub match_mode: MatchMode,
}

impl OrderProcessor {
    /// Step 1: a customer asked for a book.
    fn order_book(&self, msg: Message, ctx: &ActorContext<Message>) -> Result<(), SagaError> {
        let order_id = OrderId::generate();
        let order = order_actor::spawn(ctx, &order_id)?;
        info!(processor = %ctx.self_path(), %order_id, "Order accepted");

        ctx.dispatch(
            &order,
            Message::new(
                MessageType::CreateOrderCmd,
                msg.payload.with_order_id(order_id),
            )
            .from_sender(ctx.self_path()),
        );
        Ok(())
    }

    /// Step 2: the order exists, charge the customer.
    fn order_created(&self, msg: Message, ctx: &ActorContext<Message>) -> Result<(), SagaError> {
        let order_id = required_order_id(&msg, MessageType::OrderCreatedEvt)?;
        account_actor::spawn(ctx, &order_id, self.charge_delay, self.match_mode)?;

        ctx.dispatch(
            &account_address(ctx.self_path(), &order_id),
            Message::new(MessageType::ChargeCreditcardCmd, msg.payload.clone())
                .from_sender(ctx.self_path()),
        );
        forward_to_order(&order_id, msg, ctx);
        Ok(())
    }

    /// Step 3: paid, ship the book.
    fn account_charged(&self, msg: Message, ctx: &ActorContext<Message>) -> Result<(), SagaError> {
        let order_id = required_order_id(&msg, MessageType::AccountChargedEvt)?;

        ctx.dispatch(
            &inventory_address(ctx.system().name()),
            Message::new(MessageType::ShipBookCmd, msg.payload.clone())
                .from_sender(ctx.self_path()),
        );
        forward_to_order(&order_id, msg, ctx);
        Ok(())
    }

    /// Step 4: shipped, only the order needs to know.
    fn book_shipped(&self, msg: Message, ctx: &ActorContext<Message>) -> Result<(), SagaError> {
        let order_id = required_order_id(&msg, MessageType::BookShippedEvt)?;
        info!(processor = %ctx.self_path(), %order_id, "Order fulfilled");
        forward_to_order(&order_id, msg, ctx);
        Ok(())
    }
}

#[async_trait]
impl Actor<Message> for OrderProcessor {
    type State = ();
    type Error = SagaError;

    async fn handle(
        &self,
        _state: &(),
        msg: Message,
        ctx: &ActorContext<Message>,
    ) -> Result<(), SagaError> {
        debug!(processor = %ctx.self_path(), kind = ?msg.kind, sender = ?msg.sender, "Routing");

        match msg.kind {
            Some(MessageType::OrderBookCmd) => self.order_book(msg, ctx),
            Some(MessageType::OrderCreatedEvt) => self.order_created(msg, ctx),
            Some(MessageType::AccountChargedEvt) => self.account_charged(msg, ctx),
            Some(MessageType::BookShippedEvt) => self.book_shipped(msg, ctx),
            _ => {
                debug!(processor = %ctx.self_path(), kind = ?msg.kind, "No route");
                Ok(())
            }
        }
    }
}

fn required_order_id(msg: &Message, kind: MessageType) -> Result<OrderId, SagaError> {
    msg.payload
        .order_id
        .clone()
        .ok_or(SagaError::MissingOrderId(kind))
}

/// Keeps the order's stage log a complete history of the saga.
fn forward_to_order(order_id: &OrderId, msg: Message, ctx: &ActorContext<Message>) {
    let order = order_address(ctx.self_path(), order_id);
    ctx.dispatch(&order, msg);
}

/// Spawns `<system>://orderprocessor-<processor_id>`.
pub fn spawn(
    system: &ActorSystem<Message>,
    processor_id: &str,
    processor: OrderProcessor,
) -> Result<ActorPath, FrameworkError> {
    system.spawn(&system.root(), &processor_name(processor_id), processor, ())
}
