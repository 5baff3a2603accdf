//! # Customer Actor
//!
//! The saga's trigger. A customer wants exactly one book; whatever message it
//! receives, it orders that book from the processor.

use crate::address::customer_name;
use crate::model::{Book, CustomerId, Message, MessageType, Payload};
use actor_framework::{ActorContext, ActorPath, ActorSystem, FrameworkError, StatelessActor};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::info;

pub struct CustomerActor {
    pub customer_id: CustomerId,
    pub book: Book,
    pub processor: ActorPath,
}

#[async_trait]
impl StatelessActor<Message> for CustomerActor {
    type Error = Infallible;

    async fn handle(&self, _msg: Message, ctx: &ActorContext<Message>) -> Result<(), Infallible> {
        info!(customer = %self.customer_id, isbn = self.book.isbn, "Ordering book");
        ctx.dispatch(
            &self.processor,
            Message::new(
                MessageType::OrderBookCmd,
                Payload::order_request(self.customer_id.clone(), self.book.clone()),
            )
            .from_sender(ctx.self_path()),
        );
        Ok(())
    }
}

/// Spawns `<system>://customer-<customerId>`.
pub fn spawn(
    system: &ActorSystem<Message>,
    customer_id: CustomerId,
    book: Book,
    processor: ActorPath,
) -> Result<ActorPath, FrameworkError> {
    let name = customer_name(&customer_id);
    system.spawn_stateless(
        &name,
        CustomerActor {
            customer_id,
            book,
            processor,
        },
    )
}
