use crate::clients::OrderClient;
use crate::config::SagaConfig;
use crate::customer_actor;
use crate::error::SagaError;
use crate::inventory_actor;
use crate::model::{Book, CustomerId, Message};
use crate::processor::{self, OrderProcessor};
use actor_framework::{ActorPath, ActorSystem};
use tracing::info;

/// A running bookstore: one order processor, one inventory, any number of customers.
///
/// # Example
///
/// ```ignore
/// let bookstore = BookstoreSystem::start(SagaConfig::default())?;
/// let tjerk = bookstore.add_customer("tjerk".into(), Book::new(123, "how to act", "John", 12.3))?;
/// bookstore.wake(&tjerk);
///
/// let orders = bookstore.order_client.wait_for_shipped(1, Duration::from_secs(15)).await?;
/// bookstore.shutdown().await;
/// ```
pub struct BookstoreSystem {
    pub system: ActorSystem<Message>,
    pub processor: ActorPath,
    pub inventory: ActorPath,
    /// Read access to the orders of [`processor`](Self::processor).
    pub order_client: OrderClient,
}

impl BookstoreSystem {
    /// Creates the actor system and spawns the processor and the inventory.
    pub fn start(config: SagaConfig) -> Result<Self, SagaError> {
        info!(
            system = %config.system.name,
            processor_id = %config.processor_id,
            match_mode = %config.match_mode,
            "Starting bookstore"
        );
        let system = ActorSystem::new(config.system.clone());

        let processor = processor::spawn(
            &system,
            &config.processor_id,
            OrderProcessor {
                charge_delay: config.charge_delay,
                match_mode: config.match_mode,
            },
        )?;
        let inventory = inventory_actor::spawn(&system, processor.clone(), config.match_mode)?;
        let order_client = OrderClient::new(system.clone(), processor.clone());

        Ok(Self {
            system,
            processor,
            inventory,
            order_client,
        })
    }

    /// Spawns a customer who will order `book` when woken.
    pub fn add_customer(&self, customer_id: CustomerId, book: Book) -> Result<ActorPath, SagaError> {
        Ok(customer_actor::spawn(
            &self.system,
            customer_id,
            book,
            self.processor.clone(),
        )?)
    }

    /// Sends the empty trigger message to `customer`.
    pub fn wake(&self, customer: &ActorPath) {
        self.system.dispatch(customer, Message::wake());
    }

    /// Stops every actor after it has drained its mailbox.
    pub async fn shutdown(self) {
        info!("Shutting down bookstore...");
        self.system.shutdown().await;
        info!("Bookstore shutdown complete.");
    }
}
