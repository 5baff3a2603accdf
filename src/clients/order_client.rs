use crate::address::order_id_of;
use crate::error::SagaError;
use crate::model::Message;
use crate::order_actor::OrderState;
use actor_framework::{ActorPath, ActorSystem};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, instrument};

/// How often [`OrderClient::wait_for_shipped`] re-reads the order actors.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Observes the order actors of one processor.
///
/// Orders are discovered through the runtime registry and read through
/// snapshots, so the client never changes the saga.
#[derive(Clone)]
pub struct OrderClient {
    system: ActorSystem<Message>,
    processor: ActorPath,
}

impl OrderClient {
    pub fn new(system: ActorSystem<Message>, processor: ActorPath) -> Self {
        Self { system, processor }
    }

    /// Paths of all order actors spawned so far.
    pub fn list(&self) -> Vec<ActorPath> {
        self.system
            .children(&self.processor)
            .into_iter()
            .filter(|path| order_id_of(path).is_some())
            .collect()
    }

    /// Current state of the order actor at `path`.
    #[instrument(skip(self, path), fields(order = %path))]
    pub async fn get(&self, path: &ActorPath) -> Result<OrderState, SagaError> {
        if order_id_of(path).is_none() || !path.is_child_of(&self.processor) {
            return Err(SagaError::NotAnOrder(path.clone()));
        }
        debug!("Sending request");
        Ok(self.system.snapshot(path).await?)
    }

    /// States of all orders, in path order.
    pub async fn all(&self) -> Result<Vec<(ActorPath, OrderState)>, SagaError> {
        let mut orders = Vec::new();
        for path in self.list() {
            let state = self.get(&path).await?;
            orders.push((path, state));
        }
        Ok(orders)
    }

    /// Waits until at least `expected` orders have shipped.
    ///
    /// # Errors
    /// [`SagaError::Timeout`] once `timeout` elapses, carrying how far the saga got.
    #[instrument(skip(self))]
    pub async fn wait_for_shipped(
        &self,
        expected: usize,
        timeout: Duration,
    ) -> Result<Vec<(ActorPath, OrderState)>, SagaError> {
        // A timeout too large to represent means no deadline.
        let deadline = Instant::now().checked_add(timeout);
        loop {
            let orders = self.all().await?;
            let completed = orders.iter().filter(|(_, state)| state.is_shipped()).count();
            if completed >= expected {
                info!(completed, "Orders shipped");
                return Ok(orders);
            }
            if deadline.is_some_and(|deadline| Instant::now() >= deadline) {
                return Err(SagaError::Timeout {
                    completed,
                    expected,
                });
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}
