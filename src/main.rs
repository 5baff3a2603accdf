//! # Bookstore Saga Demo
//!
//! Starts the standard deployment, lets two customers order a book each and
//! prints the final state of every order once both have shipped.
//!
//! Configuration comes from the environment, see [`bookstore_saga::config`].

use bookstore_saga::lifecycle::setup_tracing;
use bookstore_saga::model::Book;
use bookstore_saga::{BookstoreSystem, SagaConfig};
use std::time::Duration;
use tracing::{error, info, Instrument};

/// Slack on top of the longest possible charge delay.
const SETTLE_MARGIN: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SagaConfig::from_env().map_err(|e| e.to_string())?;
    let timeout = config.charge_delay.max().saturating_add(SETTLE_MARGIN);
    info!("Starting application with the bookstore saga");

    let bookstore = BookstoreSystem::start(config).map_err(|e| e.to_string())?;

    let customers = [
        ("tjerk", Book::new(123, "how to act", "John", 12.3)),
        ("luke", Book::new(456, "ruling the universe", "Lord Vader", 19.99)),
    ];
    let expected = customers.len();
    for (customer_id, book) in customers {
        let customer = bookstore
            .add_customer(customer_id.into(), book)
            .map_err(|e| e.to_string())?;
        bookstore.wake(&customer);
    }

    let span = tracing::info_span!("order_processing");
    let result = async {
        info!("Waiting for orders to ship");
        bookstore
            .order_client
            .wait_for_shipped(expected, timeout)
            .await
    }
    .instrument(span)
    .await;

    match result {
        Ok(orders) => {
            for (path, state) in orders {
                let json = serde_json::to_string_pretty(&state).map_err(|e| e.to_string())?;
                info!(order = %path, "Final state\n{json}");
            }
        }
        Err(e) => error!(error = %e, "Saga did not complete"),
    }

    bookstore.shutdown().await;
    info!("Application completed successfully");
    Ok(())
}
