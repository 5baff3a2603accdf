use actor_framework::{DuplicatePolicy, FrameworkError, SystemEvent};
use bookstore_saga::address::{order_address, order_id_of};
use bookstore_saga::model::{Book, CustomerId, MessageType};
use bookstore_saga::{BookstoreSystem, ChargeDelay, SagaConfig, SagaError};
use std::time::Duration;

/// End-to-end tests: every real actor, polled from the outside.
///
/// Pattern 2: Full system
/// - Real processor, order, account, inventory and customer actors
/// - State observed through snapshots only

const SAGA_TIMEOUT: Duration = Duration::from_secs(5);

fn how_to_act() -> Book {
    Book::new(123, "how to act", "John", 12.3)
}

fn ruling_the_universe() -> Book {
    Book::new(456, "ruling the universe", "Lord Vader", 19.99)
}

fn start(name: &str) -> BookstoreSystem {
    BookstoreSystem::start(
        SagaConfig::default()
            .with_system_name(name)
            .with_charge_delay(ChargeDelay::IMMEDIATE),
    )
    .unwrap()
}

#[tokio::test]
async fn test_single_order_runs_the_whole_saga() {
    let bookstore = start("single");
    let tjerk = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    bookstore.wake(&tjerk);

    let orders = bookstore
        .order_client
        .wait_for_shipped(1, SAGA_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    let (path, state) = &orders[0];

    assert_eq!(
        state.events(),
        vec![
            MessageType::CreateOrderCmd,
            MessageType::OrderCreatedEvt,
            MessageType::AccountChargedEvt,
            MessageType::BookShippedEvt,
        ]
    );
    assert!(state
        .stages
        .windows(2)
        .all(|pair| pair[0].date <= pair[1].date));

    assert_eq!(state.details.customer_id, Some(CustomerId::from("tjerk")));
    assert_eq!(state.details.book, Some(how_to_act()));
    assert_eq!(state.details.order_id, order_id_of(path));
    assert_eq!(
        path,
        &order_address(&bookstore.processor, state.details.order_id.as_ref().unwrap())
    );

    bookstore.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_orders_do_not_mix() {
    let bookstore = start("concurrent");
    let tjerk = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    let luke = bookstore
        .add_customer("luke".into(), ruling_the_universe())
        .unwrap();
    bookstore.wake(&tjerk);
    bookstore.wake(&luke);

    let orders = bookstore
        .order_client
        .wait_for_shipped(2, SAGA_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
    assert_ne!(orders[0].0, orders[1].0);

    for (_, state) in &orders {
        assert_eq!(state.stages.len(), 4);
        let expected_book = match state.details.customer_id.as_ref().map(|id| id.0.as_str()) {
            Some("tjerk") => how_to_act(),
            Some("luke") => ruling_the_universe(),
            other => panic!("unexpected customer {other:?}"),
        };
        assert_eq!(state.details.book, Some(expected_book));
    }
    assert_ne!(orders[0].1.details.customer_id, orders[1].1.details.customer_id);

    bookstore.shutdown().await;
}

#[tokio::test]
async fn test_each_wake_places_another_order() {
    let bookstore = start("rewake");
    let tjerk = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    bookstore.wake(&tjerk);
    bookstore.wake(&tjerk);

    let orders = bookstore
        .order_client
        .wait_for_shipped(2, SAGA_TIMEOUT)
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
    assert!(orders
        .iter()
        .all(|(_, state)| state.details.customer_id == Some("tjerk".into())));
}

#[tokio::test]
async fn test_each_order_gets_its_own_account() {
    let bookstore = start("accounts");
    let tjerk = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    bookstore.wake(&tjerk);
    bookstore
        .order_client
        .wait_for_shipped(1, SAGA_TIMEOUT)
        .await
        .unwrap();

    let children = bookstore.system.children(&bookstore.processor);
    let names: Vec<&str> = children.iter().filter_map(|path| path.name()).collect();
    assert_eq!(names.len(), 2);
    assert!(names.iter().any(|name| name.starts_with("account-")));
    assert!(names.iter().any(|name| name.starts_with("order-")));
}

#[tokio::test]
async fn test_dispatch_to_missing_order_is_silently_dropped() {
    let bookstore = start("dropped");
    let mut events = bookstore.system.events();
    let live = bookstore.system.len();

    let ghost = order_address(&bookstore.processor, &"does-not-exist".into());
    bookstore.wake(&ghost);

    let event = tokio::time::timeout(SAGA_TIMEOUT, events.recv())
        .await
        .unwrap()
        .unwrap();
    assert!(matches!(event, SystemEvent::DeadLetter { to, .. } if to == ghost));
    assert_eq!(bookstore.system.len(), live);
    assert!(bookstore.order_client.list().is_empty());
}

#[tokio::test]
async fn test_reject_policy_refuses_duplicate_customers() {
    let mut config = SagaConfig::default()
        .with_system_name("strict-names")
        .with_charge_delay(ChargeDelay::IMMEDIATE);
    config.system.duplicate_policy = DuplicatePolicy::Reject;
    let bookstore = BookstoreSystem::start(config).unwrap();

    let first = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    let err = bookstore
        .add_customer("tjerk".into(), ruling_the_universe())
        .unwrap_err();
    assert_eq!(
        err,
        SagaError::Framework(FrameworkError::DuplicateActor(first))
    );
}

#[tokio::test]
async fn test_wait_for_shipped_times_out() {
    let bookstore = start("idle");
    let err = bookstore
        .order_client
        .wait_for_shipped(1, Duration::from_millis(50))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        SagaError::Timeout {
            completed: 0,
            expected: 1
        }
    );
}

#[tokio::test]
async fn test_order_client_refuses_non_order_paths() {
    let bookstore = start("client");
    let err = bookstore
        .order_client
        .get(&bookstore.inventory)
        .await
        .unwrap_err();
    assert_eq!(err, SagaError::NotAnOrder(bookstore.inventory.clone()));
}

#[tokio::test]
async fn test_wait_for_shipped_accepts_unbounded_timeout() {
    let bookstore = start("unbounded");
    let tjerk = bookstore.add_customer("tjerk".into(), how_to_act()).unwrap();
    bookstore.wake(&tjerk);

    let orders = bookstore
        .order_client
        .wait_for_shipped(1, Duration::MAX)
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
}
