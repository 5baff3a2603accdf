//! # Observability & Tracing
//!
//! Every actor logs with the `tracing` crate, using its own path as a structured
//! field (`processor=`, `order=`, `account=`, `inventory=`, `customer=`), so one
//! order can be followed across actors by grepping for its id.
//!
//! The runtime itself logs under the field `actor=`:
//!
//! | Level | Runtime events |
//! |-------|----------------|
//! | `INFO` | system started/stopped, actor replaced, actor shutdown with final state |
//! | `DEBUG` | spawn, every delivered message, dead letters |
//! | `WARN` | handler returned an error |
//! | `ERROR` | handler panicked |
//!
//! **With `RUST_LOG=info`** a single order reads:
//!
//! ```text
//! INFO Ordering book customer=tjerk isbn=123
//! INFO Order accepted processor=bookstore://orderprocessor-1 order_id=6f1c…
//! INFO Order created order=bookstore://orderprocessor-1/order-6f1c…
//! INFO Charging credit card account=bookstore://orderprocessor-1/account-6f1c… delay=4s
//! INFO Shipping book inventory=bookstore://inventory order_id=Some(OrderId("6f1c…"))
//! INFO Order fulfilled processor=bookstore://orderprocessor-1 order_id=6f1c…
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless: only the first call installs.
pub fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // the actor path field already says where we are
        .compact()
        .try_init();
}
