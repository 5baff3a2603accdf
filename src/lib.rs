//! # Bookstore Saga
//!
//! An order-fulfillment workflow choreographed by path-addressed actors.
//!
//! A customer orders a book; the order processor reacts to each event by
//! dispatching the next command, and the order is created, charged and shipped
//! without any central transaction. Every step is also forwarded to the order's
//! own actor, whose stage log is the audit trail of the saga.
//!
//! ```text
//! customer ──ORDER_BOOK_CMD──▶ processor ──CREATE_ORDER_CMD──▶ order
//!                              processor ◀─ORDER_CREATED_EVT── order
//!                              processor ──CHARGE_CREDITCARD_CMD──▶ account
//!                              processor ◀─ACCOUNT_CHARGED_EVT── account   (after a random delay)
//!                              processor ──SHIP_BOOK_CMD──▶ inventory
//!                              processor ◀─BOOK_SHIPPED_EVT── inventory
//! ```
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`actor_framework`])
//! Registry, mailboxes, timers and fault isolation. Knows nothing about books.
//!
//! ### 2. The Data ([`model`], [`address`])
//! Messages, payloads and the naming scheme that makes every actor reachable by path.
//!
//! ### 3. The Actors ([`processor`], [`order_actor`], [`account_actor`], [`inventory_actor`], [`customer_actor`])
//! One module per role. Each implements the framework's `Actor` or `StatelessActor` trait.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Spawns the fixed actors, adds customers, shuts down.
//!
//! ### 5. The Interface ([`clients`])
//! Reads order state from outside the system.
//!
//! ## Delivery Semantics
//!
//! Dispatch is fire-and-forget and at-most-once. A message to a path nobody
//! lives at is dropped and shows up as a dead letter on the runtime's event bus.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! BOOKSTORE_CHARGE_STEP_MS=100 RUST_LOG=debug cargo run
//! ```

pub mod account_actor;
pub mod address;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod error;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod processor;

pub use config::{ChargeDelay, MatchMode, SagaConfig};
pub use error::{ConfigError, SagaError};
pub use lifecycle::BookstoreSystem;
