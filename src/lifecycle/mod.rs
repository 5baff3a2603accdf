//! # System Lifecycle & Orchestration
//!
//! The saga's actors are simple one by one. Wiring them is where the
//! bootstrap logic lives, and this module is that wiring.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - spawn the processor and the inventory, then the customers
//! 2. **Addressing** - hand each actor the paths it must reach (customers and the
//!    inventory get the processor's path)
//! 3. **Triggering** - wake the customers so the saga starts
//! 4. **Graceful Shutdown** - drain every mailbox
//! 5. **Observability Setup** - initialize tracing
//!
//! ## Start-up order
//!
//! Actors only know each other by path, so spawn order does not matter for
//! correctness. It matters for liveness: a customer woken before the processor
//! exists sends a dead letter. [`BookstoreSystem::start`] therefore spawns the
//! processor and the inventory before any customer can be added.
//!
//! ## Graceful Shutdown
//!
//! Every actor context holds a handle to the system, so dropping handles never
//! stops anything. [`BookstoreSystem::shutdown`] closes the mailboxes explicitly
//! and waits for the actor tasks. A charge still waiting on its timer is lost.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the demo binary:
//!
//! ```bash
//! RUST_LOG=info cargo run      # saga milestones
//! RUST_LOG=debug cargo run     # every message routed
//! ```

pub mod bookstore_system;
pub mod tracing;

pub use bookstore_system::*;
pub use self::tracing::*;
