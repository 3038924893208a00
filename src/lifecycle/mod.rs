//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the product store: starting the actor,
//! injecting its dependencies, and shutting it down cleanly.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the product actor and its client
//! 2. **Dependency Injection** - Hand the actor its [`Clock`](crate::clock::Clock) via `run(context)`
//! 3. **Graceful Shutdown** - Close the mailbox and wait for the actor to drain it
//! 4. **Observability Setup** - Initialize tracing and logging infrastructure
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once queued requests are served
//! 3. **Actor cleans up** - Logs its final state
//! 4. **Await completion** - [`ProductSystem::shutdown`] waits for the actor task to finish
//!
//! ## Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging for the whole process.
//! See the [`tracing`] module for what gets traced and how to filter it.

pub mod product_system;
pub mod tracing;

pub use self::product_system::*;
pub use self::tracing::*;
