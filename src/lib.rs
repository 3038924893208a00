//! # Product Store
//!
//! An in-memory product catalog with Create/Read/Update/Delete over HTTP.
//!
//! The collection lives inside a single [`ResourceActor`](actor_framework::ResourceActor)
//! task. Nothing else touches it: callers hold a cloneable [`ProductClient`](clients::ProductClient)
//! whose requests queue up in the actor's mailbox and are served one at a time, so id
//! allocation is race-free and no reader ever sees a half-applied update.
//!
//! ## Module Tour
//!
//! ### 1. The Records ([`model`], [`product_actor`])
//! - [`Product`](model::Product) and its create/update payloads.
//! - The [`ActorEntity`](actor_framework::ActorEntity) implementation: how a product is
//!   built and how partial updates merge into it. Timestamps come from [`clock`].
//!
//! ### 2. The Interface ([`clients`])
//! - [`ProductClient`](clients::ProductClient): `create`, `find_all`, `find_one`, `update`, `remove`.
//!
//! ### 3. The Orchestrator ([`lifecycle`])
//! - [`ProductSystem`](lifecycle::ProductSystem) spawns the actor and shuts it down.
//! - [`setup_tracing`](lifecycle::setup_tracing) installs the log subscriber.
//!
//! ### 4. The Boundary ([`http`], [`config`], [`shutdown`])
//! - An axum router that validates input and maps errors to status codes.
//! - Command line / environment configuration and signal handling for the binary.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --port 3000
//! ```

pub mod clients;
pub mod clock;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod shutdown;
