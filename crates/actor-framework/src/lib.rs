//! # Actor Framework
//!
//! This crate provides the building blocks for owning a collection of records inside a
//! single Tokio task and talking to it through a typed, cloneable client. It implements a
//! **Resource-Oriented Architecture (ROA)** pattern on top of the **Actor Model**.
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard CRUD operations (Create, Read, Update, Delete) on one resource type
//! - Identifiers allocated by the owner of the data, never by callers
//! - A uniform API surface for every resource type
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor eliminates races between writers
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - How a record is built and how updates merge into it
//! 2. **Runtime Layer** ([`ResourceActor`]) - Storage, id allocation and message processing
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Note {
//!     id: u64,
//!     text: String,
//! }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] struct NoteError;
//!
//! impl std::fmt::Display for NoteError {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "note error") }
//! }
//! impl std::error::Error for NoteError {}
//!
//! impl ActorEntity for Note {
//!     type Id = u64;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u64, params: NoteCreate, _ctx: &()) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     assert_eq!(note.id, 1);
//!
//!     let fetched = client.get(note.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.text, "hello");
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected at **runtime** through [`ResourceActor::run`], not at
//! construction time. The context is borrowed by every hook, which is how a resource gets
//! at things like a clock without reaching for globals.
//!
//! ## Testing
//!
//! With the `mock` feature enabled, the [`mock`] module offers a `MockClient` that hands out
//! a real [`ResourceClient`] answered from scripted expectations, for testing wrapper
//! clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
