//! # Product Actor
//!
//! This module implements the Product resource actor: the sole owner of the product
//! collection and its id counter.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use product_store::clients::ProductClient;
//! use product_store::clock::system_clock;
//! use product_store::model::ProductCreate;
//! use product_store::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor with the clock it stamps timestamps from
//!     tokio::spawn(actor.run(system_clock()));
//!
//!     let params = ProductCreate {
//!         name: "Widget".to_string(),
//!         description: "A small widget".to_string(),
//!         price: 29.99,
//!         stock: 100.0,
//!     };
//!     let product = client.create(params).await?;
//!     assert_eq!(product.id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client with a mailbox of `capacity` requests.
pub fn new(capacity: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(capacity)
}
