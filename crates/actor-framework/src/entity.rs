//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a resource type implements to be owned by a
//! [`ResourceActor`](crate::ResourceActor). It names the identifier, the create and update
//! DTOs, the runtime context handed to every hook, and the entity's error type.
//!
//! The actor only stores and routes. Everything that gives a record its meaning
//! (how it is built from a create payload, how a partial update merges into it) lives
//! in the two hooks below.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Identifiers
/// The actor allocates identifiers itself from a `u64` counter that starts at 1 and only
/// moves forward, so `Id` must be constructible from a `u64`. Records are kept ordered by
/// `Id`; because allocation is monotonic this is also creation order.
///
/// # Context
/// `Context` is injected once through [`ResourceActor::run`](crate::ResourceActor::run) and
/// passed by reference to every hook. Use `()` if no dependencies are needed.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Ord + Eq + Clone + Send + Sync + Display + Debug + From<u64> + 'static;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug + 'static;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug + 'static;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync + 'static;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from its freshly allocated id and the create payload.
    fn from_create_params(
        id: Self::Id,
        params: Self::Create,
        ctx: &Self::Context,
    ) -> Result<Self, Self::Error>;

    /// Merge an update into this entity.
    ///
    /// The actor calls this on a copy of the stored record and only commits the copy when
    /// the hook returns `Ok`, so an implementation may bail out half way without leaving
    /// a partially updated record behind.
    fn on_update(&mut self, update: Self::Update, ctx: &Self::Context) -> Result<(), Self::Error>;
}
