//! # Generic Messages
//!
//! The request type carried from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map directly onto the CRUD lifecycle of a resource:
///
/// - **Create**: builds a record from [`ActorEntity::Create`] and replies with it.
/// - **Get**: fetches one record by id, `None` when absent.
/// - **List**: every stored record, in ascending id order.
/// - **Update**: merges an [`ActorEntity::Update`] and replies with the merged record.
/// - **Delete**: removes a record and replies with what was removed.
///
/// The type is generic over `T: ActorEntity`, so a payload meant for one resource can
/// never be sent to another resource's actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
}
