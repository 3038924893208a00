//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// No product is stored under the id (rendered as the bare number).
    #[error("Product with ID {0} not found")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<actor_framework::FrameworkError> for ProductError {
    fn from(e: actor_framework::FrameworkError) -> Self {
        match e {
            actor_framework::FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::FrameworkError;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = ProductError::from(FrameworkError::NotFound("999".into()));
        assert_eq!(err.to_string(), "Product with ID 999 not found");
    }

    #[test]
    fn test_channel_failures_become_communication_errors() {
        assert!(matches!(
            ProductError::from(FrameworkError::ActorClosed),
            ProductError::ActorCommunicationError(msg) if msg == "Actor closed"
        ));
        assert!(matches!(
            ProductError::from(FrameworkError::ActorDropped),
            ProductError::ActorCommunicationError(_)
        ));
    }
}
