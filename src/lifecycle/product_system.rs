use crate::clients::ProductClient;
use crate::clock::{system_clock, SharedClock};
use thiserror::Error;
use tracing::{error, info};

/// Errors raised while stopping the system.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Actor task failed: {0}")]
    ActorFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the product store.
///
/// `ProductSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the product actor
/// - **Dependency Wiring**: Injecting the clock the actor stamps timestamps from
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(32);
///
/// let product = system.product_client.create(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Spawns the product actor with a mailbox of `capacity` requests and the wall clock.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(capacity: usize) -> Self {
        Self::with_clock(capacity, system_clock())
    }

    /// Spawns the product actor with an explicit clock.
    pub fn with_clock(capacity: usize, clock: SharedClock) -> Self {
        let (product_actor, product_client) = crate::product_actor::new(capacity);
        let handle = tokio::spawn(product_actor.run(clock));
        info!(capacity, "Product system started");

        Self {
            product_client: ProductClient::new(product_client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops this system's client and waits for the actor to drain its mailbox and exit.
    /// The actor only stops once *every* clone of the client is gone, so callers must
    /// drop the clones they handed out (e.g. the HTTP router) first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(LifecycleError::ActorFailed)` if the actor task panicked or was cancelled
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        // Closing the last sender makes the actor's `recv()` return `None`.
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Product actor failed");
            return Err(e.into());
        }

        info!("System shutdown complete");
        Ok(())
    }
}
