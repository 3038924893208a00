//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the store's operations in domain
//! terms: `create`, `find_all`, `find_one`, `update` and `remove`.
use crate::model::{DeleteConfirmation, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
///
/// Cheap to clone; every clone talks to the same actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

impl ProductClient {
    /// Stores a new product under the next id and returns it.
    #[instrument(skip(self))]
    pub async fn create(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every product, in creation order.
    pub async fn find_all(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    #[instrument(skip(self))]
    pub async fn find_one(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    /// Merges the present fields of `update` into the product and returns the result.
    #[instrument(skip(self))]
    pub async fn update(&self, id: ProductId, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deletes the product. Its id is never handed out again.
    pub async fn remove(&self, id: ProductId) -> Result<DeleteConfirmation, ProductError> {
        let removed = self.delete(id).await?;
        Ok(DeleteConfirmation::for_product(removed.id))
    }
}
