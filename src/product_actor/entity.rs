//! [`ActorEntity`] implementation for the Product domain type.
//!
//! Enables [`Product`] to be managed by the generic [`ResourceActor`](actor_framework::ResourceActor).
//! The actor's context is the [`Clock`](crate::clock::Clock) that stamps `createdAt` and
//! `updatedAt`.

use super::error::ProductError;
use crate::clock::SharedClock;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Context = SharedClock;
    type Error = ProductError;

    /// Creates a new Product with both timestamps set to the current time.
    fn from_create_params(
        id: ProductId,
        params: ProductCreate,
        clock: &SharedClock,
    ) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params, clock.now()))
    }

    /// Merges a partial update.
    ///
    /// # Fields Updated
    /// - `name`, `description`, `price`, `stock`: overwritten when present
    /// - `updated_at`: refreshed, never earlier than its previous value
    fn on_update(&mut self, update: ProductUpdate, clock: &SharedClock) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        self.updated_at = clock.now().max(self.updated_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    struct FixedClock(Mutex<DateTime<Utc>>);

    impl FixedClock {
        fn set(&self, at: DateTime<Utc>) {
            *self.0.lock().unwrap() = at;
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            *self.0.lock().unwrap()
        }
    }

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn params() -> ProductCreate {
        ProductCreate {
            name: "Test Product".into(),
            description: "Test Description".into(),
            price: 100.0,
            stock: 10.0,
        }
    }

    #[test]
    fn test_create_stamps_equal_timestamps() {
        let clock: SharedClock = Arc::new(FixedClock(Mutex::new(start())));
        let product = Product::from_create_params(ProductId(1), params(), &clock).unwrap();

        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.name, "Test Product");
        assert_eq!(product.created_at, start());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_update_merges_only_present_fields() {
        let fixed = Arc::new(FixedClock(Mutex::new(start())));
        let clock: SharedClock = fixed.clone();
        let mut product = Product::from_create_params(ProductId(1), params(), &clock).unwrap();

        fixed.set(start() + Duration::seconds(30));
        let update = ProductUpdate {
            name: Some("Updated Product".into()),
            price: Some(150.0),
            ..Default::default()
        };
        product.on_update(update, &clock).unwrap();

        assert_eq!(product.name, "Updated Product");
        assert_eq!(product.price, 150.0);
        assert_eq!(product.description, "Test Description");
        assert_eq!(product.stock, 10.0);
        assert_eq!(product.id, ProductId(1));
        assert_eq!(product.created_at, start());
        assert_eq!(product.updated_at, start() + Duration::seconds(30));
    }

    #[test]
    fn test_updated_at_never_moves_backwards() {
        let fixed = Arc::new(FixedClock(Mutex::new(start())));
        let clock: SharedClock = fixed.clone();
        let mut product = Product::from_create_params(ProductId(1), params(), &clock).unwrap();

        fixed.set(start() - Duration::hours(1));
        product.on_update(ProductUpdate::default(), &clock).unwrap();

        assert_eq!(product.updated_at, start());
        assert!(product.created_at <= product.updated_at);
    }
}
