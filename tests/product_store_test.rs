use product_store::lifecycle::ProductSystem;
use product_store::model::{ProductCreate, ProductId, ProductUpdate};
use product_store::product_actor::ProductError;

fn test_product(name: &str) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: "Test Description".to_string(),
        price: 100.0,
        stock: 10.0,
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;

    let first = products.create(test_product("Test Product")).await.unwrap();
    assert_eq!(first.id, ProductId(1));
    assert_eq!(first.name, "Test Product");
    assert_eq!(first.description, "Test Description");
    assert_eq!(first.price, 100.0);
    assert_eq!(first.stock, 10.0);
    assert_eq!(first.created_at, first.updated_at);

    let second = products.create(test_product("Test Product 2")).await.unwrap();
    assert_eq!(second.id, ProductId(2));

    let all = products.find_all().await.unwrap();
    assert_eq!(all, vec![first, second]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_all_on_fresh_store_is_empty() {
    let system = ProductSystem::new(32);
    assert!(system.product_client.find_all().await.unwrap().is_empty());
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_find_one_returns_created_record() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;

    let created = products.create(test_product("Lamp")).await.unwrap();
    assert_eq!(products.find_one(created.id).await.unwrap(), created);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_id_is_not_found_everywhere() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;
    let expected = "Product with ID 999 not found";

    let err = products.find_one(ProductId(999)).await.unwrap_err();
    assert_eq!(err.to_string(), expected);

    let err = products
        .update(ProductId(999), ProductUpdate::default())
        .await
        .unwrap_err();
    assert_eq!(err, ProductError::NotFound("999".into()));
    assert_eq!(err.to_string(), expected);

    let err = products.remove(ProductId(999)).await.unwrap_err();
    assert_eq!(err.to_string(), expected);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_partial_update_keeps_other_fields() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;

    let created = products.create(test_product("Test Product")).await.unwrap();
    let update = ProductUpdate {
        name: Some("Updated Product".to_string()),
        price: Some(150.0),
        ..Default::default()
    };
    let updated = products.update(created.id, update).await.unwrap();

    assert_eq!(updated.name, "Updated Product");
    assert_eq!(updated.price, 150.0);
    assert_eq!(updated.description, "Test Description");
    assert_eq!(updated.stock, 10.0);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // The merge is persisted, not just returned.
    assert_eq!(products.find_one(created.id).await.unwrap(), updated);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_deletes_and_confirms() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;

    let created = products.create(test_product("Test Product")).await.unwrap();
    let confirmation = products.remove(created.id).await.unwrap();
    assert_eq!(confirmation.message, "Product with ID 1 has been deleted");

    assert!(products.find_all().await.unwrap().is_empty());
    assert!(matches!(
        products.find_one(created.id).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        products.remove(created.id).await,
        Err(ProductError::NotFound(_))
    ));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let system = ProductSystem::new(32);
    let products = &system.product_client;

    products.create(test_product("one")).await.unwrap();
    let two = products.create(test_product("two")).await.unwrap();
    products.remove(two.id).await.unwrap();

    let three = products.create(test_product("three")).await.unwrap();
    assert_eq!(three.id, ProductId(3));

    let ids: Vec<_> = products
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![ProductId(1), ProductId(3)]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_yield_distinct_ids() {
    let system = ProductSystem::new(8);

    let mut handles = Vec::new();
    for i in 0..100 {
        let products = system.product_client.clone();
        handles.push(tokio::spawn(async move {
            products.create(test_product(&format!("Product {i}"))).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id.0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=100).collect::<Vec<u64>>());
    assert_eq!(system.product_client.find_all().await.unwrap().len(), 100);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_shutdown_waits_for_outstanding_clients() {
    let system = ProductSystem::new(32);
    let stale = system.product_client.clone();

    let shutdown = tokio::spawn(system.shutdown());
    // The actor keeps running while `stale` is alive.
    stale.create(test_product("late")).await.unwrap();
    drop(stale);

    shutdown.await.unwrap().unwrap();
}
