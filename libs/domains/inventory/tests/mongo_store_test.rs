//! Integration tests for the MongoDB item store
//!
//! These spin up a real MongoDB via testcontainers, so they are ignored by
//! default; run with `cargo test -- --ignored` when Docker is available.

use domain_inventory::{InventoryEngine, ItemFields, ItemStore, MongoItemStore};
use test_utils::{TestDataBuilder, TestMongo};

#[tokio::test]
#[ignore] // Requires Docker
async fn test_mongo_store_upsert_get_delete() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("mongo_upsert_get_delete");
    let store = MongoItemStore::new(mongo.database("pantry_test"));

    let name = builder.item_name("apple");
    assert!(store.get(&name).await.unwrap().is_none());

    store
        .upsert(
            &name,
            ItemFields {
                quantity: 1,
                image: Some("data:image/png;base64,AAAA".to_string()),
            },
        )
        .await
        .unwrap();

    let fields = store.get(&name).await.unwrap().unwrap();
    assert_eq!(fields.quantity, 1);
    assert!(fields.image.is_some());

    // Full replace: writing without an image must clear the stored one
    store
        .upsert(
            &name,
            ItemFields {
                quantity: 2,
                image: None,
            },
        )
        .await
        .unwrap();
    let fields = store.get(&name).await.unwrap().unwrap();
    assert_eq!(fields.quantity, 2);
    assert!(fields.image.is_none());

    store.delete(&name).await.unwrap();
    assert!(store.get(&name).await.unwrap().is_none());

    // Idempotent delete on an absent document
    store.delete(&name).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_engine_protocol_against_real_mongo() {
    let mongo = TestMongo::new().await;
    let builder = TestDataBuilder::from_test_name("engine_against_mongo");
    let store = MongoItemStore::new(mongo.database("pantry_test"));
    let mut engine = InventoryEngine::new(store);

    let apple = builder.item_name("apple");

    engine.resync().await.unwrap();
    engine.add(&apple, None).await.unwrap();
    engine.add(&apple, None).await.unwrap();

    let snapshot = engine.cached();
    let item = snapshot.iter().find(|i| i.name == apple).unwrap();
    assert_eq!(item.quantity, 2);

    engine.decrement_or_remove(&apple).await.unwrap();
    engine.decrement_or_remove(&apple).await.unwrap();
    assert!(engine.cached().iter().all(|i| i.name != apple));
}
