//! Integration tests for pantry queries.
//!
//! Requires Docker (testcontainers) or an external PostgreSQL via
//! `LARDER_TEST_PG_URL`. Each test gets its own temporary database.

use sqlx::PgPool;
use uuid::Uuid;

use larder_db::queries::{foods, pantry, users};
use larder_test_utils::{create_test_db, drop_test_db};

async fn seed_user(pool: &PgPool) -> Uuid {
    users::insert_user(pool, "alice")
        .await
        .expect("insert_user should succeed")
        .id
}

#[tokio::test]
async fn add_and_snapshot_pantry() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    let egg = foods::upsert_food(&pool, "Egg").await.unwrap();
    let milk = foods::upsert_food(&pool, "Milk").await.unwrap();

    pantry::add_pantry_item(&pool, user_id, egg.id, 6.0, None)
        .await
        .expect("add egg should succeed");
    pantry::add_pantry_item(&pool, user_id, milk.id, 1.0, Some("l"))
        .await
        .expect("add milk should succeed");

    let snapshot = pantry::pantry_for_user(&pool, user_id)
        .await
        .expect("snapshot should load");

    // Ordered by food name.
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[0].food.name, "Egg");
    assert_eq!(snapshot[0].quantity, 6.0);
    assert_eq!(snapshot[0].unit, None);
    assert_eq!(snapshot[1].food.name, "Milk");
    assert_eq!(snapshot[1].unit.as_deref(), Some("l"));

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn adding_same_food_accumulates_quantity() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    let flour = foods::upsert_food(&pool, "Flour").await.unwrap();

    pantry::add_pantry_item(&pool, user_id, flour.id, 500.0, Some("g"))
        .await
        .unwrap();
    let updated = pantry::add_pantry_item(&pool, user_id, flour.id, 250.0, Some("g"))
        .await
        .unwrap();

    assert_eq!(updated.quantity, 750.0);

    let snapshot = pantry::pantry_for_user(&pool, user_id).await.unwrap();
    assert_eq!(snapshot.len(), 1, "upsert must not create a second row");
    assert_eq!(snapshot[0].quantity, 750.0);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn remove_pantry_item_deletes_row() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    let egg = foods::upsert_food(&pool, "Egg").await.unwrap();
    pantry::add_pantry_item(&pool, user_id, egg.id, 2.0, None)
        .await
        .unwrap();

    let removed = pantry::remove_pantry_item(&pool, user_id, egg.id)
        .await
        .unwrap();
    assert!(removed);

    let again = pantry::remove_pantry_item(&pool, user_id, egg.id)
        .await
        .unwrap();
    assert!(!again, "second remove should find nothing");

    let snapshot = pantry::pantry_for_user(&pool, user_id).await.unwrap();
    assert!(snapshot.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn food_upsert_and_lookup_are_case_insensitive() {
    let (pool, db_name) = create_test_db().await;

    let first = foods::upsert_food(&pool, "Olive Oil").await.unwrap();
    let second = foods::upsert_food(&pool, "olive oil").await.unwrap();
    assert_eq!(first.id, second.id, "upsert must reuse the existing food");

    let found = foods::get_food_by_name(&pool, "OLIVE OIL").await.unwrap();
    assert_eq!(found.map(|f| f.id), Some(first.id));

    let all = foods::list_foods(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Olive Oil");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn snapshots_are_scoped_to_the_user() {
    let (pool, db_name) = create_test_db().await;
    let alice = seed_user(&pool).await;
    let bob = users::insert_user(&pool, "bob").await.unwrap().id;

    let egg = foods::upsert_food(&pool, "Egg").await.unwrap();
    pantry::add_pantry_item(&pool, alice, egg.id, 2.0, None)
        .await
        .unwrap();

    let bobs = pantry::pantry_for_user(&pool, bob).await.unwrap();
    assert!(bobs.is_empty(), "bob must not see alice's pantry");

    pool.close().await;
    drop_test_db(&db_name).await;
}
