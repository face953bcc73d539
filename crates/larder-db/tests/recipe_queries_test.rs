//! Integration tests for recipe queries.
//!
//! Requires Docker (testcontainers) or an external PostgreSQL via
//! `LARDER_TEST_PG_URL`. Each test gets its own temporary database.

use sqlx::PgPool;
use uuid::Uuid;

use larder_db::queries::recipes::{NewIngredient, NewRecipe};
use larder_db::queries::{foods, recipes, users};
use larder_test_utils::{create_test_db, drop_test_db};

async fn seed_user(pool: &PgPool) -> Uuid {
    users::insert_user(pool, "alice")
        .await
        .expect("insert_user should succeed")
        .id
}

#[tokio::test]
async fn insert_and_load_recipe_with_ingredients() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    let egg = foods::upsert_food(&pool, "Egg").await.unwrap();
    let butter = foods::upsert_food(&pool, "Butter").await.unwrap();

    let inserted = recipes::insert_recipe(
        &pool,
        &NewRecipe {
            user_id,
            title: "Scrambled Eggs",
            source: Some("family"),
            instructions: "Whisk, then scramble over low heat.",
            ingredients: vec![
                NewIngredient {
                    food_id: egg.id,
                    quantity: 3.0,
                    unit: None,
                },
                NewIngredient {
                    food_id: butter.id,
                    quantity: 15.0,
                    unit: Some("g"),
                },
            ],
        },
    )
    .await
    .expect("insert_recipe should succeed");

    assert_eq!(inserted.title, "Scrambled Eggs");

    let catalog = recipes::recipes_for_user(&pool, user_id)
        .await
        .expect("catalog should load");
    assert_eq!(catalog.len(), 1);

    let details = &catalog[0];
    assert_eq!(details.id, inserted.id);
    assert_eq!(details.source.as_deref(), Some("family"));
    // Ingredients preserve insertion order, with food names attached.
    assert_eq!(details.ingredients.len(), 2);
    assert_eq!(details.ingredients[0].food.name, "Egg");
    assert_eq!(details.ingredients[0].quantity, 3.0);
    assert_eq!(details.ingredients[1].food.name, "Butter");
    assert_eq!(details.ingredients[1].unit.as_deref(), Some("g"));

    let fetched = recipes::get_recipe(&pool, inserted.id)
        .await
        .expect("get_recipe should succeed")
        .expect("recipe should exist");
    assert_eq!(fetched.title, "Scrambled Eggs");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn duplicate_ingredient_food_rolls_back_recipe() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    let egg = foods::upsert_food(&pool, "Egg").await.unwrap();

    let result = recipes::insert_recipe(
        &pool,
        &NewRecipe {
            user_id,
            title: "Double Egg",
            source: None,
            instructions: "n/a",
            ingredients: vec![
                NewIngredient {
                    food_id: egg.id,
                    quantity: 1.0,
                    unit: None,
                },
                NewIngredient {
                    food_id: egg.id,
                    quantity: 2.0,
                    unit: None,
                },
            ],
        },
    )
    .await;

    assert!(result.is_err(), "duplicate food should be rejected");

    // The transaction must have rolled the recipe row back too.
    let catalog = recipes::recipes_for_user(&pool, user_id).await.unwrap();
    assert!(catalog.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn catalog_order_is_creation_order() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    for title in ["First", "Second", "Third"] {
        recipes::insert_recipe(
            &pool,
            &NewRecipe {
                user_id,
                title,
                source: None,
                instructions: "n/a",
                ingredients: vec![],
            },
        )
        .await
        .unwrap();
    }

    let catalog = recipes::recipes_for_user(&pool, user_id).await.unwrap();
    let titles: Vec<&str> = catalog.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn recipe_without_ingredients_loads_empty_list() {
    let (pool, db_name) = create_test_db().await;
    let user_id = seed_user(&pool).await;

    recipes::insert_recipe(
        &pool,
        &NewRecipe {
            user_id,
            title: "Tap Water",
            source: None,
            instructions: "Open tap.",
            ingredients: vec![],
        },
    )
    .await
    .unwrap();

    let catalog = recipes::recipes_for_user(&pool, user_id).await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert!(catalog[0].ingredients.is_empty());

    pool.close().await;
    drop_test_db(&db_name).await;
}
