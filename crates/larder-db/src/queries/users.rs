//! Database query functions for the `users` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::User;

/// Insert a new user. Returns the inserted row with server-generated
/// defaults (id, created_at). Fails on a duplicate username.
pub async fn insert_user(pool: &PgPool, username: &str) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username) VALUES ($1) RETURNING *",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .with_context(|| format!("failed to insert user {username:?}"))?;

    Ok(user)
}

/// Fetch a user by their unique username.
pub async fn get_user_by_username(pool: &PgPool, username: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("failed to fetch user {username:?}"))?;

    Ok(user)
}

/// Fetch a user by username, inserting one if absent.
pub async fn ensure_user(pool: &PgPool, username: &str) -> Result<User> {
    if let Some(user) = get_user_by_username(pool, username).await? {
        return Ok(user);
    }
    insert_user(pool, username).await
}
