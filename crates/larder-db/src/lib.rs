//! PostgreSQL persistence for larder: connection pooling, embedded
//! migrations, row models, and query functions.
//!
//! The engine in `larder-core` consumes this crate through the read
//! queries ([`queries::pantry::pantry_for_user`] and
//! [`queries::recipes::recipes_for_user`]), which return immutable
//! snapshot shapes ([`models::PantryEntry`], [`models::RecipeDetails`]).
//! Write queries exist for the CLI and for test setup.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
