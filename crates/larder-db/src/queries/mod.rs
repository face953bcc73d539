//! Query functions, one module per table family.

pub mod foods;
pub mod pantry;
pub mod recipes;
pub mod users;
