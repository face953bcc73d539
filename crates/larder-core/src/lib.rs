//! The meal-plan generation engine.
//!
//! Given a user's pantry snapshot and recipe catalog, the engine greedily
//! selects the recipes that best cover the pantry ([`plan::select`]),
//! depleting a working copy of the pantry as it goes, and falls back to an
//! ordered chain of pluggable generators ([`generator::chain`]) for any
//! meal slots local selection could not fill. [`plan::generate_meal_plan`]
//! is the top-level entry point.

pub mod error;
pub mod generator;
pub mod plan;

pub use error::PlanError;
