//! The `MealGenerator` trait -- the plugin interface for external meal
//! sources.
//!
//! Each concrete generator (a recipe-search API client, the built-in
//! staples table, etc.) implements this trait. The trait is intentionally
//! object-safe so generators can be stored as `Box<dyn MealGenerator>` in
//! the [`super::GeneratorChain`].

use anyhow::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use larder_db::models::PantryEntry;

use crate::plan::MealPlanEntry;

/// A source of externally generated meal entries.
///
/// Implementations may perform network I/O. Timeout policy is the
/// implementation's own concern; cancellation is not -- `cancel` comes
/// from the caller and must be honored so an abandoned request does not
/// keep a generator running.
#[async_trait]
pub trait MealGenerator: Send + Sync {
    /// Stable name for this generator, used in logs.
    fn name(&self) -> &str;

    /// Produce up to `count` meal entries suited to the given pantry.
    ///
    /// Returning fewer than `count` entries, or none at all, is a normal
    /// outcome, not an error. An `Err` marks a transient fault (network,
    /// malformed response); the chain recovers from it.
    async fn generate(
        &self,
        count: usize,
        pantry: &[PantryEntry],
        cancel: CancellationToken,
    ) -> Result<Vec<MealPlanEntry>>;
}

// Compile-time assertion: MealGenerator must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn MealGenerator) {}
};
