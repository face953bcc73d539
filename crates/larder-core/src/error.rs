//! Error taxonomy for the generation engine.
//!
//! Only two things can abort a generation request: the caller cancelling
//! it, or a loader failing. Everything else -- generators erroring,
//! generators under-delivering, an empty catalog -- degrades to a shorter
//! plan instead. Callers therefore always see a complete (if short) plan,
//! a cancellation, or a fatal data error, never a partial one.

use thiserror::Error;

/// Errors surfaced by [`crate::plan::generate_meal_plan`].
#[derive(Debug, Error)]
pub enum PlanError {
    /// The caller's cancellation token fired mid-request. Propagated, not
    /// logged as a failure.
    #[error("meal plan generation was cancelled")]
    Cancelled,

    /// A pantry or recipe loader failed. Fatal for this request.
    #[error("failed to load meal plan inputs")]
    Data(#[source] anyhow::Error),
}
