//! The ordered fallback chain of meal generators.
//!
//! Generators are queried one at a time in registration (priority) order
//! until the requested number of entries is collected or the chain is
//! exhausted. A failing generator yields zero entries and the chain moves
//! on; cancellation aborts the whole chain.

use tokio_util::sync::CancellationToken;

use larder_db::models::PantryEntry;

use crate::error::PlanError;
use crate::plan::MealPlanEntry;

use super::trait_def::MealGenerator;

/// A priority-ordered collection of [`MealGenerator`] implementations.
///
/// Built once at startup; [`push`](Self::push) appends at the lowest
/// priority.
#[derive(Default)]
pub struct GeneratorChain {
    generators: Vec<Box<dyn MealGenerator>>,
}

impl GeneratorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a generator at the end (lowest priority) of the chain.
    pub fn push(&mut self, generator: impl MealGenerator + 'static) {
        self.generators.push(Box::new(generator));
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// `true` if no generators are registered.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Collect up to `deficit` entries from the chain.
    ///
    /// Generators run sequentially in priority order. Each may return
    /// fewer entries than asked for; the shortfall carries over to the
    /// next generator. Iteration stops as soon as the quota is met. A
    /// generator error is logged and treated as zero yield -- one
    /// misbehaving source never aborts the request. Exhausting the chain
    /// with entries still missing is not an error either; the caller gets
    /// a shorter result.
    ///
    /// Cancellation is the exception: it aborts the in-flight generator
    /// call and surfaces as [`PlanError::Cancelled`].
    pub async fn fill_remaining(
        &self,
        deficit: usize,
        pantry: &[PantryEntry],
        cancel: &CancellationToken,
    ) -> Result<Vec<MealPlanEntry>, PlanError> {
        let mut collected: Vec<MealPlanEntry> = Vec::new();

        for generator in &self.generators {
            let needed = deficit - collected.len();
            if needed == 0 {
                break;
            }

            let outcome = tokio::select! {
                biased;
                () = cancel.cancelled() => return Err(PlanError::Cancelled),
                result = generator.generate(needed, pantry, cancel.clone()) => result,
            };

            match outcome {
                Ok(entries) => {
                    tracing::debug!(
                        generator = generator.name(),
                        yielded = entries.len(),
                        needed,
                        "generator returned"
                    );
                    collected.extend(entries.into_iter().take(needed));
                }
                Err(error) => {
                    tracing::warn!(
                        generator = generator.name(),
                        error = %error,
                        "generator failed, continuing with next"
                    );
                }
            }
        }

        Ok(collected)
    }
}

impl std::fmt::Debug for GeneratorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorChain")
            .field(
                "generators",
                &self.generators.iter().map(|g| g.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
