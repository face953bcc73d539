//! A built-in, offline meal generator backed by a small table of staple
//! meals.
//!
//! Keeps the fallback chain useful on a fresh install, before any
//! third-party search integration is configured, and doubles as the
//! reference implementation for generator authors.

use anyhow::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use larder_db::models::PantryEntry;

use crate::plan::MealPlanEntry;
use crate::plan::score::pantry_match_index;

use super::trait_def::MealGenerator;

/// One suggestible staple meal.
struct Staple {
    title: &'static str,
    instructions: &'static str,
    /// Pantry foods that make this staple worth suggesting. All of them
    /// must be on hand for the staple to count as matched.
    key_foods: &'static [&'static str],
}

const STAPLES: &[Staple] = &[
    Staple {
        title: "Omelette",
        instructions: "Beat the eggs with a pinch of salt, melt butter in a hot pan, \
                       pour in the eggs and fold once just set.",
        key_foods: &["egg", "butter"],
    },
    Staple {
        title: "Fried Rice",
        instructions: "Fry cooked rice over high heat, push aside, scramble an egg \
                       in the same pan and toss together with a splash of soy sauce.",
        key_foods: &["rice", "egg"],
    },
    Staple {
        title: "Buttered Pasta",
        instructions: "Boil the pasta, drain, and toss with butter and a ladle of \
                       the cooking water until glossy.",
        key_foods: &["pasta", "butter"],
    },
    Staple {
        title: "Porridge",
        instructions: "Simmer oats in milk, stirring, until thick. Sweeten to taste.",
        key_foods: &["oats", "milk"],
    },
    Staple {
        title: "Pancakes",
        instructions: "Whisk flour, milk and an egg into a loose batter; fry ladles \
                       of it in butter until bubbles form, then flip.",
        key_foods: &["flour", "milk", "egg"],
    },
    Staple {
        title: "Tomato Bruschetta",
        instructions: "Toast slices of bread, rub with garlic, and top with chopped \
                       tomato, olive oil and salt.",
        key_foods: &["bread", "tomato"],
    },
];

const SOURCE: &str = "larder staples";

/// Offline generator suggesting staple meals for the foods on hand.
///
/// Staples whose key foods are all present in the pantry are suggested
/// first, in table order; when nothing matches, the table itself serves
/// as a generic suggestion list. Never yields more than asked for and
/// performs no I/O.
#[derive(Debug, Default)]
pub struct StaplesGenerator;

impl StaplesGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn pantry_has(pantry: &[PantryEntry], food: &str) -> bool {
    pantry_match_index(pantry, food).is_some()
}

#[async_trait]
impl MealGenerator for StaplesGenerator {
    fn name(&self) -> &str {
        "staples"
    }

    async fn generate(
        &self,
        count: usize,
        pantry: &[PantryEntry],
        _cancel: CancellationToken,
    ) -> Result<Vec<MealPlanEntry>> {
        let matched: Vec<&Staple> = STAPLES
            .iter()
            .filter(|staple| staple.key_foods.iter().all(|food| pantry_has(pantry, food)))
            .collect();

        let suggestions = if matched.is_empty() {
            STAPLES.iter().collect::<Vec<_>>()
        } else {
            matched
        };

        Ok(suggestions
            .into_iter()
            .take(count)
            .map(|staple| MealPlanEntry::Generated {
                title: staple.title.to_string(),
                source: Some(SOURCE.to_string()),
                instructions: staple.instructions.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_db::models::FoodRef;

    fn entry(name: &str) -> PantryEntry {
        PantryEntry {
            food: FoodRef {
                id: 1,
                name: name.to_string(),
            },
            quantity: 10.0,
            unit: None,
        }
    }

    #[tokio::test]
    async fn suggests_staples_matching_the_pantry() {
        let pantry = vec![entry("Egg"), entry("Butter")];
        let entries = StaplesGenerator::new()
            .generate(5, &pantry, CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), "Omelette");
        assert_eq!(entries[0].recipe_id(), None);
    }

    #[tokio::test]
    async fn key_food_matching_is_case_insensitive() {
        let pantry = vec![entry("RICE"), entry("egg")];
        let entries = StaplesGenerator::new()
            .generate(5, &pantry, CancellationToken::new())
            .await
            .unwrap();

        assert!(entries.iter().any(|e| e.title() == "Fried Rice"));
    }

    #[tokio::test]
    async fn empty_pantry_falls_back_to_generic_suggestions() {
        let entries = StaplesGenerator::new()
            .generate(2, &[], CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title(), "Omelette");
    }

    #[tokio::test]
    async fn never_yields_more_than_asked() {
        let entries = StaplesGenerator::new()
            .generate(1, &[], CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[tokio::test]
    async fn zero_count_yields_nothing() {
        let pantry = vec![entry("Egg"), entry("Butter")];
        let entries = StaplesGenerator::new()
            .generate(0, &pantry, CancellationToken::new())
            .await
            .unwrap();
        assert!(entries.is_empty());
    }
}
