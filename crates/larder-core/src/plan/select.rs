//! Greedy local selection over working copies of the recipe pool and
//! pantry snapshot.

use larder_db::models::{PantryEntry, RecipeDetails};

use super::entry::MealPlanEntry;
use super::score::{coverage_score, pantry_match_index};

/// Result of local selection: the chosen entries plus whatever is left of
/// the working pantry after depletion. The assembler passes the leftover
/// pantry on to the generator chain.
#[derive(Debug, Clone)]
pub struct LocalSelection {
    pub meals: Vec<MealPlanEntry>,
    pub remaining_pantry: Vec<PantryEntry>,
}

/// Greedily fill up to `requested` meal slots from the user's own catalog.
///
/// Each round rescores the surviving pool against the current working
/// pantry, drops recipes scoring 0 (they are never reconsidered within
/// this call), picks the highest scorer, and consumes the pantry entries
/// its ingredients matched. A matched entry is removed wholly -- presence
/// depletion, not quantity subtraction -- so the next round sees a
/// smaller pantry.
///
/// The pool stays in catalog order throughout, so a score tie resolves to
/// the earliest catalog entry deterministically. A recipe is selected at
/// most once per call. Stops early when the pool empties.
pub fn select_local_meals(
    requested: usize,
    recipes: Vec<RecipeDetails>,
    pantry: Vec<PantryEntry>,
) -> LocalSelection {
    let mut pool = recipes;
    let mut working = pantry;
    let mut meals = Vec::new();

    while meals.len() < requested {
        // Rescore and prune: zero scorers contribute nothing this round or
        // any later round (the pantry only shrinks).
        let mut scored: Vec<(RecipeDetails, u32)> = std::mem::take(&mut pool)
            .into_iter()
            .map(|recipe| {
                let score = coverage_score(&recipe, &working);
                (recipe, score)
            })
            .filter(|&(_, score)| score > 0)
            .collect();

        if scored.is_empty() {
            break;
        }

        // Strictly-greater scan keeps the first max in catalog order.
        // (Iterator::max_by_key would return the last.)
        let mut best = 0;
        for (idx, &(_, score)) in scored.iter().enumerate() {
            if score > scored[best].1 {
                best = idx;
            }
        }

        let (chosen, _) = scored.remove(best);
        pool = scored.into_iter().map(|(recipe, _)| recipe).collect();

        for need in &chosen.ingredients {
            if let Some(idx) = pantry_match_index(&working, &need.food.name) {
                working.remove(idx);
            }
        }

        meals.push(MealPlanEntry::Saved {
            recipe_id: chosen.id,
            title: chosen.title,
            source: chosen.source,
            instructions: chosen.instructions,
        });
    }

    LocalSelection {
        meals,
        remaining_pantry: working,
    }
}
