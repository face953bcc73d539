//! Coverage scoring: how well a recipe's ingredient list is satisfied by
//! a pantry snapshot.

use larder_db::models::{PantryEntry, RecipeDetails};

/// Points for an ingredient whose pantry match covers the full required
/// quantity.
const COVERED: u32 = 2;
/// Points for an ingredient whose food is in the pantry but in
/// insufficient quantity.
const PARTIAL: u32 = 1;

/// Index of the first pantry entry whose food name matches `name`.
///
/// Matching uses the food's weak key (case-insensitive name), not its id,
/// so two distinct foods sharing a name are indistinguishable here. The
/// depletion step in [`super::select`] uses this same helper, keeping the
/// matching contract identical in both places.
pub(crate) fn pantry_match_index(pantry: &[PantryEntry], name: &str) -> Option<usize> {
    pantry
        .iter()
        .position(|entry| entry.food.name.eq_ignore_ascii_case(name))
}

/// Compute the coverage score of a recipe against a pantry snapshot.
///
/// Per ingredient: 2 points when a matching pantry entry covers the
/// required quantity, 1 when the food is present but short, 0 when absent.
/// The score is the sum over all ingredients -- unbounded above, 0 for a
/// recipe with no ingredients.
pub fn coverage_score(recipe: &RecipeDetails, pantry: &[PantryEntry]) -> u32 {
    recipe
        .ingredients
        .iter()
        .map(|need| {
            match pantry_match_index(pantry, &need.food.name).map(|idx| &pantry[idx]) {
                Some(entry) if entry.quantity >= need.quantity => COVERED,
                Some(_) => PARTIAL,
                None => 0,
            }
        })
        .sum()
}
