//! The meal plan entry type shared by local selection and external
//! generators.

use serde::{Deserialize, Serialize};

/// One filled slot in a meal plan.
///
/// Two variants share a common read contract: `Saved` references a recipe
/// already in the user's catalog, `Generated` carries content materialized
/// by an external generator that has no persisted recipe yet. Title,
/// source, and instructions are derivable for both; only `Saved` has a
/// recipe id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MealPlanEntry {
    /// A recipe from the user's own catalog.
    Saved {
        recipe_id: i64,
        title: String,
        source: Option<String>,
        instructions: String,
    },
    /// A meal produced by an external generator, not yet persisted.
    Generated {
        title: String,
        source: Option<String>,
        instructions: String,
    },
}

impl MealPlanEntry {
    pub fn title(&self) -> &str {
        match self {
            Self::Saved { title, .. } | Self::Generated { title, .. } => title,
        }
    }

    pub fn source(&self) -> Option<&str> {
        match self {
            Self::Saved { source, .. } | Self::Generated { source, .. } => source.as_deref(),
        }
    }

    pub fn instructions(&self) -> &str {
        match self {
            Self::Saved { instructions, .. } | Self::Generated { instructions, .. } => instructions,
        }
    }

    /// The catalog recipe this entry references, if any.
    pub fn recipe_id(&self) -> Option<i64> {
        match self {
            Self::Saved { recipe_id, .. } => Some(*recipe_id),
            Self::Generated { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved() -> MealPlanEntry {
        MealPlanEntry::Saved {
            recipe_id: 7,
            title: "Omelette".to_string(),
            source: Some("family".to_string()),
            instructions: "Beat eggs, cook.".to_string(),
        }
    }

    fn generated() -> MealPlanEntry {
        MealPlanEntry::Generated {
            title: "Stir Fry".to_string(),
            source: None,
            instructions: "Fry everything.".to_string(),
        }
    }

    #[test]
    fn shared_read_contract() {
        assert_eq!(saved().title(), "Omelette");
        assert_eq!(saved().source(), Some("family"));
        assert_eq!(saved().instructions(), "Beat eggs, cook.");

        assert_eq!(generated().title(), "Stir Fry");
        assert_eq!(generated().source(), None);
    }

    #[test]
    fn only_saved_carries_a_recipe_id() {
        assert_eq!(saved().recipe_id(), Some(7));
        assert_eq!(generated().recipe_id(), None);
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(saved()).unwrap();
        assert_eq!(json["kind"], "saved");
        assert_eq!(json["recipe_id"], 7);

        let json = serde_json::to_value(generated()).unwrap();
        assert_eq!(json["kind"], "generated");
    }
}
