//! Grocery ingredient aggregation
//!
//! Merges recipe ingredient lists into a single deduplicated grocery
//! sequence. Identity is the lower-cased trimmed name: no unit
//! normalization, no fuzzy matching.
//!
//! Two merge policies exist because the two entry points behave differently:
//! the single-recipe add keeps an existing entry's quantity untouched and
//! only accumulates source labels, while the bulk meal-plan add parses and
//! sums quantities per name+unit group. The divergence is inherited behavior
//! and is kept explicit here as a strategy enum instead of being unified.

use serde::{Deserialize, Serialize};

/// Raw ingredient tuple as supplied by the recipe-data collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    /// Free-form numeric-ish text (e.g. "2", "1.5", "a pinch")
    pub quantity: String,
    pub unit: Option<String>,
}

/// One aggregated grocery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryEntry {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    /// Recipe labels that contributed this entry; never empty
    pub source_recipes: Vec<String>,
    pub checked: bool,
}

/// How duplicate ingredient names are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Single-recipe add: keep the existing quantity, only record the new
    /// source label. Quantities are never summed on this path.
    KeepExisting,
    /// Bulk meal-plan add: group by name+unit, parse quantities as floats
    /// (unparseable defaults to 1) and sum them.
    SumQuantities,
}

/// Dedup key: lower-cased trimmed name
fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Unit component of the bulk-path grouping key
fn unit_key(unit: Option<&str>) -> String {
    unit.map(|u| u.trim().to_lowercase()).unwrap_or_default()
}

/// Parse a free-form quantity the way the display layer always has: take the
/// leading numeric prefix ("2 large" -> 2), and default to 1 when there is
/// none.
pub fn parse_quantity(quantity: &str) -> f64 {
    let trimmed = quantity.trim();

    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in trimmed.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '-' | '+' if i == 0 => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }

    match trimmed[..end].parse::<f64>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!("Unparseable quantity '{}', defaulting to 1", quantity);
            1.0
        }
    }
}

/// Format a summed quantity back into display text (drops a trailing .0)
fn format_quantity(value: f64) -> String {
    format!("{}", value)
}

/// Merge incoming ingredients into an existing grocery sequence.
///
/// Returns a fresh sequence; the input is never mutated. New entries are
/// prepended, so the most recently added item is always first. Empty input
/// returns the existing sequence unchanged.
pub fn merge_ingredients(
    existing: &[GroceryEntry],
    incoming: &[IngredientInput],
    recipe_label: &str,
    policy: MergePolicy,
) -> Vec<GroceryEntry> {
    let mut result: Vec<GroceryEntry> = existing.to_vec();

    for input in incoming {
        let key = name_key(&input.name);

        let found = result.iter_mut().find(|entry| match policy {
            MergePolicy::KeepExisting => name_key(&entry.name) == key,
            MergePolicy::SumQuantities => {
                name_key(&entry.name) == key && unit_key(entry.unit.as_deref()) == unit_key(input.unit.as_deref())
            }
        });

        match found {
            Some(entry) => {
                if policy == MergePolicy::SumQuantities {
                    let sum = parse_quantity(&entry.quantity) + parse_quantity(&input.quantity);
                    entry.quantity = format_quantity(sum);
                }
                if !entry.source_recipes.iter().any(|l| l == recipe_label) {
                    entry.source_recipes.push(recipe_label.to_string());
                }
            }
            None => {
                let quantity = match policy {
                    MergePolicy::KeepExisting => input.quantity.clone(),
                    // Normalize through the parser so later merges sum
                    // against a numeric value
                    MergePolicy::SumQuantities => format_quantity(parse_quantity(&input.quantity)),
                };
                result.insert(
                    0,
                    GroceryEntry {
                        name: input.name.trim().to_string(),
                        quantity,
                        unit: input.unit.clone(),
                        source_recipes: vec![recipe_label.to_string()],
                        checked: false,
                    },
                );
            }
        }
    }

    result
}

/// Ingredients of one recipe in a meal plan, tagged with its display label
#[derive(Debug, Clone)]
pub struct RecipeIngredients {
    pub label: String,
    pub items: Vec<IngredientInput>,
}

/// Bulk meal-plan add: merge every recipe's ingredients with the summing
/// policy, one recipe at a time so labels attach to the entries each recipe
/// actually touched.
pub fn merge_meal_plan(existing: &[GroceryEntry], recipes: &[RecipeIngredients]) -> Vec<GroceryEntry> {
    let mut result = existing.to_vec();
    for recipe in recipes {
        result = merge_ingredients(&result, &recipe.items, &recipe.label, MergePolicy::SumQuantities);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, quantity: &str, unit: Option<&str>) -> IngredientInput {
        IngredientInput {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.map(String::from),
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2"), 2.0);
        assert_eq!(parse_quantity("1.5"), 1.5);
        assert_eq!(parse_quantity(" 3 "), 3.0);
        assert_eq!(parse_quantity("2 large"), 2.0);
        assert_eq!(parse_quantity("1/2"), 1.0);
        assert_eq!(parse_quantity("a pinch"), 1.0);
        assert_eq!(parse_quantity(""), 1.0);
    }

    #[test]
    fn test_new_items_prepended() {
        let first = merge_ingredients(&[], &[input("Flour", "500", Some("g"))], "Bread", MergePolicy::KeepExisting);
        let second = merge_ingredients(&first, &[input("Yeast", "7", Some("g"))], "Bread", MergePolicy::KeepExisting);

        assert_eq!(second.len(), 2);
        assert_eq!(second[0].name, "Yeast");
        assert_eq!(second[1].name, "Flour");
    }

    #[test]
    fn test_keep_existing_retains_first_quantity() {
        // Same name under two labels: one entry, both labels, the quantity
        // from the first insertion survives.
        let first = merge_ingredients(&[], &[input("Tomato", "3", None)], "Salad", MergePolicy::KeepExisting);
        let second = merge_ingredients(&first, &[input("tomato", "5", None)], "Pasta", MergePolicy::KeepExisting);

        assert_eq!(second.len(), 1);
        assert_eq!(second[0].quantity, "3");
        assert_eq!(second[0].source_recipes, vec!["Salad", "Pasta"]);
    }

    #[test]
    fn test_keep_existing_label_is_set_not_list() {
        let first = merge_ingredients(&[], &[input("Basil", "1", None)], "Pesto", MergePolicy::KeepExisting);
        let second = merge_ingredients(&first, &[input("Basil", "1", None)], "Pesto", MergePolicy::KeepExisting);

        assert_eq!(second[0].source_recipes, vec!["Pesto"]);
    }

    #[test]
    fn test_sum_quantities_groups_case_insensitively() {
        let merged = merge_ingredients(
            &[],
            &[input("egg", "2", Some("pcs")), input("Egg", "3", Some("pcs"))],
            "Brunch",
            MergePolicy::SumQuantities,
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, "5");
    }

    #[test]
    fn test_sum_quantities_separates_units() {
        let merged = merge_ingredients(
            &[],
            &[input("Milk", "200", Some("ml")), input("Milk", "1", Some("cup"))],
            "Pancakes",
            MergePolicy::SumQuantities,
        );

        // Different units never merge; no conversion is attempted
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_sum_quantities_unparseable_defaults_to_one() {
        let merged = merge_ingredients(
            &[],
            &[input("Salt", "a pinch", None), input("Salt", "a dash", None)],
            "Soup",
            MergePolicy::SumQuantities,
        );

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, "2");
    }

    #[test]
    fn test_empty_incoming_is_a_no_op() {
        let existing = merge_ingredients(&[], &[input("Rice", "1", Some("kg"))], "Curry", MergePolicy::KeepExisting);
        let merged = merge_ingredients(&existing, &[], "Nothing", MergePolicy::KeepExisting);
        assert_eq!(merged, existing);
    }

    #[test]
    fn test_meal_plan_bulk_merge() {
        let plan = vec![
            RecipeIngredients {
                label: "Omelette".to_string(),
                items: vec![input("Egg", "3", Some("pcs")), input("Butter", "20", Some("g"))],
            },
            RecipeIngredients {
                label: "Fried Rice".to_string(),
                items: vec![input("egg", "2", Some("pcs")), input("Rice", "300", Some("g"))],
            },
        ];

        let merged = merge_meal_plan(&[], &plan);

        let egg = merged.iter().find(|e| name_key(&e.name) == "egg").unwrap();
        assert_eq!(egg.quantity, "5");
        assert_eq!(egg.source_recipes, vec!["Omelette", "Fried Rice"]);
    }

    #[test]
    fn test_every_entry_has_a_source() {
        let plan = vec![RecipeIngredients {
            label: "Stew".to_string(),
            items: vec![
                input("Beef", "500", Some("g")),
                input("Carrot", "3", None),
                input("Onion", "2", None),
            ],
        }];

        let merged = merge_meal_plan(&[], &plan);
        assert!(merged.iter().all(|e| !e.source_recipes.is_empty()));
    }

    #[test]
    fn test_fractional_sum_keeps_decimal() {
        let merged = merge_ingredients(
            &[],
            &[input("Cream", "0.5", Some("cup")), input("Cream", "0.25", Some("cup"))],
            "Sauce",
            MergePolicy::SumQuantities,
        );
        assert_eq!(merged[0].quantity, "0.75");
    }
}
