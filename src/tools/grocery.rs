//! Grocery list MCP tools
//!
//! List management plus the two aggregation entry points. Both entry points
//! follow the same snapshot discipline: load the list's items, run the pure
//! merge, write the whole result back in one transaction. The database stays
//! the single source of truth; nothing is cached between calls.

use serde::Serialize;

use crate::db::Database;
use crate::models::{GroceryItem, GroceryList, Recipe, RecipeIngredient};
use crate::nutrition::{
    categorize, merge_ingredients, merge_meal_plan, Category, IngredientInput, MergePolicy,
    RecipeIngredients,
};

/// Label attached to items added by hand rather than from a recipe
const MANUAL_SOURCE_LABEL: &str = "manual";

/// Response for create_grocery_list
#[derive(Debug, Serialize)]
pub struct CreateListResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

/// Grocery list summary for listing
#[derive(Debug, Serialize)]
pub struct ListSummary {
    pub id: i64,
    pub name: String,
    pub item_count: i64,
    pub updated_at: String,
}

/// Response for list_grocery_lists
#[derive(Debug, Serialize)]
pub struct ListGroceryListsResponse {
    pub lists: Vec<ListSummary>,
    pub count: usize,
}

/// One item in a grouped grocery list
#[derive(Debug, Serialize)]
pub struct GroceryItemDetail {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub checked: bool,
    pub source_recipes: Vec<String>,
}

/// Items of one store category, in display order
#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub items: Vec<GroceryItemDetail>,
}

/// Full grocery list grouped by category
#[derive(Debug, Serialize)]
pub struct GroceryListDetail {
    pub id: i64,
    pub name: String,
    pub item_count: usize,
    pub groups: Vec<CategoryGroup>,
    pub updated_at: String,
}

/// Response for the aggregation entry points
#[derive(Debug, Serialize)]
pub struct AddToListResponse {
    pub list_id: i64,
    pub items_total: usize,
    pub recipes_added: Vec<String>,
}

/// Create a new grocery list
pub fn create_grocery_list(db: &Database, name: &str) -> Result<CreateListResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("List name cannot be empty".to_string());
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let list = GroceryList::create(&conn, name).map_err(|e| format!("Failed to create list: {}", e))?;

    Ok(CreateListResponse {
        id: list.id,
        name: list.name,
        created_at: list.created_at,
    })
}

/// List all grocery lists, newest first
pub fn list_grocery_lists(db: &Database) -> Result<ListGroceryListsResponse, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let lists = GroceryList::list(&conn).map_err(|e| format!("Failed to list: {}", e))?;

    let mut summaries = Vec::with_capacity(lists.len());
    for list in lists {
        let item_count = GroceryItem::count_for_list(&conn, list.id)
            .map_err(|e| format!("Failed to count items: {}", e))?;
        summaries.push(ListSummary {
            id: list.id,
            name: list.name,
            item_count,
            updated_at: list.updated_at,
        });
    }

    let count = summaries.len();
    Ok(ListGroceryListsResponse {
        lists: summaries,
        count,
    })
}

/// Get a grocery list grouped by store category.
///
/// Grouping happens here, at read time: category is a pure function of the
/// item name and is never persisted. Within each group items keep their
/// stored order (newest first).
pub fn get_grocery_list(db: &Database, id: i64) -> Result<Option<GroceryListDetail>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let list = GroceryList::get_by_id(&conn, id).map_err(|e| format!("Failed to get list: {}", e))?;
    let Some(list) = list else {
        return Ok(None);
    };

    let items =
        GroceryItem::list_for_list(&conn, id).map_err(|e| format!("Failed to get items: {}", e))?;
    let item_count = items.len();

    let categorized: Vec<(Category, GroceryItemDetail)> = items
        .into_iter()
        .map(|item| {
            (
                categorize(&item.name),
                GroceryItemDetail {
                    id: item.id,
                    name: item.name,
                    quantity: item.quantity,
                    unit: item.unit,
                    checked: item.checked,
                    source_recipes: item.source_recipes,
                },
            )
        })
        .collect();

    let mut groups = Vec::new();
    let mut remaining = categorized;
    for &category in Category::ALL.iter() {
        let (matched, rest): (Vec<_>, Vec<_>) =
            remaining.into_iter().partition(|(c, _)| *c == category);
        remaining = rest;
        if !matched.is_empty() {
            groups.push(CategoryGroup {
                category,
                items: matched.into_iter().map(|(_, item)| item).collect(),
            });
        }
    }

    Ok(Some(GroceryListDetail {
        id: list.id,
        name: list.name,
        item_count,
        groups,
        updated_at: list.updated_at,
    }))
}

/// Load a recipe's ingredient lines as aggregator inputs
fn load_recipe_inputs(
    conn: &rusqlite::Connection,
    recipe_id: i64,
) -> Result<(String, Vec<IngredientInput>), String> {
    let recipe = Recipe::get_by_id(conn, recipe_id)
        .map_err(|e| format!("Failed to get recipe: {}", e))?
        .ok_or_else(|| format!("Recipe {} not found", recipe_id))?;

    let inputs = RecipeIngredient::list_for_recipe(conn, recipe_id)
        .map_err(|e| format!("Failed to get ingredients: {}", e))?
        .iter()
        .map(RecipeIngredient::to_input)
        .collect();

    Ok((recipe.name, inputs))
}

/// Add one recipe's ingredients to a list (keep-existing merge).
///
/// Duplicate names keep their existing quantity; only the source label is
/// recorded. This matches the single-recipe path's long-standing behavior
/// and deliberately differs from the bulk meal-plan path below.
pub fn add_recipe_to_grocery_list(
    db: &Database,
    list_id: i64,
    recipe_id: i64,
) -> Result<AddToListResponse, String> {
    let mut conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    if GroceryList::get_by_id(&conn, list_id)
        .map_err(|e| format!("Failed to get list: {}", e))?
        .is_none()
    {
        return Err(format!("Grocery list {} not found", list_id));
    }

    let (label, inputs) = load_recipe_inputs(&conn, recipe_id)?;

    let existing =
        GroceryItem::snapshot(&conn, list_id).map_err(|e| format!("Failed to load items: {}", e))?;
    let merged = merge_ingredients(&existing, &inputs, &label, MergePolicy::KeepExisting);

    GroceryItem::replace_for_list(&mut conn, list_id, &merged)
        .map_err(|e| format!("Failed to save items: {}", e))?;

    Ok(AddToListResponse {
        list_id,
        items_total: merged.len(),
        recipes_added: vec![label],
    })
}

/// Add a whole meal plan's ingredients to a list (summing merge).
///
/// Quantities are parsed and summed per name+unit group across all the
/// plan's recipes and anything already on the list.
pub fn add_meal_plan_to_grocery_list(
    db: &Database,
    list_id: i64,
    recipe_ids: &[i64],
) -> Result<AddToListResponse, String> {
    let mut conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    if GroceryList::get_by_id(&conn, list_id)
        .map_err(|e| format!("Failed to get list: {}", e))?
        .is_none()
    {
        return Err(format!("Grocery list {} not found", list_id));
    }

    let mut plan = Vec::with_capacity(recipe_ids.len());
    for &recipe_id in recipe_ids {
        let (label, items) = load_recipe_inputs(&conn, recipe_id)?;
        plan.push(RecipeIngredients { label, items });
    }

    let existing =
        GroceryItem::snapshot(&conn, list_id).map_err(|e| format!("Failed to load items: {}", e))?;
    let merged = merge_meal_plan(&existing, &plan);

    GroceryItem::replace_for_list(&mut conn, list_id, &merged)
        .map_err(|e| format!("Failed to save items: {}", e))?;

    Ok(AddToListResponse {
        list_id,
        items_total: merged.len(),
        recipes_added: plan.into_iter().map(|r| r.label).collect(),
    })
}

/// Add a single item by hand (keep-existing merge, "manual" source label)
pub fn add_grocery_item(
    db: &Database,
    list_id: i64,
    name: &str,
    quantity: String,
    unit: Option<String>,
) -> Result<AddToListResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Item name cannot be empty".to_string());
    }

    let mut conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    if GroceryList::get_by_id(&conn, list_id)
        .map_err(|e| format!("Failed to get list: {}", e))?
        .is_none()
    {
        return Err(format!("Grocery list {} not found", list_id));
    }

    let input = IngredientInput {
        name: name.to_string(),
        quantity,
        unit,
    };

    let existing =
        GroceryItem::snapshot(&conn, list_id).map_err(|e| format!("Failed to load items: {}", e))?;
    let merged = merge_ingredients(
        &existing,
        std::slice::from_ref(&input),
        MANUAL_SOURCE_LABEL,
        MergePolicy::KeepExisting,
    );

    GroceryItem::replace_for_list(&mut conn, list_id, &merged)
        .map_err(|e| format!("Failed to save items: {}", e))?;

    Ok(AddToListResponse {
        list_id,
        items_total: merged.len(),
        recipes_added: vec![MANUAL_SOURCE_LABEL.to_string()],
    })
}

/// Check or uncheck an item. Returns false if the item does not exist.
pub fn set_item_checked(db: &Database, item_id: i64, checked: bool) -> Result<bool, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    GroceryItem::set_checked(&conn, item_id, checked)
        .map_err(|e| format!("Failed to update item: {}", e))
}

/// Remove a single item from its list
pub fn remove_grocery_item(db: &Database, item_id: i64) -> Result<bool, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    GroceryItem::delete(&conn, item_id).map_err(|e| format!("Failed to remove item: {}", e))
}

/// Remove every checked item from a list, returning how many were removed
pub fn clear_checked_items(db: &Database, list_id: i64) -> Result<i64, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let removed = GroceryItem::clear_checked(&conn, list_id)
        .map_err(|e| format!("Failed to clear items: {}", e))?;
    GroceryList::touch(&conn, list_id).map_err(|e| format!("Failed to touch list: {}", e))?;

    Ok(removed)
}

/// Delete a grocery list with all its items
pub fn delete_grocery_list(db: &Database, id: i64) -> Result<bool, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    GroceryList::delete(&conn, id).map_err(|e| format!("Failed to delete list: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::run_migrations;
    use crate::tools::recipes::{create_recipe, IngredientLine};

    fn test_db() -> (tempfile::TempDir, Database) {
        let dir = tempfile::tempdir().expect("tempdir");
        let db = Database::new(dir.path().join("test.db")).expect("open db");
        db.with_conn(|conn| run_migrations(conn)).expect("migrate");
        (dir, db)
    }

    fn line(name: &str, quantity: &str, unit: Option<&str>) -> IngredientLine {
        IngredientLine {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.map(String::from),
        }
    }

    #[test]
    fn test_add_recipe_to_list_keeps_existing_quantity() {
        let (_dir, db) = test_db();

        let salad = create_recipe(&db, "Salad", None, vec![line("Tomato", "3", None)]).unwrap();
        let pasta = create_recipe(&db, "Pasta", None, vec![line("tomato", "5", None)]).unwrap();
        let list = create_grocery_list(&db, "Weekly").unwrap();

        add_recipe_to_grocery_list(&db, list.id, salad.id).unwrap();
        add_recipe_to_grocery_list(&db, list.id, pasta.id).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        assert_eq!(detail.item_count, 1);

        let item = &detail.groups[0].items[0];
        assert_eq!(item.quantity, "3");
        assert_eq!(item.source_recipes, vec!["Salad", "Pasta"]);
    }

    #[test]
    fn test_add_meal_plan_sums_quantities() {
        let (_dir, db) = test_db();

        let omelette =
            create_recipe(&db, "Omelette", None, vec![line("Egg", "3", Some("pcs"))]).unwrap();
        let fried_rice = create_recipe(
            &db,
            "Fried Rice",
            None,
            vec![line("egg", "2", Some("pcs")), line("Rice", "300", Some("g"))],
        )
        .unwrap();
        let list = create_grocery_list(&db, "Plan").unwrap();

        add_meal_plan_to_grocery_list(&db, list.id, &[omelette.id, fried_rice.id]).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        assert_eq!(detail.item_count, 2);

        let egg = detail
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|i| i.name.eq_ignore_ascii_case("egg"))
            .unwrap();
        assert_eq!(egg.quantity, "5");
        assert_eq!(egg.source_recipes, vec!["Omelette", "Fried Rice"]);
    }

    #[test]
    fn test_grouped_list_uses_categories() {
        let (_dir, db) = test_db();

        let recipe = create_recipe(
            &db,
            "Stir Fry",
            None,
            vec![
                line("Chicken Breast", "500", Some("g")),
                line("Broccoli", "1", None),
                line("Soy Sauce", "2", Some("tbsp")),
            ],
        )
        .unwrap();
        let list = create_grocery_list(&db, "Shopping").unwrap();
        add_recipe_to_grocery_list(&db, list.id, recipe.id).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        let categories: Vec<Category> = detail.groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            vec![Category::Produce, Category::Protein, Category::Pantry]
        );
    }

    #[test]
    fn test_check_and_clear_items() {
        let (_dir, db) = test_db();

        let list = create_grocery_list(&db, "Chores").unwrap();
        add_grocery_item(&db, list.id, "Milk", "1".to_string(), Some("l".to_string())).unwrap();
        add_grocery_item(&db, list.id, "Bread", "1".to_string(), None).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        let milk_id = detail
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|i| i.name == "Milk")
            .unwrap()
            .id;

        assert!(set_item_checked(&db, milk_id, true).unwrap());
        assert_eq!(clear_checked_items(&db, list.id).unwrap(), 1);

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        assert_eq!(detail.item_count, 1);
    }

    #[test]
    fn test_checked_state_survives_remerge() {
        let (_dir, db) = test_db();

        let salad = create_recipe(&db, "Salad", None, vec![line("Tomato", "3", None)]).unwrap();
        let soup = create_recipe(
            &db,
            "Soup",
            None,
            vec![line("Tomato", "2", None), line("Onion", "1", None)],
        )
        .unwrap();
        let list = create_grocery_list(&db, "Weekend").unwrap();

        add_recipe_to_grocery_list(&db, list.id, salad.id).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        let tomato_id = detail.groups[0].items[0].id;
        set_item_checked(&db, tomato_id, true).unwrap();

        // Re-merging rewrites rows but must carry the checked flag through
        add_recipe_to_grocery_list(&db, list.id, soup.id).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        let tomato = detail
            .groups
            .iter()
            .flat_map(|g| &g.items)
            .find(|i| i.name == "Tomato")
            .unwrap();
        assert!(tomato.checked);
    }

    #[test]
    fn test_newest_items_listed_first() {
        let (_dir, db) = test_db();

        let list = create_grocery_list(&db, "Order").unwrap();
        add_grocery_item(&db, list.id, "Apples", "4".to_string(), None).unwrap();
        add_grocery_item(&db, list.id, "Bananas", "6".to_string(), None).unwrap();

        let detail = get_grocery_list(&db, list.id).unwrap().unwrap();
        let produce = &detail.groups[0];
        assert_eq!(produce.items[0].name, "Bananas");
        assert_eq!(produce.items[1].name, "Apples");
    }

    #[test]
    fn test_missing_recipe_is_an_error() {
        let (_dir, db) = test_db();
        let list = create_grocery_list(&db, "Empty").unwrap();
        assert!(add_recipe_to_grocery_list(&db, list.id, 9999).is_err());
    }
}
