//! Recipe MCP tools
//!
//! Tools for managing recipes and their ingredient lines. Recipes are the
//! data source behind the grocery aggregation entry points.

use serde::Serialize;

use crate::db::Database;
use crate::models::{Recipe, RecipeCreate, RecipeIngredient, RecipeIngredientCreate, RecipeUpdate};

/// One ingredient line supplied inline on recipe creation
#[derive(Debug, Clone)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
}

/// Response for create_recipe
#[derive(Debug, Serialize)]
pub struct CreateRecipeResponse {
    pub id: i64,
    pub name: String,
    pub ingredient_count: usize,
    pub created_at: String,
}

/// One ingredient line in a recipe detail
#[derive(Debug, Serialize)]
pub struct IngredientLineDetail {
    pub id: i64,
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
}

/// Full recipe detail with ingredient lines
#[derive(Debug, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub ingredients: Vec<IngredientLineDetail>,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Recipe summary for listing
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: i64,
    pub name: String,
    pub ingredient_count: usize,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

/// Response for add_recipe_ingredient
#[derive(Debug, Serialize)]
pub struct AddIngredientResponse {
    pub id: i64,
    pub recipe_id: i64,
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
}

/// Create a new recipe, optionally with its ingredient lines in one call
pub fn create_recipe(
    db: &Database,
    name: &str,
    notes: Option<String>,
    ingredients: Vec<IngredientLine>,
) -> Result<CreateRecipeResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let recipe = Recipe::create(
        &conn,
        &RecipeCreate {
            name: name.to_string(),
            notes,
        },
    )
    .map_err(|e| format!("Failed to create recipe: {}", e))?;

    let mut ingredient_count = 0;
    for line in ingredients {
        if line.name.trim().is_empty() {
            continue;
        }
        RecipeIngredient::create(
            &conn,
            &RecipeIngredientCreate {
                recipe_id: recipe.id,
                name: line.name.trim().to_string(),
                quantity: line.quantity,
                unit: line.unit,
            },
        )
        .map_err(|e| format!("Failed to add ingredient: {}", e))?;
        ingredient_count += 1;
    }

    Ok(CreateRecipeResponse {
        id: recipe.id,
        name: recipe.name,
        ingredient_count,
        created_at: recipe.created_at,
    })
}

/// Get a recipe with its ingredient lines
pub fn get_recipe(db: &Database, id: i64) -> Result<Option<RecipeDetail>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let recipe = Recipe::get_by_id(&conn, id).map_err(|e| format!("Failed to get recipe: {}", e))?;

    match recipe {
        Some(recipe) => {
            let ingredients = RecipeIngredient::list_for_recipe(&conn, id)
                .map_err(|e| format!("Failed to get ingredients: {}", e))?;

            Ok(Some(RecipeDetail {
                id: recipe.id,
                name: recipe.name,
                ingredients: ingredients
                    .into_iter()
                    .map(|i| IngredientLineDetail {
                        id: i.id,
                        name: i.name,
                        quantity: i.quantity,
                        unit: i.unit,
                    })
                    .collect(),
                notes: recipe.notes,
                created_at: recipe.created_at,
                updated_at: recipe.updated_at,
            }))
        }
        None => Ok(None),
    }
}

/// List recipes with optional name search and pagination
pub fn list_recipes(
    db: &Database,
    query: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<ListRecipesResponse, String> {
    let limit = limit.clamp(1, 200);
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let recipes =
        Recipe::list(&conn, query, limit, offset).map_err(|e| format!("Failed to list recipes: {}", e))?;
    let total = Recipe::count(&conn).map_err(|e| format!("Failed to count recipes: {}", e))?;

    let mut summaries = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        let ingredients = RecipeIngredient::list_for_recipe(&conn, recipe.id)
            .map_err(|e| format!("Failed to get ingredients: {}", e))?;
        summaries.push(RecipeSummary {
            id: recipe.id,
            name: recipe.name,
            ingredient_count: ingredients.len(),
        });
    }

    Ok(ListRecipesResponse {
        recipes: summaries,
        total,
        limit,
        offset,
    })
}

/// Update a recipe's name or notes
pub fn update_recipe(
    db: &Database,
    id: i64,
    name: Option<String>,
    notes: Option<String>,
) -> Result<Option<RecipeDetail>, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    let updated = Recipe::update(&conn, id, &RecipeUpdate { name, notes })
        .map_err(|e| format!("Failed to update recipe: {}", e))?;

    match updated {
        Some(_) => get_recipe(db, id),
        None => Ok(None),
    }
}

/// Delete a recipe and its ingredient lines
pub fn delete_recipe(db: &Database, id: i64) -> Result<bool, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    Recipe::delete(&conn, id).map_err(|e| format!("Failed to delete recipe: {}", e))
}

/// Add one ingredient line to an existing recipe
pub fn add_recipe_ingredient(
    db: &Database,
    recipe_id: i64,
    name: &str,
    quantity: String,
    unit: Option<String>,
) -> Result<AddIngredientResponse, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Ingredient name cannot be empty".to_string());
    }

    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    if Recipe::get_by_id(&conn, recipe_id)
        .map_err(|e| format!("Failed to get recipe: {}", e))?
        .is_none()
    {
        return Err(format!("Recipe {} not found", recipe_id));
    }

    let ingredient = RecipeIngredient::create(
        &conn,
        &RecipeIngredientCreate {
            recipe_id,
            name: name.to_string(),
            quantity,
            unit,
        },
    )
    .map_err(|e| format!("Failed to add ingredient: {}", e))?;

    Ok(AddIngredientResponse {
        id: ingredient.id,
        recipe_id: ingredient.recipe_id,
        name: ingredient.name,
        quantity: ingredient.quantity,
        unit: ingredient.unit,
    })
}

/// Remove an ingredient line from a recipe
pub fn remove_recipe_ingredient(db: &Database, id: i64) -> Result<bool, String> {
    let conn = db.get_conn().map_err(|e| format!("Database error: {}", e))?;

    RecipeIngredient::delete(&conn, id).map_err(|e| format!("Failed to remove ingredient: {}", e))
}
