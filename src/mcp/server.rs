//! NutriMate MCP Server Implementation
//!
//! Implements the MCP server with all NutriMate tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::db::Database;
use crate::tools::grocery;
use crate::tools::profile;
use crate::tools::recipes;
use crate::tools::recipes::IngredientLine;
use crate::tools::status::StatusTracker;
use crate::tools::targets;
use crate::tools::targets::BiometricParams;

/// NutriMate MCP Service
#[derive(Clone)]
pub struct NutriMateService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    database: Database,
    tool_router: ToolRouter<NutriMateService>,
}

impl NutriMateService {
    pub fn new(database_path: PathBuf, database: Database) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(database_path))),
            database,
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetProfileParams {
    /// Gender: male or female
    pub gender: String,
    /// Age in whole years
    pub age: i64,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level: sedentary, light, moderate, active, very_active
    /// (unknown values fall back to sedentary)
    #[serde(default = "default_activity")]
    pub activity_level: String,
    /// Goal: maintain, weight_loss, muscle_gain (unknown values fall back
    /// to maintain)
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_activity() -> String { "sedentary".to_string() }
fn default_goal() -> String { "maintain".to_string() }

// ============================================================================
// Target Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EstimateCalorieTargetParams {
    /// Gender: male or female. Omit all biometric fields to use the stored
    /// profile instead.
    pub gender: Option<String>,
    /// Age in whole years
    pub age: Option<i64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Activity level: sedentary, light, moderate, active, very_active
    pub activity_level: Option<String>,
    /// Goal: maintain, weight_loss, muscle_gain
    pub goal: Option<String>,
    /// Formula: mifflin_st_jeor (default) or harris_benedict
    #[serde(default = "default_formula")]
    pub formula: String,
}

fn default_formula() -> String { "mifflin_st_jeor".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DistributeCaloriesParams {
    /// Daily calorie total to split across meal slots
    pub daily_calories: i64,
    /// Include a snack slot (25/35/35/5 instead of 30/40/30)
    #[serde(default)]
    pub include_snack: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PlanMealTargetsParams {
    /// Gender: male or female. Omit all biometric fields to use the stored
    /// profile instead.
    pub gender: Option<String>,
    /// Age in whole years
    pub age: Option<i64>,
    /// Body weight in kilograms
    pub weight_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
    /// Activity level: sedentary, light, moderate, active, very_active
    pub activity_level: Option<String>,
    /// Goal: maintain, weight_loss, muscle_gain
    pub goal: Option<String>,
    /// Formula: mifflin_st_jeor (default) or harris_benedict
    #[serde(default = "default_formula")]
    pub formula: String,
    /// Include a snack slot
    #[serde(default)]
    pub include_snack: bool,
}

/// Assemble explicit biometrics from optional tool parameters.
///
/// Returns None when no biometric field was given (use the stored profile);
/// errors when only some of the required fields are present.
fn explicit_biometrics(
    gender: Option<String>,
    age: Option<i64>,
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    activity_level: Option<String>,
    goal: Option<String>,
) -> Result<Option<BiometricParams>, String> {
    if gender.is_none() && age.is_none() && weight_kg.is_none() && height_cm.is_none() {
        return Ok(None);
    }

    let (Some(gender), Some(age), Some(weight_kg), Some(height_cm)) =
        (gender, age, weight_kg, height_cm)
    else {
        return Err(
            "Explicit biometrics need gender, age, weight_kg and height_cm together".to_string(),
        );
    };

    Ok(Some(BiometricParams {
        gender,
        age,
        weight_kg,
        height_cm,
        activity_level: activity_level.unwrap_or_default(),
        goal: goal.unwrap_or_default(),
    }))
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

/// Single ingredient line for recipe creation
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientLineParam {
    /// Ingredient name (e.g., "Chicken Breast")
    pub name: String,
    /// Free-form quantity text (default "1")
    #[serde(default = "default_quantity")]
    pub quantity: String,
    /// Optional unit (e.g., "g", "pcs"); never normalized or converted
    pub unit: Option<String>,
}

fn default_quantity() -> String { "1".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateRecipeParams {
    /// Name of the recipe
    pub name: String,
    /// Optional notes
    pub notes: Option<String>,
    /// Ingredient lines to add in the same call
    #[serde(default)]
    pub ingredients: Vec<IngredientLineParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetRecipeParams {
    /// Recipe ID
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListRecipesParams {
    /// Search query for recipe name (optional)
    pub query: Option<String>,
    /// Maximum results (default 50, max 200)
    #[serde(default = "default_list_limit")]
    pub limit: i64,
    /// Offset for pagination (default 0)
    #[serde(default)]
    pub offset: i64,
}

fn default_list_limit() -> i64 { 50 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateRecipeParams {
    /// Recipe ID to update
    pub id: i64,
    /// New name (optional)
    pub name: Option<String>,
    /// New notes (optional)
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteRecipeParams {
    /// Recipe ID to delete
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddRecipeIngredientParams {
    /// Recipe ID to add the ingredient to
    pub recipe_id: i64,
    /// Ingredient name
    pub name: String,
    /// Free-form quantity text (default "1")
    #[serde(default = "default_quantity")]
    pub quantity: String,
    /// Optional unit
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveRecipeIngredientParams {
    /// Ingredient line ID to remove
    pub id: i64,
}

// ============================================================================
// Grocery Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateGroceryListParams {
    /// Name for the new list (e.g., "Week 32")
    pub name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetGroceryListParams {
    /// Grocery list ID
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DeleteGroceryListParams {
    /// Grocery list ID to delete
    pub id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddRecipeToListParams {
    /// Grocery list ID
    pub list_id: i64,
    /// Recipe whose ingredients should be added
    pub recipe_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddMealPlanToListParams {
    /// Grocery list ID
    pub list_id: i64,
    /// Recipes of the meal plan, added in one bulk operation
    pub recipe_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddGroceryItemParams {
    /// Grocery list ID
    pub list_id: i64,
    /// Item name
    pub name: String,
    /// Free-form quantity text (default "1")
    #[serde(default = "default_quantity")]
    pub quantity: String,
    /// Optional unit
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetItemCheckedParams {
    /// Grocery item ID
    pub item_id: i64,
    /// New checked state
    pub checked: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveGroceryItemParams {
    /// Grocery item ID to remove
    pub item_id: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ClearCheckedItemsParams {
    /// Grocery list ID
    pub list_id: i64,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriMateService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriMate service including build info, database status, and process information")]
    async fn status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for meal planning and grocery lists. Call this when starting a planning session or when unsure how the tools fit together.")]
    fn planning_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLANNING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLANNING_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Store the biometric profile used for calorie target estimation (upsert, single profile)")]
    fn set_profile(&self, Parameters(p): Parameters<SetProfileParams>) -> Result<CallToolResult, McpError> {
        let result = profile::set_profile(&self.database, &p.gender, p.age, p.weight_kg, p.height_cm, &p.activity_level, &p.goal)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get the stored biometric profile")]
    fn get_profile(&self) -> Result<CallToolResult, McpError> {
        let result = profile::get_profile(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(profile) => serde_json::to_string_pretty(&profile),
            None => Ok(r#"{"error": "No profile stored"}"#.to_string()),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Targets ---

    #[tool(description = "Estimate the daily calorie target (BMR, TDEE and goal adjustment). Pass biometrics inline or omit them to use the stored profile. Formula: mifflin_st_jeor (multiplicative goal) or harris_benedict (flat +/-400 kcal goal).")]
    fn estimate_calorie_target(&self, Parameters(p): Parameters<EstimateCalorieTargetParams>) -> Result<CallToolResult, McpError> {
        let biometrics = explicit_biometrics(p.gender, p.age, p.weight_kg, p.height_cm, p.activity_level, p.goal)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let result = targets::estimate_calorie_target(&self.database, biometrics.as_ref(), &p.formula)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Split a daily calorie total across meal slots. Without snack: breakfast 30%, lunch 40%, dinner 30%. With snack: 25/35/35/5. Slots round independently; the sum may drift from the input by a calorie or two.")]
    fn distribute_calories(&self, Parameters(p): Parameters<DistributeCaloriesParams>) -> Result<CallToolResult, McpError> {
        let result = targets::distribute(p.daily_calories, p.include_snack);
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Estimate the daily calorie target and split it across meal slots in one call")]
    fn plan_meal_targets(&self, Parameters(p): Parameters<PlanMealTargetsParams>) -> Result<CallToolResult, McpError> {
        let biometrics = explicit_biometrics(p.gender, p.age, p.weight_kg, p.height_cm, p.activity_level, p.goal)
            .map_err(|e| McpError::invalid_params(e, None))?;
        let result = targets::plan_meal_targets(&self.database, biometrics.as_ref(), &p.formula, p.include_snack)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Recipes ---

    #[tool(description = "Create a new recipe, optionally with its ingredient lines in the same call")]
    fn create_recipe(&self, Parameters(p): Parameters<CreateRecipeParams>) -> Result<CallToolResult, McpError> {
        let ingredients: Vec<IngredientLine> = p.ingredients.into_iter().map(|i| IngredientLine {
            name: i.name,
            quantity: i.quantity,
            unit: i.unit,
        }).collect();
        let result = recipes::create_recipe(&self.database, &p.name, p.notes, ingredients)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get full recipe details with ingredient lines")]
    fn get_recipe(&self, Parameters(p): Parameters<GetRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::get_recipe(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(recipe) => serde_json::to_string_pretty(&recipe),
            None => Ok(format!(r#"{{"error": "Recipe not found", "id": {}}}"#, p.id)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List recipes with optional name search and pagination")]
    fn list_recipes(&self, Parameters(p): Parameters<ListRecipesParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::list_recipes(&self.database, p.query.as_deref(), p.limit, p.offset)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Update a recipe's name or notes")]
    fn update_recipe(&self, Parameters(p): Parameters<UpdateRecipeParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::update_recipe(&self.database, p.id, p.name, p.notes)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(recipe) => serde_json::to_string_pretty(&recipe),
            None => Ok(format!(r#"{{"error": "Recipe not found", "id": {}}}"#, p.id)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Delete a recipe and its ingredient lines")]
    fn delete_recipe(&self, Parameters(p): Parameters<DeleteRecipeParams>) -> Result<CallToolResult, McpError> {
        let deleted = recipes::delete_recipe(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": deleted, "id": p.id}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Add one ingredient line to an existing recipe")]
    fn add_recipe_ingredient(&self, Parameters(p): Parameters<AddRecipeIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::add_recipe_ingredient(&self.database, p.recipe_id, &p.name, p.quantity, p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Remove an ingredient line from a recipe")]
    fn remove_recipe_ingredient(&self, Parameters(p): Parameters<RemoveRecipeIngredientParams>) -> Result<CallToolResult, McpError> {
        let deleted = recipes::remove_recipe_ingredient(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": deleted, "id": p.id}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    // --- Grocery Lists ---

    #[tool(description = "Create a new grocery list")]
    fn create_grocery_list(&self, Parameters(p): Parameters<CreateGroceryListParams>) -> Result<CallToolResult, McpError> {
        let result = grocery::create_grocery_list(&self.database, &p.name).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "List all grocery lists with item counts, newest first")]
    fn list_grocery_lists(&self) -> Result<CallToolResult, McpError> {
        let result = grocery::list_grocery_lists(&self.database).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get a grocery list with items grouped by store category (produce, dairy, protein, grains, pantry, other)")]
    fn get_grocery_list(&self, Parameters(p): Parameters<GetGroceryListParams>) -> Result<CallToolResult, McpError> {
        let result = grocery::get_grocery_list(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = match result {
            Some(list) => serde_json::to_string_pretty(&list),
            None => Ok(format!(r#"{{"error": "Grocery list not found", "id": {}}}"#, p.id)),
        }.map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Delete a grocery list with all its items")]
    fn delete_grocery_list(&self, Parameters(p): Parameters<DeleteGroceryListParams>) -> Result<CallToolResult, McpError> {
        let deleted = grocery::delete_grocery_list(&self.database, p.id).map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": deleted, "id": p.id}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Add one recipe's ingredients to a grocery list. If an ingredient name is already on the list its quantity is kept unchanged and only the recipe label is recorded.")]
    fn add_recipe_to_grocery_list(&self, Parameters(p): Parameters<AddRecipeToListParams>) -> Result<CallToolResult, McpError> {
        let result = grocery::add_recipe_to_grocery_list(&self.database, p.list_id, p.recipe_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Add a whole meal plan's ingredients to a grocery list in one bulk operation. Quantities are parsed as numbers (unparseable text counts as 1) and summed per name+unit group.")]
    fn add_meal_plan_to_grocery_list(&self, Parameters(p): Parameters<AddMealPlanToListParams>) -> Result<CallToolResult, McpError> {
        let result = grocery::add_meal_plan_to_grocery_list(&self.database, p.list_id, &p.recipe_ids)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Add a single item to a grocery list by hand")]
    fn add_grocery_item(&self, Parameters(p): Parameters<AddGroceryItemParams>) -> Result<CallToolResult, McpError> {
        let result = grocery::add_grocery_item(&self.database, p.list_id, &p.name, p.quantity, p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::to_string_pretty(&result).map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Check or uncheck a grocery item")]
    fn set_item_checked(&self, Parameters(p): Parameters<SetItemCheckedParams>) -> Result<CallToolResult, McpError> {
        let updated = grocery::set_item_checked(&self.database, p.item_id, p.checked)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": updated, "item_id": p.item_id, "checked": p.checked}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Remove a single item from a grocery list")]
    fn remove_grocery_item(&self, Parameters(p): Parameters<RemoveGroceryItemParams>) -> Result<CallToolResult, McpError> {
        let deleted = grocery::remove_grocery_item(&self.database, p.item_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": deleted, "item_id": p.item_id}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Remove all checked items from a grocery list")]
    fn clear_checked_items(&self, Parameters(p): Parameters<ClearCheckedItemsParams>) -> Result<CallToolResult, McpError> {
        let removed = grocery::clear_checked_items(&self.database, p.list_id)
            .map_err(|e| McpError::internal_error(e, None))?;
        let json = serde_json::json!({"success": true, "list_id": p.list_id, "removed": removed}).to_string();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriMateService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrimate".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriMate Core".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriMate Core - meal planning and grocery lists. \
                 IMPORTANT: Call planning_instructions when starting a planning session. \
                 Profile: set_profile/get_profile. \
                 Targets: estimate_calorie_target, distribute_calories, plan_meal_targets. \
                 Recipes: create/get/list/update/delete_recipe, add/remove_recipe_ingredient. \
                 Grocery: create/get/list/delete_grocery_list, add_recipe_to_grocery_list (keeps \
                 existing quantities), add_meal_plan_to_grocery_list (sums quantities), \
                 add_grocery_item, set_item_checked, remove_grocery_item, clear_checked_items. \
                 Grocery lists come back grouped by store category."
                    .into(),
            ),
        }
    }
}
