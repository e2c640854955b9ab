use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::mealprep::shopping_list::{build_shopping_list, ShoppingList};
use crate::mealprep::store;
use crate::models::favorite::MealPrepRow;
use crate::models::recipe::RecipeRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMealPrepRequest {
    pub user_id: Option<String>,
    pub recipe_id: Option<i64>,
}

/// POST /api/mealprep
pub async fn handle_add_mealprep(
    State(state): State<AppState>,
    payload: Result<Json<AddMealPrepRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MealPrepRow>), AppError> {
    let Json(req) = payload?;

    let user_id = req.user_id.as_deref().filter(|s| !s.trim().is_empty());
    let (user_id, recipe_id) = match (user_id, req.recipe_id) {
        (Some(u), Some(r)) => (u, r),
        _ => return Err(AppError::Validation("Missing required fields".to_string())),
    };

    let row = store::add_to_mealprep(&state.db, user_id, recipe_id).await?;
    info!("User {user_id} added recipe {recipe_id} to meal prep");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/mealprep/:user_id
pub async fn handle_list_mealprep(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let rows = store::mealprep_recipes(&state.db, &user_id).await?;
    Ok(Json(rows))
}

/// GET /api/mealprep/:user_id/shopping-list
pub async fn handle_shopping_list(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ShoppingList>, AppError> {
    let recipes = store::mealprep_recipes(&state.db, &user_id).await?;
    Ok(Json(build_shopping_list(&recipes)))
}

/// GET /api/mealprep/:user_id/:recipe_id
pub async fn handle_mealprep_status(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    let in_meal_prep = store::is_in_mealprep(&state.db, &user_id, recipe_id).await?;
    Ok(Json(json!({ "inMealPrep": in_meal_prep })))
}

/// DELETE /api/mealprep/:user_id/:recipe_id
pub async fn handle_remove_mealprep(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    store::remove_from_mealprep(&state.db, &user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
