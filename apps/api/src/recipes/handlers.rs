use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::recipe::RecipeRow;
use crate::recipes::store::{self, UserScope, DEFAULT_LIST_LIMIT};
use crate::recipes::transform::{categories_from_tags, Category};
use crate::state::AppState;

const DEFAULT_RANDOM_COUNT: i64 = 6;
const SEARCH_RESULT_CAP: usize = 12;

#[derive(Deserialize)]
pub struct ListQuery {
    pub user_id: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct RandomQuery {
    pub user_id: Option<String>,
    pub count: Option<i64>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub user_id: Option<String>,
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct ScopeQuery {
    pub user_id: Option<String>,
}

fn scope(state: &AppState, user_id: Option<&str>) -> UserScope {
    UserScope::new(user_id, &state.config.shared_user_id)
}

/// GET /api/recipes
pub async fn handle_list_recipes(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, 100);
    let rows = store::list_recipes(&state.db, &scope, limit).await?;
    Ok(Json(rows))
}

/// GET /api/recipes/random
pub async fn handle_random_recipes(
    State(state): State<AppState>,
    Query(params): Query<RandomQuery>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let count = params.count.unwrap_or(DEFAULT_RANDOM_COUNT).clamp(1, 50);
    let rows = store::random_recipes(&state.db, &scope, count).await?;
    Ok(Json(rows))
}

/// GET /api/recipes/search
/// Title match first; falls back to ingredient containment when the title
/// search comes up empty. A blank query returns a random selection.
pub async fn handle_search_recipes(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let q = params.q.as_deref().unwrap_or("").trim().to_string();

    if q.is_empty() {
        let rows = store::random_recipes(&state.db, &scope, SEARCH_RESULT_CAP as i64).await?;
        return Ok(Json(rows));
    }

    let mut rows = store::search_by_title(&state.db, &scope, &q).await?;
    if rows.is_empty() {
        rows = store::search_by_ingredient(&state.db, &scope, &q).await?;
    }
    rows.truncate(SEARCH_RESULT_CAP);
    Ok(Json(rows))
}

/// GET /api/recipes/categories
pub async fn handle_list_categories(
    State(state): State<AppState>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<Vec<Category>>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let tags = store::distinct_tags(&state.db, &scope).await?;
    Ok(Json(categories_from_tags(tags)))
}

/// GET /api/recipes/category/:tag
pub async fn handle_recipes_by_category(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<Vec<RecipeRow>>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let rows = store::list_by_tag(&state.db, &scope, &tag).await?;
    Ok(Json(rows))
}

/// GET /api/recipes/:id
pub async fn handle_get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ScopeQuery>,
) -> Result<Json<RecipeRow>, AppError> {
    let scope = scope(&state, params.user_id.as_deref());
    let row = store::get_recipe(&state.db, &scope, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Recipe {id} not found")))?;
    Ok(Json(row))
}
