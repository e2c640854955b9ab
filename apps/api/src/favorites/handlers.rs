use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::errors::AppError;
use crate::favorites::store::{self, NewFavorite};
use crate::models::favorite::FavoriteRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavoriteRequest {
    pub user_id: Option<String>,
    pub recipe_id: Option<i64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
}

/// POST /api/favorites
pub async fn handle_create_favorite(
    State(state): State<AppState>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteRow>), AppError> {
    let Json(req) = payload?;

    // Blank strings count as missing, matching the original contract.
    let user_id = req.user_id.as_deref().filter(|s| !s.trim().is_empty());
    let title = req.title.as_deref().filter(|s| !s.trim().is_empty());
    let (user_id, recipe_id, title) = match (user_id, req.recipe_id, title) {
        (Some(u), Some(r), Some(t)) => (u, r, t),
        _ => return Err(AppError::Validation("Missing required fields".to_string())),
    };

    let row = store::insert_favorite(
        &state.db,
        NewFavorite {
            user_id,
            recipe_id,
            title,
            image: req.image.as_deref(),
            cook_time: req.cook_time,
            servings: req.servings,
        },
    )
    .await?;

    info!("User {user_id} favorited recipe {recipe_id}");
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/favorites/:user_id
pub async fn handle_list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FavoriteRow>>, AppError> {
    let rows = store::list_favorites(&state.db, &user_id).await?;
    Ok(Json(rows))
}

/// GET /api/favorites/:user_id/:recipe_id
pub async fn handle_favorite_status(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<Json<Value>, AppError> {
    let is_favorite = store::is_favorite(&state.db, &user_id, recipe_id).await?;
    Ok(Json(json!({ "isFavorite": is_favorite })))
}

/// DELETE /api/favorites/:user_id/:recipe_id
pub async fn handle_delete_favorite(
    State(state): State<AppState>,
    Path((user_id, recipe_id)): Path<(String, i64)>,
) -> Result<StatusCode, AppError> {
    store::delete_favorite(&state.db, &user_id, recipe_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
