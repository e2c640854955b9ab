use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A saved favorite. Denormalized snapshot of the recipe at save time, so
/// the favorites screen renders without a join. Serialized camelCase,
/// matching the original favorites API contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRow {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    pub title: String,
    pub image: Option<String>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// A meal-prep membership row linking a user to a recipe.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MealPrepRow {
    pub id: i64,
    pub user_id: String,
    pub recipe_id: i64,
    pub created_at: DateTime<Utc>,
}
