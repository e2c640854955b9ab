use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::favorite::FavoriteRow;

pub struct NewFavorite<'a> {
    pub user_id: &'a str,
    pub recipe_id: i64,
    pub title: &'a str,
    pub image: Option<&'a str>,
    pub cook_time: Option<i32>,
    pub servings: Option<i32>,
}

pub async fn insert_favorite(
    pool: &PgPool,
    new: NewFavorite<'_>,
) -> Result<FavoriteRow, AppError> {
    let row = sqlx::query_as(
        r#"
        INSERT INTO favorites (user_id, recipe_id, title, image, cook_time, servings)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(new.user_id)
    .bind(new.recipe_id)
    .bind(new.title)
    .bind(new.image)
    .bind(new.cook_time)
    .bind(new.servings)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("Recipe is already in favorites".to_string())
        }
        _ => AppError::Database(e),
    })?;
    Ok(row)
}

pub async fn list_favorites(pool: &PgPool, user_id: &str) -> Result<Vec<FavoriteRow>, AppError> {
    let rows = sqlx::query_as(
        "SELECT * FROM favorites WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn is_favorite(pool: &PgPool, user_id: &str, recipe_id: i64) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM favorites WHERE user_id = $1 AND recipe_id = $2)",
    )
    .bind(user_id)
    .bind(recipe_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Idempotent: deleting a favorite that does not exist is not an error.
pub async fn delete_favorite(
    pool: &PgPool,
    user_id: &str,
    recipe_id: i64,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM favorites WHERE user_id = $1 AND recipe_id = $2")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await?;
    Ok(())
}
