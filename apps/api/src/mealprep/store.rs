use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::favorite::MealPrepRow;
use crate::models::recipe::RecipeRow;

pub async fn add_to_mealprep(
    pool: &PgPool,
    user_id: &str,
    recipe_id: i64,
) -> Result<MealPrepRow, AppError> {
    let row = sqlx::query_as(
        r#"
        INSERT INTO user_mealprep (user_id, recipe_id)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(recipe_id)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::Conflict("Recipe is already in meal prep".to_string())
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::NotFound(format!("Recipe {recipe_id} not found"))
        }
        _ => AppError::Database(e),
    })?;
    Ok(row)
}

/// The user's meal-prep recipes, most recently added membership first.
pub async fn mealprep_recipes(pool: &PgPool, user_id: &str) -> Result<Vec<RecipeRow>, AppError> {
    let rows = sqlx::query_as(
        r#"
        SELECT r.* FROM recipes r
        JOIN user_mealprep m ON m.recipe_id = r.id
        WHERE m.user_id = $1
        ORDER BY m.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn is_in_mealprep(
    pool: &PgPool,
    user_id: &str,
    recipe_id: i64,
) -> Result<bool, AppError> {
    let exists = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM user_mealprep WHERE user_id = $1 AND recipe_id = $2)",
    )
    .bind(user_id)
    .bind(recipe_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Idempotent: removing a recipe that is not in the set is not an error.
pub async fn remove_from_mealprep(
    pool: &PgPool,
    user_id: &str,
    recipe_id: i64,
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM user_mealprep WHERE user_id = $1 AND recipe_id = $2")
        .bind(user_id)
        .bind(recipe_id)
        .execute(pool)
        .await?;
    Ok(())
}
