use rand::Rng;
use serde_json::json;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::recipe::RecipeRow;

pub const DEFAULT_LIST_LIMIT: i64 = 50;
pub const SEARCH_LIMIT: i64 = 20;

/// Visibility scope for recipe queries: the requester's own rows plus the
/// shared catalog. Anonymous (or blank) requesters collapse to the shared
/// catalog alone.
#[derive(Debug, Clone)]
pub struct UserScope {
    pub owner: String,
    pub shared: String,
}

impl UserScope {
    pub fn new(user_id: Option<&str>, shared_user_id: &str) -> Self {
        let owner = match user_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => shared_user_id.to_string(),
        };
        UserScope {
            owner,
            shared: shared_user_id.to_string(),
        }
    }
}

pub async fn list_recipes(
    pool: &PgPool,
    scope: &UserScope,
    limit: i64,
) -> Result<Vec<RecipeRow>, AppError> {
    let rows = sqlx::query_as(
        r#"
        SELECT * FROM recipes
        WHERE user_id IN ($1, $2)
        ORDER BY created_at DESC
        LIMIT $3
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .bind(limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_recipe(
    pool: &PgPool,
    scope: &UserScope,
    id: i64,
) -> Result<Option<RecipeRow>, AppError> {
    let row = sqlx::query_as(
        "SELECT * FROM recipes WHERE id = $1 AND user_id IN ($2, $3)",
    )
    .bind(id)
    .bind(&scope.owner)
    .bind(&scope.shared)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Largest offset that still leaves a full `count`-row window in a set of
/// `total` rows. Zero when the set fits inside the window.
pub fn max_offset(total: i64, count: i64) -> i64 {
    (total - count).max(0)
}

/// Picks `count` rows starting at a uniformly random offset into the scoped
/// set, so the featured section rotates without a dedicated shuffle column.
pub async fn random_recipes(
    pool: &PgPool,
    scope: &UserScope,
    count: i64,
) -> Result<Vec<RecipeRow>, AppError> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE user_id IN ($1, $2)")
        .bind(&scope.owner)
        .bind(&scope.shared)
        .fetch_one(pool)
        .await?;

    if total == 0 {
        return Ok(Vec::new());
    }

    let max = max_offset(total, count);
    let offset = if max == 0 {
        0
    } else {
        rand::thread_rng().gen_range(0..=max)
    };

    let rows = sqlx::query_as(
        r#"
        SELECT * FROM recipes
        WHERE user_id IN ($1, $2)
        ORDER BY id
        OFFSET $3
        LIMIT $4
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .bind(offset)
    .bind(count)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn search_by_title(
    pool: &PgPool,
    scope: &UserScope,
    query: &str,
) -> Result<Vec<RecipeRow>, AppError> {
    let pattern = format!("%{}%", query);
    let rows = sqlx::query_as(
        r#"
        SELECT * FROM recipes
        WHERE user_id IN ($1, $2) AND title ILIKE $3
        ORDER BY created_at DESC
        LIMIT $4
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .bind(pattern)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Matches recipes whose JSONB ingredient array contains `ingredient` as a
/// plain string element. Structured ingredient objects are not matched,
/// same as the original containment query.
pub async fn search_by_ingredient(
    pool: &PgPool,
    scope: &UserScope,
    ingredient: &str,
) -> Result<Vec<RecipeRow>, AppError> {
    let needle = json!([ingredient]);
    let rows = sqlx::query_as(
        r#"
        SELECT * FROM recipes
        WHERE user_id IN ($1, $2) AND ingredients @> $3
        ORDER BY created_at DESC
        LIMIT $4
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .bind(needle)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_by_tag(
    pool: &PgPool,
    scope: &UserScope,
    tag: &str,
) -> Result<Vec<RecipeRow>, AppError> {
    let rows = sqlx::query_as(
        r#"
        SELECT * FROM recipes
        WHERE user_id IN ($1, $2) AND $3 = ANY(tags)
        ORDER BY created_at DESC
        LIMIT $4
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .bind(tag)
    .bind(SEARCH_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Distinct tags across the scoped catalog, alphabetical.
pub async fn distinct_tags(pool: &PgPool, scope: &UserScope) -> Result<Vec<String>, AppError> {
    let tags = sqlx::query_scalar(
        r#"
        SELECT DISTINCT unnest(tags) AS tag FROM recipes
        WHERE user_id IN ($1, $2) AND tags IS NOT NULL
        ORDER BY tag
        "#,
    )
    .bind(&scope.owner)
    .bind(&scope.shared)
    .fetch_all(pool)
    .await?;
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARED: &str = "user_shared";

    #[test]
    fn test_scope_anonymous_collapses_to_shared() {
        let scope = UserScope::new(None, SHARED);
        assert_eq!(scope.owner, SHARED);
        assert_eq!(scope.shared, SHARED);
    }

    #[test]
    fn test_scope_blank_user_is_anonymous() {
        let scope = UserScope::new(Some("  "), SHARED);
        assert_eq!(scope.owner, SHARED);
    }

    #[test]
    fn test_scope_keeps_owner_and_shared() {
        let scope = UserScope::new(Some("user_abc"), SHARED);
        assert_eq!(scope.owner, "user_abc");
        assert_eq!(scope.shared, SHARED);
    }

    #[test]
    fn test_max_offset_zero_when_set_fits() {
        assert_eq!(max_offset(4, 6), 0);
        assert_eq!(max_offset(6, 6), 0);
        assert_eq!(max_offset(0, 6), 0);
    }

    #[test]
    fn test_max_offset_leaves_full_window() {
        assert_eq!(max_offset(10, 6), 4);
        assert_eq!(max_offset(7, 6), 1);
    }
}
