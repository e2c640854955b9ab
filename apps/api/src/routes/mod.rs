pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::favorites::handlers as favorites;
use crate::mealprep::handlers as mealprep;
use crate::recipes::handlers as recipes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_handler))
        // Favorites API
        .route("/api/favorites", post(favorites::handle_create_favorite))
        .route(
            "/api/favorites/:user_id",
            get(favorites::handle_list_favorites),
        )
        .route(
            "/api/favorites/:user_id/:recipe_id",
            get(favorites::handle_favorite_status).delete(favorites::handle_delete_favorite),
        )
        // Recipes API
        .route("/api/recipes", get(recipes::handle_list_recipes))
        .route("/api/recipes/random", get(recipes::handle_random_recipes))
        .route("/api/recipes/search", get(recipes::handle_search_recipes))
        .route(
            "/api/recipes/categories",
            get(recipes::handle_list_categories),
        )
        .route(
            "/api/recipes/category/:tag",
            get(recipes::handle_recipes_by_category),
        )
        .route("/api/recipes/:id", get(recipes::handle_get_recipe))
        // Meal prep API
        .route("/api/mealprep", post(mealprep::handle_add_mealprep))
        .route("/api/mealprep/:user_id", get(mealprep::handle_list_mealprep))
        .route(
            "/api/mealprep/:user_id/shopping-list",
            get(mealprep::handle_shopping_list),
        )
        .route(
            "/api/mealprep/:user_id/:recipe_id",
            get(mealprep::handle_mealprep_status).delete(mealprep::handle_remove_mealprep),
        )
        .with_state(state)
}
