use serde::Serialize;

use crate::models::recipe::RecipeRow;
use crate::recipes::transform::{ingredient_lines, RecipeView};

/// One line of the combined shopping list, tagged with the recipe it came
/// from so the client can group or strike lines per recipe.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    pub text: String,
    pub recipe_id: i64,
    pub recipe_title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub recipes: Vec<RecipeView>,
    pub items: Vec<ShoppingListItem>,
}

/// Combines the ingredient lines of the given recipes into a single list,
/// sorted alphabetically ignoring case. Empty lines are already dropped by
/// the ingredient formatter.
pub fn build_shopping_list(recipes: &[RecipeRow]) -> ShoppingList {
    let mut items: Vec<ShoppingListItem> = Vec::new();
    for recipe in recipes {
        for text in ingredient_lines(recipe) {
            items.push(ShoppingListItem {
                text,
                recipe_id: recipe.id,
                recipe_title: recipe.title.clone(),
            });
        }
    }
    items.sort_by(|a, b| a.text.to_lowercase().cmp(&b.text.to_lowercase()));

    ShoppingList {
        recipes: recipes.iter().map(RecipeView::from_row).collect(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;
    use sqlx::types::Json;

    fn recipe(id: i64, title: &str, ingredients: serde_json::Value) -> RecipeRow {
        RecipeRow {
            id,
            title: title.to_string(),
            summary: None,
            image_url: None,
            prep_time: None,
            servings: None,
            ingredients: Some(Json(serde_json::from_value(ingredients).unwrap())),
            instructions: None,
            tags: None,
            link: None,
            user_id: "user_abc".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_combines_all_recipes() {
        let recipes = vec![
            recipe(1, "Fried Rice", json!(["1 cup rice", "2 eggs"])),
            recipe(2, "Omelette", json!(["3 eggs", "butter"])),
        ];
        let list = build_shopping_list(&recipes);
        assert_eq!(list.items.len(), 4);
        assert_eq!(list.recipes.len(), 2);
        assert!(list.items.iter().any(|i| i.recipe_title == "Omelette"));
    }

    #[test]
    fn test_sorted_case_insensitively() {
        let recipes = vec![recipe(1, "Salad", json!(["Tomatoes", "basil", "Avocado"]))];
        let list = build_shopping_list(&recipes);
        let texts: Vec<&str> = list.items.iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, vec!["Avocado", "basil", "Tomatoes"]);
    }

    #[test]
    fn test_blank_and_junk_entries_dropped() {
        let recipes = vec![recipe(1, "Stew", json!(["carrots", "  ", null, {}]))];
        let list = build_shopping_list(&recipes);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "carrots");
    }

    #[test]
    fn test_view_defaults() {
        let row = recipe(5, "Toast", json!([]));
        let list = build_shopping_list(&[row]);
        let view = &list.recipes[0];
        assert_eq!(view.cook_time, "30 minutes");
        assert_eq!(view.servings, 4);
        assert_eq!(view.category, "Main Course");
        assert_eq!(view.description, "Delicious recipe from our collection");
    }

    #[test]
    fn test_view_uses_first_tag_and_prep_time() {
        let mut row = recipe(6, "Granola", json!([]));
        row.tags = Some(vec!["Breakfast".to_string(), "Vegan".to_string()]);
        row.prep_time = Some(45);
        row.servings = Some(2);
        let list = build_shopping_list(&[row]);
        let view = &list.recipes[0];
        assert_eq!(view.category, "Breakfast");
        assert_eq!(view.cook_time, "45 minutes");
        assert_eq!(view.servings, 2);
    }

    #[test]
    fn test_view_normalizes_instructions() {
        let mut row = recipe(7, "Curry", json!(["onions"]));
        row.instructions = Some(Json(serde_json::from_value(json!([
            "Chop the onions",
            {"step": "Simmer 20 minutes"},
            {"note": "serve hot"},
            42
        ]))
        .unwrap()));
        let list = build_shopping_list(&[row]);
        let view = &list.recipes[0];
        assert_eq!(
            view.instructions,
            vec![
                "Chop the onions",
                "Simmer 20 minutes",
                "{\"note\":\"serve hot\"}"
            ]
        );
        assert_eq!(view.ingredients, vec!["onions"]);
    }
}
