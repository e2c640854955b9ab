use serde::Serialize;
use serde_json::Value;

use crate::models::recipe::{Ingredient, Instruction, RecipeRow};

const DEFAULT_COOK_TIME_MINUTES: i32 = 30;
const DEFAULT_SERVINGS: i32 = 4;
const DEFAULT_CATEGORY: &str = "Main Course";
const DEFAULT_DESCRIPTION: &str = "Delicious recipe from our collection";

/// App-format view of a recipe: display defaults filled in (cook time,
/// servings, category from the first tag) and ingredient/instruction
/// entries normalized to display lines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub cook_time: String,
    pub servings: i32,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeView {
    pub fn from_row(row: &RecipeRow) -> Self {
        let category = row
            .tags
            .as_ref()
            .and_then(|tags| tags.first().cloned())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        RecipeView {
            id: row.id,
            title: row.title.clone(),
            description: row
                .summary
                .clone()
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            image: row.image_url.clone(),
            cook_time: format!(
                "{} minutes",
                row.prep_time.unwrap_or(DEFAULT_COOK_TIME_MINUTES)
            ),
            servings: row.servings.unwrap_or(DEFAULT_SERVINGS),
            category,
            ingredients: ingredient_lines(row),
            instructions: instruction_lines(row),
        }
    }
}

/// A browsable category derived from a tag.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: usize,
    pub name: String,
    pub description: String,
}

pub fn categories_from_tags(tags: Vec<String>) -> Vec<Category> {
    tags.into_iter()
        .enumerate()
        .map(|(i, tag)| Category {
            id: i + 1,
            description: format!("Delicious {tag} recipes"),
            name: tag,
        })
        .collect()
}

/// Renders one ingredient entry as a display line: "<amount> <unit> <name>"
/// with absent parts skipped. Entries that render empty are dropped.
pub fn format_ingredient(ing: &Ingredient) -> Option<String> {
    let line = match ing {
        Ingredient::Text(s) => s.trim().to_string(),
        Ingredient::Structured {
            ingredient,
            item,
            unit,
            amount,
        } => {
            let name = ingredient
                .as_deref()
                .filter(|s| !s.is_empty())
                .or(item.as_deref())
                .unwrap_or("");
            let mut parts: Vec<String> = Vec::new();
            if let Some(a) = amount.as_ref().and_then(value_text) {
                parts.push(a);
            }
            if let Some(u) = unit.as_deref().filter(|u| !u.is_empty()) {
                parts.push(u.to_string());
            }
            if !name.is_empty() {
                parts.push(name.to_string());
            }
            parts.join(" ")
        }
        Ingredient::Other(_) => String::new(),
    };
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

/// Extracts the text of one instruction entry. Objects without an
/// `instruction` or `step` string fall back to their JSON serialization;
/// non-string, non-object entries are dropped, as are empties.
pub fn instruction_text(instruction: &Instruction) -> Option<String> {
    let text = match instruction {
        Instruction::Text(s) => s.trim().to_string(),
        Instruction::Object(map) => {
            let field = |key: &str| {
                map.get(key)
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
            };
            match field("instruction").or_else(|| field("step")) {
                Some(s) => s.to_string(),
                None => serde_json::to_string(map).unwrap_or_default(),
            }
        }
        Instruction::Other(_) => String::new(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// All non-empty ingredient display lines of a recipe.
pub fn ingredient_lines(row: &RecipeRow) -> Vec<String> {
    row.ingredients
        .as_ref()
        .map(|list| list.0.iter().filter_map(format_ingredient).collect())
        .unwrap_or_default()
}

/// All non-empty instruction display lines of a recipe.
pub fn instruction_lines(row: &RecipeRow) -> Vec<String> {
    row.instructions
        .as_ref()
        .map(|list| list.0.iter().filter_map(instruction_text).collect())
        .unwrap_or_default()
}

fn value_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(
        ingredient: Option<&str>,
        item: Option<&str>,
        unit: Option<&str>,
        amount: Option<Value>,
    ) -> Ingredient {
        Ingredient::Structured {
            ingredient: ingredient.map(String::from),
            item: item.map(String::from),
            unit: unit.map(String::from),
            amount,
        }
    }

    #[test]
    fn test_plain_string_passes_through() {
        let ing = Ingredient::Text("2 eggs".into());
        assert_eq!(format_ingredient(&ing), Some("2 eggs".into()));
    }

    #[test]
    fn test_structured_full() {
        let ing = structured(Some("flour"), None, Some("cups"), Some(json!(2)));
        assert_eq!(format_ingredient(&ing), Some("2 cups flour".into()));
    }

    #[test]
    fn test_structured_prefers_ingredient_over_item() {
        let ing = structured(Some("scallions"), Some("green onions"), None, None);
        assert_eq!(format_ingredient(&ing), Some("scallions".into()));
    }

    #[test]
    fn test_structured_falls_back_to_item() {
        let ing = structured(None, Some("butter"), None, Some(json!("1 stick")));
        assert_eq!(format_ingredient(&ing), Some("1 stick butter".into()));
    }

    #[test]
    fn test_amount_only_number() {
        let ing = structured(Some("apples"), None, None, Some(json!(3)));
        assert_eq!(format_ingredient(&ing), Some("3 apples".into()));
    }

    #[test]
    fn test_empty_entry_is_dropped() {
        assert_eq!(format_ingredient(&Ingredient::Text("   ".into())), None);
        assert_eq!(format_ingredient(&structured(None, None, None, None)), None);
        assert_eq!(format_ingredient(&Ingredient::Other(json!(null))), None);
    }

    fn instruction(raw: Value) -> Instruction {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn test_instruction_string_and_object() {
        assert_eq!(
            instruction_text(&instruction(json!("Preheat oven"))),
            Some("Preheat oven".into())
        );
        assert_eq!(
            instruction_text(&instruction(json!({"step": "Whisk the eggs"}))),
            Some("Whisk the eggs".into())
        );
        assert_eq!(
            instruction_text(&instruction(json!({"instruction": "Fold gently", "step": "2"}))),
            Some("Fold gently".into())
        );
    }

    #[test]
    fn test_instruction_object_without_keys_falls_back_to_json() {
        let text = instruction_text(&instruction(json!({"note": "rest the dough"})));
        assert_eq!(text, Some("{\"note\":\"rest the dough\"}".into()));
    }

    #[test]
    fn test_instruction_blank_fields_fall_back_to_json() {
        let text = instruction_text(&instruction(json!({"instruction": "", "step": "  "})));
        assert_eq!(text, Some("{\"instruction\":\"\",\"step\":\"  \"}".into()));
    }

    #[test]
    fn test_instruction_non_string_non_object_is_dropped() {
        assert_eq!(instruction_text(&instruction(json!(42))), None);
        assert_eq!(instruction_text(&instruction(json!(null))), None);
        assert_eq!(instruction_text(&instruction(json!(""))), None);
    }

    #[test]
    fn test_heterogeneous_array_deserializes() {
        let raw = json!(["1 cup rice", {"item": "soy sauce", "amount": 2, "unit": "tbsp"}, 42]);
        let parsed: Vec<Ingredient> = serde_json::from_value(raw).unwrap();
        let lines: Vec<String> = parsed.iter().filter_map(format_ingredient).collect();
        assert_eq!(lines, vec!["1 cup rice", "2 tbsp soy sauce"]);
    }

    #[test]
    fn test_categories_from_tags() {
        let cats = categories_from_tags(vec!["Breakfast".into(), "Vegan".into()]);
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0].id, 1);
        assert_eq!(cats[0].name, "Breakfast");
        assert_eq!(cats[1].description, "Delicious Vegan recipes");
    }
}
