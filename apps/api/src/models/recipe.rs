use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;

/// A recipe row as stored. Serialized with snake_case field names, matching
/// what the mobile client already consumes from the hosted database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub image_url: Option<String>,
    pub prep_time: Option<i32>,
    pub servings: Option<i32>,
    pub ingredients: Option<Json<Vec<Ingredient>>>,
    pub instructions: Option<Json<Vec<Instruction>>>,
    pub tags: Option<Vec<String>>,
    pub link: Option<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One entry of the JSONB `ingredients` array. Imported recipe data is
/// heterogeneous: plain strings, `{item, unit, amount, ingredient}` objects,
/// or arbitrary junk that must be tolerated rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ingredient {
    Text(String),
    Structured {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ingredient: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<String>,
        // amount shows up as both numbers and strings in imported data
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<Value>,
    },
    Other(Value),
}

/// One entry of the JSONB `instructions` array: a plain string or an object
/// carrying the text under `instruction` or `step`. Objects with neither key
/// are kept whole so the display layer can fall back to their JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instruction {
    Text(String),
    Object(serde_json::Map<String, Value>),
    Other(Value),
}
