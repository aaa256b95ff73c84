use serde::{Deserialize, Serialize};

/// Ingredient row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub ingredient_type: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Cocktail row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cocktail {
    pub id: i32,
    pub name: String,
    pub glass_type: String,
    pub garnish: Option<String>,
    pub instructions: String,
    pub alcoholic: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One association row of a cocktail, joined with its ingredient and cocktail
/// attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CocktailIngredientRow {
    #[serde(rename = "cocktailName")]
    pub cocktail_name: String,
    #[serde(rename = "ingredientName")]
    pub ingredient_name: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub ingredient_type: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub glass_type: String,
    pub garnish: Option<String>,
    pub instructions: String,
}

/// Association row whose ingredient belongs to a submitted selection set.
///
/// Rows arrive in association order (`cocktail_ingredient.id`); the matcher
/// relies on that order when joining ingredient names.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MatchingAssociation {
    pub cocktail_id: i32,
    pub cocktail_name: String,
    pub ingredient_name: String,
    pub glass_type: String,
    pub garnish: Option<String>,
    pub instructions: String,
}

/// Cocktail ranked by the number of ingredients it shares with a selection set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCocktail {
    #[serde(rename = "cocktailId")]
    pub cocktail_id: i32,
    #[serde(rename = "cocktailName")]
    pub cocktail_name: String,
    #[serde(rename = "commonIngredientCount")]
    pub common_ingredient_count: i64,
    #[serde(rename = "ingredientNames")]
    pub ingredient_names: String,
    pub glass_type: String,
    pub garnish: Option<String>,
    pub instructions: String,
}

/// Cocktail eligible for the match game
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CocktailSummary {
    pub id: i32,
    pub name: String,
}

/// Ingredient line shown on a match card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct IngredientLine {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}
