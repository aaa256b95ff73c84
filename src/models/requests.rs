use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query of `GET /cocktails/searchbyingredients`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchByIngredientsQuery {
    /// Comma-separated ingredient ids
    #[validate(length(min = 1, max = 4096))]
    pub ingredients: String,
}

/// Query of `GET /ingredient/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct IngredientSearchQuery {
    #[validate(length(max = 100))]
    pub name: Option<String>,
}

/// Query of `GET /matchs`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MatchQuery {
    /// Comma-separated ids of cocktails the caller already skipped
    #[validate(length(max = 16384))]
    pub rejected: Option<String>,
}
