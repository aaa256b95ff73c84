use serde::{Deserialize, Serialize};
use crate::models::domain::IngredientLine;

/// Name shown when every cocktail has been rejected
pub const NO_COCKTAIL_NAME: &str = "Aucun cocktail disponible";

/// Response of the match game
///
/// The sentinel keeps the historical wire shape: a string id `"0"` and no
/// ingredient list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchResponse {
    Cocktail {
        id: i32,
        name: String,
        ingredients: Vec<IngredientLine>,
    },
    Unavailable {
        id: String,
        name: String,
    },
}

impl MatchResponse {
    pub fn unavailable() -> Self {
        MatchResponse::Unavailable {
            id: "0".to_string(),
            name: NO_COCKTAIL_NAME.to_string(),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, MatchResponse::Unavailable { .. })
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
