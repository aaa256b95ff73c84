// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Cocktail, CocktailIngredientRow, CocktailSummary, Ingredient, IngredientLine,
    MatchingAssociation, RankedCocktail,
};
pub use requests::{SearchByIngredientsQuery, IngredientSearchQuery, MatchQuery};
pub use responses::{MatchResponse, HealthResponse, ErrorResponse, NO_COCKTAIL_NAME};
