//! Cocktail Match - cocktail lookup and ingredient matching service
//!
//! This library ranks cocktails by the ingredients a user has at hand and
//! draws random cocktails for the match game, on top of a PostgreSQL store of
//! cocktails, ingredients and their associations.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, RejectionSet, SelectionSet, CocktailSearch};
pub use error::ApiError;
pub use models::{Cocktail, Ingredient, RankedCocktail, MatchResponse};
