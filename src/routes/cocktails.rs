use actix_web::{web, HttpResponse};
use std::future::Future;
use std::time::Duration;
use validator::Validate;

use crate::core::{CocktailSearch, Matcher, RejectionSet, SelectionSet};
use crate::error::ApiError;
use crate::models::{
    HealthResponse, IngredientSearchQuery, MatchQuery, MatchResponse, SearchByIngredientsQuery,
};
use crate::services::{CocktailStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: CocktailStore,
    pub matcher: Matcher,
    pub request_timeout: Option<Duration>,
}

impl AppState {
    /// Run a store call under the configured timeout
    async fn query<T, F>(&self, call: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        let result = match self.request_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| ApiError::Timeout(limit.as_secs()))?,
            None => call.await,
        };

        result.map_err(|e| {
            tracing::error!("Store query failed: {}", e);
            ApiError::from(e)
        })
    }
}

/// Configure all cocktail and ingredient routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/cocktails/search/{name}", web::get().to(search_cocktails))
        .route("/cocktails/searchbyingredients", web::get().to(search_by_ingredients))
        .route("/ingredient", web::get().to(list_ingredients))
        .route("/ingredient/search", web::get().to(search_ingredients))
        .route("/cocktail-ingredients-{id}", web::get().to(cocktail_ingredients))
        .route("/matchs", web::get().to(random_match));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /cocktails/search/{name}
///
/// Cocktails whose name starts with `name`; the literal `all` lists every
/// cocktail.
async fn search_cocktails(
    state: web::Data<AppState>,
    name: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let search = CocktailSearch::from_path(&name);
    let cocktails = state.query(state.store.search_cocktails(&search)).await?;

    Ok(HttpResponse::Ok().json(cocktails))
}

/// GET /ingredient
async fn list_ingredients(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let ingredients = state.query(state.store.list_ingredients()).await?;

    Ok(HttpResponse::Ok().json(ingredients))
}

/// GET /ingredient/search?name={fragment}
async fn search_ingredients(
    state: web::Data<AppState>,
    query: web::Query<IngredientSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let fragment = query.name.as_deref();
    let ingredients = state.query(state.store.search_ingredients(fragment)).await?;

    Ok(HttpResponse::Ok().json(ingredients))
}

/// GET /cocktail-ingredients-{id}
///
/// One row per association; unknown cocktails give an empty array.
async fn cocktail_ingredients(
    state: web::Data<AppState>,
    id: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let cocktail_id = id.into_inner();
    let rows = state.query(state.store.cocktail_ingredients(cocktail_id)).await?;

    tracing::debug!("Cocktail {} has {} ingredient rows", cocktail_id, rows.len());

    Ok(HttpResponse::Ok().json(rows))
}

/// GET /cocktails/searchbyingredients?ingredients=1,2,3
///
/// Cocktails sharing at least one of the given ingredients, most shared
/// first.
async fn search_by_ingredients(
    state: web::Data<AppState>,
    query: web::Query<SearchByIngredientsQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let selection = SelectionSet::parse(&query.ingredients).map_err(|e| {
        tracing::warn!("Rejected ingredient selection '{}': {}", query.ingredients, e);
        ApiError::from(e)
    })?;

    let associations = state.query(state.store.matching_associations(&selection)).await?;
    let ranked = state.matcher.rank_by_ingredients(associations);

    tracing::info!(
        "Ranked {} cocktails for {} selected ingredients",
        ranked.len(),
        selection.len()
    );

    Ok(HttpResponse::Ok().json(ranked))
}

/// GET /matchs?rejected=1,3,5
///
/// A random cocktail outside the caller's rejection set, with its
/// ingredients, or the "no cocktail available" sentinel.
async fn random_match(
    state: web::Data<AppState>,
    query: web::Query<MatchQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let rejected = RejectionSet::parse(query.rejected.as_deref())?;
    let eligible = state
        .query(state.store.eligible_cocktails(&rejected, state.matcher.alcoholic_only()))
        .await?;

    let picked = {
        let mut rng = rand::thread_rng();
        state
            .matcher
            .pick_unrejected(&eligible, &rejected, &mut rng)
            .cloned()
    };

    let Some(cocktail) = picked else {
        tracing::info!("No cocktail left after {} rejections", rejected.len());
        return Ok(HttpResponse::Ok().json(MatchResponse::unavailable()));
    };

    let ingredients = state.query(state.store.ingredient_lines(cocktail.id)).await?;

    tracing::info!(
        "Matched cocktail {} ({} eligible, {} rejected)",
        cocktail.id,
        eligible.len(),
        rejected.len()
    );

    Ok(HttpResponse::Ok().json(MatchResponse::Cocktail {
        id: cocktail.id,
        name: cocktail.name,
        ingredients,
    }))
}
