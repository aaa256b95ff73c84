use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use thiserror::Error;

use crate::core::params::{
    contains_pattern, prefix_pattern, CocktailSearch, RejectionSet, SelectionSet,
};
use crate::models::{
    Cocktail, CocktailIngredientRow, CocktailSummary, Ingredient, IngredientLine,
    MatchingAssociation,
};

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Pool tuning, mirrored from the `database` config section
#[derive(Debug, Clone)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub run_migrations: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            acquire_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }
}

/// Read-only access to the ingredient, cocktails and cocktail_ingredient tables
#[derive(Clone)]
pub struct CocktailStore {
    pool: PgPool,
}

impl CocktailStore {
    /// Connect to PostgreSQL and optionally apply the bundled migrations
    pub async fn connect(database_url: &str, options: PoolOptions) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .min_connections(options.min_connections)
            .acquire_timeout(options.acquire_timeout)
            .idle_timeout(options.idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        if options.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Cocktails whose name starts with a prefix, or every cocktail
    pub async fn search_cocktails(
        &self,
        search: &CocktailSearch,
    ) -> Result<Vec<Cocktail>, StoreError> {
        let rows = match search {
            CocktailSearch::All => {
                sqlx::query_as::<_, Cocktail>(
                    r#"
                    SELECT id, name, glass_type, garnish, instructions, alcoholic, created_at
                    FROM cocktails
                    ORDER BY id
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
            CocktailSearch::Prefix(prefix) => {
                sqlx::query_as::<_, Cocktail>(
                    r#"
                    SELECT id, name, glass_type, garnish, instructions, alcoholic, created_at
                    FROM cocktails
                    WHERE name LIKE $1 ESCAPE '\'
                    ORDER BY id
                    "#,
                )
                .bind(prefix_pattern(prefix))
                .fetch_all(&self.pool)
                .await?
            }
        };

        tracing::debug!("Cocktail search {:?} returned {} rows", search, rows.len());

        Ok(rows)
    }

    /// Every ingredient
    pub async fn list_ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, name, type, created_at
            FROM ingredient
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Ingredients whose name contains `fragment`, or every ingredient when absent
    pub async fn search_ingredients(
        &self,
        fragment: Option<&str>,
    ) -> Result<Vec<Ingredient>, StoreError> {
        let fragment = match fragment {
            Some(fragment) if !fragment.is_empty() => fragment,
            _ => return self.list_ingredients().await,
        };

        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, name, type, created_at
            FROM ingredient
            WHERE name LIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(contains_pattern(fragment))
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!("Ingredient search '{}' returned {} rows", fragment, rows.len());

        Ok(rows)
    }

    /// Association rows of one cocktail joined with ingredient and cocktail
    /// attributes. Unknown cocktails yield an empty list.
    pub async fn cocktail_ingredients(
        &self,
        cocktail_id: i32,
    ) -> Result<Vec<CocktailIngredientRow>, StoreError> {
        let rows = sqlx::query_as::<_, CocktailIngredientRow>(
            r#"
            SELECT c.name AS cocktail_name,
                   i.name AS ingredient_name,
                   i.type,
                   ci.quantity,
                   ci.unit,
                   c.glass_type,
                   c.garnish,
                   c.instructions
            FROM cocktail_ingredient ci
            JOIN cocktails c ON ci.cocktail_id = c.id
            JOIN ingredient i ON ci.ingredient_id = i.id
            WHERE ci.cocktail_id = $1
            ORDER BY ci.id
            "#,
        )
        .bind(cocktail_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Association rows whose ingredient belongs to the selection set, in
    /// association order
    pub async fn matching_associations(
        &self,
        selection: &SelectionSet,
    ) -> Result<Vec<MatchingAssociation>, StoreError> {
        let rows = sqlx::query_as::<_, MatchingAssociation>(
            r#"
            SELECT c.id AS cocktail_id,
                   c.name AS cocktail_name,
                   i.name AS ingredient_name,
                   c.glass_type,
                   c.garnish,
                   c.instructions
            FROM cocktail_ingredient ci
            JOIN cocktails c ON ci.cocktail_id = c.id
            JOIN ingredient i ON ci.ingredient_id = i.id
            WHERE ci.ingredient_id = ANY($1)
            ORDER BY ci.id
            "#,
        )
        .bind(selection.ids())
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            "{} association rows match {} selected ingredients",
            rows.len(),
            selection.len()
        );

        Ok(rows)
    }

    /// Cocktails the match game may draw from
    pub async fn eligible_cocktails(
        &self,
        rejected: &RejectionSet,
        alcoholic_only: bool,
    ) -> Result<Vec<CocktailSummary>, StoreError> {
        let rows = sqlx::query_as::<_, CocktailSummary>(
            r#"
            SELECT id, name
            FROM cocktails
            WHERE NOT (id = ANY($1))
              AND (alcoholic OR NOT $2)
            ORDER BY id
            "#,
        )
        .bind(rejected.to_vec())
        .bind(alcoholic_only)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            "{} eligible cocktails ({} rejected, alcoholic_only={})",
            rows.len(),
            rejected.len(),
            alcoholic_only
        );

        Ok(rows)
    }

    /// Ingredient lines of one cocktail, in association order
    pub async fn ingredient_lines(
        &self,
        cocktail_id: i32,
    ) -> Result<Vec<IngredientLine>, StoreError> {
        let rows = sqlx::query_as::<_, IngredientLine>(
            r#"
            SELECT i.name, ci.quantity, ci.unit
            FROM cocktail_ingredient ci
            JOIN ingredient i ON ci.ingredient_id = i.id
            WHERE ci.cocktail_id = $1
            ORDER BY ci.id
            "#,
        )
        .bind(cocktail_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
