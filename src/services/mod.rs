// Service exports
pub mod postgres;

pub use postgres::{CocktailStore, PoolOptions, StoreError};
