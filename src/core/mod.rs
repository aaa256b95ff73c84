// Core algorithm exports
pub mod matcher;
pub mod params;

pub use matcher::{Matcher, INGREDIENT_NAME_SEPARATOR};
pub use params::{parse_id_list, CocktailSearch, ParamError, RejectionSet, SelectionSet};
