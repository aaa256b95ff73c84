use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while parsing caller-supplied parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Invalid id '{0}': expected an integer")]
    InvalidId(String),

    #[error("At least one ingredient id is required")]
    EmptySelection,
}

/// Split a comma-separated id list.
///
/// Whitespace around ids and empty segments are ignored, so `""`, `"1,"` and
/// `" 1 , 2"` are all accepted.
pub fn parse_id_list(raw: &str) -> Result<Vec<i32>, ParamError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| ParamError::InvalidId(token.to_string()))
        })
        .collect()
}

/// Ingredient ids chosen by a user, in selection order, without duplicates.
///
/// Never empty: ranking against an empty selection is rejected up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<i32>,
}

impl SelectionSet {
    pub fn new(ids: impl IntoIterator<Item = i32>) -> Result<Self, ParamError> {
        let mut seen = BTreeSet::new();
        let ids: Vec<i32> = ids.into_iter().filter(|id| seen.insert(*id)).collect();

        if ids.is_empty() {
            return Err(ParamError::EmptySelection);
        }

        Ok(Self { ids })
    }

    pub fn parse(raw: &str) -> Result<Self, ParamError> {
        Self::new(parse_id_list(raw)?)
    }

    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Cocktail ids a caller has skipped during a match session.
///
/// The caller owns and grows this set; the server keeps no copy between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RejectionSet {
    ids: BTreeSet<i32>,
}

impl RejectionSet {
    pub fn new(ids: impl IntoIterator<Item = i32>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Parse an optional `rejected` parameter; absent means nothing rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self, ParamError> {
        match raw {
            Some(raw) => Ok(Self::new(parse_id_list(raw)?)),
            None => Ok(Self::default()),
        }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Literal path token that lists every cocktail
pub const ALL_COCKTAILS: &str = "all";

/// Cocktail name search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CocktailSearch {
    All,
    Prefix(String),
}

impl CocktailSearch {
    pub fn from_path(name: &str) -> Self {
        if name == ALL_COCKTAILS {
            CocktailSearch::All
        } else {
            CocktailSearch::Prefix(name.to_string())
        }
    }
}

/// Escape LIKE metacharacters so user input matches literally (`ESCAPE '\'`)
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// LIKE pattern for names starting with `prefix`
pub fn prefix_pattern(prefix: &str) -> String {
    format!("{}%", escape_like(prefix))
}

/// LIKE pattern for names containing `fragment`
pub fn contains_pattern(fragment: &str) -> String {
    format!("%{}%", escape_like(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_list_tolerates_whitespace_and_empty_segments() {
        assert_eq!(parse_id_list(" 1, 2 ,,3,").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list("").unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_parse_id_list_rejects_garbage() {
        assert_eq!(
            parse_id_list("1,rum"),
            Err(ParamError::InvalidId("rum".to_string()))
        );
    }

    #[test]
    fn test_selection_set_dedups_in_order() {
        let selection = SelectionSet::parse("4,2,4,9,2").unwrap();
        assert_eq!(selection.ids(), &[4, 2, 9]);
    }

    #[test]
    fn test_empty_selection_fails_fast() {
        assert_eq!(SelectionSet::parse(""), Err(ParamError::EmptySelection));
        assert_eq!(SelectionSet::parse(" , "), Err(ParamError::EmptySelection));
    }

    #[test]
    fn test_rejection_set_absent_or_blank() {
        assert!(RejectionSet::parse(None).unwrap().is_empty());
        assert!(RejectionSet::parse(Some("")).unwrap().is_empty());

        let rejected = RejectionSet::parse(Some("3,1,3")).unwrap();
        assert_eq!(rejected.to_vec(), vec![1, 3]);
        assert!(rejected.contains(3));
        assert!(!rejected.contains(2));
    }

    #[test]
    fn test_cocktail_search_all_token() {
        assert_eq!(CocktailSearch::from_path("all"), CocktailSearch::All);
        assert_eq!(
            CocktailSearch::from_path("Mar"),
            CocktailSearch::Prefix("Mar".to_string())
        );
        // only the exact lowercase token lists everything
        assert_eq!(
            CocktailSearch::from_path("All"),
            CocktailSearch::Prefix("All".to_string())
        );
    }

    #[test]
    fn test_like_patterns_escape_metacharacters() {
        assert_eq!(prefix_pattern("Mar"), "Mar%");
        assert_eq!(contains_pattern("mint"), "%mint%");
        assert_eq!(prefix_pattern("100%"), "100\\%%");
        assert_eq!(contains_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }
}
