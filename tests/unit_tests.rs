// Unit tests for Cocktail Match

use chrono::{TimeZone, Utc};
use cocktail_match::core::params::{
    contains_pattern, parse_id_list, prefix_pattern, CocktailSearch, ParamError,
};
use cocktail_match::core::{RejectionSet, SelectionSet};
use cocktail_match::models::{Cocktail, Ingredient, MatchResponse};

#[test]
fn test_selection_rejects_empty_input() {
    assert_eq!(SelectionSet::parse(""), Err(ParamError::EmptySelection));
}

#[test]
fn test_selection_rejects_names() {
    // the front end sends ids, never names
    assert_eq!(
        SelectionSet::parse("rum,lime"),
        Err(ParamError::InvalidId("rum".to_string()))
    );
}

#[test]
fn test_rejection_accepts_first_load_query() {
    // first page load sends `?rejected=`
    let rejected = RejectionSet::parse(Some("")).unwrap();
    assert!(rejected.is_empty());
}

#[test]
fn test_id_list_with_spaces() {
    assert_eq!(parse_id_list("1, 2, 3").unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_cocktail_search_patterns() {
    match CocktailSearch::from_path("Mar") {
        CocktailSearch::Prefix(prefix) => assert_eq!(prefix_pattern(&prefix), "Mar%"),
        CocktailSearch::All => panic!("Expected a prefix search"),
    }
    assert_eq!(CocktailSearch::from_path("all"), CocktailSearch::All);
    assert_eq!(contains_pattern("mint"), "%mint%");
}

#[test]
fn test_cocktail_json_uses_column_names() {
    let cocktail = Cocktail {
        id: 1,
        name: "Margarita".to_string(),
        glass_type: "Margarita glass".to_string(),
        garnish: Some("Salt rim".to_string()),
        instructions: "Shake and strain".to_string(),
        alcoholic: true,
        created_at: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
    };

    let json = serde_json::to_value(&cocktail).unwrap();
    assert_eq!(json["glass_type"], "Margarita glass");
    assert_eq!(json["alcoholic"], true);
    assert_eq!(json["created_at"], "2024-10-01T12:00:00Z");
}

#[test]
fn test_ingredient_json_type_field() {
    let ingredient = Ingredient {
        id: 3,
        name: "Mint".to_string(),
        ingredient_type: "Herb".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap(),
    };

    let json = serde_json::to_value(&ingredient).unwrap();
    assert_eq!(json["type"], "Herb");
    assert!(json.get("ingredient_type").is_none());
}

#[test]
fn test_match_response_round_trip_sentinel() {
    let parsed: MatchResponse =
        serde_json::from_str(r#"{"id":"0","name":"Aucun cocktail disponible"}"#).unwrap();
    assert!(parsed.is_unavailable());
}
