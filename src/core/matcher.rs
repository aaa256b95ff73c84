use std::collections::BTreeMap;

use rand::Rng;

use crate::core::params::RejectionSet;
use crate::models::{CocktailSummary, MatchingAssociation, RankedCocktail};

/// Separator used when joining matched ingredient names
pub const INGREDIENT_NAME_SEPARATOR: &str = ",";

/// Matching engine behind ingredient search and the match game.
///
/// Holds no session state: selection and rejection sets are passed in on
/// every call and owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    alcoholic_only: bool,
}

impl Matcher {
    pub fn new(alcoholic_only: bool) -> Self {
        Self { alcoholic_only }
    }

    /// Whether the match game only draws alcoholic cocktails
    pub fn alcoholic_only(&self) -> bool {
        self.alcoholic_only
    }

    /// Rank cocktails by how many of the selected ingredients they use.
    ///
    /// `associations` are the association rows whose ingredient is in the
    /// selection set, in association order. Every row counts, so a cocktail
    /// listing the same ingredient twice counts it twice and its name appears
    /// twice in `ingredient_names`.
    ///
    /// Ordering is `common_ingredient_count` descending, then cocktail id
    /// ascending.
    pub fn rank_by_ingredients(
        &self,
        associations: impl IntoIterator<Item = MatchingAssociation>,
    ) -> Vec<RankedCocktail> {
        let mut grouped: BTreeMap<i32, (RankedCocktail, Vec<String>)> = BTreeMap::new();

        for row in associations {
            let (ranked, names) = grouped.entry(row.cocktail_id).or_insert_with(|| {
                (
                    RankedCocktail {
                        cocktail_id: row.cocktail_id,
                        cocktail_name: row.cocktail_name.clone(),
                        common_ingredient_count: 0,
                        ingredient_names: String::new(),
                        glass_type: row.glass_type.clone(),
                        garnish: row.garnish.clone(),
                        instructions: row.instructions.clone(),
                    },
                    Vec::new(),
                )
            });

            ranked.common_ingredient_count += 1;
            names.push(row.ingredient_name);
        }

        let mut ranked: Vec<RankedCocktail> = grouped
            .into_values()
            .map(|(mut ranked, names)| {
                ranked.ingredient_names = names.join(INGREDIENT_NAME_SEPARATOR);
                ranked
            })
            .collect();

        // BTreeMap yields ids ascending and sort_by is stable, so ties stay by id
        ranked.sort_by(|a, b| b.common_ingredient_count.cmp(&a.common_ingredient_count));

        ranked
    }

    /// Draw one cocktail uniformly among those not rejected.
    ///
    /// Returns `None` when every candidate is rejected or there are none.
    pub fn pick_unrejected<'a, R>(
        &self,
        eligible: &'a [CocktailSummary],
        rejected: &RejectionSet,
        rng: &mut R,
    ) -> Option<&'a CocktailSummary>
    where
        R: Rng,
    {
        let remaining: Vec<&CocktailSummary> = eligible
            .iter()
            .filter(|cocktail| !rejected.contains(cocktail.id))
            .collect();

        if remaining.is_empty() {
            return None;
        }

        let idx = rng.gen_range(0..remaining.len());
        Some(remaining[idx])
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn association(cocktail_id: i32, cocktail: &str, ingredient: &str) -> MatchingAssociation {
        MatchingAssociation {
            cocktail_id,
            cocktail_name: cocktail.to_string(),
            ingredient_name: ingredient.to_string(),
            glass_type: "Highball".to_string(),
            garnish: Some("Lime wedge".to_string()),
            instructions: format!("Build the {}", cocktail),
        }
    }

    fn summary(id: i32, name: &str) -> CocktailSummary {
        CocktailSummary {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_rank_orders_by_common_count() {
        let matcher = Matcher::default();

        let result = matcher.rank_by_ingredients(vec![
            association(1, "Daiquiri", "Rum"),
            association(2, "Mojito", "Rum"),
            association(2, "Mojito", "Lime"),
            association(2, "Mojito", "Mint"),
            association(3, "Caipirinha", "Lime"),
            association(3, "Caipirinha", "Sugar"),
        ]);

        let ids: Vec<i32> = result.iter().map(|r| r.cocktail_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(result[0].common_ingredient_count, 3);
        assert_eq!(result[0].ingredient_names, "Rum,Lime,Mint");
    }

    #[test]
    fn test_rank_ties_broken_by_id() {
        let matcher = Matcher::default();

        let result = matcher.rank_by_ingredients(vec![
            association(9, "Zombie", "Rum"),
            association(4, "Cuba Libre", "Rum"),
            association(6, "Dark and Stormy", "Rum"),
        ]);

        let ids: Vec<i32> = result.iter().map(|r| r.cocktail_id).collect();
        assert_eq!(ids, vec![4, 6, 9]);
    }

    #[test]
    fn test_rank_keeps_duplicate_rows() {
        let matcher = Matcher::default();

        let result = matcher.rank_by_ingredients(vec![
            association(5, "Double Rum", "Rum"),
            association(5, "Double Rum", "Rum"),
        ]);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].common_ingredient_count, 2);
        assert_eq!(result[0].ingredient_names, "Rum,Rum");
    }

    #[test]
    fn test_rank_without_rows_is_empty() {
        let matcher = Matcher::default();
        assert!(matcher.rank_by_ingredients(Vec::new()).is_empty());
    }

    #[test]
    fn test_pick_skips_rejected() {
        let matcher = Matcher::default();
        let eligible = vec![summary(1, "Margarita"), summary(2, "Negroni"), summary(3, "Mojito")];
        let rejected = RejectionSet::new([1, 3]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            let picked = matcher.pick_unrejected(&eligible, &rejected, &mut rng).unwrap();
            assert_eq!(picked.id, 2);
        }
    }

    #[test]
    fn test_pick_none_when_all_rejected() {
        let matcher = Matcher::default();
        let eligible = vec![summary(1, "Margarita"), summary(2, "Negroni")];
        let rejected = RejectionSet::new([1, 2]);
        let mut rng = StdRng::seed_from_u64(7);

        assert!(matcher.pick_unrejected(&eligible, &rejected, &mut rng).is_none());
        assert!(matcher
            .pick_unrejected(&[], &RejectionSet::default(), &mut rng)
            .is_none());
    }

    #[test]
    fn test_pick_covers_every_candidate() {
        let matcher = Matcher::default();
        let eligible: Vec<CocktailSummary> =
            (1..=4).map(|i| summary(i, &format!("Cocktail {}", i))).collect();
        let mut rng = StdRng::seed_from_u64(1234);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            let picked = matcher
                .pick_unrejected(&eligible, &RejectionSet::default(), &mut rng)
                .unwrap();
            seen.insert(picked.id);
        }

        assert_eq!(seen.len(), 4);
    }
}
