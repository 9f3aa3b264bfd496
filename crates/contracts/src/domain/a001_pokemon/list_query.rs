//! Filter-sort pipeline over the loaded catalog.
//!
//! The pipeline always runs against the full record set held by the caller and
//! returns a new vector; the input slice is never reordered in place.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::aggregate::Pokemon;
use crate::enums::pokemon_type::CategoryFilter;
use crate::enums::sort_key::SortKey;

/// Upper bound of the base-stat chart axis.
pub const MAX_BASE_STAT: u32 = 255;

/// Текущие параметры списка: поиск, фильтр по типу, сортировка
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl ListQuery {
    pub fn apply(&self, records: &[Pokemon]) -> Vec<Pokemon> {
        apply(records, &self.search, &self.category, self.sort)
    }

    /// Количество активных фильтров (поиск и тип)
    pub fn active_filters_count(&self) -> usize {
        usize::from(!self.search.is_empty()) + usize::from(!self.category.is_all())
    }
}

/// Filters by name substring, then by category, then stable-sorts a copy.
pub fn apply(
    records: &[Pokemon],
    search: &str,
    category: &CategoryFilter,
    sort: SortKey,
) -> Vec<Pokemon> {
    let needle = search.to_lowercase();

    let mut items: Vec<Pokemon> = records
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| matches_category(p, category))
        .cloned()
        .collect();

    sort_records(&mut items, sort);
    items
}

fn matches_search(pokemon: &Pokemon, needle_lower: &str) -> bool {
    needle_lower.is_empty() || pokemon.name.to_lowercase().contains(needle_lower)
}

fn matches_category(pokemon: &Pokemon, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Named(name) => pokemon.has_type(name),
    }
}

/// `sort_by` is stable, so records with equal keys keep their relative order.
pub fn sort_records(items: &mut [Pokemon], sort: SortKey) {
    match sort {
        SortKey::IdAsc => items.sort_by(|a, b| a.id.cmp(&b.id)),
        SortKey::IdDesc => items.sort_by(|a, b| b.id.cmp(&a.id)),
        SortKey::NameAsc => items.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => items.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::WeightAsc => items.sort_by(|a, b| a.weight.cmp(&b.weight)),
        SortKey::WeightDesc => items.sort_by(|a, b| b.weight.cmp(&a.weight)),
        SortKey::Unsorted => {}
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Имена типов, встречающихся в загруженном наборе (по алфавиту)
pub fn distinct_categories(records: &[Pokemon]) -> Vec<String> {
    records
        .iter()
        .flat_map(|p| p.types.iter().map(|t| t.name.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Bar width in percent of the `0..=MAX_BASE_STAT` axis.
pub fn stat_bar_percent(value: u32) -> f64 {
    let clamped = value.min(MAX_BASE_STAT);
    f64::from(clamped) * 100.0 / f64::from(MAX_BASE_STAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_pokemon::aggregate::{CategoryTag, PokemonId};

    fn pokemon(id: u32, name: &str, types: &[&str], weight: u32) -> Pokemon {
        Pokemon {
            id: PokemonId(id),
            name: name.to_string(),
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| CategoryTag {
                    slot: i as u32 + 1,
                    name: t.to_string(),
                    url: format!("https://pokeapi.co/api/v2/type/{}/", t),
                })
                .collect(),
            stats: Vec::new(),
            abilities: Vec::new(),
            height: 10,
            weight,
            artwork_url: None,
        }
    }

    fn sample() -> Vec<Pokemon> {
        vec![
            pokemon(6, "charizard", &["fire", "flying"], 905),
            pokemon(1, "bulbasaur", &["grass", "poison"], 69),
            pokemon(7, "squirtle", &["water"], 90),
            pokemon(4, "charmander", &["fire"], 85),
            pokemon(25, "pikachu", &["electric"], 60),
            pokemon(12, "butterfree", &["bug", "flying"], 320),
        ]
    }

    fn ids(items: &[Pokemon]) -> Vec<u32> {
        items.iter().map(|p| p.id.value()).collect()
    }

    fn names(items: &[Pokemon]) -> Vec<&str> {
        items.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_search_keeps_exactly_matching_names() {
        let records = sample();
        let result = apply(&records, "char", &CategoryFilter::All, SortKey::IdAsc);
        assert_eq!(names(&result), vec!["charmander", "charizard"]);

        let result = apply(&records, "char", &CategoryFilter::All, SortKey::NameDesc);
        assert_eq!(names(&result), vec!["charmander", "charizard"]);

        let result = apply(&records, "char", &CategoryFilter::All, SortKey::WeightDesc);
        assert_eq!(names(&result), vec!["charizard", "charmander"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let records = sample();
        let result = apply(&records, "PIKA", &CategoryFilter::All, SortKey::IdAsc);
        assert_eq!(ids(&result), vec![25]);

        for s in ["", "a", "ur", "xyz"] {
            let result = apply(&records, s, &CategoryFilter::All, SortKey::IdAsc);
            let expected: BTreeSet<u32> = records
                .iter()
                .filter(|p| p.name.contains(s))
                .map(|p| p.id.value())
                .collect();
            assert_eq!(ids(&result).into_iter().collect::<BTreeSet<_>>(), expected);
        }
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let records = sample();
        let result = apply(&records, "", &CategoryFilter::All, SortKey::IdAsc);
        assert_eq!(ids(&result), vec![1, 4, 6, 7, 12, 25]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let records = sample();
        let flying = CategoryFilter::Named("flying".to_string());
        let result = apply(&records, "", &flying, SortKey::IdAsc);
        assert_eq!(ids(&result), vec![6, 12]);
        assert!(result.iter().all(|p| p.has_type("flying")));

        let wrong_case = CategoryFilter::Named("Flying".to_string());
        assert!(apply(&records, "", &wrong_case, SortKey::IdAsc).is_empty());
    }

    #[test]
    fn test_search_and_category_combine() {
        let records = sample();
        let fire = CategoryFilter::Named("fire".to_string());
        let result = apply(&records, "zard", &fire, SortKey::IdAsc);
        assert_eq!(ids(&result), vec![6]);
    }

    #[test]
    fn test_id_desc_reverses_id_asc() {
        let records = sample();
        let asc = apply(&records, "", &CategoryFilter::All, SortKey::IdAsc);
        let desc = apply(&asc, "", &CategoryFilter::All, SortKey::IdDesc);
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn test_name_and_weight_orders() {
        let records = sample();
        let by_name = apply(&records, "", &CategoryFilter::All, SortKey::NameAsc);
        assert_eq!(
            names(&by_name),
            vec!["bulbasaur", "butterfree", "charizard", "charmander", "pikachu", "squirtle"]
        );

        let by_weight = apply(&records, "", &CategoryFilter::All, SortKey::WeightAsc);
        assert_eq!(ids(&by_weight), vec![25, 1, 4, 7, 12, 6]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let records = vec![
            pokemon(3, "c", &["normal"], 50),
            pokemon(1, "a", &["normal"], 50),
            pokemon(2, "b", &["normal"], 10),
        ];
        let result = apply(&records, "", &CategoryFilter::All, SortKey::WeightAsc);
        assert_eq!(ids(&result), vec![2, 3, 1]);

        let result = apply(&records, "", &CategoryFilter::All, SortKey::WeightDesc);
        assert_eq!(ids(&result), vec![3, 1, 2]);
    }

    #[test]
    fn test_unsorted_keeps_input_order() {
        let records = sample();
        let result = apply(&records, "", &CategoryFilter::All, SortKey::from_code("bogus"));
        assert_eq!(ids(&result), ids(&records));
    }

    #[test]
    fn test_pipeline_is_pure_and_idempotent() {
        let records = sample();
        let before = records.clone();
        let query = ListQuery {
            search: "r".to_string(),
            category: CategoryFilter::Named("fire".to_string()),
            sort: SortKey::NameAsc,
        };

        let first = query.apply(&records);
        let second = query.apply(&records);
        assert_eq!(first, second);
        assert_eq!(query.apply(&first), first);
        assert_eq!(records, before);
    }

    #[test]
    fn test_active_filters_count() {
        let mut query = ListQuery::default();
        assert_eq!(query.active_filters_count(), 0);
        query.search = "pi".to_string();
        query.category = CategoryFilter::from_code("electric");
        assert_eq!(query.active_filters_count(), 2);
    }

    #[test]
    fn test_blank_search_counts_as_active_filter() {
        let query = ListQuery {
            search: "  ".to_string(),
            ..ListQuery::default()
        };
        assert!(query.apply(&sample()).is_empty());
        assert_eq!(query.active_filters_count(), 1);
    }

    #[test]
    fn test_distinct_categories() {
        assert_eq!(
            distinct_categories(&sample()),
            vec!["bug", "electric", "fire", "flying", "grass", "poison", "water"]
        );
    }

    #[test]
    fn test_stat_bar_percent() {
        assert_eq!(stat_bar_percent(0), 0.0);
        assert_eq!(stat_bar_percent(255), 100.0);
        assert_eq!(stat_bar_percent(300), 100.0);
        assert!((stat_bar_percent(51) - 20.0).abs() < 1e-9);
    }
}
