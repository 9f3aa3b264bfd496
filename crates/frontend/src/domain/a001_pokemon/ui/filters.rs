use crate::shared::components::ui::Select;
use crate::shared::icons::icon;
use contracts::domain::a001_pokemon::aggregate::{title_case, Pokemon};
use contracts::domain::a001_pokemon::list_query::distinct_categories;
use contracts::enums::pokemon_type::{category_menu, default_category_menu};
use contracts::enums::sort_key::SortKey;
use leptos::prelude::*;

/// Type menu from the `/type` list when it loaded, otherwise from the types
/// present in `records`, otherwise the built-in list.
pub fn type_menu(api_types: Option<&[String]>, records: &[Pokemon]) -> Vec<String> {
    match api_types {
        Some(types) => category_menu(types.iter().cloned()),
        None if records.is_empty() => default_category_menu(),
        None => category_menu(distinct_categories(records)),
    }
}

/// Options for the type select: ("fire", "Fire"), ...
pub fn category_options(menu: &[String]) -> Vec<(String, String)> {
    menu.iter()
        .map(|code| (code.clone(), title_case(code)))
        .collect()
}

pub fn sort_options() -> Vec<(String, String)> {
    SortKey::all()
        .into_iter()
        .map(|key| (key.code().to_string(), key.display_name().to_string()))
        .collect()
}

/// Фильтр по типу и выбор сортировки
#[component]
pub fn AdvancedFilters(
    /// Код выбранного типа ("all" или имя типа)
    #[prop(into)]
    category: Signal<String>,
    /// Код выбранной сортировки
    #[prop(into)]
    sort: Signal<String>,
    /// Пункты меню типов, первым идёт "all"
    #[prop(into)]
    category_menu: Signal<Vec<String>>,
    on_category_change: Callback<String>,
    on_sort_change: Callback<String>,
) -> impl IntoView {
    let type_options = Signal::derive(move || category_menu.with(|m| category_options(m)));

    view! {
        <div class="advanced-filters">
            <span class="advanced-filters__icon">{icon("sliders")}</span>
            <Select
                id="type-filter".to_string()
                label="Type:".to_string()
                value=category
                on_change=on_category_change
                options=type_options
            />
            <Select
                id="sort-select".to_string()
                label="Sort by:".to_string()
                value=sort
                on_change=on_sort_change
                options=sort_options()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_pokemon::aggregate::{CategoryTag, PokemonId};

    fn pokemon(id: u32, types: &[&str]) -> Pokemon {
        Pokemon {
            id: PokemonId(id),
            name: format!("p{}", id),
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| CategoryTag {
                    slot: i as u32 + 1,
                    name: t.to_string(),
                    url: String::new(),
                })
                .collect(),
            stats: Vec::new(),
            abilities: Vec::new(),
            height: 1,
            weight: 1,
            artwork_url: None,
        }
    }

    #[test]
    fn test_type_menu_prefers_remote_list() {
        let remote = vec!["normal".to_string(), "shadow".to_string()];
        let menu = type_menu(Some(&remote), &[pokemon(1, &["fire"])]);
        assert_eq!(menu, vec!["all", "normal"]);
    }

    #[test]
    fn test_type_menu_falls_back_to_loaded_types() {
        let records = [pokemon(1, &["water"]), pokemon(2, &["fire", "water"])];
        assert_eq!(type_menu(None, &records), vec!["all", "fire", "water"]);
        assert_eq!(type_menu(None, &[]), default_category_menu());
    }

    #[test]
    fn test_sort_options_labels() {
        let options = sort_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("id".to_string(), "Number (Ascending)".to_string()));
        assert_eq!(options[5], ("weight-desc".to_string(), "Weight (High to Low)".to_string()));
    }

    #[test]
    fn test_category_options_are_title_cased() {
        let options = category_options(&["all".to_string(), "fire".to_string()]);
        assert_eq!(options[0], ("all".to_string(), "All".to_string()));
        assert_eq!(options[1], ("fire".to_string(), "Fire".to_string()));
    }
}
