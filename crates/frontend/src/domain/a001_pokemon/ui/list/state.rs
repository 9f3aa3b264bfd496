use contracts::domain::a001_pokemon::list_query::ListQuery;
use contracts::enums::pokemon_type::CategoryFilter;
use contracts::enums::sort_key::SortKey;
use leptos::prelude::*;

/// Состояние загрузки каталога
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Поиск, фильтр и сортировка списка. Не сохраняются между сессиями.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery {
        search: String::new(),
        category: CategoryFilter::All,
        sort: SortKey::IdAsc,
    })
}
