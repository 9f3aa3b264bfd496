pub mod state;

use self::state::{create_state, LoadState};
use super::card::PokemonCard;
use super::details::PokemonDetails;
use super::favorites::use_favorites;
use super::filters::{type_menu, AdvancedFilters};
use crate::shared::api_utils::catalog_client;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::a001_pokemon::aggregate::{title_case, Pokemon};
use contracts::enums::pokemon_type::CategoryFilter;
use contracts::enums::sort_key::SortKey;
use contracts::shared::config::CatalogConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn PokedexList(config: CatalogConfig) -> impl IntoView {
    let favorites = use_favorites();
    let state = create_state();
    let config = StoredValue::new(config);
    let (records, set_records) = signal::<Vec<Pokemon>>(Vec::new());
    let (load_state, set_load_state) = signal(LoadState::Loading);
    let (api_types, set_api_types) = signal(None::<Vec<String>>);
    let (regions, set_regions) = signal::<Vec<String>>(Vec::new());
    let selected = RwSignal::new(None::<Pokemon>);

    let fetch = move || {
        set_load_state.set(LoadState::Loading);
        spawn_local(async move {
            let client = catalog_client(config.get_value());
            match client.load().await {
                Ok(items) => {
                    set_records.set(items);
                    set_load_state.set(LoadState::Loaded);
                }
                Err(e) => {
                    log::error!("Failed to load catalog: {}", e);
                    set_load_state.set(LoadState::Failed(e.to_string()));
                }
            }
        });
    };

    // Menus are cosmetic: a failed `/type` request falls back to loaded types.
    let menu =
        Signal::derive(move || api_types.with(|t| records.with(|r| type_menu(t.as_deref(), r))));

    let fetch_menus = move || {
        spawn_local(async move {
            let client = catalog_client(config.get_value());
            match client.load_types().await {
                Ok(types) => set_api_types.set(Some(types.into_iter().map(|t| t.name).collect())),
                Err(e) => log::warn!("Type list unavailable, using loaded types: {}", e),
            }
            match client.load_regions().await {
                Ok(list) => set_regions.set(list.into_iter().map(|r| r.name).collect()),
                Err(e) => log::warn!("Region list unavailable: {}", e),
            }
        });
    };

    // Recomputed on every change of records or query.
    let visible = Signal::derive(move || state.with(|q| records.with(|r| q.apply(r))));

    let search = Signal::derive(move || state.with(|q| q.search.clone()));
    let category = Signal::derive(move || state.with(|q| q.category.code().to_string()));
    let sort = Signal::derive(move || state.with(|q| q.sort.code().to_string()));

    let on_search = Callback::new(move |value: String| state.update(|q| q.search = value));
    let on_category_change = Callback::new(move |code: String| {
        state.update(|q| q.category = CategoryFilter::from_code(&code))
    });
    let on_sort_change =
        Callback::new(move |code: String| state.update(|q| q.sort = SortKey::from_code(&code)));
    let on_select = Callback::new(move |p: Pokemon| selected.set(Some(p)));
    let close_details = Callback::new(move |_: ()| selected.set(None));

    let clear_filters = move |_: leptos::ev::MouseEvent| {
        state.update(|q| {
            q.search.clear();
            q.category = CategoryFilter::All;
        })
    };

    fetch();
    fetch_menus();

    view! {
        <div class="pokedex">
            <header class="pokedex__header">
                <h1>"Pokédex"</h1>
                <p class="pokedex__subtitle">"Explore the world of Pokémon"</p>
                <div class="pokedex__regions">
                    <For
                        each=move || regions.get()
                        key=|name| name.clone()
                        children=move |name| view! { <span class="region-chip">{title_case(&name)}</span> }
                    />
                </div>
                <SearchInput value=search on_change=on_search />
                <AdvancedFilters
                    category=category
                    sort=sort
                    category_menu=menu
                    on_category_change=on_category_change
                    on_sort_change=on_sort_change
                />
            </header>

            {move || match load_state.get() {
                LoadState::Loading => view! {
                    <div class="pokedex__loading">
                        <Spinner />
                        <span>"Loading..."</span>
                    </div>
                }
                .into_any(),
                LoadState::Failed(message) => view! {
                    <div class="error pokedex__error">
                        {icon("alert")}
                        <span>{format!("Could not load the Pokédex: {}", message)}</span>
                        <button class="button button--secondary" on:click=move |_| fetch()>
                            {icon("refresh")}
                            "Retry"
                        </button>
                    </div>
                }
                .into_any(),
                LoadState::Loaded => view! {
                    <div class="pokedex__summary">
                        <span>
                            {move || format!("{} of {} Pokémon", visible.with(|v| v.len()), records.with(|r| r.len()))}
                        </span>
                        <span class="pokedex__favorites-count">
                            {icon("star-filled")}
                            {move || favorites.count()}
                        </span>
                        {move || (state.with(|q| q.active_filters_count()) > 0).then(|| view! {
                            <button class="button button--link" on:click=clear_filters>
                                "Clear filters"
                            </button>
                        })}
                    </div>
                    <Show
                        when=move || visible.with(|v| !v.is_empty())
                        fallback=|| view! { <div class="pokedex__empty">"No Pokémon match your filters."</div> }
                    >
                        <div class="pokemon-grid">
                            <For
                                each=move || visible.get().into_iter().enumerate()
                                key=|(_, p)| p.id
                                children=move |(index, p)| view! {
                                    <PokemonCard pokemon=p index=index search=search on_select=on_select />
                                }
                            />
                        </div>
                    </Show>
                }
                .into_any(),
            }}

            {move || selected.get().map(|p| view! {
                <PokemonDetails pokemon=p on_close=close_details />
            })}
        </div>
    }
}
