use super::favorites::use_favorites;
use super::type_badge::TypeBadge;
use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use crate::shared::toast::ToastService;
use contracts::domain::a001_pokemon::aggregate::{Pokemon, PokemonId};
use leptos::prelude::*;

const STAGGER_STEP_MS: u32 = 30;

/// Artwork, or a placeholder when the record has none.
#[component]
pub fn Artwork(pokemon: Pokemon, #[prop(optional)] lazy: bool) -> impl IntoView {
    let loading = if lazy { "lazy" } else { "eager" };
    match pokemon.artwork_url {
        Some(url) => view! {
            <img
                class="pokemon-artwork"
                src=url
                alt=pokemon.name
                loading=loading
            />
        }
        .into_any(),
        None => view! {
            <div class="pokemon-artwork pokemon-artwork--missing">{icon("image")}</div>
        }
        .into_any(),
    }
}

/// Кнопка-звезда избранного
#[component]
pub fn FavoriteButton(pokemon_id: PokemonId) -> impl IntoView {
    let favorites = use_favorites();
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let is_favorite = move || favorites.is_favorite(pokemon_id);

    view! {
        <button
            class=move || {
                if is_favorite() {
                    "favorite-button favorite-button--active"
                } else {
                    "favorite-button"
                }
            }
            title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
            on:click=move |ev| {
                ev.stop_propagation();
                favorites.toggle_with_notice(pokemon_id, toasts);
            }
        >
            {move || if is_favorite() { icon("star-filled") } else { icon("star") }}
        </button>
    }
}

#[component]
pub fn PokemonCard(
    pokemon: Pokemon,
    /// Position in the grid, drives the appear delay
    index: usize,
    /// Current search text for highlighting
    #[prop(into)]
    search: Signal<String>,
    on_select: Callback<Pokemon>,
) -> impl IntoView {
    let id = pokemon.id;
    let display_name = pokemon.display_name();
    let types = pokemon.types.clone();
    let selected = pokemon.clone();

    view! {
        <div class="pokemon-card" on:click=move |_| on_select.run(selected.clone())>
            <CardAnimated delay_ms=stagger_delay(index, STAGGER_STEP_MS)>
                <div class="pokemon-card__favorite">
                    <FavoriteButton pokemon_id=id />
                </div>
                <div class="pokemon-card__image">
                    <Artwork pokemon=pokemon lazy=true />
                </div>
                <div class="pokemon-card__info">
                    <div class="pokemon-card__title">
                        <h3 class="pokemon-card__name">
                            {move || highlight_matches(&display_name, &search.get())}
                        </h3>
                        <span class="pokemon-card__number">{id.to_string()}</span>
                    </div>
                    <div class="pokemon-card__types">
                        {types
                            .into_iter()
                            .map(|t| view! { <TypeBadge name=t.name /> })
                            .collect_view()}
                    </div>
                </div>
            </CardAnimated>
        </div>
    }
}
