pub mod stat_chart;

use self::stat_chart::StatChart;
use super::card::{Artwork, FavoriteButton};
use super::type_badge::TypeBadge;
use crate::shared::components::ui::Badge;
use crate::shared::modal_frame::ModalFrame;
use contracts::domain::a001_pokemon::aggregate::{title_case, Pokemon};
use leptos::prelude::*;

/// Карточка покемона в диалоге: арт, типы, базовые характеристики,
/// способности, рост и вес.
#[component]
pub fn PokemonDetails(pokemon: Pokemon, on_close: Callback<()>) -> impl IntoView {
    let id = pokemon.id;
    let display_name = pokemon.display_name();
    let height = format!("{}m", pokemon.height_display());
    let weight = format!("{}kg", pokemon.weight_display());
    let types = pokemon.types.clone();
    let stats = pokemon.stats.clone();
    let abilities = pokemon.abilities.clone();

    let header = view! {
        <h2 class="pokemon-details__name">{display_name}</h2>
        <span class="pokemon-details__number">{id.to_string()}</span>
        <FavoriteButton pokemon_id=id />
    }
    .into_any();

    view! {
        <ModalFrame on_close=on_close modal_class="pokemon-details" header=header>
            <div class="pokemon-details__grid">
                <div class="pokemon-details__artwork">
                    <Artwork pokemon=pokemon />
                </div>

                <div class="pokemon-details__info">
                    <section>
                        <h3>"Types"</h3>
                        <div class="pokemon-details__types">
                            {types
                                .into_iter()
                                .map(|t| view! { <TypeBadge name=t.name /> })
                                .collect_view()}
                        </div>
                    </section>

                    <section>
                        <h3>"Base Stats"</h3>
                        <StatChart stats=stats />
                    </section>

                    <section>
                        <h3>"Abilities"</h3>
                        <div class="pokemon-details__abilities">
                            {abilities
                                .into_iter()
                                .map(|a| {
                                    let variant = if a.is_hidden { "hidden" } else { "ability" };
                                    let label = if a.is_hidden {
                                        format!("{} (hidden)", title_case(&a.name))
                                    } else {
                                        title_case(&a.name)
                                    };
                                    view! { <Badge variant=variant.to_string()>{label}</Badge> }
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <div class="pokemon-details__measures">
                        <div>
                            <span class="pokemon-details__label">"Height"</span>
                            <p class="pokemon-details__value">{height}</p>
                        </div>
                        <div>
                            <span class="pokemon-details__label">"Weight"</span>
                            <p class="pokemon-details__value">{weight}</p>
                        </div>
                    </div>
                </div>
            </div>
        </ModalFrame>
    }
}
