use crate::domain::a001_pokemon::ui::favorites::FavoritesContext;
use crate::domain::a001_pokemon::ui::list::PokedexList;
use crate::shared::api_utils::catalog_config;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Favorites are hydrated once, before the first render.
    provide_context(FavoritesContext::load());

    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <PokedexList config=catalog_config() />
            <ToastHost />
        </ConfigProvider>
    }
}
