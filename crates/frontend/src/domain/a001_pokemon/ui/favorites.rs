use crate::shared::storage::BrowserStorage;
use crate::shared::toast::ToastService;
use contracts::domain::a001_pokemon::aggregate::PokemonId;
use contracts::domain::a001_pokemon::favorites::{FavoriteChange, FavoriteSet, FavoritesStore};
use leptos::prelude::*;

/// Favorites store shared through context.
///
/// The store owns persistence; `ids` mirrors its set so views re-render on
/// every toggle.
#[derive(Clone, Copy)]
pub struct FavoritesContext {
    store: StoredValue<FavoritesStore<BrowserStorage>>,
    ids: RwSignal<FavoriteSet>,
}

impl FavoritesContext {
    pub fn load() -> Self {
        let store = FavoritesStore::load_or_default(BrowserStorage);
        let ids = RwSignal::new(store.ids().clone());
        Self {
            store: StoredValue::new(store),
            ids,
        }
    }

    pub fn is_favorite(&self, id: PokemonId) -> bool {
        self.ids.with(|ids| ids.contains(&id))
    }

    pub fn count(&self) -> usize {
        self.ids.with(|ids| ids.len())
    }

    pub fn toggle(&self, id: PokemonId) -> Result<FavoriteChange, String> {
        let mut outcome = Err("Favorites store is not available".to_string());
        self.store.update_value(|store| {
            outcome = store
                .toggle(id)
                .map(|change| (change, store.ids().clone()))
                .map_err(|e| e.to_string());
        });

        let (change, ids) = outcome?;
        self.ids.set(ids);
        Ok(change)
    }

    /// Toggle and report the result as a toast.
    pub fn toggle_with_notice(&self, id: PokemonId, toasts: ToastService) {
        match self.toggle(id) {
            Ok(change) => toasts.show(change.title(), change.description()),
            Err(e) => {
                log::error!("Failed to toggle favorite {}: {}", id, e);
                toasts.show("Could not update favorites", e);
            }
        }
    }
}

pub fn use_favorites() -> FavoritesContext {
    use_context::<FavoritesContext>().expect("FavoritesContext not found in context")
}
