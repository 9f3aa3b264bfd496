//! Favorites store: a set of Pokémon ids with write-through persistence.
//!
//! The whole list is stored under [`FAVORITES_STORAGE_KEY`] as a JSON array of
//! integers in the order ids were added, and rewritten on every toggle.

use super::aggregate::PokemonId;
use crate::shared::error::FavoritesError;
use crate::shared::storage::KeyValueStorage;

pub const FAVORITES_STORAGE_KEY: &str = "favorites";

/// Ids in insertion order, as read from storage.
pub type FavoriteSet = Vec<PokemonId>;

/// Результат переключения избранного
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(PokemonId),
    Removed(PokemonId),
}

impl FavoriteChange {
    pub fn id(&self) -> PokemonId {
        match self {
            FavoriteChange::Added(id) | FavoriteChange::Removed(id) => *id,
        }
    }

    /// Заголовок уведомления
    pub fn title(&self) -> &'static str {
        match self {
            FavoriteChange::Added(_) => "Added to favorites",
            FavoriteChange::Removed(_) => "Removed from favorites",
        }
    }

    /// Текст уведомления
    pub fn description(&self) -> String {
        match self {
            FavoriteChange::Added(id) => {
                format!("Pokémon #{} has been added to your favorites.", id.value())
            }
            FavoriteChange::Removed(id) => {
                format!("Pokémon #{} has been removed from your favorites.", id.value())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    ids: FavoriteSet,
    /// List as it was before the latest toggle, when that toggle removed an id.
    last_removed: Option<(PokemonId, FavoriteSet)>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    /// Hydrates from storage. An absent key yields an empty set; a present but
    /// malformed value is an error.
    pub fn load(storage: S) -> Result<Self, FavoritesError> {
        let ids = match storage.get_item(FAVORITES_STORAGE_KEY) {
            Some(raw) => parse_ids(&raw)?,
            None => FavoriteSet::new(),
        };
        log::debug!("Loaded {} favorites", ids.len());
        Ok(Self::with_ids(storage, ids))
    }

    /// Same as [`load`](Self::load), but a malformed stored value is logged and
    /// replaced by an empty set.
    pub fn load_or_default(storage: S) -> Self {
        let raw = storage.get_item(FAVORITES_STORAGE_KEY);
        let ids = match raw.as_deref().map(parse_ids) {
            Some(Ok(ids)) => ids,
            Some(Err(e)) => {
                log::warn!("Ignoring stored favorites: {}", e);
                FavoriteSet::new()
            }
            None => FavoriteSet::new(),
        };
        Self::with_ids(storage, ids)
    }

    fn with_ids(storage: S, ids: FavoriteSet) -> Self {
        Self {
            storage,
            ids,
            last_removed: None,
        }
    }

    pub fn ids(&self) -> &FavoriteSet {
        &self.ids
    }

    pub fn is_favorite(&self, id: PokemonId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flips membership of `id` and persists the whole list before returning.
    ///
    /// Removal drops every occurrence; adding appends, except that re-adding
    /// the id removed by the immediately preceding toggle puts the list back
    /// exactly as it was. If the write fails the previous state is restored,
    /// so memory and storage agree.
    pub fn toggle(&mut self, id: PokemonId) -> Result<FavoriteChange, FavoritesError> {
        let previous = self.ids.clone();
        let undo = self.last_removed.take();

        let change = if self.is_favorite(id) {
            self.ids.retain(|existing| *existing != id);
            self.last_removed = Some((id, previous.clone()));
            FavoriteChange::Removed(id)
        } else {
            match undo.clone() {
                Some((removed, before)) if removed == id => self.ids = before,
                _ => self.ids.push(id),
            }
            FavoriteChange::Added(id)
        };

        if let Err(e) = self.persist() {
            self.ids = previous;
            self.last_removed = undo;
            return Err(e);
        }

        Ok(change)
    }

    fn persist(&self) -> Result<(), FavoritesError> {
        let raw = serde_json::to_string(&self.ids)?;
        self.storage
            .set_item(FAVORITES_STORAGE_KEY, &raw)
            .map_err(FavoritesError::Storage)
    }
}

fn parse_ids(raw: &str) -> Result<FavoriteSet, FavoritesError> {
    Ok(serde_json::from_str(raw)?)
}
