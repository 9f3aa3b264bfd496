use contracts::shared::storage::KeyValueStorage;

/// `window.localStorage`. Looked up on every call, so the handle itself holds
/// no JS object.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = storage().ok_or_else(|| "localStorage is not available".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("{e:?}"))
    }
}
