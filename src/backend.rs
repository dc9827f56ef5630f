/// Key-value backend for the snippet collection
///
/// One fixed key, whole-collection writes. The backend is written after every
/// mutation and read only at popup startup. Two builds exist: `sync-storage`
/// goes through the popup.js bridge to chrome.storage.sync, `local-storage`
/// uses window.localStorage directly.

#[cfg(all(feature = "sync-storage", feature = "local-storage"))]
compile_error!("enable exactly one of the `sync-storage` and `local-storage` features");

#[cfg(not(any(feature = "sync-storage", feature = "local-storage")))]
compile_error!("enable exactly one of the `sync-storage` and `local-storage` features");

pub const SNIPPETS_KEY: &str = "snipArr";

#[cfg(feature = "sync-storage")]
mod sync {
    use super::SNIPPETS_KEY;
    use crate::store::SnippetStore;
    use wasm_bindgen::prelude::*;

    // Import JS bridge functions
    #[wasm_bindgen(module = "/popup.js")]
    extern "C" {
        #[wasm_bindgen(catch)]
        async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(catch)]
        async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;
    }

    pub async fn load() -> Result<SnippetStore, String> {
        let value = getStorage(SNIPPETS_KEY)
            .await
            .map_err(|e| format!("Failed to get storage: {:?}", e))?;

        if value.is_null() || value.is_undefined() {
            Ok(SnippetStore::new())
        } else {
            serde_wasm_bindgen::from_value(value)
                .map_err(|e| format!("Failed to parse storage: {:?}", e))
        }
    }

    pub async fn persist(store: &SnippetStore) -> Result<(), String> {
        let value = serde_wasm_bindgen::to_value(store)
            .map_err(|e| format!("Failed to serialize snippets: {:?}", e))?;

        setStorage(SNIPPETS_KEY, value)
            .await
            .map_err(|e| format!("Failed to save storage: {:?}", e))
    }
}

#[cfg(feature = "local-storage")]
mod local {
    use super::SNIPPETS_KEY;
    use crate::store::SnippetStore;

    fn local_storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "No window".to_string())?
            .local_storage()
            .map_err(|e| format!("Failed to access localStorage: {:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }

    pub async fn load() -> Result<SnippetStore, String> {
        let storage = local_storage()?;

        let item = storage
            .get_item(SNIPPETS_KEY)
            .map_err(|e| format!("Failed to read localStorage: {:?}", e))?;

        match item {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| format!("Failed to parse snippets: {:?}", e)),
            None => Ok(SnippetStore::new()),
        }
    }

    pub async fn persist(store: &SnippetStore) -> Result<(), String> {
        let storage = local_storage()?;

        let json = serde_json::to_string(store)
            .map_err(|e| format!("Failed to serialize snippets: {:?}", e))?;

        storage
            .set_item(SNIPPETS_KEY, &json)
            .map_err(|e| format!("Failed to write localStorage: {:?}", e))
    }
}

#[cfg(feature = "sync-storage")]
pub use sync::{load, persist};

#[cfg(feature = "local-storage")]
pub use local::{load, persist};
