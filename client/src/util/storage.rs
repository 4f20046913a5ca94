//! Browser `localStorage` as the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements `storefront::KeyValueStore` so the shared session code can read
//! and clear the `token`/`role` keys without knowing about `web-sys`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use storefront::KeyValueStore;

/// Handle to `window.localStorage`. Calls are ignored when storage is
/// unavailable (SSR, private mode, quota errors).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.clear();
            }
        }
    }
}
