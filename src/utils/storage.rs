use std::cell::RefCell;
use std::collections::HashMap;

/// Key-value persistence for visitor preferences.
///
/// The page runs against [`BrowserStore`]; tests hand the same logic a
/// [`MemoryStore`] so validation and persistence rules run natively.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// `localStorage`-backed store. Degrades to a no-op when storage is
/// unavailable (disabled storage, detached window).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(key).ok())
            .flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
        {
            let _ = storage.set_item(key, value);
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}
