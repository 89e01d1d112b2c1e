use crate::config;
use crate::utils::dom;
use crate::utils::storage::PreferenceStore;

// Attribute the stylesheet keys its theme overrides on
const THEME_ATTRIBUTE: &str = "data-theme";

/// Last persisted theme tag, if the visitor saved one.
pub fn stored_theme(store: &impl PreferenceStore) -> Option<String> {
    store.read(config::THEME_STORAGE_KEY)
}

/// Persist a theme tag without touching the document.
pub fn remember_theme(store: &impl PreferenceStore, theme: &str) {
    store.write(config::THEME_STORAGE_KEY, theme);
}

/// Write the theme tag onto the document element.
pub fn apply(theme: &str) {
    if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme);
    }
}

/// Restore a previously saved theme. Without a saved tag the document is
/// left alone and the stylesheet defaults apply.
pub fn init(store: &impl PreferenceStore) {
    if let Some(theme) = stored_theme(store) {
        apply(&theme);
    }
}

/// Apply and persist a theme in one step. No control on the page invokes
/// this yet; it is the entry point for a future theme switcher.
pub fn set(store: &impl PreferenceStore, theme: &str) {
    apply(theme);
    remember_theme(store, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStore;

    #[test]
    fn theme_round_trips_through_store() {
        let store = MemoryStore::new();
        assert_eq!(stored_theme(&store), None);
        remember_theme(&store, "dark");
        assert_eq!(stored_theme(&store).as_deref(), Some("dark"));
    }

    #[test]
    fn latest_saved_theme_wins() {
        let store = MemoryStore::new();
        remember_theme(&store, "dark");
        remember_theme(&store, "light");
        assert_eq!(stored_theme(&store).as_deref(), Some("light"));
    }
}
