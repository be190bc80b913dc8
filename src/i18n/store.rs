//! Translation store: read-only access to the translation table.
//!
//! The table itself is compile-time data; this module adds the string-key
//! index used for keys that only exist at runtime.

use crate::i18n::strings::{TranslationEntry, ENTRIES};
use crate::i18n::{Language, TranslationKey};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Indexed view over the translation table.
///
/// The store is immutable, so a single process-wide instance is shared by
/// every `LanguageContext`.
#[derive(Debug)]
pub struct TranslationStore {
    entries: &'static [TranslationEntry],
    index: HashMap<&'static str, TranslationKey>,
}

static STORE: OnceLock<TranslationStore> = OnceLock::new();

impl TranslationStore {
    /// Get the shared translation store, building the key index on first use.
    pub fn global() -> &'static TranslationStore {
        STORE.get_or_init(|| TranslationStore::from_entries(ENTRIES))
    }

    fn from_entries(entries: &'static [TranslationEntry]) -> Self {
        let index = entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.key))
            .collect();
        Self { entries, index }
    }

    /// Look up a string key for a language.
    ///
    /// # Returns
    /// * `Some(text)` if the key exists and its text for `language` is non-empty
    /// * `None` otherwise; callers decide on the fallback
    pub fn get(&self, key: &str, language: Language) -> Option<&'static str> {
        self.lookup_key(key)
            .map(|key| key.entry().text(language))
            .filter(|text| !text.is_empty())
    }

    /// Text for a statically known key.
    pub fn text(&self, key: TranslationKey, language: Language) -> &'static str {
        key.entry().text(language)
    }

    /// Resolve a dotted string key to its typed form.
    pub fn lookup_key(&self, key: &str) -> Option<TranslationKey> {
        self.index.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All entries, in table order.
    pub fn entries(&self) -> &'static [TranslationEntry] {
        self.entries
    }

    /// All dotted keys, in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full key → text mapping for one language, sorted by key.
    pub fn dictionary(&self, language: Language) -> BTreeMap<&'static str, &'static str> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.text(language)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_singleton() {
        let store1 = TranslationStore::global();
        let store2 = TranslationStore::global();
        assert!(std::ptr::eq(store1, store2));
    }

    #[test]
    fn test_get_known_key() {
        let store = TranslationStore::global();
        assert_eq!(store.get("dashboard.logout", Language::English), Some("Logout"));
        assert_eq!(store.get("dashboard.logout", Language::Hindi), Some("लॉगआउट"));
    }

    #[test]
    fn test_get_unknown_key_is_none() {
        let store = TranslationStore::global();
        assert_eq!(store.get("dashboard.missing", Language::English), None);
        assert_eq!(store.get("", Language::Hindi), None);
    }

    #[test]
    fn test_get_is_case_sensitive() {
        let store = TranslationStore::global();
        assert!(store.get("hero.getStarted", Language::English).is_some());
        assert!(store.get("hero.getstarted", Language::English).is_none());
    }

    #[test]
    fn test_every_key_resolves_in_both_languages() {
        let store = TranslationStore::global();
        for key in store.keys() {
            for language in Language::ALL {
                let text = store.get(key, language);
                assert!(text.is_some_and(|t| !t.is_empty()), "{key} missing for {language}");
            }
        }
    }

    #[test]
    fn test_index_matches_entries() {
        let store = TranslationStore::global();
        assert_eq!(store.len(), TranslationKey::ALL.len());
        assert!(!store.is_empty());
        for key in TranslationKey::ALL {
            assert_eq!(store.lookup_key(key.as_str()), Some(*key));
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let store = TranslationStore::global();
        // A duplicated key string would collapse two rows into one index slot.
        assert_eq!(store.index.len(), store.len());
    }

    #[test]
    fn test_dictionary_per_language() {
        let store = TranslationStore::global();
        let english = store.dictionary(Language::English);
        let hindi = store.dictionary(Language::Hindi);

        assert_eq!(english.len(), store.len());
        assert_eq!(hindi.len(), store.len());
        assert_eq!(english["common.govIndia"], "Government of India");
        assert_eq!(hindi["common.govIndia"], "भारत सरकार");
    }

    #[test]
    fn test_text_for_typed_key() {
        let store = TranslationStore::global();
        assert_eq!(
            store.text(TranslationKey::CtaButton, Language::English),
            "Create Account Now"
        );
    }
}
