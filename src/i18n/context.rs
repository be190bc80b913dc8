//! Language context: the active language, its persistence, and lookups.
//!
//! A `LanguageContext` is created once per application session and passed to
//! whatever renders text. Components that must re-render on a language change
//! hold a `Localizer` obtained from `subscribe()`.

use crate::i18n::{I18nError, Language, LookupMetrics, MetricsReport, TranslationKey, TranslationStore};
use crate::storage::PreferenceStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Storage key under which the language preference is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Owner of the active language.
///
/// The context is the only writer of both the active language and its
/// persisted copy. Readers either borrow the context directly or hold a
/// `Localizer`.
pub struct LanguageContext {
    sender: watch::Sender<Language>,
    store: Arc<dyn PreferenceStore>,
    translations: &'static TranslationStore,
    metrics: Arc<LookupMetrics>,
}

impl LanguageContext {
    /// Create a context, seeding the active language from `store`.
    ///
    /// Only reads the store. See [`load_language`] for how stored values are
    /// interpreted.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        let initial = load_language(store.as_ref());
        let (sender, _) = watch::channel(initial);

        debug!(language = %initial, "Language context initialized");

        Self {
            sender,
            store,
            translations: TranslationStore::global(),
            metrics: Arc::new(LookupMetrics::new()),
        }
    }

    /// The active language.
    pub fn language(&self) -> Language {
        *self.sender.borrow()
    }

    /// Change the active language and persist it.
    ///
    /// Subscribers are notified only when the language actually changes; the
    /// preference is written either way. A failed write is logged and the
    /// in-memory change is kept.
    pub fn set_language(&self, next: Language) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        if let Err(e) = self.store.set(LANGUAGE_STORAGE_KEY, next.code()) {
            warn!(language = %next, error = %e, "Failed to persist language preference");
        }

        if changed {
            info!(language = %next, "Language changed");
        }
    }

    /// Switch to the other language and return it.
    pub fn toggle(&self) -> Language {
        let next = self.language().toggled();
        self.set_language(next);
        next
    }

    /// Translate a key for the active language.
    ///
    /// Unknown keys are returned unchanged so they stay visible in the UI.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        resolve(self.translations, &self.metrics, self.language(), key)
    }

    /// Translate a statically known key for the active language.
    pub fn text(&self, key: TranslationKey) -> &'static str {
        self.metrics.record_hit();
        self.translations.text(key, self.language())
    }

    /// Get a handle that follows this context's language.
    pub fn subscribe(&self) -> Localizer {
        Localizer {
            receiver: self.sender.subscribe(),
            translations: self.translations,
            metrics: Arc::clone(&self.metrics),
        }
    }

    /// Lookup statistics for this context and its localizers.
    pub fn metrics(&self) -> MetricsReport {
        self.metrics.report()
    }
}

/// Read the persisted language preference.
///
/// Returns the stored language when the value is exactly a supported code.
/// A missing value, any other value, or a read failure yields the primary
/// language.
pub fn load_language(store: &dyn PreferenceStore) -> Language {
    match store.get(LANGUAGE_STORAGE_KEY) {
        Ok(Some(code)) => Language::from_code(&code).unwrap_or_else(|_| {
            warn!(stored = %code, "Ignoring invalid stored language preference");
            Language::primary()
        }),
        Ok(None) => Language::primary(),
        Err(e) => {
            warn!(error = %e, "Failed to read language preference, using default");
            Language::primary()
        }
    }
}

fn resolve<'a>(
    translations: &TranslationStore,
    metrics: &LookupMetrics,
    language: Language,
    key: &'a str,
) -> &'a str {
    match translations.get(key, language) {
        Some(text) => {
            metrics.record_hit();
            text
        }
        None => {
            metrics.record_fallback();
            debug!(key, language = %language, "No translation found, falling back to key");
            key
        }
    }
}

/// A consumer's view of a `LanguageContext`.
///
/// Every accessor fails with [`I18nError::ContextUnavailable`] once the
/// context that issued the handle is gone.
#[derive(Clone)]
pub struct Localizer {
    receiver: watch::Receiver<Language>,
    translations: &'static TranslationStore,
    metrics: Arc<LookupMetrics>,
}

impl Localizer {
    fn ensure_open(&self) -> Result<(), I18nError> {
        self.receiver
            .has_changed()
            .map(|_| ())
            .map_err(|_| I18nError::ContextUnavailable)
    }

    /// The active language of the owning context.
    pub fn language(&self) -> Result<Language, I18nError> {
        self.ensure_open()?;
        Ok(*self.receiver.borrow())
    }

    /// Translate a key for the active language, falling back to the key.
    pub fn t<'a>(&self, key: &'a str) -> Result<&'a str, I18nError> {
        let language = self.language()?;
        Ok(resolve(self.translations, &self.metrics, language, key))
    }

    /// Translate a statically known key for the active language.
    pub fn text(&self, key: TranslationKey) -> Result<&'static str, I18nError> {
        let language = self.language()?;
        self.metrics.record_hit();
        Ok(self.translations.text(key, language))
    }

    /// Wait until the language changes and return the new value.
    ///
    /// A change that was never read is not reported once the context is gone.
    pub async fn changed(&mut self) -> Result<Language, I18nError> {
        self.receiver
            .changed()
            .await
            .map_err(|_| I18nError::ContextUnavailable)?;
        self.ensure_open()?;
        Ok(*self.receiver.borrow_and_update())
    }
}
