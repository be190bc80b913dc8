//! Internationalization (i18n) module for the bilingual portal.
//!
//! All language-related logic and localized strings live here.
//!
//! # Architecture
//!
//! - `language`: the closed `Language` enum (English primary, Hindi secondary)
//! - `strings`: the translation table and the generated `TranslationKey` enum
//! - `store`: read-only lookups into the table by typed or string key
//! - `context`: the active language, its persistence, and `t()` lookups
//! - `validator`: structural checks over the whole table
//! - `metrics`: hit/fallback counters for lookups
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use citizen_portal::i18n::{Language, LanguageContext};
//! use citizen_portal::storage::MemoryStore;
//!
//! let context = LanguageContext::new(Arc::new(MemoryStore::new()));
//! assert_eq!(context.t("common.loading"), "Loading...");
//!
//! context.set_language(Language::Hindi);
//! assert_eq!(context.t("common.loading"), "लोड हो रहा है...");
//! assert_eq!(context.t("no.such.key"), "no.such.key");
//! ```

mod context;
mod error;
mod language;
mod metrics;
mod store;
mod strings;
mod validator;

pub use context::{load_language, LanguageContext, Localizer, LANGUAGE_STORAGE_KEY};
pub use error::I18nError;
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use store::TranslationStore;
pub use strings::{TranslationEntry, TranslationKey};
pub use validator::{CatalogValidator, ValidationReport};
