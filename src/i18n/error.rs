use thiserror::Error;

/// Errors raised by the localization layer.
///
/// Unknown translation keys and invalid persisted preferences are deliberately
/// absent: both degrade to a default instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    /// A `Localizer` was used after the `LanguageContext` that issued it was dropped.
    #[error("language context is not available: the LanguageContext behind this handle has been dropped")]
    ContextUnavailable,

    #[error("unsupported language code: '{0}' (expected 'en' or 'hi')")]
    UnsupportedLanguage(String),
}
