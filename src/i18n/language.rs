//! Language type: the closed set of languages the portal renders.
//!
//! Every translation entry carries exactly one string per `Language`, so adding
//! a variant here is a compile error until the catalog in `strings` follows.

use crate::i18n::I18nError;
use std::fmt;

/// A supported portal language.
///
/// English is the primary language: it is the default when no valid
/// preference has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Primary language (`"en"`).
    #[default]
    English,
    /// Secondary language (`"hi"`).
    Hindi,
}

impl Language {
    /// All supported languages, primary first.
    pub const ALL: [Language; 2] = [Language::English, Language::Hindi];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (`"en"` or `"hi"`)
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is exactly one of the supported codes
    /// * `Err(I18nError::UnsupportedLanguage)` for anything else, including
    ///   differently cased or padded codes
    ///
    /// # Example
    /// ```
    /// use citizen_portal::i18n::Language;
    ///
    /// let hindi = Language::from_code("hi").unwrap();
    /// assert_eq!(hindi, Language::Hindi);
    /// assert!(Language::from_code("fr").is_err());
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        match code {
            "en" => Ok(Language::English),
            "hi" => Ok(Language::Hindi),
            other => Err(I18nError::UnsupportedLanguage(other.to_string())),
        }
    }

    /// The primary language, used whenever no valid preference exists.
    pub fn primary() -> Language {
        Language::English
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
        }
    }

    /// Name of the language written in that language.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिन्दी",
        }
    }

    /// Check if this is the primary language.
    pub fn is_primary(&self) -> bool {
        *self == Language::primary()
    }

    /// The other language of the pair.
    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }

    /// Label shown on the language toggle control.
    ///
    /// The label names the language the toggle switches *to*, abbreviated in
    /// that language's own script.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::English => "हिं",
            Language::Hindi => "EN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
