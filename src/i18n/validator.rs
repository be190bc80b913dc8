//! Catalog validation.
//!
//! Checks the structural invariants of the translation table: dotted key
//! format, unique keys, no empty values, and that placeholders and trailing
//! ellipses agree between languages.

use crate::i18n::{Language, TranslationStore};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Violations of catalog invariants
    pub errors: Vec<String>,

    /// Likely translation mistakes that do not break lookups
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for the translation catalog.
pub struct CatalogValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl CatalogValidator {
    /// Validate every entry of a translation store.
    pub fn validate(store: &TranslationStore) -> ValidationReport {
        Self::validate_rows(
            store
                .entries()
                .iter()
                .map(|entry| (entry.key.as_str(), entry.english, entry.hindi)),
        )
    }

    /// Validate raw `(key, english, hindi)` rows.
    pub fn validate_rows<'a>(
        rows: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for (key, english, hindi) in rows {
            if !seen.insert(key) {
                report.errors.push(format!("Duplicate key: '{}'", key));
            }

            if !Self::is_valid_key(key) {
                report
                    .errors
                    .push(format!("Malformed key: '{}' is not dot-namespaced", key));
            }

            for (language, text) in [(Language::English, english), (Language::Hindi, hindi)] {
                if text.trim().is_empty() {
                    report
                        .errors
                        .push(format!("Empty {} value for key '{}'", language.name(), key));
                }
            }

            let english_placeholders = Self::extract_placeholders(english);
            let hindi_placeholders = Self::extract_placeholders(hindi);
            if english_placeholders != hindi_placeholders {
                report.warnings.push(format!(
                    "Placeholder mismatch for '{}': English has {:?}, Hindi has {:?}",
                    key, english_placeholders, hindi_placeholders
                ));
            }

            if english.ends_with("...") != hindi.ends_with("...") {
                report
                    .warnings
                    .push(format!("Ellipsis mismatch for '{}'", key));
            }
        }

        report
    }

    fn is_valid_key(key: &str) -> bool {
        let regex =
            KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z]+(\.[a-zA-Z0-9]+)+$").unwrap());
        regex.is_match(key)
    }

    /// Extract all `{name}` placeholders from text
    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-zA-Z0-9_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Key Format Tests ====================

    #[test]
    fn test_valid_keys() {
        assert!(CatalogValidator::is_valid_key("common.loading"));
        assert!(CatalogValidator::is_valid_key("benefits.benefit1"));
        assert!(CatalogValidator::is_valid_key("dashboard.documentsRequested"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!CatalogValidator::is_valid_key("loading"));
        assert!(!CatalogValidator::is_valid_key("common."));
        assert!(!CatalogValidator::is_valid_key(".loading"));
        assert!(!CatalogValidator::is_valid_key("Common.loading"));
        assert!(!CatalogValidator::is_valid_key("common loading"));
    }

    // ==================== Placeholder Tests ====================

    #[test]
    fn test_extract_placeholders() {
        let placeholders = CatalogValidator::extract_placeholders("Hello {name}, you have {count}");
        assert_eq!(placeholders.len(), 2);
        assert!(placeholders.contains("name"));
        assert!(placeholders.contains("count"));
    }

    #[test]
    fn test_extract_placeholders_none() {
        assert!(CatalogValidator::extract_placeholders("No placeholders").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_shipped_catalog_has_no_errors() {
        let report = CatalogValidator::validate(TranslationStore::global());
        assert!(!report.has_errors(), "catalog errors: {:?}", report.errors);
    }

    #[test]
    fn test_shipped_catalog_is_clean() {
        let report = CatalogValidator::validate(TranslationStore::global());
        assert!(report.is_clean(), "catalog report: {:?}", report);
    }

    #[test]
    fn test_empty_value_is_error() {
        let report = CatalogValidator::validate_rows([("common.ok", "OK", "")]);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Empty Hindi value"));
    }

    #[test]
    fn test_whitespace_value_is_error() {
        let report = CatalogValidator::validate_rows([("common.ok", "  ", "ठीक")]);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Empty English value"));
    }

    #[test]
    fn test_duplicate_key_is_error() {
        let report = CatalogValidator::validate_rows([
            ("common.ok", "OK", "ठीक"),
            ("common.ok", "Okay", "ठीक है"),
        ]);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Duplicate key"));
    }

    #[test]
    fn test_malformed_key_is_error() {
        let report = CatalogValidator::validate_rows([("ok", "OK", "ठीक")]);
        assert!(report.errors[0].contains("Malformed key"));
    }

    #[test]
    fn test_placeholder_mismatch_is_warning() {
        let report =
            CatalogValidator::validate_rows([("bills.due", "Due {amount}", "बकाया राशि")]);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Placeholder mismatch"));
    }

    #[test]
    fn test_ellipsis_mismatch_is_warning() {
        let report =
            CatalogValidator::validate_rows([("common.saving", "Saving...", "सहेजा जा रहा है")]);
        assert!(report.warnings[0].contains("Ellipsis mismatch"));
    }

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }
}
