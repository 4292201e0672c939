//! Error types for the value provider.

use thiserror::Error;

/// Errors that can occur when building or switching a provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// Locale code is not one of the built-in locales.
    #[error("Invalid locale '{code}'. Available locales: {}", available.join(", "))]
    InvalidLocale {
        code: String,
        available: Vec<String>,
    },

    /// A locale definition is missing data a generator needs.
    #[error("Locale '{code}' has no entries for '{field}'")]
    IncompleteLocale { code: String, field: &'static str },

    /// Locale definition could not be parsed.
    #[error("Failed to parse locale definition: {0}")]
    LocaleParse(String),
}
