//! Locale definitions.
//!
//! A [`LocaleDefinition`] holds the word lists and formats that the
//! generators draw from. Four locales are built in; custom definitions can be
//! loaded from YAML.

use crate::error::ProviderError;
use crate::locales;
use serde::{Deserialize, Serialize};

/// Code of the locale used when none is selected.
pub const DEFAULT_LOCALE: &str = "en";

/// Codes of the built-in locales.
pub const BUILTIN_LOCALES: &[&str] = &["en", "de", "fr", "es"];

/// Word lists and formats for one locale.
///
/// Formats use placeholders: `#` is replaced by a random digit, and address
/// formats accept `{number}`, `{street}` and `{suffix}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleDefinition {
    /// Locale code, e.g. `en`
    pub code: String,

    /// Human-readable name
    #[serde(default)]
    pub title: String,

    /// Given names
    pub first_names: Vec<String>,

    /// Family names
    pub last_names: Vec<String>,

    /// Filler words for lorem text
    pub words: Vec<String>,

    /// City names
    pub cities: Vec<String>,

    /// Country names
    pub countries: Vec<String>,

    /// Street name stems
    pub street_names: Vec<String>,

    /// Street suffixes such as `Street` or `straße`
    pub street_suffixes: Vec<String>,

    /// Street address format
    pub address_format: String,

    /// Phone number formats
    pub phone_formats: Vec<String>,

    /// Postal code formats
    pub postcode_formats: Vec<String>,

    /// Free email provider domains
    pub email_domains: Vec<String>,

    /// Top-level domain suffixes
    pub domain_suffixes: Vec<String>,
}

impl LocaleDefinition {
    /// Look up a built-in locale by code.
    pub fn builtin(code: &str) -> Result<Self, ProviderError> {
        match code {
            "en" => Ok(locales::en::definition()),
            "de" => Ok(locales::de::definition()),
            "fr" => Ok(locales::fr::definition()),
            "es" => Ok(locales::es::definition()),
            _ => Err(ProviderError::InvalidLocale {
                code: code.to_string(),
                available: available_locales(),
            }),
        }
    }

    /// Parse a custom locale from YAML and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ProviderError> {
        let definition: LocaleDefinition =
            serde_yaml::from_str(yaml).map_err(|e| ProviderError::LocaleParse(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check that every list a generator draws from has at least one entry.
    pub fn validate(&self) -> Result<(), ProviderError> {
        let lists: [(&'static str, &Vec<String>); 11] = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("words", &self.words),
            ("cities", &self.cities),
            ("countries", &self.countries),
            ("street_names", &self.street_names),
            ("street_suffixes", &self.street_suffixes),
            ("phone_formats", &self.phone_formats),
            ("postcode_formats", &self.postcode_formats),
            ("email_domains", &self.email_domains),
            ("domain_suffixes", &self.domain_suffixes),
        ];

        for (field, list) in lists {
            if list.is_empty() {
                return Err(ProviderError::IncompleteLocale {
                    code: self.code.clone(),
                    field,
                });
            }
        }

        Ok(())
    }
}

impl Default for LocaleDefinition {
    fn default() -> Self {
        locales::en::definition()
    }
}

/// Codes of all built-in locales.
pub fn available_locales() -> Vec<String> {
    BUILTIN_LOCALES.iter().map(|code| code.to_string()).collect()
}

/// Convert a static word list into owned strings.
pub(crate) fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
