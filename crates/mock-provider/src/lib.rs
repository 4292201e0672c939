//! Seeded, locale-aware value provider for schema-mock.
//!
//! The [`Provider`] owns a locale and a random number generator and exposes
//! two surfaces:
//!
//! - typed generators (`provider.full_name()`, `provider.int_range(1, 6)`)
//!   used by the field-name heuristics
//! - a method table addressed by canonical identifiers such as
//!   `person.fullName` or `number.int`, used by override strings
//!
//! # Example
//!
//! ```rust
//! use mock_provider::Provider;
//!
//! let mut provider = Provider::for_locale("de").unwrap();
//! provider.seed(42);
//!
//! let city = provider.city();
//! let roll = provider.call("number.int", Some(&serde_json::json!({"min": 1, "max": 6})));
//! assert!(roll.is_some());
//! ```

pub mod error;
pub mod generators;
pub mod locale;
pub mod locales;
pub mod methods;
pub mod provider;

pub use error::ProviderError;
pub use locale::{available_locales, LocaleDefinition, BUILTIN_LOCALES, DEFAULT_LOCALE};
pub use methods::MethodFn;
pub use provider::Provider;
