//! The seeded, locale-aware value provider.

use crate::error::ProviderError;
use crate::generators::{internet, location, numeric, person, text, timestamp, uuid};
use crate::locale::{self, LocaleDefinition};
use crate::methods;
use chrono::{DateTime, Utc};
use mock_core::MockValue;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::trace;

/// Source of every concrete value: a locale plus a random number generator.
///
/// A fresh provider draws its RNG from entropy. Calling [`Provider::seed`]
/// makes every subsequent draw reproducible. Relative dates are anchored on
/// [`Provider::reference_date`], which defaults to the start of the current
/// UTC day.
#[derive(Debug, Clone)]
pub struct Provider {
    /// Active locale data
    locale: Arc<LocaleDefinition>,
    /// Random number generator, replaced on every reseed
    rng: StdRng,
    /// Anchor for past/recent/future dates
    reference: DateTime<Utc>,
}

impl Provider {
    /// Create a provider for the default locale.
    pub fn new() -> Self {
        Self::with_definition(LocaleDefinition::default())
    }

    /// Create a provider for a built-in locale code.
    pub fn for_locale(code: &str) -> Result<Self, ProviderError> {
        Ok(Self::with_definition(LocaleDefinition::builtin(code)?))
    }

    /// Create a provider for a custom locale definition.
    pub fn from_definition(definition: LocaleDefinition) -> Result<Self, ProviderError> {
        definition.validate()?;
        Ok(Self::with_definition(definition))
    }

    fn with_definition(definition: LocaleDefinition) -> Self {
        Self {
            locale: Arc::new(definition),
            rng: StdRng::from_entropy(),
            reference: start_of_today(),
        }
    }

    /// Anchor relative dates on a fixed instant.
    pub fn with_reference_date(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = reference;
        self
    }

    /// Set the reference date in place.
    pub fn set_reference_date(&mut self, reference: DateTime<Utc>) {
        self.reference = reference;
    }

    /// Anchor for relative dates.
    pub fn reference_date(&self) -> DateTime<Utc> {
        self.reference
    }

    /// Active locale data.
    pub fn locale(&self) -> &LocaleDefinition {
        &self.locale
    }

    /// Code of the active locale.
    pub fn locale_code(&self) -> &str {
        &self.locale.code
    }

    /// Reseed the random number generator.
    pub fn seed(&mut self, seed: i64) {
        trace!(seed, locale = %self.locale.code, "Reseeding provider");
        self.rng = StdRng::seed_from_u64(seed as u64);
    }

    /// Mutable access to the random number generator.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Split borrow of the RNG and the locale, for locale-aware generators.
    pub fn parts(&mut self) -> (&mut StdRng, &LocaleDefinition) {
        (&mut self.rng, &self.locale)
    }

    /// Invoke a method by canonical identifier, e.g. `person.fullName`.
    ///
    /// Returns `None` when the identifier does not name a method.
    pub fn call(&mut self, method: &str, arg: Option<&serde_json::Value>) -> Option<MockValue> {
        let method = methods::lookup(method)?;
        Some(method(self, arg))
    }

    /// Check whether an identifier names a method.
    pub fn has_method(&self, method: &str) -> bool {
        methods::lookup(method).is_some()
    }

    /// Canonical identifiers of every method.
    pub fn methods() -> Vec<&'static str> {
        methods::names().collect()
    }

    /// Codes of the built-in locales.
    pub fn available_locales() -> Vec<String> {
        locale::available_locales()
    }

    // ------------------------------------------------------------------------
    // Typed generators
    // ------------------------------------------------------------------------

    pub fn word(&mut self) -> String {
        text::word(&mut self.rng, &self.locale)
    }

    pub fn sentence(&mut self) -> String {
        let word_count = numeric::generate_int_range(&mut self.rng, 3, 10) as usize;
        text::sentence(&mut self.rng, &self.locale, word_count)
    }

    pub fn paragraph(&mut self) -> String {
        text::paragraph(&mut self.rng, &self.locale, 3)
    }

    pub fn full_name(&mut self) -> String {
        person::full_name(&mut self.rng, &self.locale)
    }

    pub fn email(&mut self) -> String {
        internet::email(&mut self.rng, &self.locale)
    }

    pub fn url(&mut self) -> String {
        internet::url(&mut self.rng, &self.locale)
    }

    pub fn phone_number(&mut self) -> String {
        location::phone_number(&mut self.rng, &self.locale)
    }

    pub fn street_address(&mut self) -> String {
        location::street_address(&mut self.rng, &self.locale)
    }

    pub fn city(&mut self) -> String {
        location::city(&mut self.rng, &self.locale)
    }

    pub fn country(&mut self) -> String {
        location::country(&mut self.rng, &self.locale)
    }

    pub fn uuid(&mut self) -> String {
        uuid::generate_uuid_v4(&mut self.rng).to_string()
    }

    pub fn ulid(&mut self) -> String {
        uuid::generate_ulid(&mut self.rng, self.reference).to_string()
    }

    /// Integer in `[min, max]`.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        numeric::generate_int_range(&mut self.rng, min, max)
    }

    /// Integer in `[0, 2^53 - 1]`.
    pub fn int(&mut self) -> i64 {
        numeric::generate_int_range(&mut self.rng, 0, numeric::MAX_SAFE_INTEGER)
    }

    /// Float in `[min, max]` with at most `fraction_digits` decimals.
    pub fn float_range(&mut self, min: f64, max: f64, fraction_digits: u32) -> f64 {
        numeric::generate_fixed_point(&mut self.rng, min, max, fraction_digits)
    }

    /// Fair coin flip.
    pub fn boolean(&mut self) -> bool {
        numeric::generate_bool(&mut self.rng, 0.5)
    }

    /// Date within the last year.
    pub fn date_past(&mut self) -> DateTime<Utc> {
        timestamp::generate_past(&mut self.rng, self.reference, 1.0)
    }

    /// Date within the last day.
    pub fn date_recent(&mut self) -> DateTime<Utc> {
        timestamp::generate_recent(&mut self.rng, self.reference, 1.0)
    }

    /// Date within the next year.
    pub fn date_future(&mut self) -> DateTime<Utc> {
        timestamp::generate_future(&mut self.rng, self.reference, 1.0)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

/// Midnight UTC of the current day.
fn start_of_today() -> DateTime<Utc> {
    let now = Utc::now();
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|midnight| midnight.and_utc())
        .unwrap_or(now)
}
