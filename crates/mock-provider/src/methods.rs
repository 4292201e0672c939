//! Method table: canonical identifiers mapped to generator functions.
//!
//! Every method takes one optional JSON argument. Numbers are accepted as the
//! primary parameter (`number.int(10)` means max 10) and objects as named
//! parameters (`number.int({"min": 5, "max": 10})`). Arguments of the wrong
//! shape are ignored in favour of the defaults.

use crate::generators::{internet, location, numeric, pattern, person, text, timestamp};
use crate::provider::Provider;
use mock_core::MockValue;
use rand::seq::SliceRandom;
use serde_json::Value;

/// Signature shared by every method.
pub type MethodFn = fn(&mut Provider, Option<&Value>) -> MockValue;

const METHODS: &[(&str, MethodFn)] = &[
    ("datatype.boolean", datatype_boolean),
    ("date.between", date_between),
    ("date.future", date_future),
    ("date.past", date_past),
    ("date.recent", date_recent),
    ("helpers.arrayElement", helpers_array_element),
    ("internet.domainName", internet_domain_name),
    ("internet.email", internet_email),
    ("internet.url", internet_url),
    ("internet.userName", internet_user_name),
    ("location.city", location_city),
    ("location.country", location_country),
    ("location.streetAddress", location_street_address),
    ("location.zipCode", location_zip_code),
    ("lorem.paragraph", lorem_paragraph),
    ("lorem.sentence", lorem_sentence),
    ("lorem.word", lorem_word),
    ("lorem.words", lorem_words),
    ("number.float", number_float),
    ("number.int", number_int),
    ("person.firstName", person_first_name),
    ("person.fullName", person_full_name),
    ("person.lastName", person_last_name),
    ("phone.number", phone_number),
    ("string.alphanumeric", string_alphanumeric),
    ("string.numeric", string_numeric),
    ("string.ulid", string_ulid),
    ("string.uuid", string_uuid),
    ("string.word", lorem_word),
];

/// Find a method by canonical identifier.
pub fn lookup(id: &str) -> Option<MethodFn> {
    METHODS
        .iter()
        .find(|(name, _)| *name == id)
        .map(|(_, method)| *method)
}

/// Canonical identifiers of every method, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    METHODS.iter().map(|(name, _)| *name)
}

// ============================================================================
// Argument helpers
// ============================================================================

/// Read a numeric argument given either directly or as `{key: n}`.
fn arg_f64(arg: Option<&Value>, key: &str) -> Option<f64> {
    match arg? {
        Value::Number(n) => n.as_f64(),
        Value::Object(map) => map.get(key)?.as_f64(),
        _ => None,
    }
}

/// Read a named numeric argument from an object.
fn named_f64(arg: Option<&Value>, key: &str) -> Option<f64> {
    arg?.as_object()?.get(key)?.as_f64()
}

/// Read a count argument given either directly or as `{key: n}`.
fn arg_count(arg: Option<&Value>, key: &str) -> Option<usize> {
    let n = arg_f64(arg, key)?;
    if n.is_finite() && n >= 0.0 {
        Some(n as usize)
    } else {
        None
    }
}

/// Clamp a count so a typo in an override cannot allocate gigabytes.
fn bounded(count: usize) -> usize {
    count.min(10_000)
}

// ============================================================================
// Methods
// ============================================================================

fn datatype_boolean(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let probability = arg_f64(arg, "probability").unwrap_or(0.5);
    MockValue::Bool(numeric::generate_bool(provider.rng(), probability))
}

fn date_between(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let reference = provider.reference_date();
    let bound = |key: &str| {
        arg.and_then(|a| a.get(key))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let (from, to) = (bound("from"), bound("to"));
    if from.is_empty() && to.is_empty() {
        return MockValue::DateTime(provider.date_recent());
    }
    MockValue::DateTime(timestamp::generate_timestamp_range(
        provider.rng(),
        &from,
        &to,
        reference,
    ))
}

fn date_future(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let years = arg_f64(arg, "years").unwrap_or(1.0);
    let reference = provider.reference_date();
    MockValue::DateTime(timestamp::generate_future(provider.rng(), reference, years))
}

fn date_past(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let years = arg_f64(arg, "years").unwrap_or(1.0);
    let reference = provider.reference_date();
    MockValue::DateTime(timestamp::generate_past(provider.rng(), reference, years))
}

fn date_recent(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let days = arg_f64(arg, "days").unwrap_or(1.0);
    let reference = provider.reference_date();
    MockValue::DateTime(timestamp::generate_recent(provider.rng(), reference, days))
}

fn helpers_array_element(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    match arg.and_then(Value::as_array) {
        Some(items) => match items.choose(provider.rng()) {
            Some(item) => MockValue::from(item.clone()),
            None => MockValue::String(provider.word()),
        },
        None => MockValue::String(provider.word()),
    }
}

fn internet_domain_name(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    let (rng, locale) = provider.parts();
    MockValue::String(internet::domain_name(rng, locale))
}

fn internet_email(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.email())
}

fn internet_url(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.url())
}

fn internet_user_name(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    let (rng, locale) = provider.parts();
    MockValue::String(internet::user_name(rng, locale))
}

fn location_city(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.city())
}

fn location_country(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.country())
}

fn location_street_address(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.street_address())
}

fn location_zip_code(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    let (rng, locale) = provider.parts();
    MockValue::String(location::zip_code(rng, locale))
}

fn lorem_paragraph(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let sentences = arg_count(arg, "sentenceCount").unwrap_or(3);
    let (rng, locale) = provider.parts();
    MockValue::String(text::paragraph(rng, locale, bounded(sentences)))
}

fn lorem_sentence(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    match arg_count(arg, "wordCount") {
        Some(words) => {
            let (rng, locale) = provider.parts();
            MockValue::String(text::sentence(rng, locale, bounded(words)))
        }
        None => MockValue::String(provider.sentence()),
    }
}

fn lorem_word(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.word())
}

fn lorem_words(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let count = arg_count(arg, "count").unwrap_or(3);
    let (rng, locale) = provider.parts();
    MockValue::String(text::words(rng, locale, bounded(count)))
}

fn number_float(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let max = arg_f64(arg, "max").unwrap_or(1.0);
    let min = named_f64(arg, "min").unwrap_or(0.0);

    let digits = named_f64(arg, "fractionDigits").or_else(|| named_f64(arg, "precision"));
    let value = match digits {
        Some(d) if d.is_finite() && d >= 0.0 => {
            numeric::generate_fixed_point(provider.rng(), min, max, d as u32)
        }
        _ => numeric::generate_float_range(provider.rng(), min, max),
    };
    MockValue::Float(value)
}

fn number_int(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let max = arg_f64(arg, "max")
        .map(|m| m.floor() as i64)
        .unwrap_or(numeric::MAX_SAFE_INTEGER);
    let min = named_f64(arg, "min").map(|m| m.ceil() as i64).unwrap_or(0);
    MockValue::Int(provider.int_range(min, max))
}

fn person_first_name(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    let (rng, locale) = provider.parts();
    MockValue::String(person::first_name(rng, locale))
}

fn person_full_name(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.full_name())
}

fn person_last_name(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    let (rng, locale) = provider.parts();
    MockValue::String(person::last_name(rng, locale))
}

fn phone_number(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.phone_number())
}

fn string_alphanumeric(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let length = arg_count(arg, "length").unwrap_or(1);
    MockValue::String(text::alphanumeric(provider.rng(), bounded(length)))
}

fn string_numeric(provider: &mut Provider, arg: Option<&Value>) -> MockValue {
    let length = arg_count(arg, "length").unwrap_or(1);
    MockValue::String(pattern::generate_random_digits(provider.rng(), bounded(length)))
}

fn string_ulid(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.ulid())
}

fn string_uuid(provider: &mut Provider, _arg: Option<&Value>) -> MockValue {
    MockValue::String(provider.uuid())
}
