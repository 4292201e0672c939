//! Field-name heuristics.
//!
//! Each table is matched against the lower-cased field name in order; the
//! first matching rule picks the generator.

use mock_core::MockValue;
use mock_provider::Provider;

/// Default value for a string field.
pub fn string_for(provider: &mut Provider, field: &str) -> MockValue {
    let field = field.to_lowercase();

    let value = if field.contains("email") {
        provider.email()
    } else if field.contains("name") {
        provider.full_name()
    } else if field.contains("phone") {
        provider.phone_number()
    } else if field.contains("address") {
        provider.street_address()
    } else if field.contains("city") {
        provider.city()
    } else if field.contains("country") {
        provider.country()
    } else if field.contains("url") {
        provider.url()
    } else if field.contains("title") {
        provider.sentence()
    } else if field.contains("description") {
        provider.paragraph()
    } else {
        provider.word()
    };

    MockValue::String(value)
}

/// Default value for a number field.
pub fn number_for(provider: &mut Provider, field: &str) -> MockValue {
    let field = field.to_lowercase();

    if field == "id" {
        MockValue::Int(provider.int_range(1, 100_000))
    } else if field.contains("age") {
        MockValue::Int(provider.int_range(18, 80))
    } else if field.contains("price") || field.contains("cost") {
        MockValue::Float(provider.float_range(10.0, 1000.0, 2))
    } else if field.contains("count") || field.contains("quantity") {
        MockValue::Int(provider.int_range(1, 100))
    } else {
        MockValue::Int(provider.int())
    }
}

/// Default value for a boolean field. Field names are not consulted.
pub fn boolean_for(provider: &mut Provider) -> MockValue {
    MockValue::Bool(provider.boolean())
}

/// Default value for a date field.
pub fn date_for(provider: &mut Provider, field: &str) -> MockValue {
    let value = match DateRule::for_field(field) {
        DateRule::Past => provider.date_past(),
        DateRule::Recent => provider.date_recent(),
        DateRule::Future => provider.date_future(),
    };
    MockValue::DateTime(value)
}

/// Which relative range a date field draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    Past,
    Recent,
    Future,
}

impl DateRule {
    /// created/birth are past, updated/modified recent, expire/due future.
    pub fn for_field(field: &str) -> Self {
        let field = field.to_lowercase();

        if field.contains("created") || field.contains("birth") {
            Self::Past
        } else if field.contains("updated") || field.contains("modified") {
            Self::Recent
        } else if field.contains("expire") || field.contains("due") {
            Self::Future
        } else {
            Self::Recent
        }
    }
}
