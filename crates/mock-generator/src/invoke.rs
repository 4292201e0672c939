//! Method-spec interpreter.
//!
//! A method spec names a provider method and an optional JSON argument:
//!
//! ```text
//! person.fullName
//! number.int({"min": 1, "max": 10})
//! helpers.arrayElement(["red", "green"])
//! ```
//!
//! Interpretation never fails. Specs that do not parse or do not name a
//! method produce a single word; arguments that are not valid JSON are
//! dropped and the method runs with its defaults.

use mock_core::MockValue;
use mock_provider::Provider;
use tracing::trace;

/// A parsed method spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodCall<'a> {
    /// Dotted method identifier, e.g. `number.int`
    pub method: &'a str,
    /// Raw text between the parentheses, if any
    pub args: Option<&'a str>,
}

/// Parse `ident(.ident)*` optionally followed by `(...)` running to the end
/// of the input. Identifiers are `[A-Za-z_$][A-Za-z0-9_$]*`.
pub fn parse_method_spec(spec: &str) -> Option<MethodCall<'_>> {
    let path_end = spec.find('(').unwrap_or(spec.len());
    let (method, rest) = spec.split_at(path_end);

    if !method.split('.').all(is_identifier) {
        return None;
    }

    let args = if rest.is_empty() {
        None
    } else {
        Some(rest.strip_prefix('(')?.strip_suffix(')')?)
    };

    Some(MethodCall { method, args })
}

fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

/// Run a method spec against the provider.
///
/// The raw result is returned; callers coerce it to the kind they need.
pub fn invoke(provider: &mut Provider, spec: &str) -> MockValue {
    let Some(call) = parse_method_spec(spec) else {
        trace!(spec, "Malformed method spec, using word fallback");
        return MockValue::String(provider.word());
    };

    if !provider.has_method(call.method) {
        trace!(method = call.method, "Unknown method, using word fallback");
        return MockValue::String(provider.word());
    }

    let arg = call.args.and_then(|raw| match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            trace!(method = call.method, args = raw, error = %e, "Ignoring unparsable arguments");
            None
        }
    });

    provider
        .call(call.method, arg.as_ref())
        .unwrap_or_else(|| MockValue::String(provider.word()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        let mut provider = Provider::new();
        provider.seed(11);
        provider
    }

    #[test]
    fn test_parse_plain_method() {
        assert_eq!(
            parse_method_spec("person.fullName"),
            Some(MethodCall {
                method: "person.fullName",
                args: None
            })
        );
    }

    #[test]
    fn test_parse_with_arguments() {
        assert_eq!(
            parse_method_spec(r#"number.int({"min": 1, "max": 2})"#),
            Some(MethodCall {
                method: "number.int",
                args: Some(r#"{"min": 1, "max": 2}"#)
            })
        );
        assert_eq!(
            parse_method_spec("lorem.word()"),
            Some(MethodCall {
                method: "lorem.word",
                args: Some("")
            })
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_method_spec(""), None);
        assert_eq!(parse_method_spec("not a method"), None);
        assert_eq!(parse_method_spec("number..int"), None);
        assert_eq!(parse_method_spec("1number.int"), None);
        assert_eq!(parse_method_spec("number.int(5"), None);
        assert_eq!(parse_method_spec("number.int(5) trailing"), None);
    }

    #[test]
    fn test_invoke_with_arguments() {
        let mut p = provider();
        for _ in 0..20 {
            let value = invoke(&mut p, r#"number.int({"min": 3, "max": 4})"#);
            assert!(matches!(value.as_i64(), Some(3 | 4)));
        }
    }

    #[test]
    fn test_invoke_unparsable_arguments_uses_defaults() {
        let mut p = provider();
        let value = invoke(&mut p, "number.int({min: 3})");
        assert!(value.as_i64().is_some());
    }

    #[test]
    fn test_invoke_fallbacks_are_words() {
        let mut p = provider();
        for spec in ["invalid.faker.method()", "person", "%%%", "number.int(5"] {
            let value = invoke(&mut p, spec);
            assert!(
                value.as_str().is_some_and(|s| !s.is_empty()),
                "{spec} should fall back to a word, got {value:?}"
            );
        }
    }
}
