//! The generation engine: walks a `TypeNode` tree and produces values.

use crate::error::GeneratorError;
use crate::heuristics;
use crate::invoke::invoke;
use crate::overrides::{last_segment, FieldOverride, OverrideConfig};
use crate::seed::resolve_seed;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use mock_core::{MockValue, PrimitiveKind, SeedValue, TypeNode};
use mock_provider::generators::timestamp::parse_timestamp;
use mock_provider::{LocaleDefinition, Provider};
use rand::seq::SliceRandom;
use tracing::{debug, trace};

// ============================================================================
// Options
// ============================================================================

/// Locale to generate with.
#[derive(Debug, Clone)]
pub enum LocaleSelector {
    /// Built-in locale code such as `de`
    Code(String),
    /// Custom locale definition
    Definition(LocaleDefinition),
    /// Pre-configured provider, used as is
    Provider(Provider),
}

impl From<&str> for LocaleSelector {
    fn from(code: &str) -> Self {
        Self::Code(code.to_string())
    }
}

impl From<String> for LocaleSelector {
    fn from(code: String) -> Self {
        Self::Code(code)
    }
}

impl From<LocaleDefinition> for LocaleSelector {
    fn from(definition: LocaleDefinition) -> Self {
        Self::Definition(definition)
    }
}

impl From<Provider> for LocaleSelector {
    fn from(provider: Provider) -> Self {
        Self::Provider(provider)
    }
}

/// Options for one generation batch.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Number of items, default 1
    pub count: Option<u64>,
    /// Seed applied once before the batch
    pub seed: Option<SeedValue>,
    /// Locale switched to before the batch
    pub locale: Option<LocaleSelector>,
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_count(mut self, count: u64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_seed(mut self, seed: impl Into<SeedValue>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<LocaleSelector>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Number of items to generate.
    pub fn count(&self) -> u64 {
        self.count.unwrap_or(1)
    }
}

// ============================================================================
// Engine
// ============================================================================

/// Mock data generator.
///
/// Holds the active provider and the active seed. The seed survives locale
/// switches: switching locale reseeds the new provider with it, so a seeded
/// run produces the same values no matter how many switches came before.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    /// Active provider
    provider: Provider,
    /// Active seed, reapplied on every locale switch
    seed: Option<i64>,
}

impl MockGenerator {
    /// Create a generator with the default locale and an unseeded provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator around an existing provider.
    pub fn with_provider(provider: Provider) -> Self {
        Self {
            provider,
            seed: None,
        }
    }

    /// The active provider.
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Mutable access to the active provider.
    pub fn provider_mut(&mut self) -> &mut Provider {
        &mut self.provider
    }

    /// The active seed, if any.
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Reseed the provider and remember the seed for later locale switches.
    ///
    /// Returns the integer form of the seed.
    pub fn set_seed(&mut self, seed: &SeedValue) -> i64 {
        let resolved = resolve_seed(seed);
        self.provider.seed(resolved);
        self.seed = Some(resolved);
        resolved
    }

    /// Switch the active provider.
    ///
    /// Providers built from a code or a definition keep the current reference
    /// date. If a seed is active it is reapplied to the new provider.
    pub fn set_locale(&mut self, locale: LocaleSelector) -> Result<(), GeneratorError> {
        let mut provider = match locale {
            LocaleSelector::Code(code) => {
                Provider::for_locale(&code)?.with_reference_date(self.provider.reference_date())
            }
            LocaleSelector::Definition(definition) => Provider::from_definition(definition)?
                .with_reference_date(self.provider.reference_date()),
            LocaleSelector::Provider(provider) => provider,
        };

        if let Some(seed) = self.seed {
            provider.seed(seed);
        }

        debug!(locale = provider.locale_code(), seed = ?self.seed, "Switched locale");
        self.provider = provider;
        Ok(())
    }

    /// Generate a batch of values for a root type.
    ///
    /// The locale and seed in `options` are applied once before the batch;
    /// then the root is evaluated `count` times. A fault in any item fails
    /// the whole batch.
    pub fn generate(
        &mut self,
        root: &TypeNode,
        overrides: &OverrideConfig,
        options: GenerateOptions,
    ) -> Result<Vec<MockValue>, GeneratorError> {
        let count = options.count();

        if let Some(locale) = options.locale {
            self.set_locale(locale)?;
        }
        if let Some(seed) = &options.seed {
            self.set_seed(seed);
        }

        debug!(
            count,
            kind = root.kind_name(),
            locale = self.provider.locale_code(),
            seed = ?self.seed,
            overrides = overrides.len(),
            "Generating mock data"
        );

        (0..count)
            .map(|_| self.evaluate(root, overrides, ""))
            .collect()
    }

    /// Produce one value for a node at a field path.
    pub fn evaluate(
        &mut self,
        node: &TypeNode,
        overrides: &OverrideConfig,
        path: &str,
    ) -> Result<MockValue, GeneratorError> {
        match node {
            TypeNode::Primitive(kind) => self.primitive(*kind, overrides, path),

            TypeNode::Literal(value) => Ok(value.clone()),

            TypeNode::Object(fields) => {
                let mut object = IndexMap::with_capacity(fields.len());
                for field in fields {
                    let child = child_path(path, &field.name);
                    let value = self.evaluate(&field.node, overrides, &child)?;
                    object.insert(field.name.clone(), value);
                }
                Ok(MockValue::Object(object))
            }

            TypeNode::Union(members) => match members.choose(self.provider.rng()) {
                Some(TypeNode::Literal(value)) => Ok(value.clone()),
                Some(member) => self.evaluate(member, overrides, path),
                None => Ok(self.word()),
            },

            TypeNode::Tuple(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| self.evaluate(element, overrides, &format!("{path}[{i}]")))
                .collect::<Result<Vec<_>, _>>()
                .map(MockValue::Array),

            TypeNode::Refinement { base, .. } => self.evaluate(base, overrides, path),

            TypeNode::Transformation { from, .. } => self.evaluate(from, overrides, path),

            TypeNode::Declaration { name, params } => {
                self.declaration(name, params, overrides, path)
            }

            TypeNode::Unknown(kind) => {
                trace!(kind = %kind, path, "Unknown node kind, using word fallback");
                Ok(self.word())
            }
        }
    }

    fn primitive(
        &mut self,
        kind: PrimitiveKind,
        overrides: &OverrideConfig,
        path: &str,
    ) -> Result<MockValue, GeneratorError> {
        if let Some(value) = self.resolve_override(overrides, path)? {
            return Ok(value.coerce(kind));
        }

        let field = last_segment(path);
        Ok(match kind {
            PrimitiveKind::String => heuristics::string_for(&mut self.provider, field),
            PrimitiveKind::Number => heuristics::number_for(&mut self.provider, field),
            PrimitiveKind::Boolean => heuristics::boolean_for(&mut self.provider),
        })
    }

    fn declaration(
        &mut self,
        name: &str,
        params: &[TypeNode],
        overrides: &OverrideConfig,
        path: &str,
    ) -> Result<MockValue, GeneratorError> {
        let value = match name.to_lowercase().as_str() {
            "date" | "datefromself" | "datefromstring" => return self.date(overrides, path),
            "uuid" => self.provider.uuid(),
            "ulid" => self.provider.ulid(),
            "email" => self.provider.email(),
            "url" => self.provider.url(),
            _ => {
                if let [param] = params {
                    return self.evaluate(param, overrides, path);
                }
                trace!(name, path, "Unknown declaration, using word fallback");
                self.provider.word()
            }
        };
        Ok(MockValue::String(value))
    }

    fn date(&mut self, overrides: &OverrideConfig, path: &str) -> Result<MockValue, GeneratorError> {
        if let Some(value) = self.resolve_override(overrides, path)? {
            if let Some(date) = coerce_date(&value) {
                return Ok(MockValue::DateTime(date));
            }
            trace!(path, value = %value, "Override is not a date, using date heuristics");
        }
        Ok(heuristics::date_for(&mut self.provider, last_segment(path)))
    }

    /// Run the override registered for a path, if one applies.
    fn resolve_override(
        &mut self,
        overrides: &OverrideConfig,
        path: &str,
    ) -> Result<Option<MockValue>, GeneratorError> {
        let Some(field_override) = overrides.for_path(path) else {
            return Ok(None);
        };

        match field_override {
            FieldOverride::Value(f) => f().map(Some).map_err(|e| GeneratorError::Fault {
                path: path.to_string(),
                message: e.to_string(),
            }),
            FieldOverride::Method(spec) => Ok(Some(invoke(&mut self.provider, spec))),
            FieldOverride::Structured {
                generator: Some(spec),
                transform,
            } => {
                let value = invoke(&mut self.provider, spec);
                Ok(Some(match transform {
                    Some(transform) => transform(value),
                    None => value,
                }))
            }
            FieldOverride::Structured {
                generator: None, ..
            } => Ok(None),
        }
    }

    fn word(&mut self) -> MockValue {
        MockValue::String(self.provider.word())
    }
}

fn child_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

/// Read an override result as a date: dates as is, numbers as epoch
/// milliseconds, strings in RFC 3339 or `YYYY-MM-DD` form.
fn coerce_date(value: &MockValue) -> Option<DateTime<Utc>> {
    match value {
        MockValue::DateTime(dt) => Some(*dt),
        MockValue::Int(ms) => DateTime::from_timestamp_millis(*ms),
        MockValue::Float(ms) if ms.is_finite() => DateTime::from_timestamp_millis(*ms as i64),
        MockValue::String(s) => parse_timestamp(s.trim()),
        _ => None,
    }
}
