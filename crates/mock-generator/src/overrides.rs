//! Per-field overrides.
//!
//! Overrides are keyed by field name, which is the last `.`-separated segment
//! of a field path. Two nested fields with the same name share one override:
//! `user.name` and `company.name` are both matched by `name`.

use indexmap::IndexMap;
use mock_core::{MockValue, OverrideSpec};
use std::fmt;
use std::sync::Arc;

/// Error returned by a fallible override function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Value-producing override function.
pub type ValueFn = Arc<dyn Fn() -> Result<MockValue, BoxError> + Send + Sync>;

/// Transform applied to the result of a method spec.
pub type TransformFn = Arc<dyn Fn(MockValue) -> MockValue + Send + Sync>;

/// How one field is generated instead of the heuristics.
#[derive(Clone)]
pub enum FieldOverride {
    /// Call this function for every value
    Value(ValueFn),

    /// Run a method spec such as `number.int({"min": 1, "max": 5})`
    Method(String),

    /// Run a method spec, then transform its result
    ///
    /// Without a generator the override does not apply and the field falls
    /// through to the heuristics.
    Structured {
        generator: Option<String>,
        transform: Option<TransformFn>,
    },
}

impl FieldOverride {
    /// Override from an infallible function.
    pub fn value<F>(f: F) -> Self
    where
        F: Fn() -> MockValue + Send + Sync + 'static,
    {
        Self::Value(Arc::new(move || Ok(f())))
    }

    /// Override from a fallible function. Failures abort the whole batch.
    pub fn try_value<F>(f: F) -> Self
    where
        F: Fn() -> Result<MockValue, BoxError> + Send + Sync + 'static,
    {
        Self::Value(Arc::new(f))
    }

    /// Override that always produces the same value.
    pub fn constant(value: impl Into<MockValue>) -> Self {
        let value = value.into();
        Self::value(move || value.clone())
    }

    /// Override from a method spec.
    pub fn method(spec: impl Into<String>) -> Self {
        Self::Method(spec.into())
    }

    /// Override from a method spec plus a transform.
    pub fn transformed<F>(spec: impl Into<String>, transform: F) -> Self
    where
        F: Fn(MockValue) -> MockValue + Send + Sync + 'static,
    {
        Self::Structured {
            generator: Some(spec.into()),
            transform: Some(Arc::new(transform)),
        }
    }
}

impl From<&OverrideSpec> for FieldOverride {
    fn from(spec: &OverrideSpec) -> Self {
        match spec {
            OverrideSpec::Method(method) => Self::Method(method.clone()),
            OverrideSpec::Static { value } => Self::constant(value.clone()),
            OverrideSpec::Structured {
                generator,
                transform,
            } => Self::Structured {
                generator: generator.clone(),
                transform: transform.map(|named| -> TransformFn {
                    Arc::new(move |value| named.apply(value))
                }),
            },
        }
    }
}

impl fmt::Debug for FieldOverride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Value(<fn>)"),
            Self::Method(spec) => f.debug_tuple("Method").field(spec).finish(),
            Self::Structured {
                generator,
                transform,
            } => f
                .debug_struct("Structured")
                .field("generator", generator)
                .field("transform", &transform.as_ref().map(|_| "<fn>"))
                .finish(),
        }
    }
}

/// Overrides for one generation call, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct OverrideConfig {
    entries: IndexMap<String, FieldOverride>,
}

impl OverrideConfig {
    /// Empty override set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from schema-file override specs.
    pub fn from_specs(specs: &IndexMap<String, OverrideSpec>) -> Self {
        specs
            .iter()
            .map(|(name, spec)| (name.clone(), FieldOverride::from(spec)))
            .collect()
    }

    /// Add an override, replacing any previous one for the same field.
    pub fn with(mut self, field: impl Into<String>, value: FieldOverride) -> Self {
        self.insert(field, value);
        self
    }

    /// Add an override in place.
    pub fn insert(&mut self, field: impl Into<String>, value: FieldOverride) {
        self.entries.insert(field.into(), value);
    }

    /// Override registered for a field name.
    pub fn get(&self, field: &str) -> Option<&FieldOverride> {
        self.entries.get(field)
    }

    /// Override that applies at a field path.
    pub fn for_path(&self, path: &str) -> Option<&FieldOverride> {
        self.get(last_segment(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldOverride)> for OverrideConfig {
    fn from_iter<I: IntoIterator<Item = (K, FieldOverride)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Last `.`-separated segment of a field path. Tuple indices stay attached,
/// so the last segment of `user.tags[0]` is `tags[0]`.
pub fn last_segment(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}
