//! schema-mock
//!
//! Generate realistic mock data from a schema description.
//!
//! # Features
//!
//! - Schema-driven: objects, unions, tuples, literals and named types such as
//!   `Date`, `UUID` or `Email`
//! - Field-name heuristics: `email` fields get email addresses, `age` fields
//!   plausible ages, `price` fields two-decimal prices
//! - Overrides: per-field functions, method specs (`number.int({"max": 5})`)
//!   and method specs with transforms
//! - Reproducible: integer or string seeds, stable across locale switches
//! - Localized: `en`, `de`, `fr`, `es`, or a custom locale definition
//!
//! # Example
//!
//! ```rust
//! use schema_mock::{GenerateOptions, Mocker, OverrideConfig, TypeNode};
//!
//! let schema = TypeNode::object([("name", TypeNode::string()), ("age", TypeNode::number())]);
//!
//! let mut mocker = Mocker::new();
//! let users = mocker
//!     .generate_sync(&schema, &OverrideConfig::new(), GenerateOptions::new().with_seed("docs").with_count(3))
//!     .unwrap();
//! assert_eq!(users.len(), 3);
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! schema-mock generate --schema users.yaml --count 100 --seed demo --format jsonl
//! schema-mock locales
//! schema-mock methods
//! ```

use anyhow::Context;

pub mod args;
pub mod output;

pub use mock_core::{MockSchema, MockValue, SeedValue, TypeNode};
pub use mock_generator::{
    FieldOverride, GenerateOptions, GeneratorError, GeneratorRegistry, LocaleSelector,
    MockGenerator, OverrideConfig,
};
pub use mock_provider::{LocaleDefinition, Provider};

/// Context attached to every error from the async generation calls.
pub const GENERATION_FAILED: &str = "mock data generation failed";

/// Overrides and default options bound to one schema.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Per-field overrides
    pub overrides: OverrideConfig,
    /// Options used when a call leaves a setting unset
    pub options: GenerateOptions,
}

impl MockConfig {
    pub fn new(overrides: OverrideConfig) -> Self {
        Self {
            overrides,
            options: GenerateOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }

    /// Settings carried by a schema file.
    pub fn from_schema(schema: &MockSchema) -> Self {
        Self {
            overrides: OverrideConfig::from_specs(&schema.overrides),
            options: GenerateOptions {
                count: schema.count,
                seed: schema.seed.clone(),
                locale: schema.locale.clone().map(LocaleSelector::Code),
            },
        }
    }
}

/// Entry point: wraps a generation engine and the process-wide registry.
///
/// Each `Mocker` owns its engine, so separate instances never share locale
/// or seed state. The registry is shared.
#[derive(Debug, Clone, Default)]
pub struct Mocker {
    engine: MockGenerator,
}

impl Mocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mocker around an existing provider.
    pub fn with_provider(provider: Provider) -> Self {
        Self {
            engine: MockGenerator::with_provider(provider),
        }
    }

    /// The underlying engine.
    pub fn engine(&mut self) -> &mut MockGenerator {
        &mut self.engine
    }

    /// Generate a batch. Nothing runs until the future is awaited; failures
    /// are reported as a generic error with the engine error as its source.
    pub async fn generate(
        &mut self,
        schema: &TypeNode,
        overrides: &OverrideConfig,
        options: GenerateOptions,
    ) -> anyhow::Result<Vec<MockValue>> {
        self.generate_sync(schema, overrides, options)
            .context(GENERATION_FAILED)
    }

    /// Generate a batch immediately.
    pub fn generate_sync(
        &mut self,
        schema: &TypeNode,
        overrides: &OverrideConfig,
        options: GenerateOptions,
    ) -> Result<Vec<MockValue>, GeneratorError> {
        self.engine.generate(schema, overrides, options)
    }

    /// Seed all following generation. Returns the integer form of the seed.
    pub fn seed(&mut self, seed: impl Into<SeedValue>) -> i64 {
        self.engine.set_seed(&seed.into())
    }

    /// Register a named custom generator in the process-wide registry.
    pub fn register_faker<F>(&self, name: impl Into<String>, generator: F)
    where
        F: Fn() -> MockValue + Send + Sync + 'static,
    {
        self.registry().register(name, generator);
    }

    /// The process-wide registry.
    pub fn registry(&self) -> &'static GeneratorRegistry {
        mock_generator::registry::global()
    }

    /// Codes of the built-in locales.
    pub fn available_locales() -> Vec<String> {
        mock_provider::available_locales()
    }

    /// Bind a schema and config into a reusable generator.
    ///
    /// The bound generator starts from a copy of this mocker's engine, so it
    /// inherits the current locale and seed.
    pub fn create(&self, schema: TypeNode, config: MockConfig) -> BoundGenerator {
        BoundGenerator {
            schema,
            config,
            engine: self.engine.clone(),
        }
    }
}

/// A schema and config bound together, ready to generate batches.
#[derive(Debug, Clone)]
pub struct BoundGenerator {
    schema: TypeNode,
    config: MockConfig,
    engine: MockGenerator,
}

impl BoundGenerator {
    pub fn schema(&self) -> &TypeNode {
        &self.schema
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Generate a batch; settings left unset in `options` come from the config.
    pub async fn generate(&mut self, options: GenerateOptions) -> anyhow::Result<Vec<MockValue>> {
        self.generate_sync(options).context(GENERATION_FAILED)
    }

    /// Generate a batch immediately.
    pub fn generate_sync(
        &mut self,
        options: GenerateOptions,
    ) -> Result<Vec<MockValue>, GeneratorError> {
        let options = merge_options(&self.config.options, options);
        self.engine
            .generate(&self.schema, &self.config.overrides, options)
    }
}

fn merge_options(defaults: &GenerateOptions, options: GenerateOptions) -> GenerateOptions {
    GenerateOptions {
        count: options.count.or(defaults.count),
        seed: options.seed.or_else(|| defaults.seed.clone()),
        locale: options.locale.or_else(|| defaults.locale.clone()),
    }
}
