//! Mock data generation engine for schema-mock.
//!
//! This crate provides the `MockGenerator` which walks a [`TypeNode`] tree and
//! produces one [`MockValue`] per requested item. Values come from, in order
//! of precedence:
//!
//! 1. a per-field override (function, method spec, or method spec plus transform)
//! 2. a field-name heuristic (`email` fields get email addresses, `age` 18..=80, ...)
//! 3. a default for the node's kind
//!
//! # Architecture
//!
//! ```text
//! TypeNode + OverrideConfig + GenerateOptions
//!        │
//!        ▼
//! ┌─────────────────────┐
//! │   MockGenerator     │
//! │                     │
//! │  - provider         │──▶ mock_provider::Provider (locale + StdRng)
//! │  - seed             │
//! └──────────┬──────────┘
//!            │
//!            ▼
//!      Vec<MockValue>
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::TypeNode;
//! use mock_generator::{FieldOverride, GenerateOptions, MockGenerator, OverrideConfig};
//!
//! let schema = TypeNode::object([
//!     ("name", TypeNode::string()),
//!     ("age", TypeNode::number()),
//!     ("role", TypeNode::string()),
//! ]);
//! let overrides = OverrideConfig::new().with(
//!     "role",
//!     FieldOverride::method(r#"helpers.arrayElement(["admin", "member"])"#),
//! );
//!
//! let mut generator = MockGenerator::new();
//! let users = generator
//!     .generate(&schema, &overrides, GenerateOptions::new().with_seed("demo").with_count(2))
//!     .unwrap();
//! assert_eq!(users.len(), 2);
//! ```
//!
//! [`TypeNode`]: mock_core::TypeNode
//! [`MockValue`]: mock_core::MockValue

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod invoke;
pub mod overrides;
pub mod registry;
pub mod seed;

// Re-exports for convenience
pub use engine::{GenerateOptions, LocaleSelector, MockGenerator};
pub use error::GeneratorError;
pub use overrides::{BoxError, FieldOverride, OverrideConfig, TransformFn, ValueFn};
pub use registry::{CustomGenerator, GeneratorRegistry};
pub use seed::{hash_seed, resolve_seed};
