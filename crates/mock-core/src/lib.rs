//! Core types for the schema-mock framework.
//!
//! This crate provides the foundational types shared by the provider,
//! the generation engine and the facade:
//!
//! - [`TypeNode`] - Recursive description of a value's shape
//! - [`MockValue`] - A generated value
//! - [`SeedValue`] - A string or integer seed
//! - [`MockSchema`] - Schema files loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! mock-core (this crate)
//!    │
//!    ├─── mock-provider   (produces MockValue from locale data)
//!    │
//!    └─── mock-generator  (walks TypeNode trees, depends on both)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mock_core::{MockValue, TypeNode};
//!
//! let user = TypeNode::object([
//!     ("name", TypeNode::string()),
//!     ("age", TypeNode::number()),
//! ]);
//! assert_eq!(user.kind_name(), "object");
//!
//! let value = MockValue::from("hello");
//! assert_eq!(value.as_str(), Some("hello"));
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{MockSchema, NamedTransform, OverrideSpec, SchemaError, SeedValue};
pub use types::{ObjectField, PrimitiveKind, TypeNode};
pub use values::MockValue;
