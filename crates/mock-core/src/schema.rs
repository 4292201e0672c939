//! Schema files for the schema-mock framework.
//!
//! A schema file bundles a root [`TypeNode`] with the generation settings
//! that usually travel with it: seed, locale, item count and per-field
//! overrides.
//!
//! ```yaml
//! version: 1
//! seed: demo
//! locale: de
//! count: 10
//! schema:
//!   type: object
//!   fields:
//!     - name: email
//!       type: string
//!     - name: role
//!       type: string
//! overrides:
//!   role: "helpers.arrayElement([\"admin\", \"member\"])"
//!   email:
//!     generator: internet.email
//!     transform: uppercase
//! ```

use crate::types::TypeNode;
use crate::values::MockValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

// ============================================================================
// Seeds
// ============================================================================

/// A generation seed, either an integer or an arbitrary string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Integer seed, used unchanged
    Int(i64),
    /// String seed, hashed to an integer before use
    Text(String),
}

impl SeedValue {
    /// Parse a seed from command-line text. Integer-looking input becomes `Int`.
    pub fn parse(s: &str) -> Self {
        match s.trim().parse::<i64>() {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Text(s.to_string()),
        }
    }
}

impl fmt::Display for SeedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SeedValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SeedValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for SeedValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

// ============================================================================
// Override Specs
// ============================================================================

/// Transforms that can be named in a schema file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedTransform {
    /// Uppercase string values
    Uppercase,
    /// Lowercase string values
    Lowercase,
    /// Trim surrounding whitespace from string values
    Trim,
}

impl NamedTransform {
    /// Apply the transform. Non-string values pass through unchanged.
    pub fn apply(&self, value: MockValue) -> MockValue {
        match value {
            MockValue::String(s) => MockValue::String(match self {
                Self::Uppercase => s.to_uppercase(),
                Self::Lowercase => s.to_lowercase(),
                Self::Trim => s.trim().to_string(),
            }),
            other => other,
        }
    }
}

/// A per-field override as written in a schema file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideSpec {
    /// Method spec such as `number.int({"min": 1, "max": 5})`
    Method(String),

    /// Always produce this value
    Static {
        /// The static value to use
        value: MockValue,
    },

    /// Method spec with an optional transform applied to its result
    Structured {
        /// Method spec
        #[serde(default)]
        generator: Option<String>,
        /// Transform applied after invocation
        #[serde(default)]
        transform: Option<NamedTransform>,
    },
}

// ============================================================================
// Schema File
// ============================================================================

fn default_version() -> u32 {
    1
}

/// A schema file: root type plus generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockSchema {
    /// Schema version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Seed for reproducible output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedValue>,

    /// Locale code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Number of items to generate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Root type
    pub schema: TypeNode,

    /// Per-field overrides, keyed by field name
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, OverrideSpec>,
}

impl MockSchema {
    /// Create a schema file for a root type with no settings.
    pub fn new(schema: TypeNode) -> Self {
        Self {
            version: default_version(),
            seed: None,
            locale: None,
            count: None,
            schema,
            overrides: IndexMap::new(),
        }
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize schema to a YAML string.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
