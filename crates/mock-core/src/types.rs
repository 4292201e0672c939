//! Type descriptions consumed by the generation engine.
//!
//! This module defines `TypeNode`, the recursive description of a value's
//! shape. A node is read-only input: the engine walks it but never mutates it.

use crate::values::MockValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Primitive value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Text
    String,
    /// Integer or floating point number
    Number,
    /// `true` / `false`
    Boolean,
}

impl PrimitiveKind {
    /// Lowercase name used in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
        }
    }
}

/// A named field of an object node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    /// Field name
    pub name: String,

    /// Field type
    #[serde(rename = "type")]
    pub node: TypeNode,
}

impl ObjectField {
    /// Create a new object field.
    pub fn new(name: impl Into<String>, node: TypeNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// Recursive description of a value's shape.
///
/// # YAML Format
///
/// Primitive and well-known declared types can be written as strings:
/// ```yaml
/// type: string
/// type: number
/// type: uuid
/// ```
///
/// Composite types use object format:
/// ```yaml
/// type:
///   type: object
///   fields:
///     - name: email
///       type: string
/// type:
///   type: union
///   members:
///     - { type: literal, value: active }
///     - { type: literal, value: banned }
/// ```
///
/// Unknown type names are kept as [`TypeNode::Unknown`] rather than rejected,
/// so newer schema files still load and generate.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// String, number or boolean
    Primitive(PrimitiveKind),

    /// A fixed value, typically a union member
    Literal(MockValue),

    /// Ordered named fields
    Object(Vec<ObjectField>),

    /// One of several member types
    Union(Vec<TypeNode>),

    /// Fixed-arity ordered elements
    Tuple(Vec<TypeNode>),

    /// A base type narrowed by a predicate. The predicate is descriptive only.
    Refinement {
        /// Refined type
        base: Box<TypeNode>,
        /// Human-readable predicate name
        predicate: Option<String>,
    },

    /// A decode/encode pair. Only the `from` side is used for generation.
    Transformation {
        /// Source-side (encoded) type
        from: Box<TypeNode>,
        /// Target-side (decoded) type
        to: Box<TypeNode>,
    },

    /// A named wrapped type such as `Date`, `UUID` or `Email`.
    Declaration {
        /// Declared type name
        name: String,
        /// Type parameters
        params: Vec<TypeNode>,
    },

    /// A node kind this version does not know about
    Unknown(String),
}

impl TypeNode {
    /// Create a string node.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveKind::String)
    }

    /// Create a number node.
    pub fn number() -> Self {
        Self::Primitive(PrimitiveKind::Number)
    }

    /// Create a boolean node.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveKind::Boolean)
    }

    /// Create a literal node.
    pub fn literal(value: impl Into<MockValue>) -> Self {
        Self::Literal(value.into())
    }

    /// Create an object node from `(name, type)` pairs, preserving order.
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, TypeNode)>,
        K: Into<String>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(name, node)| ObjectField::new(name, node))
                .collect(),
        )
    }

    /// Create a union node.
    pub fn union(members: impl IntoIterator<Item = TypeNode>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// Create a tuple node.
    pub fn tuple(elements: impl IntoIterator<Item = TypeNode>) -> Self {
        Self::Tuple(elements.into_iter().collect())
    }

    /// Wrap a node in a refinement.
    pub fn refine(base: TypeNode, predicate: impl Into<String>) -> Self {
        Self::Refinement {
            base: Box::new(base),
            predicate: Some(predicate.into()),
        }
    }

    /// Create a transformation from `from` to `to`.
    pub fn transform(from: TypeNode, to: TypeNode) -> Self {
        Self::Transformation {
            from: Box::new(from),
            to: Box::new(to),
        }
    }

    /// Create a declaration node.
    pub fn declare(name: impl Into<String>, params: impl IntoIterator<Item = TypeNode>) -> Self {
        Self::Declaration {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }

    /// `Date` declaration.
    pub fn date() -> Self {
        Self::declare("Date", [])
    }

    /// `UUID` declaration.
    pub fn uuid() -> Self {
        Self::declare("UUID", [])
    }

    /// `ULID` declaration.
    pub fn ulid() -> Self {
        Self::declare("ULID", [])
    }

    /// `Email` declaration.
    pub fn email() -> Self {
        Self::declare("Email", [])
    }

    /// `URL` declaration.
    pub fn url() -> Self {
        Self::declare("URL", [])
    }

    /// Short lowercase name of the node kind.
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Primitive(kind) => kind.as_str(),
            Self::Literal(_) => "literal",
            Self::Object(_) => "object",
            Self::Union(_) => "union",
            Self::Tuple(_) => "tuple",
            Self::Refinement { .. } => "refinement",
            Self::Transformation { .. } => "transformation",
            Self::Declaration { .. } => "declaration",
            Self::Unknown(kind) => kind,
        }
    }

    /// Get the fields of an object node.
    pub fn fields(&self) -> Option<&[ObjectField]> {
        match self {
            Self::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Get a field of an object node by name.
    pub fn get_field(&self, name: &str) -> Option<&TypeNode> {
        self.fields()?
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.node)
    }
}

/// Map a string shorthand to a node. Unrecognized names become `Unknown`.
fn from_shorthand(value: &str) -> TypeNode {
    match value {
        "string" | "text" => TypeNode::string(),
        "number" | "int" | "float" => TypeNode::number(),
        "boolean" | "bool" => TypeNode::boolean(),
        "date" => TypeNode::date(),
        "uuid" => TypeNode::uuid(),
        "ulid" => TypeNode::ulid(),
        "email" => TypeNode::email(),
        "url" => TypeNode::url(),
        other => TypeNode::Unknown(other.to_string()),
    }
}

// Supports both simple string format ("string", "uuid") and object format ({"type": "object", "fields": [...]})
impl Serialize for TypeNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Primitive(kind) => serializer.serialize_str(kind.as_str()),
            Self::Unknown(kind) => serializer.serialize_str(kind),

            Self::Literal(value) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "literal")?;
                map.serialize_entry("value", value)?;
                map.end()
            }
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "object")?;
                map.serialize_entry("fields", fields)?;
                map.end()
            }
            Self::Union(members) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "union")?;
                map.serialize_entry("members", members)?;
                map.end()
            }
            Self::Tuple(elements) => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("type", "tuple")?;
                map.serialize_entry("elements", elements)?;
                map.end()
            }
            Self::Refinement { base, predicate } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "refinement")?;
                map.serialize_entry("base", base)?;
                if let Some(predicate) = predicate {
                    map.serialize_entry("predicate", predicate)?;
                }
                map.end()
            }
            Self::Transformation { from, to } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "transformation")?;
                map.serialize_entry("from", from)?;
                map.serialize_entry("to", to)?;
                map.end()
            }
            Self::Declaration { name, params } => {
                let mut map = serializer.serialize_map(None)?;
                map.serialize_entry("type", "declaration")?;
                map.serialize_entry("name", name)?;
                if !params.is_empty() {
                    map.serialize_entry("params", params)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for TypeNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, MapAccess, Visitor};

        struct TypeNodeVisitor;

        impl<'de> Visitor<'de> for TypeNodeVisitor {
            type Value = TypeNode;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a string or map representing a TypeNode")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                Ok(from_shorthand(value))
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut type_name: Option<String> = None;
                let mut fields: HashMap<String, serde_yaml::Value> = HashMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == "type" {
                        type_name = Some(map.next_value()?);
                    } else {
                        fields.insert(key, map.next_value()?);
                    }
                }

                let type_name = type_name.ok_or_else(|| M::Error::missing_field("type"))?;

                match type_name.as_str() {
                    "literal" => {
                        let value: MockValue = get_field_required(&fields, "value")?;
                        Ok(TypeNode::Literal(value))
                    }
                    "object" => {
                        let fields = get_field_or_default(&fields, "fields")?;
                        Ok(TypeNode::Object(fields))
                    }
                    "union" => {
                        let members = get_field_required(&fields, "members")?;
                        Ok(TypeNode::Union(members))
                    }
                    "tuple" => {
                        let elements = get_field_required(&fields, "elements")?;
                        Ok(TypeNode::Tuple(elements))
                    }
                    "refinement" => {
                        let base: TypeNode = get_field_required(&fields, "base")?;
                        Ok(TypeNode::Refinement {
                            base: Box::new(base),
                            predicate: get_field(&fields, "predicate"),
                        })
                    }
                    "transformation" => {
                        let from: TypeNode = get_field_required(&fields, "from")?;
                        let to: TypeNode = get_field_required(&fields, "to")?;
                        Ok(TypeNode::Transformation {
                            from: Box::new(from),
                            to: Box::new(to),
                        })
                    }
                    "declaration" => {
                        let name = get_field_required(&fields, "name")?;
                        let params = get_field_or_default(&fields, "params")?;
                        Ok(TypeNode::Declaration { name, params })
                    }
                    // Shorthand names may also appear in map format
                    other => Ok(from_shorthand(other)),
                }
            }
        }

        deserializer.deserialize_any(TypeNodeVisitor)
    }
}

// Helper functions for deserialization
fn get_field<T: for<'de> Deserialize<'de>>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &str,
) -> Option<T> {
    fields
        .get(key)
        .and_then(|v| serde_yaml::from_value(v.clone()).ok())
}

fn get_field_or_default<T: for<'de> Deserialize<'de> + Default, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    if fields.contains_key(key) {
        get_field_required(fields, key)
    } else {
        Ok(T::default())
    }
}

fn get_field_required<T: for<'de> Deserialize<'de>, E: serde::de::Error>(
    fields: &HashMap<String, serde_yaml::Value>,
    key: &'static str,
) -> Result<T, E> {
    let value = fields.get(key).ok_or_else(|| E::missing_field(key))?;
    serde_yaml::from_value(value.clone())
        .map_err(|e| E::custom(format!("invalid field '{key}': {e}")))
}
