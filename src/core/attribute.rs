//! Attribute model for block configuration
//!
//! This module defines the attribute system blocks are declared and rendered
//! with: runtime values, per-attribute descriptors with defaults, ordered
//! schemas, and the attribute bag the host supplies to a render call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Non-editable bag key holding the qualified name of the block being
/// rendered. Injected by the registry before render so that render-time
/// code can reference its own block type.
pub const BLOCK_NAME_ATTR: &str = "_name";

/// Attribute value
///
/// The runtime value of a single attribute, as supplied by the host's
/// content storage. Untagged so that plain JSON maps onto it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// String value
    String(String),
    /// Boolean value
    Bool(bool),
    /// Integer number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// Array of values
    Array(Vec<AttributeValue>),
    /// Object with key-value pairs
    Object(IndexMap<String, AttributeValue>),
    /// Null value
    Null,
}

impl AttributeValue {
    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Null)
    }

    /// Try to convert to string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to convert to integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            AttributeValue::Integer(i) => Some(*i),
            AttributeValue::Number(n) => Some(*n as i64),
            _ => None,
        }
    }

    /// Try to convert to boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to convert to array
    pub fn as_array(&self) -> Option<&Vec<AttributeValue>> {
        match self {
            AttributeValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Try to convert to object
    pub fn as_object(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            AttributeValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Loose truthiness, matching what editor-supplied toggle values mean
    /// in practice: `false`, `0`, `0.0`, `""`, `null` and empty collections
    /// are falsy, everything else is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttributeValue::String(s) => !s.is_empty(),
            AttributeValue::Bool(b) => *b,
            AttributeValue::Integer(i) => *i != 0,
            AttributeValue::Number(n) => *n != 0.0,
            AttributeValue::Array(arr) => !arr.is_empty(),
            AttributeValue::Object(obj) => !obj.is_empty(),
            AttributeValue::Null => false,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::String(s)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::String(s.to_string())
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<i64> for AttributeValue {
    fn from(i: i64) -> Self {
        AttributeValue::Integer(i)
    }
}

impl From<f64> for AttributeValue {
    fn from(n: f64) -> Self {
        AttributeValue::Number(n)
    }
}

/// Attribute types, as declared towards the host's editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    /// String attribute
    String,
    /// Boolean attribute
    Boolean,
    /// Numeric attribute
    Number,
    /// Object attribute
    Object,
    /// Array attribute
    Array,
}

/// Escaping contract for string attributes at render time
///
/// Title, subtitle and footer text come out of the editor as rich text and
/// are emitted raw; everything else is escaped. Carrying the decision here
/// makes it a data-driven contract instead of a hard-coded assumption in
/// the render layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextMode {
    /// Plain text, escaped on output
    #[default]
    Plain,
    /// Editor-produced rich text, emitted without escaping
    TrustedRichText,
}

/// Attribute descriptor: the declared shape of one attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    /// Declared type
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    /// Default value, applied when the editor supplies none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<AttributeValue>,
    /// Render-side escaping contract; not part of the host-facing schema
    #[serde(skip)]
    pub text_mode: TextMode,
}

impl AttributeDescriptor {
    /// Create a descriptor of the given type with no default
    pub fn new(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            default: None,
            text_mode: TextMode::Plain,
        }
    }

    /// Set the default value
    pub fn with_default(mut self, default: impl Into<AttributeValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Mark the attribute as trusted rich text
    pub fn rich_text(mut self) -> Self {
        self.text_mode = TextMode::TrustedRichText;
        self
    }
}

/// Attribute schema: an ordered mapping from attribute name to descriptor
///
/// Declared once per block type. Section blocks merge the shared section
/// schema with their own entries; block-specific entries win on collision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSchema {
    entries: IndexMap<String, AttributeDescriptor>,
}

impl AttributeSchema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an attribute
    pub fn declare(mut self, name: impl Into<String>, descriptor: AttributeDescriptor) -> Self {
        self.entries.insert(name.into(), descriptor);
        self
    }

    /// Insert or replace an attribute declaration in place
    pub fn insert(&mut self, name: impl Into<String>, descriptor: AttributeDescriptor) {
        self.entries.insert(name.into(), descriptor);
    }

    /// Get a declared descriptor
    pub fn get(&self, name: &str) -> Option<&AttributeDescriptor> {
        self.entries.get(name)
    }

    /// Whether an attribute is declared
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared attributes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schema declares nothing
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate declarations in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeDescriptor)> {
        self.entries.iter()
    }

    /// Merge `overrides` into this schema and return the result.
    ///
    /// Base entries keep their position; overriding entries win on key
    /// collision. A base default is never dropped unless the same key is
    /// explicitly redefined.
    pub fn merged_with(&self, overrides: &AttributeSchema) -> AttributeSchema {
        let mut merged = self.clone();
        for (name, descriptor) in overrides.iter() {
            merged.entries.insert(name.clone(), descriptor.clone());
        }
        merged
    }

    /// Resolve an attribute against this schema's defaults: the bag's value
    /// when the key is present, else the declared default, else `None`.
    pub fn value_of<'a>(&'a self, bag: &'a AttributeBag, name: &str) -> Option<&'a AttributeValue> {
        bag.resolve(name)
            .or_else(|| self.get(name).and_then(|d| d.default.as_ref()))
    }

    /// Default-aware string lookup
    pub fn str_of<'a>(&'a self, bag: &'a AttributeBag, name: &str) -> Option<&'a str> {
        self.value_of(bag, name).and_then(AttributeValue::as_string)
    }

    /// Default-aware truthiness check
    pub fn is_truthy(&self, bag: &AttributeBag, name: &str) -> bool {
        self.value_of(bag, name)
            .map(AttributeValue::is_truthy)
            .unwrap_or(false)
    }
}

impl FromIterator<(String, AttributeDescriptor)> for AttributeSchema {
    fn from_iter<T: IntoIterator<Item = (String, AttributeDescriptor)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Attribute bag: the runtime key-value input for one rendered instance
///
/// Supplied transiently by the host's content storage; this crate never
/// persists it. Lookup is presence-based: an explicit `false`, `0` or empty
/// string is a present value, not an absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeBag {
    values: IndexMap<String, AttributeValue>,
}

impl AttributeBag {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Fluent insert, for building bags in tests and fixtures
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Resolve an attribute by presence.
    ///
    /// Returns the value if the key is present, including explicit `false`,
    /// `0` or empty-string values, else `None`. Presence, not truthiness,
    /// governs the fallback.
    pub fn resolve(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    /// Whether the key is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Resolve a string attribute
    pub fn str_value(&self, name: &str) -> Option<&str> {
        self.resolve(name).and_then(AttributeValue::as_string)
    }

    /// Whether the attribute is present and truthy
    pub fn is_truthy(&self, name: &str) -> bool {
        self.resolve(name)
            .map(AttributeValue::is_truthy)
            .unwrap_or(false)
    }

    /// The qualified name of the block being rendered, if the registry has
    /// injected it (see [`BLOCK_NAME_ATTR`]).
    pub fn block_name(&self) -> Option<&str> {
        self.str_value(BLOCK_NAME_ATTR)
    }

    /// Number of values in the bag
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate values in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.values.iter()
    }
}

impl FromIterator<(String, AttributeValue)> for AttributeBag {
    fn from_iter<T: IntoIterator<Item = (String, AttributeValue)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_merge_overrides_win() {
        let base = AttributeSchema::new()
            .declare(
                "align",
                AttributeDescriptor::new(AttributeType::String).with_default("full"),
            )
            .declare("anchor", AttributeDescriptor::new(AttributeType::String));

        let overrides = AttributeSchema::new().declare(
            "align",
            AttributeDescriptor::new(AttributeType::String).with_default("wide"),
        );

        let merged = base.merged_with(&overrides);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.get("align").unwrap().default,
            Some(AttributeValue::from("wide"))
        );
        // Untouched base entries keep their defaults.
        assert!(merged.contains("anchor"));
    }

    #[test]
    fn test_value_of_prefers_bag_over_default() {
        let schema = AttributeSchema::new().declare(
            "sectionVerticalSpacing",
            AttributeDescriptor::new(AttributeType::String).with_default("normal"),
        );

        let bag = AttributeBag::new().with("sectionVerticalSpacing", "tight");
        assert_eq!(schema.str_of(&bag, "sectionVerticalSpacing"), Some("tight"));

        let empty = AttributeBag::new();
        assert_eq!(schema.str_of(&empty, "sectionVerticalSpacing"), Some("normal"));
    }

    #[test]
    fn test_bag_deserializes_from_plain_json() {
        let bag: AttributeBag = serde_json::from_str(
            r#"{"sectionTitle": "Hello", "sectionHeaderShow": true, "count": 3}"#,
        )
        .unwrap();

        assert_eq!(bag.str_value("sectionTitle"), Some("Hello"));
        assert!(bag.is_truthy("sectionHeaderShow"));
        assert_eq!(
            bag.resolve("count").and_then(AttributeValue::as_integer),
            Some(3)
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(!AttributeValue::from("").is_truthy());
        assert!(!AttributeValue::from(false).is_truthy());
        assert!(!AttributeValue::from(0i64).is_truthy());
        assert!(!AttributeValue::Null.is_truthy());
        assert!(AttributeValue::from("x").is_truthy());
        assert!(AttributeValue::from(true).is_truthy());
    }

    #[test]
    fn test_schema_serializes_without_text_mode() {
        let schema = AttributeSchema::new().declare(
            "sectionTitle",
            AttributeDescriptor::new(AttributeType::String).rich_text(),
        );
        let json = serde_json::to_string(&schema).unwrap();
        assert_eq!(json, r#"{"sectionTitle":{"type":"string"}}"#);
    }
}
