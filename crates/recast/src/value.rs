//! The plain data tree that every operation works on.
//!
//! Containers live behind `Arc`, so cloning a [`Value`] copies a reference,
//! never a subtree. Operations build new containers only along the branch
//! they change and share everything else with their input.

use crate::RecastResult;
use serde_json::Number;
use std::collections::BTreeMap;
use std::sync::Arc;

/// The body of a record: string keys to values, iterated in key order.
pub type Map = BTreeMap<String, Value>;

/// A plain data value: a record, a sequence or a scalar.
///
/// Equality is deep. Use [`Value::ptr_eq`] to ask whether two containers
/// are the same allocation.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// Absent/null value.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(Number),
    /// String scalar.
    String(String),
    /// Ordered, 0-indexed list.
    Sequence(Arc<Vec<Value>>),
    /// Key to value mapping.
    Record(Arc<Map>),
}

impl Value {
    /// Wrap a map as a record value.
    #[inline]
    pub fn record(map: Map) -> Self {
        Value::Record(Arc::new(map))
    }

    /// Wrap a vector as a sequence value.
    #[inline]
    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Arc::new(items))
    }

    /// An empty record.
    #[inline]
    pub fn empty_record() -> Self {
        Value::record(Map::new())
    }

    /// Returns true if this is `Null`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean.
    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number.
    #[inline]
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string.
    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is a sequence.
    #[inline]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns true if this is a record.
    #[inline]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns true for records and sequences.
    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Record(_) | Value::Sequence(_))
    }

    /// Get the boolean if this is a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the number as `i64` if it is an integer in range.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Get the number as `f64`.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Get the string slice if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the elements if this is a sequence.
    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Get the entries if this is a record.
    #[inline]
    pub fn as_record(&self) -> Option<&Map> {
        match self {
            Value::Record(map) => Some(&**map),
            _ => None,
        }
    }

    /// Look up a direct child.
    ///
    /// Records are addressed by key. Sequences are addressed by a decimal
    /// index in canonical form (`"2"`, not `"02"`). Scalars have no children.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Record(map) => map.get(key),
            Value::Sequence(items) => parse_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Returns true if both values are the same allocation.
    ///
    /// Scalars carry no identity and are compared by value.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Record(a), Value::Record(b)) => Arc::ptr_eq(a, b),
            (Value::Sequence(a), Value::Sequence(b)) => Arc::ptr_eq(a, b),
            (Value::Record(_) | Value::Sequence(_), _)
            | (_, Value::Record(_) | Value::Sequence(_)) => false,
            (a, b) => a == b,
        }
    }

    /// The own enumerable entries of this value as a fresh map.
    ///
    /// A record yields its entries, a sequence yields its elements keyed by
    /// stringified index, and a scalar yields nothing. Child values are
    /// shared, not copied.
    pub fn own_entries(&self) -> Map {
        match self {
            Value::Record(map) => (**map).clone(),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v.clone()))
                .collect(),
            _ => Map::new(),
        }
    }

    /// Convert to a `serde_json::Value`, copying the whole tree.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }

    /// Parse a JSON document.
    pub fn from_json_str(input: &str) -> RecastResult<Self> {
        let json: serde_json::Value = serde_json::from_str(input)?;
        Ok(Value::from(json))
    }

    /// Render as a compact JSON string.
    pub fn to_json_string(&self) -> RecastResult<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}

/// Largest position a segment can address in a sequence.
///
/// Larger decimal segments are treated as non-index keys, so reading through
/// them finds nothing and writing through them fails.
pub const MAX_INDEX: usize = u32::MAX as usize - 1;

/// Parse a segment as a sequence index, accepting only canonical decimal
/// up to [`MAX_INDEX`].
pub(crate) fn parse_index(segment: &str) -> Option<usize> {
    let index: usize = segment.parse().ok()?;
    (index <= MAX_INDEX && index.to_string() == segment).then_some(index)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::record(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Record(map) => serde_json::Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(v.into())
    }
}

impl From<f64> for Value {
    /// Non-finite floats have no plain data form and become `Null`.
    fn from(v: f64) -> Self {
        Number::from_f64(v).map_or(Value::Null, Value::Number)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::sequence(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::record(v)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => serde::Serialize::serialize(n, serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Sequence(items) => serializer.collect_seq(items.iter()),
            Value::Record(map) => serializer.collect_map(map.iter()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <serde_json::Value as serde::Deserialize>::deserialize(deserializer).map(Value::from)
    }
}
