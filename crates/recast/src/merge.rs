//! Deep structural merge of records.

use crate::{Map, Value};
use std::sync::Arc;

/// Deep-merge two records (pure function).
///
/// The result holds the union of both key sets:
///
/// - a key only in `a` keeps `a`'s value
/// - a key only in `b` takes `b`'s value
/// - a key in both whose value in `b` is a record is merged recursively onto
///   `a`'s value (a scalar there counts as an empty record, a sequence
///   contributes its indexed entries)
/// - any other value in `b` replaces `a`'s value; sequences are replaced
///   wholesale, never concatenated
///
/// Values taken over unchanged are shared with the input they came from.
/// Records produced by a recursive merge are newly allocated. `b` wins every
/// conflict, so the operation is not commutative, but `merge(a, a) == a`.
///
/// # Examples
///
/// ```
/// use recast::{merge, Value};
/// use serde_json::json;
///
/// let a = Value::from(json!({"a": {"x": 1}, "list": [1, 2]}));
/// let b = Value::from(json!({"a": {"y": 2}, "list": [3]}));
///
/// let merged = merge(a.as_record().unwrap(), b.as_record().unwrap());
/// assert_eq!(
///     Value::from(merged).to_json(),
///     json!({"a": {"x": 1, "y": 2}, "list": [3]})
/// );
/// ```
pub fn merge(a: &Map, b: &Map) -> Map {
    tracing::trace!(left = a.len(), right = b.len(), "merge");
    let mut out = a.clone();
    for (key, b_value) in b {
        let merged = match (a.get(key), b_value) {
            (Some(a_value), Value::Record(b_map)) => {
                Value::Record(Arc::new(merge(&a_value.own_entries(), b_map)))
            }
            (_, other) => other.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}

/// Deep-merge two arbitrary values (pure function).
///
/// When `b` is a record it is merged onto the own entries of `a` (see
/// [`merge`]); otherwise `b` replaces `a`.
pub fn merge_values(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Record(a_map), Value::Record(b_map)) => Value::record(merge(a_map, b_map)),
        (_, Value::Record(b_map)) => Value::record(merge(&a.own_entries(), b_map)),
        (_, other) => other.clone(),
    }
}
