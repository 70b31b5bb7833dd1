//! Path-based copy-on-write updates.
//!
//! [`set`] rebuilds only the containers that lie on the path from the root to
//! the target. Every other branch of the result is the same allocation as in
//! the input.

use crate::value::parse_index;
use crate::{value_type_name, Path, RecastError, RecastResult, Value};
use std::sync::Arc;

/// Place `value` at a dot-separated `path` inside `root` (pure function).
///
/// Each record or sequence on the path is shallow-copied, the child at the
/// next segment is replaced, and the copy is returned. Branches off the path
/// are shared with `root`, which is never modified.
///
/// A missing key is created only at the last segment. Traversing through a
/// missing, null or scalar intermediate fails.
///
/// # Errors
///
/// - [`RecastError::InvalidPath`] if `path` is empty
/// - [`RecastError::InvalidIntermediate`] if a non-terminal segment does not
///   resolve to a record or sequence
/// - [`RecastError::InvalidIndex`] if a segment used on a sequence is not a
///   canonical decimal index no greater than [`MAX_INDEX`](crate::MAX_INDEX)
/// - [`RecastError::SequenceTooLarge`] if padding a sequence out to the index
///   cannot be allocated
///
/// # Examples
///
/// ```
/// use recast::{set, Value};
/// use serde_json::json;
///
/// let doc = Value::from(json!({"arr": [{"a": 1}, {"b": 2}]}));
/// let new_doc = set("arr.1.b", &doc, Value::from(42)).unwrap();
/// assert_eq!(new_doc.to_json(), json!({"arr": [{"a": 1}, {"b": 42}]}));
///
/// // Original is unchanged, the untouched element is shared
/// assert_eq!(doc.to_json(), json!({"arr": [{"a": 1}, {"b": 2}]}));
/// let before = doc.get("arr").unwrap().get("0").unwrap();
/// let after = new_doc.get("arr").unwrap().get("0").unwrap();
/// assert!(before.ptr_eq(after));
/// ```
pub fn set(path: &str, root: &Value, value: Value) -> RecastResult<Value> {
    let path = Path::parse(path)?;
    set_at(&path, root, value)
}

/// Place `value` at an already parsed `path` inside `root` (pure function).
///
/// Same semantics as [`set`]; use this to reuse a [`Path`] across calls.
pub fn set_at(path: &Path, root: &Value, value: Value) -> RecastResult<Value> {
    tracing::trace!(path = %path, "set");
    set_in(Some(root), path.segments(), value, path, 0).inspect_err(|err| {
        tracing::debug!(path = %path, error = %err, "set rejected");
    })
}

/// Recursively rebuild `current` with `value` installed under `segments`.
///
/// `current` is `None` when the parent had no entry at this position.
fn set_in(
    current: Option<&Value>,
    segments: &[String],
    value: Value,
    full_path: &Path,
    depth: usize,
) -> RecastResult<Value> {
    let [head, rest @ ..] = segments else {
        return Ok(value);
    };

    match current {
        Some(Value::Record(map)) => {
            let child = set_in(map.get(head), rest, value, full_path, depth + 1)?;
            let mut copy = (**map).clone();
            copy.insert(head.clone(), child);
            Ok(Value::Record(Arc::new(copy)))
        }
        Some(Value::Sequence(items)) => {
            let index = parse_index(head)
                .ok_or_else(|| RecastError::invalid_index(full_path.clone(), head.as_str()))?;
            let child = set_in(items.get(index), rest, value, full_path, depth + 1)?;
            let mut copy = (**items).clone();
            if index >= copy.len() {
                let too_large = || RecastError::sequence_too_large(full_path.clone(), index);
                let new_len = index.checked_add(1).ok_or_else(too_large)?;
                copy.try_reserve_exact(new_len - copy.len()).map_err(|_| too_large())?;
                copy.resize(new_len, Value::Null);
            }
            copy[index] = child;
            Ok(Value::Sequence(Arc::new(copy)))
        }
        Some(other) => Err(RecastError::invalid_intermediate(
            full_path.clone(),
            depth,
            value_type_name(other),
        )),
        None => Err(RecastError::invalid_intermediate(
            full_path.clone(),
            depth,
            "missing",
        )),
    }
}

/// Get a reference to the value at a path (for reading).
///
/// Returns `None` if any segment is missing or traverses a scalar.
pub fn get_at_path<'a>(doc: &'a Value, path: &Path) -> Option<&'a Value> {
    path.iter().try_fold(doc, |current, segment| current.get(segment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use serde_json::json;

    fn doc(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_set_replaces_nested_value() {
        let root = doc(json!({"a": {"b": 1}}));
        let result = set("a.b", &root, Value::from(42)).unwrap();
        assert_eq!(result.to_json(), json!({"a": {"b": 42}}));
    }

    #[test]
    fn test_set_through_sequence() {
        let root = doc(json!({"arr": [{"a": 1}, {"b": 2}]}));
        let result = set("arr.1.b", &root, Value::from(42)).unwrap();
        assert_eq!(result.to_json(), json!({"arr": [{"a": 1}, {"b": 42}]}));
    }

    #[test]
    fn test_set_empty_path_fails() {
        let root = doc(json!({"a": 1}));
        let err = set("", &root, Value::from(42)).unwrap_err();
        assert!(matches!(err, RecastError::InvalidPath { .. }));
    }

    #[test]
    fn test_set_creates_missing_terminal_key() {
        let root = doc(json!({"a": {}}));
        let result = set("a.b", &root, Value::from(1)).unwrap();
        assert_eq!(result.to_json(), json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_set_missing_intermediate_fails() {
        let root = doc(json!({}));
        let err = set("a.b", &root, Value::from(1)).unwrap_err();
        match err {
            RecastError::InvalidIntermediate { path, depth, found } => {
                assert_eq!(path, path!("a", "b"));
                assert_eq!(depth, 1);
                assert_eq!(found, "missing");
            }
            other => panic!("expected InvalidIntermediate, got: {other:?}"),
        }
    }

    #[test]
    fn test_set_through_scalar_fails() {
        let root = doc(json!({"a": 5}));
        let err = set("a.b", &root, Value::from(1)).unwrap_err();
        assert!(matches!(
            err,
            RecastError::InvalidIntermediate { depth: 1, found: "number", .. }
        ));
    }

    #[test]
    fn test_set_through_null_fails() {
        let root = doc(json!({"a": null}));
        let err = set("a.b", &root, Value::from(1)).unwrap_err();
        assert!(matches!(
            err,
            RecastError::InvalidIntermediate { found: "null", .. }
        ));
    }

    #[test]
    fn test_set_on_scalar_root_fails() {
        let err = set("a", &Value::from("text"), Value::from(1)).unwrap_err();
        assert!(matches!(
            err,
            RecastError::InvalidIntermediate { depth: 0, found: "string", .. }
        ));
    }

    #[test]
    fn test_set_sequence_out_of_range_pads_with_null() {
        let root = doc(json!([1]));
        let result = set("3", &root, Value::from("x")).unwrap();
        assert_eq!(result.to_json(), json!([1, null, null, "x"]));
    }

    #[test]
    fn test_set_sequence_append_position() {
        let root = doc(json!({"items": [1, 2]}));
        let result = set("items.2", &root, Value::from(3)).unwrap();
        assert_eq!(result.to_json(), json!({"items": [1, 2, 3]}));
    }

    #[test]
    fn test_set_non_index_segment_on_sequence_fails() {
        let root = doc(json!({"items": [1, 2]}));
        for segment in ["x", "-1", "01", ""] {
            let path = format!("items.{segment}");
            let err = set(&path, &root, Value::from(3)).unwrap_err();
            assert!(
                matches!(&err, RecastError::InvalidIndex { segment: s, .. } if s == segment),
                "expected InvalidIndex for {path:?}, got: {err:?}"
            );
        }
    }

    #[test]
    fn test_set_index_beyond_max_fails_cleanly() {
        let root = doc(json!([]));
        let too_big = (crate::MAX_INDEX + 1).to_string();
        for segment in [usize::MAX.to_string(), too_big, "100000000000".to_string()] {
            let err = set(&segment, &root, Value::from(1)).unwrap_err();
            assert!(
                matches!(&err, RecastError::InvalidIndex { segment: s, .. } if *s == segment),
                "expected InvalidIndex for {segment:?}, got: {err:?}"
            );
        }
        assert_eq!(root.to_json(), json!([]));
    }

    #[test]
    fn test_set_large_gap_within_max_is_padded() {
        let root = doc(json!({"list": [0]}));
        let result = set("list.1000", &root, Value::from(1)).unwrap();
        let list = result.get("list").unwrap().as_sequence().unwrap();
        assert_eq!(list.len(), 1001);
        assert!(list[1..1000].iter().all(Value::is_null));
        assert_eq!(list[1000], Value::from(1));
    }

    #[test]
    fn test_numeric_segment_on_record_is_a_key() {
        let root = doc(json!({"1": "one"}));
        let result = set("1", &root, Value::from("uno")).unwrap();
        assert_eq!(result.to_json(), json!({"1": "uno"}));
    }

    #[test]
    fn test_set_empty_segment_is_literal_key() {
        let root = doc(json!({"a": {}}));
        let result = set("a.", &root, Value::from(1)).unwrap();
        assert_eq!(result.to_json(), json!({"a": {"": 1}}));
    }

    #[test]
    fn test_set_always_returns_new_root() {
        let root = doc(json!({"a": 1}));
        let result = set("a", &root, Value::from(1)).unwrap();
        assert_eq!(result, root);
        assert!(!result.ptr_eq(&root));
    }

    #[test]
    fn test_set_at_reuses_parsed_path() {
        let path = Path::parse("count").unwrap();
        let first = set_at(&path, &doc(json!({"count": 0})), Value::from(1)).unwrap();
        let second = set_at(&path, &first, Value::from(2)).unwrap();
        assert_eq!(second.to_json(), json!({"count": 2}));
        assert_eq!(first.to_json(), json!({"count": 1}));
    }

    #[test]
    fn test_get_at_path() {
        let root = doc(json!({"a": {"b": [10, {"c": 42}]}}));
        assert_eq!(
            get_at_path(&root, &path!("a", "b", 1, "c")),
            Some(&Value::from(42))
        );
        assert_eq!(get_at_path(&root, &path!("a", "x")), None);
        assert_eq!(get_at_path(&root, &path!("a", "b", 0, "c")), None);
    }
}
