//! Shallow key selection.
//!
//! Both functions look one level deep: nested records and sequences in the
//! result are the same allocations as in the source.

use crate::{Map, Value};
use std::collections::BTreeSet;

/// Keep only the entries of `source` whose key appears in `keys`.
///
/// Keys absent from `source` are skipped; no placeholder entry is created.
/// A sequence source is viewed through its indices (`"0"`, `"1"`, ...), and
/// a scalar source has no entries.
///
/// # Examples
///
/// ```
/// use recast::{pick, Value};
/// use serde_json::json;
///
/// let source = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let picked = pick(&source, ["a", "c", "missing"]);
/// assert_eq!(Value::from(picked).to_json(), json!({"a": 1, "c": 3}));
/// ```
pub fn pick<K: AsRef<str>>(source: &Value, keys: impl IntoIterator<Item = K>) -> Map {
    tracing::trace!("pick");
    keys.into_iter()
        .filter_map(|key| {
            let key = key.as_ref();
            source.get(key).map(|v| (key.to_owned(), v.clone()))
        })
        .collect()
}

/// Copy `source` without the entries named in `keys`.
///
/// Keys absent from `source` are ignored. A sequence source is viewed
/// through its indices, and a scalar source has no entries.
///
/// # Examples
///
/// ```
/// use recast::{omit, Value};
/// use serde_json::json;
///
/// let source = Value::from(json!({"a": 1, "b": 2, "c": 3}));
/// let rest = omit(&source, ["a", "c"]);
/// assert_eq!(Value::from(rest).to_json(), json!({"b": 2}));
/// ```
pub fn omit<K: AsRef<str>>(source: &Value, keys: impl IntoIterator<Item = K>) -> Map {
    tracing::trace!("omit");
    let excluded: BTreeSet<String> = keys.into_iter().map(|k| k.as_ref().to_owned()).collect();
    let mut out = source.own_entries();
    out.retain(|key, _| !excluded.contains(key));
    out
}
