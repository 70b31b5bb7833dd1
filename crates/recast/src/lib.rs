//! Immutable structural updates for plain data records and sequences.
//!
//! `recast` works on [`Value`], a tagged tree of records, sequences and
//! scalars whose containers are reference-counted. Every operation is a pure
//! function: inputs are never mutated, and results share every branch they
//! did not have to touch.
//!
//! # Core Operations
//!
//! - [`set`]: place a value at a dot-separated path, copying each container
//!   on the way down
//! - [`merge`]: deep union of two records, the second winning on conflicts
//! - [`pick`] / [`omit`]: shallow key filtering
//!
//! # Quick Start
//!
//! ```
//! use recast::{merge, set, Value};
//! use serde_json::json;
//!
//! let doc = Value::from(json!({"user": {"name": "Alice"}, "tags": ["a"]}));
//!
//! let updated = set("user.name", &doc, Value::from("Bob")).unwrap();
//! assert_eq!(updated.to_json(), json!({"user": {"name": "Bob"}, "tags": ["a"]}));
//!
//! // Untouched branches are shared, the original is unchanged
//! assert!(updated.get("tags").unwrap().ptr_eq(doc.get("tags").unwrap()));
//! assert_eq!(doc.to_json()["user"]["name"], "Alice");
//!
//! let defaults = Value::from(json!({"user": {"role": "guest"}}));
//! let merged = merge(defaults.as_record().unwrap(), updated.as_record().unwrap());
//! assert_eq!(
//!     Value::from(merged).to_json(),
//!     json!({"user": {"name": "Bob", "role": "guest"}, "tags": ["a"]})
//! );
//! ```
//!
//! # Paths
//!
//! Paths are dot-separated literal segments. A segment addresses a record key
//! or, on a sequence, a position (`"items.0.name"`). Parse once with
//! [`Path::parse`] and reuse the result with [`set_at`] when the same path is
//! applied repeatedly.

mod compose;
mod error;
mod merge;
mod path;
mod select;
mod seq;
mod update;
mod value;

pub use compose::{compose_l, compose_r};
pub use error::{value_type_name, RecastError, RecastResult};
pub use merge::{merge, merge_values};
pub use path::{parse_path, Path};
pub use select::{omit, pick};
pub use seq::{partition, zip};
pub use update::{get_at_path, set, set_at};
pub use value::{Map, Value, MAX_INDEX};
