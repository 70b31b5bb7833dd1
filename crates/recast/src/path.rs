//! Dot-separated paths for addressing nested locations.
//!
//! A path is a non-empty sequence of string segments. A segment names a
//! record key or, when the container at that level is a sequence, a position
//! written in decimal (`"items.0.name"`).

use crate::{RecastError, RecastResult};
use std::fmt;
use std::str::FromStr;

/// A parsed path into a [`Value`](crate::Value) tree.
///
/// Paths always hold at least one segment. Segments are literal: no escaping,
/// globbing or pointer syntax is recognized.
///
/// # Examples
///
/// ```
/// use recast::Path;
///
/// let path = Path::parse("users.0.name").unwrap();
/// assert_eq!(path.segments(), ["users", "0", "name"]);
/// assert_eq!(path.to_string(), "users.0.name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Path(Vec<String>);

impl Path {
    /// Parse a dot-separated path string.
    ///
    /// Fails with [`RecastError::InvalidPath`] on the empty string. Leading,
    /// trailing or doubled dots are accepted and produce empty-string
    /// segments, which then address the key `""` literally.
    pub fn parse(input: &str) -> RecastResult<Self> {
        if input.is_empty() {
            return Err(RecastError::invalid_path(input));
        }
        Ok(Self(input.split('.').map(str::to_owned).collect()))
    }

    /// Create a path holding one segment.
    #[inline]
    pub fn single(segment: impl Into<String>) -> Self {
        Self(vec![segment.into()])
    }

    /// Create a path from a vector of segments.
    ///
    /// Fails with [`RecastError::InvalidPath`] when `segments` is empty.
    pub fn from_segments(segments: Vec<String>) -> RecastResult<Self> {
        if segments.is_empty() {
            return Err(RecastError::invalid_path(""));
        }
        Ok(Self(segments))
    }

    /// Append a segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, segment: impl Into<String>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Push a segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Number of segments, always at least one.
    #[inline]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> &str {
        &self.0[0]
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> &str {
        &self.0[self.0.len() - 1]
    }

    /// The path made of the first `n` segments, `None` if `n` is zero or
    /// exceeds the depth.
    pub fn prefix(&self, n: usize) -> Option<Path> {
        if n == 0 || n > self.0.len() {
            return None;
        }
        Some(Path(self.0[..n].to_vec()))
    }

    /// Check if this path starts with another path.
    #[inline]
    pub fn starts_with(&self, prefix: &Path) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Parse a dot-separated path string into a [`Path`].
///
/// Alias for [`Path::parse`].
#[inline]
pub fn parse_path(input: &str) -> RecastResult<Path> {
    Path::parse(input)
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

impl FromStr for Path {
    type Err = RecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl TryFrom<&str> for Path {
    type Error = RecastError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Path::parse(s)
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Path {
    type Output = str;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Path {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
        Path::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Construct a [`Path`] from one or more segments.
///
/// Each segment is converted with `ToString`, so numbers become index
/// segments written in decimal.
///
/// # Examples
///
/// ```
/// use recast::path;
///
/// let p = path!("items", 0, "name");
/// assert_eq!(p.to_string(), "items.0.name");
/// ```
#[macro_export]
macro_rules! path {
    ($first:expr $(, $seg:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut p = $crate::Path::single(::std::string::ToString::to_string(&$first));
        $(
            p.push(::std::string::ToString::to_string(&$seg));
        )*
        p
    }};
}
