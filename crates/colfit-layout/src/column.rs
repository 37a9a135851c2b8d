#![forbid(unsafe_code)]

//! Column identifiers.

use std::borrow::Borrow;
use std::fmt;

/// Opaque identifier of a grid column.
///
/// Ids are compared by exact string value. Ordering of a column list is
/// always carried by the list itself, never by the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column id from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&ColumnId> for ColumnId {
    fn from(id: &ColumnId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ColumnId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ColumnId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ColumnId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ColumnId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collect string-like ids into an owned column list.
pub fn column_list<I, S>(ids: I) -> Vec<ColumnId>
where
    I: IntoIterator<Item = S>,
    S: Into<ColumnId>,
{
    ids.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compares_against_str() {
        let id = ColumnId::new("email");
        assert_eq!(id, "email");
        assert_eq!(id.as_str(), "email");
        assert_ne!(id, "Email");
    }

    #[test]
    fn display_is_raw_id() {
        assert_eq!(ColumnId::from("lastName").to_string(), "lastName");
    }

    #[test]
    fn column_list_preserves_order() {
        let cols = column_list(["c", "a", "b"]);
        let raw: Vec<&str> = cols.iter().map(ColumnId::as_str).collect();
        assert_eq!(raw, ["c", "a", "b"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ColumnId::new("age")).unwrap();
        assert_eq!(json, "\"age\"");
        let back: ColumnId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "age");
    }
}
