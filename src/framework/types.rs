//! Attribute value types.

use serde::{Deserialize, Serialize};

/// String attribute value as seen by the host runtime.
///
/// Besides a concrete value, an attribute can be unset (`Null`) or not yet known during
/// planning (`Unknown`), e.g. a computed ID before the resource exists.
///
/// Encoded externally tagged (`"null"`, `"unknown"`, `{"known": "..."}`). A plain JSON
/// `null` also decodes as `Null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "Option<TaggedStringValue>")]
pub enum StringValue {
    #[default]
    Null,
    Unknown,
    Known(String),
}

/// Tagged wire form of [`StringValue`], wrapped in `Option` so JSON `null` is accepted.
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum TaggedStringValue {
    Null,
    Unknown,
    Known(String),
}

impl From<Option<TaggedStringValue>> for StringValue {
    fn from(value: Option<TaggedStringValue>) -> Self {
        match value {
            None | Some(TaggedStringValue::Null) => Self::Null,
            Some(TaggedStringValue::Unknown) => Self::Unknown,
            Some(TaggedStringValue::Known(value)) => Self::Known(value),
        }
    }
}

impl StringValue {
    /// Creates a known value.
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The known value, if any.
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// The known value, or an empty string when null or unknown.
    pub fn value_str(&self) -> &str {
        self.as_known().unwrap_or_default()
    }
}

impl From<String> for StringValue {
    fn from(value: String) -> Self {
        Self::Known(value)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

impl From<Option<String>> for StringValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}
