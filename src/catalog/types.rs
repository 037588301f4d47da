use serde::{Deserialize, Deserializer};
use std::fmt;

// ============================================================================
// Category Identifier
// ============================================================================

/// Opaque category identifier.
///
/// The backend serializes ids as JSON integers, but nothing in the header
/// relies on that: the id is only ever embedded into a route path. Both
/// numbers and strings are accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for CategoryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Uint(u64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Uint(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

// ============================================================================
// Category
// ============================================================================

/// A catalog grouping used to partition products for browsing.
///
/// Read-only to this crate. Extra fields the backend sends (description,
/// status, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    /// Builds a category with the backend's usual numeric id.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::from(id),
            name: name.into(),
        }
    }
}

// ============================================================================
// Response Envelope
// ============================================================================

/// Body of `GET /api/category/fetch/all`.
///
/// `categories` is optional at the type level so that an envelope without
/// the field (or with `null`) decodes successfully and can be reported as
/// [`FetchError::MissingCategories`](super::FetchError::MissingCategories)
/// instead of a generic decode failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryEnvelope {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    #[serde(default)]
    pub response_message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

// ============================================================================
// Page Window
// ============================================================================

/// Offset/limit window sent as `start`/`count` query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWindow {
    pub start: u32,
    pub count: u32,
}

impl CategoryWindow {
    /// The fixed window requested by the navigation header: first 12 categories.
    pub const HEADER: Self = Self {
        start: 0,
        count: 12,
    };
}
