//! Category labels for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
///
/// The catalog service identifies categories by their label alone
/// (e.g. `"men's clothing"`), so the label is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category from its label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the raw label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label with the first letter of every word upper-cased
    /// (e.g. `"men's clothing"` -> `"Men's Clothing"`).
    pub fn display_name(&self) -> String {
        self.0
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Label encoded for use as a single URL path segment.
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
