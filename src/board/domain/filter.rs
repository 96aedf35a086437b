//! Case-insensitive name filter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowercase-normalised text fragment used to filter tasks by name.
///
/// The empty filter matches every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FilterText(String);

impl FilterText {
    /// Creates a filter, normalising the text to lowercase.
    #[must_use]
    pub fn new(text: impl AsRef<str>) -> Self {
        Self(text.as_ref().to_lowercase())
    }

    /// Returns the filter that matches every task.
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns the normalised fragment.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the filter matches every task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns whether `name` contains the fragment, ignoring case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.is_empty() || name.to_lowercase().contains(self.0.as_str())
    }
}

impl From<String> for FilterText {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<FilterText> for String {
    fn from(value: FilterText) -> Self {
        value.0
    }
}

impl fmt::Display for FilterText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
