//! Syllable token

use serde::Serialize;
use std::fmt;

/// An opaque syllable occupying one grid cell
///
/// Equality is exact string equality; no case folding or trimming is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Syllable(String);

impl Syllable {
    /// Create a syllable from any string-like value
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the syllable as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Syllable {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Syllable {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl PartialEq<str> for Syllable {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Syllable {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
