//! Identifier types for pages in a link corpus.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Unique identifier for a page in a [`Corpus`](crate::pagerank::Corpus).
///
/// Page ids are opaque names, in practice the file name of the crawled
/// document. Ordering is lexicographic, which is the order reports use.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(String);

impl PageId {
    /// Create a new page identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use rankmax::identifiers::PageId;
    ///
    /// let page = PageId::new("1.html");
    /// assert_eq!(page.as_str(), "1.html");
    /// ```
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for PageId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<PageId> for &str {
    fn eq(&self, other: &PageId) -> bool {
        *self == other.as_str()
    }
}

impl Borrow<str> for PageId {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<String> for PageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for PageId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
