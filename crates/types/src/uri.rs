//! Newtype wrapper for resource locations.
//!
//! Logos, record photos and static map snapshots are all addressed by a
//! `ResourceUri`, which keeps them apart from the plain strings that flow
//! through record fields.

use std::fmt;
use std::sync::Arc;

/// A URI for a report resource (logo, photo, map snapshot).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceUri(Arc<str>);

impl ResourceUri {
    /// Creates a new ResourceUri from a string
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Returns the string representation of this resource URI
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for blank references, which are never fetched.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for ResourceUri {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ResourceUri {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for ResourceUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
