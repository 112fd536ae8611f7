//! ResourceProvider trait for abstracting image loading.
//!
//! The report engine never talks to the network or the filesystem directly:
//! logos, record photos and static map snapshots are all requested through a
//! provider, one at a time, in draw order.

use condo_types::ResourceUri;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A source of raw resource bytes.
///
/// Implementations decide how a [`ResourceUri`] is resolved: a pre-populated
/// map, a directory on disk, or a remote store wrapped by the caller.
///
/// # Example
///
/// ```ignore
/// let provider = InMemoryResourceProvider::new();
/// provider.add("logo.png", logo_bytes)?;
/// let data = provider.load(&ResourceUri::new("logo.png"))?;
/// ```
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its URI.
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, uri: &ResourceUri) -> bool;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources are stored in memory and must be pre-populated before use.
/// Keys are matched verbatim against the requested URI, so remote URLs
/// (e.g. static map snapshots) can be stubbed by inserting them as keys.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory store.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, uri: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let key = uri.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: key.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(key, Arc::new(data));
        Ok(())
    }

    /// Builder-style variant of [`add`](Self::add) for fixtures.
    pub fn with(self, uri: impl Into<String>, data: Vec<u8>) -> Result<Self, ResourceError> {
        self.add(uri, data)?;
        Ok(self)
    }

    /// Get the number of resources in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: uri.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(uri.as_str())
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(uri.to_string()))
    }

    fn exists(&self, uri: &ResourceUri) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(uri.as_str()))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}
