//! Filesystem-based resource provider for uploaded media.
//!
//! Record photos and logos are stored by the upload service under a media
//! root. Their URIs come in three shapes: bare relative paths
//! (`fotos/123.jpg`), app-relative paths (`/uploads/fotos/123.jpg`) and public
//! URLs (`https://cdn.example/uploads/fotos/123.jpg`). All three resolve to a
//! file below the media root.
//!
//! # Security
//!
//! Resolved paths must remain within the media root. Attempts to escape it
//! (e.g. `../../../etc/passwd`) return a `NotFound` error.

use condo_traits::{ResourceError, ResourceProvider, SharedResourceData};
use condo_types::ResourceUri;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for security checks
    canonical_base: Option<PathBuf>,
    /// Public URL prefixes that map onto the media root.
    url_prefixes: Vec<String>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `base_path`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
            url_prefixes: Vec::new(),
        }
    }

    /// Registers a public URL prefix (e.g. `https://cdn.example/uploads/`)
    /// whose remainder is looked up below the media root.
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefixes.push(prefix.into());
        self
    }

    /// Returns the media root for this provider.
    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Maps a URI onto a path relative to the media root.
    ///
    /// Returns `None` for remote URLs that do not match a registered prefix.
    fn relative_part<'a>(&self, uri: &'a str) -> Option<&'a str> {
        for prefix in &self.url_prefixes {
            if let Some(rest) = uri.strip_prefix(prefix.as_str()) {
                return Some(rest.trim_start_matches('/'));
            }
        }
        if let Some(rest) = uri.strip_prefix("file://") {
            return Some(rest.trim_start_matches('/'));
        }
        if uri.contains("://") {
            return None;
        }
        Some(uri.trim_start_matches('/'))
    }

    /// Resolves and validates a resource path relative to the media root.
    ///
    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, uri: &str) -> Option<PathBuf> {
        let relative = self.relative_part(uri)?;
        if relative.is_empty() {
            return None;
        }

        if Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, uri: &ResourceUri) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve_path_safe(uri.as_str())
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside media root)", uri)))?;

        log::trace!("Loading {} from {}", uri, full_path.display());
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(uri.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: uri.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, uri: &ResourceUri) -> bool {
        self.resolve_path_safe(uri.as_str())
            .map(|p| p.exists())
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
