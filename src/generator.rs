//! Public entry points: [`ReportBuilder`] assembles a [`ReportGenerator`],
//! which turns a [`ReportRequest`] into a [`GeneratedReport`].

use crate::composer::{DocumentComposer, SectionRenderingStrategy};
use crate::config::ReportConfig;
use crate::context::PlacedBlock;
use crate::error::ReportError;
use crate::model::ReportRequest;
use condo_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
use condo_traits::ResourceProvider;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A finished report. Nothing is written to disk until [`save_to`](Self::save_to).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReport {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub page_count: usize,
    /// Every placed block in draw order.
    pub blocks: Vec<PlacedBlock>,
}

impl GeneratedReport {
    /// Writes `{dir}/{filename}` and returns the path.
    pub fn save_to<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, ReportError> {
        let path = dir.as_ref().join(&self.filename);
        fs::write(&path, &self.bytes)?;
        log::info!("Saved report to {}", path.display());
        Ok(path)
    }
}

/// A builder for creating a [`ReportGenerator`].
pub struct ReportBuilder {
    config: ReportConfig,
    strategy: SectionRenderingStrategy,
    resources: Option<Arc<dyn ResourceProvider>>,
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self {
            config: ReportConfig::default(),
            strategy: SectionRenderingStrategy::default(),
            resources: None,
        }
    }
}

impl ReportBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    /// Parses and validates a camelCase JSON config.
    pub fn with_config_json(mut self, json: &str) -> Result<Self, ReportError> {
        self.config = ReportConfig::from_json_str(json)?;
        Ok(self)
    }

    pub fn with_strategy(mut self, strategy: SectionRenderingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Source of logo, photo and map bytes.
    pub fn with_resource_provider(mut self, provider: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(provider);
        self
    }

    /// Resolves image references against a local media directory.
    pub fn with_resource_dir<P: AsRef<Path>>(self, path: P) -> Self {
        self.with_resource_provider(Arc::new(FilesystemResourceProvider::new(path)))
    }

    /// Validates the config and creates the generator.
    ///
    /// Without a provider every image slot is left empty.
    pub fn build(self) -> Result<ReportGenerator, ReportError> {
        self.config.validate()?;
        let resources = self
            .resources
            .unwrap_or_else(|| Arc::new(InMemoryResourceProvider::new()));
        log::debug!(
            "Building {:?} report generator with '{}' resources",
            self.strategy,
            resources.name()
        );
        Ok(ReportGenerator {
            composer: Arc::new(DocumentComposer::new(self.config, self.strategy)),
            resources,
        })
    }
}

/// Reusable report generator. Each call is an independent pass.
#[derive(Clone)]
pub struct ReportGenerator {
    composer: Arc<DocumentComposer>,
    resources: Arc<dyn ResourceProvider>,
}

impl ReportGenerator {
    pub fn config(&self) -> &ReportConfig {
        self.composer.config()
    }

    pub fn generate(&self, request: &ReportRequest) -> Result<GeneratedReport, ReportError> {
        self.composer.compose(request, self.resources.as_ref())
    }

    /// Runs [`generate`](Self::generate) on tokio's blocking pool.
    pub async fn generate_async(
        &self,
        request: ReportRequest,
    ) -> Result<GeneratedReport, ReportError> {
        let generator = self.clone();
        tokio::task::spawn_blocking(move || generator.generate(&request))
            .await
            .map_err(|e| ReportError::Task(e.to_string()))?
    }
}
