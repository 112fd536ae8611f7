pub mod fixtures;
pub mod pdf_assertions;

use condo_report::{
    GeneratedReport, InMemoryResourceProvider, ReportBuilder, ReportError, ReportRequest,
    SectionRenderingStrategy,
};
use lopdf::Document as LopdfDocument;
use serde_json::Value;
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wrapper around a generated report with its parsed PDF.
pub struct GeneratedPdf {
    pub report: GeneratedReport,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_report(report: GeneratedReport) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&report.bytes)?;
        Ok(Self { report, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Every shown string, grouped by page in page order.
    pub fn page_texts(&self) -> Vec<Vec<String>> {
        pdf_assertions::page_texts(&self.doc)
    }

    pub fn all_texts(&self) -> Vec<String> {
        self.page_texts().into_iter().flatten().collect()
    }

    /// Number of shown strings exactly equal to `text`.
    pub fn count_text(&self, text: &str) -> usize {
        self.all_texts().iter().filter(|t| t.as_str() == text).count()
    }

    /// Save PDF to a file for manual debugging
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.report.bytes)
    }
}

/// Generates a report from JSON request and config values.
pub fn generate(
    request: &Value,
    config: Value,
    strategy: SectionRenderingStrategy,
    resources: InMemoryResourceProvider,
) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    init_logging();
    let report = generate_report(request, config, strategy, resources)?;
    GeneratedPdf::from_report(report)
}

pub fn generate_report(
    request: &Value,
    config: Value,
    strategy: SectionRenderingStrategy,
    resources: InMemoryResourceProvider,
) -> Result<GeneratedReport, ReportError> {
    let request = ReportRequest::from_json_str(&request.to_string())?;
    ReportBuilder::new()
        .with_config_json(&config.to_string())?
        .with_strategy(strategy)
        .with_resource_provider(Arc::new(resources))
        .build()?
        .generate(&request)
}

pub fn generate_narrative(request: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate(
        request,
        serde_json::json!({}),
        SectionRenderingStrategy::Narrative,
        InMemoryResourceProvider::new(),
    )
}

pub fn generate_tabular(request: &Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    generate(
        request,
        serde_json::json!({}),
        SectionRenderingStrategy::Tabular,
        InMemoryResourceProvider::new(),
    )
}
