//! Document composition: cover, executive summary, then one section per
//! non-empty category in report order.

mod cover;
mod filename;
mod summary;

pub use cover::organization_name;
pub use filename::{report_filename, slugify_report_name};
pub use summary::{collect_stats, format_stat_value, Stat, MAX_STAT_CARDS, SUMMARY_TITLE};

use crate::config::ReportConfig;
use crate::context::ReportContext;
use crate::error::ReportError;
use crate::generator::GeneratedReport;
use crate::model::{Category, ReportRequest};
use crate::sections::SectionRegistry;
use condo_render_lopdf::{DocumentInfo, PdfWriter};
use condo_traits::ResourceProvider;
use serde::{Deserialize, Serialize};

pub const PRODUCER: &str = "condo-report";

/// Which family of section renderers the composer uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionRenderingStrategy {
    /// Cards, before/after pairs, vote bars and tables.
    #[default]
    Narrative,
    /// Every category as a linked table with a caption.
    Tabular,
}

impl SectionRenderingStrategy {
    pub fn registry(self) -> SectionRegistry {
        match self {
            SectionRenderingStrategy::Narrative => SectionRegistry::narrative(),
            SectionRenderingStrategy::Tabular => SectionRegistry::tabular(),
        }
    }
}

pub struct DocumentComposer {
    config: ReportConfig,
    registry: SectionRegistry,
}

impl DocumentComposer {
    pub fn new(config: ReportConfig, strategy: SectionRenderingStrategy) -> Self {
        Self::with_registry(config, strategy.registry())
    }

    /// Composer with a caller-assembled registry. Categories without a
    /// renderer are skipped.
    pub fn with_registry(config: ReportConfig, registry: SectionRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Runs one synchronous generation pass.
    pub fn compose(
        &self,
        request: &ReportRequest,
        resources: &dyn ResourceProvider,
    ) -> Result<GeneratedReport, ReportError> {
        let organization = organization_name(&self.config, request);
        let footer = self.config.footer_line(organization);
        let mut ctx = ReportContext::new(&self.config, resources, footer);

        cover::draw_cover(&mut ctx, request, organization);
        ctx.break_page();

        if self.config.include_stats {
            summary::draw_summary(&mut ctx, request);
        }

        for key in request.unknown_section_keys() {
            log::debug!("Ignoring unknown section '{}'", key);
        }

        for category in Category::ORDERED {
            let items = request.records(category);
            if items.is_empty() {
                continue;
            }
            let Some(renderer) = self.registry.get(category) else {
                log::debug!("No renderer registered for '{}'", category);
                continue;
            };
            log::debug!(
                "Rendering {} {} record(s) from page {}",
                items.len(),
                category,
                ctx.page_number()
            );
            renderer.render(&mut ctx, category, items)?;
        }

        let (pages, blocks) = ctx.finish();
        let mut writer = PdfWriter::new();
        for page in pages {
            writer.add_page(page)?;
        }
        let page_count = writer.page_count();
        let info = DocumentInfo {
            title: self.config.report_title().to_string(),
            author: organization.to_string(),
            producer: PRODUCER.to_string(),
        };
        let bytes = writer.finish(&info)?;
        let filename = report_filename(self.config.report_title(), &request.generated_at);
        log::info!("Generated '{}' with {} page(s)", filename, page_count);

        Ok(GeneratedReport {
            filename,
            bytes,
            page_count,
            blocks,
        })
    }
}
