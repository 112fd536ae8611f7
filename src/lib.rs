//! PDF reports for condominium management dashboards.
//!
//! A [`ReportRequest`] (organization, period, per-category record lists and
//! totals) is turned into a paginated PDF with a cover, an executive summary
//! and one section per non-empty category.
//!
//! ```ignore
//! let generator = ReportBuilder::new()
//!     .with_config_json(r#"{ "reportName": "Relatório Mensal" }"#)?
//!     .with_resource_dir("media")
//!     .build()?;
//! let report = generator.generate(&ReportRequest::from_json_str(&json)?)?;
//! report.save_to("out")?;
//! ```

pub mod composer;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod model;
pub mod quick_task;
pub mod sections;
pub mod status;
pub mod theme;

pub use composer::{report_filename, DocumentComposer, SectionRenderingStrategy};
pub use config::{LayoutSettings, ReportConfig};
pub use context::{BlockKind, PlacedBlock, ReportContext};
pub use error::{FetchError, ReportError};
pub use generator::{GeneratedReport, ReportBuilder, ReportGenerator};
pub use model::{Category, Organization, PeriodRange, RecordItem, ReportRequest};
pub use quick_task::{next_protocol, QuickTask, QuickTaskError, QuickTaskKind, QuickTaskStatus};
pub use sections::{SectionRegistry, SectionRenderer};

pub use condo_layout::PageSize;
pub use condo_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
pub use condo_traits::{ResourceError, ResourceProvider};
