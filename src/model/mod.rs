pub mod category;
pub mod dates;
pub mod record;
pub mod request;

pub use category::{Category, SectionKind};
pub use record::{ChecklistItem, RecordItem, TimelineEntry, VoteOption, TIMELINE_LIMIT};
pub use request::{Organization, PeriodRange, ReportRequest};
