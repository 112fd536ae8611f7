use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Element has a size of {0:.2} which exceeds the available space of {1:.2}.")]
    ElementTooLarge(f32, f32),
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod algorithms;
pub mod config;
pub mod cursor;
pub mod fonts;
pub mod table;
pub mod text;

pub use self::algorithms::pagination::{check_child_fit, paginate_rows, BreakAnalysis, RowSlice};
pub use self::config::{PageGeometry, PageSize};
pub use self::cursor::LayoutCursor;
pub use self::fonts::{line_height, measure_text_width, FontFace};
pub use self::table::{measure_row, resolve_column_widths, CellStyle, ColumnWidth, MeasuredRow};
pub use self::text::{truncate_to_width, wrap_text};

// Re-export geometry types so downstream crates share one definition
pub use condo_types::{Rect, Size};
