//! Column and row sizing for simple grid tables.
//!
//! Columns are sized by relative weights over the available width; every
//! cell is wrapped to its column and a row is as tall as its tallest cell.

use crate::fonts::{line_height, FontFace};
use crate::text::wrap_text;
use crate::LayoutError;

/// A column width expressed either in points or as a share of leftover space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    Fixed(f32),
    Weight(f32),
}

/// Resolves column widths so they sum to `available_width`.
///
/// Fixed columns are honored first; the remainder is split between weighted
/// columns proportionally to their weights.
pub fn resolve_column_widths(
    columns: &[ColumnWidth],
    available_width: f32,
) -> Result<Vec<f32>, LayoutError> {
    if columns.is_empty() {
        return Err(LayoutError::Generic("table has no columns".into()));
    }

    let fixed: f32 = columns
        .iter()
        .filter_map(|c| match c {
            ColumnWidth::Fixed(w) => Some(*w),
            ColumnWidth::Weight(_) => None,
        })
        .sum();
    if fixed > available_width + 0.01 {
        return Err(LayoutError::ElementTooLarge(fixed, available_width));
    }

    let total_weight: f32 = columns
        .iter()
        .filter_map(|c| match c {
            ColumnWidth::Weight(w) => Some(w.max(0.0)),
            ColumnWidth::Fixed(_) => None,
        })
        .sum();
    let leftover = (available_width - fixed).max(0.0);

    Ok(columns
        .iter()
        .map(|c| match *c {
            ColumnWidth::Fixed(w) => w,
            ColumnWidth::Weight(w) if total_weight > 0.0 => leftover * w.max(0.0) / total_weight,
            ColumnWidth::Weight(_) => 0.0,
        })
        .collect())
}

/// Text styling and spacing used when measuring table cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub face: FontFace,
    pub size: f32,
    pub padding: f32,
}

impl CellStyle {
    pub fn new(face: FontFace, size: f32, padding: f32) -> Self {
        Self {
            face,
            size,
            padding,
        }
    }
}

/// One row of a table after its cells were wrapped to their columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRow {
    pub cells: Vec<Vec<String>>,
    pub height: f32,
}

/// Wraps each cell of `row` into its column and computes the row height.
///
/// Missing cells are treated as empty. Every row is at least one line tall.
pub fn measure_row<S: AsRef<str>>(row: &[S], widths: &[f32], style: CellStyle) -> MeasuredRow {
    let inner = |w: f32| (w - 2.0 * style.padding).max(1.0);
    let cells: Vec<Vec<String>> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            row.get(i)
                .map(|text| wrap_text(text.as_ref(), style.face, style.size, inner(w)))
                .unwrap_or_default()
        })
        .collect();

    let max_lines = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
    MeasuredRow {
        cells,
        height: max_lines as f32 * line_height(style.size) + 2.0 * style.padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_columns_fill_width() {
        let widths = resolve_column_widths(
            &[ColumnWidth::Weight(2.0), ColumnWidth::Weight(1.0), ColumnWidth::Weight(1.0)],
            400.0,
        )
        .unwrap();
        assert_eq!(widths, vec![200.0, 100.0, 100.0]);
    }

    #[test]
    fn fixed_columns_take_priority() {
        let widths =
            resolve_column_widths(&[ColumnWidth::Fixed(100.0), ColumnWidth::Weight(1.0)], 300.0)
                .unwrap();
        assert_eq!(widths, vec![100.0, 200.0]);
    }

    #[test]
    fn rejects_impossible_tables() {
        assert!(resolve_column_widths(&[], 100.0).is_err());
        assert!(matches!(
            resolve_column_widths(&[ColumnWidth::Fixed(150.0)], 100.0),
            Err(LayoutError::ElementTooLarge(..))
        ));
    }

    #[test]
    fn row_height_follows_tallest_cell() {
        let style = CellStyle::new(FontFace::Regular, 8.0, 4.0);
        let short = measure_row(&["A", "B"], &[100.0, 100.0], style);
        assert!((short.height - 18.0).abs() < 0.001);

        let long_text = "texto longo que precisa quebrar em varias linhas dentro da coluna";
        let tall = measure_row(&["A", long_text], &[100.0, 60.0], style);
        assert!(tall.cells[1].len() > 1);
        assert!(tall.height > short.height);
    }

    #[test]
    fn missing_cells_are_empty() {
        let style = CellStyle::new(FontFace::Bold, 9.0, 3.0);
        let row = measure_row(&["Apenas um"], &[100.0, 100.0, 100.0], style);
        assert_eq!(row.cells.len(), 3);
        assert!(row.cells[2].is_empty());
    }
}
