/// Outcome of a space check against the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

// Small epsilon to absorb floating point noise from accumulated advances.
const EPSILON: f32 = 0.01;

/// Centralized logic to check if a block fits in the remaining space.
///
/// * `cursor_y`: the current y position on the page.
/// * `required_height`: the height the block declares before drawing.
/// * `limit_y`: the lowest y the block may reach (page height minus bottom margin).
pub fn check_child_fit(cursor_y: f32, required_height: f32, limit_y: f32) -> BreakAnalysis {
    let available = (limit_y - cursor_y).max(0.0);
    BreakAnalysis {
        should_break: required_height > available + EPSILON,
        remaining_height: available,
    }
}

/// Which rows of a table land on one page.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSlice {
    /// Zero-based page offset relative to the page the table starts on.
    pub page_offset: usize,
    /// Half-open range of body row indices drawn on that page.
    pub rows: std::ops::Range<usize>,
    /// True when a single row is taller than a full page and overflows it.
    pub overflow: bool,
}

/// Row-level pagination for tables.
///
/// The header row is repeated at the top of every slice, so each slice must
/// fit `header_height` plus its rows. `first_available` is the space left on
/// the page the table starts on; `page_available` is the full content height
/// of a fresh page. A row that does not fit even a fresh page is placed alone
/// on its own page and flagged as overflow; rows are never split.
///
/// When not even the header plus the first row fits in `first_available`, the
/// first slice starts on the next page (`page_offset` 1).
pub fn paginate_rows(
    first_available: f32,
    page_available: f32,
    header_height: f32,
    row_heights: &[f32],
) -> Vec<RowSlice> {
    let mut slices = Vec::new();
    if row_heights.is_empty() {
        return slices;
    }

    let mut page_offset = 0;
    let mut available = first_available;
    if let Some(&first) = row_heights.first()
        && check_child_fit(0.0, header_height + first, first_available).should_break
        && first_available < page_available
    {
        page_offset = 1;
        available = page_available;
    }

    let mut start = 0;
    let mut used = header_height;
    for (i, &height) in row_heights.iter().enumerate() {
        if check_child_fit(used, height, available).should_break {
            if i == start {
                // Unsplittable row taller than a fresh page.
                log::debug!("Table row {} ({:.1}pt) overflows the page", i, height);
                slices.push(RowSlice {
                    page_offset,
                    rows: start..i + 1,
                    overflow: true,
                });
                start = i + 1;
                used = header_height;
            } else {
                slices.push(RowSlice {
                    page_offset,
                    rows: start..i,
                    overflow: false,
                });
                start = i;
                used = header_height + height;
                if check_child_fit(header_height, height, page_available).should_break {
                    log::debug!("Table row {} ({:.1}pt) overflows the page", i, height);
                    page_offset += 1;
                    slices.push(RowSlice {
                        page_offset,
                        rows: i..i + 1,
                        overflow: true,
                    });
                    start = i + 1;
                    used = header_height;
                }
            }
            page_offset += 1;
            available = page_available;
            continue;
        }
        used += height;
    }

    if start < row_heights.len() {
        slices.push(RowSlice {
            page_offset,
            rows: start..row_heights.len(),
            overflow: false,
        });
    }
    slices
}
