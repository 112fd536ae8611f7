//! Grid table primitive with row-level pagination.
//!
//! Rows are never split. The header row is drawn again at the top of every
//! page the table continues on, and a row taller than a whole page is drawn
//! alone and logged as an overflow.

use crate::context::{BlockKind, ReportContext};
use crate::error::ReportError;
use crate::theme;
use condo_layout::{
    line_height, measure_row, paginate_rows, resolve_column_widths, CellStyle, ColumnWidth,
    FontFace, MeasuredRow,
};
use condo_render_lopdf::TextStyle;
use condo_types::{Color, Rect};

const CELL_PADDING: f32 = 4.0;
const HEADER_SIZE: f32 = 8.0;
const BODY_SIZE: f32 = 8.0;

/// One body row. `link` makes the first cell clickable.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub link: Option<String>,
}

pub struct Table<'a> {
    pub headers: Vec<&'a str>,
    pub widths: Vec<ColumnWidth>,
    pub accent: Color,
}

impl Table<'_> {
    pub fn draw(&self, ctx: &mut ReportContext<'_>, rows: &[TableRow]) -> Result<(), ReportError> {
        let widths = resolve_column_widths(&self.widths, ctx.width())?;
        let header_style = CellStyle::new(FontFace::Bold, HEADER_SIZE, CELL_PADDING);
        let body_style = CellStyle::new(FontFace::Regular, BODY_SIZE, CELL_PADDING);

        let header = measure_row(&self.headers, &widths, header_style);
        let measured: Vec<MeasuredRow> = rows
            .iter()
            .map(|row| measure_row(&row.cells, &widths, body_style))
            .collect();
        let heights: Vec<f32> = measured.iter().map(|r| r.height).collect();

        let geometry = ctx.geometry();
        let slices = paginate_rows(
            ctx.remaining(),
            geometry.content_height(),
            header.height,
            &heights,
        );

        let mut page_offset = 0;
        for slice in slices {
            while page_offset < slice.page_offset {
                ctx.break_page();
                page_offset += 1;
            }
            self.draw_header(ctx, &header, &widths);
            for index in slice.rows {
                let row = &rows[index];
                self.draw_body_row(ctx, &measured[index], &widths, index, row.link.as_deref());
            }
        }
        Ok(())
    }

    fn draw_header(&self, ctx: &mut ReportContext<'_>, header: &MeasuredRow, widths: &[f32]) {
        let left = ctx.left();
        let total: f32 = widths.iter().sum();
        let y = ctx.place_here(BlockKind::TableHeader, header.height);
        let canvas = ctx.canvas();
        canvas.fill_rect(Rect::new(left, y, total, header.height), self.accent);
        let style = TextStyle::bold(HEADER_SIZE).with_color(Color::WHITE);
        draw_cells(canvas, left, y, widths, &header.cells, |_| style);
    }

    fn draw_body_row(
        &self,
        ctx: &mut ReportContext<'_>,
        row: &MeasuredRow,
        widths: &[f32],
        index: usize,
        link: Option<&str>,
    ) {
        let left = ctx.left();
        let total: f32 = widths.iter().sum();
        let y = ctx.place_here(BlockKind::TableRow, row.height);
        let canvas = ctx.canvas();
        if index % 2 == 1 {
            canvas.fill_rect(Rect::new(left, y, total, row.height), theme::PANEL);
        }
        canvas.line(
            (left, y + row.height),
            (left + total, y + row.height),
            theme::RULE,
            0.5,
        );

        let body = TextStyle::regular(BODY_SIZE).with_color(theme::TEXT);
        let linked = TextStyle::regular(BODY_SIZE).with_color(theme::LINK);
        let has_link = link.is_some();
        draw_cells(canvas, left, y, widths, &row.cells, |col| {
            if col == 0 && has_link { linked } else { body }
        });

        if let (Some(uri), Some(&first)) = (link, widths.first()) {
            canvas.link(Rect::new(left, y, first, row.height), uri);
        }
    }
}

fn draw_cells(
    canvas: &mut condo_render_lopdf::PageCanvas,
    left: f32,
    top: f32,
    widths: &[f32],
    cells: &[Vec<String>],
    style_for: impl Fn(usize) -> TextStyle,
) {
    let mut x = left;
    for (col, (lines, width)) in cells.iter().zip(widths).enumerate() {
        let style = style_for(col);
        let lh = line_height(style.size);
        for (i, line) in lines.iter().enumerate() {
            let baseline = top + CELL_PADDING + i as f32 * lh + theme::baseline(style.size);
            canvas.text(x + CELL_PADDING, baseline, line, style);
        }
        x += width;
    }
}
