use super::before_after::before_after_block;
use super::blocks::{card_fields, card_header, field_rows, paragraph, sub_heading, CARD_PADDING};
use super::media::{gallery_block, map_block};
use super::SectionRenderer;
use crate::context::{BlockKind, ReportContext};
use crate::error::ReportError;
use crate::model::{dates, Category, RecordItem};
use crate::status::{humanize_status, status_color, GREEN, NEUTRAL_GRAY, RED};
use crate::theme;
use condo_layout::{line_height, wrap_text};
use condo_render_lopdf::TextAlign;

/// Narrative card per record.
///
/// Header and fields always; description, checklist, before/after photos,
/// map, gallery and timeline only when the record carries them.
#[derive(Debug, Default)]
pub struct CardRenderer {
    before_after: bool,
}

impl CardRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_before_after() -> Self {
        Self { before_after: true }
    }
}

impl SectionRenderer for CardRenderer {
    fn render_records(
        &self,
        ctx: &mut ReportContext<'_>,
        category: Category,
        items: &[RecordItem],
    ) -> Result<(), ReportError> {
        for item in items {
            card_header(ctx, category.color(), item.display_title(), item.status.as_deref());
            field_rows(ctx, &card_fields(item));

            if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
                sub_heading(ctx, "Descrição");
                paragraph(ctx, description, theme::body(), CARD_PADDING);
            }
            if !item.checklist_items.is_empty() {
                checklist_block(ctx, item);
            }
            if self.before_after {
                before_after_block(ctx, item);
            }
            map_block(ctx, item);
            gallery_block(ctx, item);
            timeline_block(ctx, item);
            ctx.gap(theme::SECTION_GAP);
        }
        Ok(())
    }
}

/// One dot line per checklist item: green when done, red otherwise.
fn checklist_block(ctx: &mut ReportContext<'_>, item: &RecordItem) {
    let (done, total) = item.checklist_progress();
    sub_heading(ctx, &format!("Itens verificados ({}/{})", done, total));

    let style = theme::body();
    let lh = line_height(style.size);
    let text_x = ctx.left() + CARD_PADDING + 14.0;
    let text_width = ctx.width() - 2.0 * CARD_PADDING - 14.0;
    for entry in &item.checklist_items {
        let lines = wrap_text(&entry.label, style.face, style.size, text_width);
        let height = lines.len().max(1) as f32 * lh + 2.0;
        let y = ctx.place(BlockKind::ChecklistItem, height);
        let color = if entry.completed { GREEN } else { RED };
        let dot_x = ctx.left() + CARD_PADDING + 4.0;
        ctx.canvas().fill_circle(dot_x, y + lh / 2.0, 2.5, color);
        for (i, line) in lines.iter().enumerate() {
            ctx.text_line(text_x, y + i as f32 * lh, line, style);
        }
    }
}

/// The most recent status changes, newest first.
fn timeline_block(ctx: &mut ReportContext<'_>, item: &RecordItem) {
    let entries = item.recent_timeline();
    if entries.is_empty() {
        return;
    }
    sub_heading(ctx, "Histórico");

    let head = theme::strong();
    let body = theme::body();
    let small = theme::small();
    let (head_lh, body_lh) = (line_height(head.size), line_height(body.size));
    let left = ctx.left() + CARD_PADDING;
    let text_x = left + 14.0;
    let text_width = ctx.width() - 2.0 * CARD_PADDING - 14.0;

    for entry in entries {
        let description = entry.description.as_deref().unwrap_or("");
        let lines = wrap_text(description, body.face, body.size, text_width);
        let height = head_lh + lines.len() as f32 * body_lh + 4.0;
        let y = ctx.place(BlockKind::TimelineEntry, height);

        let status = entry.status.as_deref().unwrap_or("");
        let dot = if status.is_empty() { NEUTRAL_GRAY } else { status_color(status) };
        let label = match humanize_status(status) {
            s if s.is_empty() => "Atualização".to_string(),
            s => s,
        };
        ctx.canvas().fill_circle(left + 4.0, y + head_lh / 2.0, 3.0, dot);
        ctx.text_line(text_x, y, &label, head);
        if let Some(date) = entry.date.as_ref() {
            let stamp = dates::format_auto(date);
            let baseline = y + theme::baseline(small.size);
            ctx.canvas()
                .text_aligned(text_x, text_width, baseline, &stamp, small, TextAlign::Right);
        }
        for (i, line) in lines.iter().enumerate() {
            ctx.text_line(text_x, y + head_lh + i as f32 * body_lh, line, body);
        }
    }
}
