//! Building blocks shared by the card-style renderers.

use crate::context::{BlockKind, ReportContext};
use crate::model::{dates, RecordItem};
use crate::status::{humanize_status, status_color};
use crate::theme;
use condo_layout::{line_height, truncate_to_width, wrap_text};
use condo_render_lopdf::{PageCanvas, TextAlign, TextStyle};
use condo_types::{Color, Rect};

pub(super) const CARD_PADDING: f32 = 8.0;
const CARD_HEADER_HEIGHT: f32 = 22.0;
const LABEL_COLUMN: f32 = 92.0;
const BADGE_HEIGHT: f32 = 14.0;

/// Draws a status pill whose right edge is at `right`. Returns its width.
pub(super) fn status_badge(canvas: &mut PageCanvas, right: f32, top: f32, status: &str) -> f32 {
    let label = humanize_status(status);
    if label.is_empty() {
        return 0.0;
    }
    let style = TextStyle::bold(7.0).with_color(Color::WHITE);
    let width = style.measure(&label) + 12.0;
    let rect = Rect::new(right - width, top, width, BADGE_HEIGHT);
    canvas.fill_rect(rect, status_color(status));
    canvas.text_aligned(rect.x, rect.width, top + 10.0, &label, style, TextAlign::Center);
    width
}

/// Tinted header strip of a record card: title on the left, status on the right.
pub(super) fn card_header(ctx: &mut ReportContext<'_>, accent: Color, title: &str, status: Option<&str>) {
    // Keep the header with at least its first field row.
    ctx.ensure_space(CARD_HEADER_HEIGHT + 2.0 * line_height(9.0));
    let (left, width) = (ctx.left(), ctx.width());
    let y = ctx.place(BlockKind::CardHeader, CARD_HEADER_HEIGHT);
    let canvas = ctx.canvas();
    canvas.fill_rect(Rect::new(left, y, width, CARD_HEADER_HEIGHT), accent.lighten(0.85));
    canvas.fill_rect(Rect::new(left, y, 4.0, CARD_HEADER_HEIGHT), accent);

    let badge_width = match status {
        Some(s) => status_badge(canvas, left + width - 6.0, y + 4.0, s),
        None => 0.0,
    };
    let style = theme::strong().with_color(theme::TEXT);
    let title_space = width - 2.0 * CARD_PADDING - badge_width - 8.0;
    let title = truncate_to_width(title, style.face, 10.0, title_space);
    canvas.text(left + CARD_PADDING + 4.0, y + 15.0, &title, TextStyle { size: 10.0, ..style });
    ctx.gap(4.0);
}

/// `label: value` rows with the value wrapped in its column.
pub(super) fn field_rows(ctx: &mut ReportContext<'_>, fields: &[(&str, String)]) {
    let label_style = theme::label();
    let value_style = theme::body();
    let lh = line_height(value_style.size);
    for (label, value) in fields {
        let x = ctx.left() + CARD_PADDING;
        let value_x = x + LABEL_COLUMN;
        let value_width = ctx.width() - 2.0 * CARD_PADDING - LABEL_COLUMN;
        let lines = wrap_text(value, value_style.face, value_style.size, value_width);
        let height = lines.len().max(1) as f32 * lh + 2.0;

        let y = ctx.place(BlockKind::FieldRow, height);
        ctx.text_line(x, y, &format!("{}:", label), label_style);
        for (i, line) in lines.iter().enumerate() {
            ctx.text_line(value_x, y + i as f32 * lh, line, value_style);
        }
    }
}

/// Word-wrapped text, one logged block per line so long text can span pages.
pub(super) fn paragraph(ctx: &mut ReportContext<'_>, text: &str, style: TextStyle, indent: f32) {
    let x = ctx.left() + indent;
    let width = ctx.width() - indent - CARD_PADDING;
    let lh = line_height(style.size);
    for line in wrap_text(text, style.face, style.size, width) {
        let y = ctx.place(BlockKind::TextLine, lh);
        ctx.text_line(x, y, &line, style);
    }
}

/// Small bold caption above a sub-block of a card.
pub(super) fn sub_heading(ctx: &mut ReportContext<'_>, text: &str) {
    // Keep the caption with the first line of what follows.
    sub_heading_with(ctx, text, 16.0);
}

/// A sub heading that moves to the next page unless `following` points of
/// content also fit below it.
pub(super) fn sub_heading_with(ctx: &mut ReportContext<'_>, text: &str, following: f32) {
    ctx.gap(4.0);
    let style = theme::label().with_color(theme::TEXT);
    let lh = line_height(style.size) + 2.0;
    ctx.ensure_space(lh + following);
    let y = ctx.place(BlockKind::TextLine, lh);
    let x = ctx.left() + CARD_PADDING;
    ctx.text_line(x, y, text, style);
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Label/value list shown on every record card. Missing fields are skipped.
pub(super) fn card_fields(item: &RecordItem) -> Vec<(&'static str, String)> {
    let unit = match (non_blank(&item.unit), non_blank(&item.block)) {
        (Some(unit), Some(block)) => Some(format!("{} - Bloco {}", unit, block)),
        (Some(unit), None) => Some(unit),
        (None, Some(block)) => Some(format!("Bloco {}", block)),
        (None, None) => None,
    };
    [
        ("Protocolo", non_blank(&item.protocol)),
        ("Prioridade", non_blank(&item.priority).map(|p| humanize_status(&p))),
        ("Responsável", non_blank(&item.responsible)),
        ("Local", non_blank(&item.location)),
        ("Categoria", non_blank(&item.category)),
        ("Autor", non_blank(&item.author)),
        ("Unidade", unit),
        ("Criado em", item.created_at.as_ref().map(dates::format_auto)),
        ("Atualizado em", item.updated_at.as_ref().map(dates::format_auto)),
        ("Prazo", item.due_date.as_ref().map(dates::format_date)),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v)))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dates::parse_flexible;

    #[test]
    fn card_fields_skip_missing_values() {
        let item = RecordItem {
            protocol: Some("MAN-20240315-0001".into()),
            priority: Some("alta".into()),
            responsible: Some("  ".into()),
            unit: Some("101".into()),
            block: Some("B".into()),
            created_at: parse_flexible("2024-03-10T14:05:00"),
            due_date: parse_flexible("2024-03-20"),
            ..Default::default()
        };
        let fields = card_fields(&item);
        let labels: Vec<_> = fields.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["Protocolo", "Prioridade", "Unidade", "Criado em", "Prazo"]);
        assert_eq!(fields[1].1, "Alta");
        assert_eq!(fields[2].1, "101 - Bloco B");
        assert_eq!(fields[3].1, "10/03/2024 14:05");
        assert_eq!(fields[4].1, "20/03/2024");
    }
}
