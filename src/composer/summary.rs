//! Executive summary: stat cards and the optional distribution chart.

use crate::context::{BlockKind, ReportContext};
use crate::model::{Category, ReportRequest};
use crate::sections::{bar_width, draw_title_bar};
use crate::theme;
use condo_layout::{line_height, truncate_to_width};
use condo_render_lopdf::{TextAlign, TextStyle};
use condo_types::{Color, Rect};
use itertools::Itertools;

pub const SUMMARY_TITLE: &str = "Resumo executivo";
pub const MAX_STAT_CARDS: usize = 8;
const CARDS_PER_ROW: usize = 4;
const CARD_HEIGHT: f32 = 52.0;
const CARD_GAP: f32 = 8.0;
const CHART_ROW_HEIGHT: f32 = 16.0;
const CHART_LABEL_WIDTH: f32 = 120.0;
const CHART_VALUE_WIDTH: f32 = 50.0;

/// One stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub key: String,
    pub value: f64,
}

impl Stat {
    pub fn label(&self) -> &str {
        Category::label_for_key(&self.key)
    }

    fn color(&self) -> Color {
        Category::from_key(&self.key)
            .map(Category::color)
            .unwrap_or(theme::ACCENT)
    }
}

/// Stats shown on the summary, at most [`MAX_STAT_CARDS`].
///
/// Known categories come first in report order, unknown keys after them
/// alphabetically. Without totals the record counts of non-empty sections
/// are used instead.
pub fn collect_stats(request: &ReportRequest) -> Vec<Stat> {
    if request.totals.is_empty() {
        return Category::ORDERED
            .into_iter()
            .map(|category| (category, request.records(category).len()))
            .filter(|(_, count)| *count > 0)
            .take(MAX_STAT_CARDS)
            .map(|(category, count)| Stat {
                key: category.key().to_string(),
                value: count as f64,
            })
            .collect();
    }

    let known = Category::ORDERED.into_iter().filter_map(|category| {
        request.totals.get(category.key()).map(|&value| Stat {
            key: category.key().to_string(),
            value,
        })
    });
    // BTreeMap keys are already sorted.
    let unknown = request
        .totals
        .iter()
        .filter(|(key, _)| Category::from_key(key).is_none())
        .map(|(key, &value)| Stat {
            key: key.clone(),
            value,
        });
    known.chain(unknown).take(MAX_STAT_CARDS).collect()
}

/// `1.234` for whole numbers, `12,5` otherwise.
pub fn format_stat_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        let digits = (value.abs() as u64).to_string();
        let grouped = digits
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
            .join(".");
        if value < 0.0 { format!("-{}", grouped) } else { grouped }
    } else {
        format!("{:.1}", value).replace('.', ",")
    }
}

pub fn draw_summary(ctx: &mut ReportContext<'_>, request: &ReportRequest) {
    draw_title_bar(ctx, SUMMARY_TITLE, theme::ACCENT);
    let stats = collect_stats(request);
    if stats.is_empty() {
        let style = theme::body();
        let y = ctx.place(BlockKind::TextLine, line_height(style.size));
        let x = ctx.left();
        ctx.text_line(x, y, "Nenhum registro no período.", style);
        ctx.gap(theme::SECTION_GAP);
        return;
    }

    for row in &stats.iter().chunks(CARDS_PER_ROW) {
        stat_card_row(ctx, row);
    }

    if ctx.config().include_charts {
        ctx.gap(theme::BLOCK_GAP);
        distribution_chart(ctx, &stats);
    }
    ctx.gap(theme::SECTION_GAP);
}

fn stat_card_row<'s>(ctx: &mut ReportContext<'_>, row: impl Iterator<Item = &'s Stat>) {
    let left = ctx.left();
    let card_width =
        (ctx.width() - CARD_GAP * (CARDS_PER_ROW - 1) as f32) / CARDS_PER_ROW as f32;
    let y = ctx.place(BlockKind::StatCards, CARD_HEIGHT + CARD_GAP);

    let value_style = TextStyle::bold(20.0);
    let label_style = theme::small();
    let canvas = ctx.canvas();
    for (i, stat) in row.enumerate() {
        let x = left + i as f32 * (card_width + CARD_GAP);
        let frame = Rect::new(x, y, card_width, CARD_HEIGHT);
        canvas.fill_rect(frame, theme::PANEL);
        canvas.fill_rect(Rect::new(x, y, 3.0, CARD_HEIGHT), stat.color());

        let value = format_stat_value(stat.value);
        canvas.text_aligned(
            x,
            card_width,
            y + 26.0,
            &value,
            value_style.with_color(stat.color()),
            TextAlign::Center,
        );
        let label = truncate_to_width(stat.label(), label_style.face, label_style.size, card_width - 8.0);
        canvas.text_aligned(x, card_width, y + 42.0, &label, label_style, TextAlign::Center);
    }
}

fn distribution_chart(ctx: &mut ReportContext<'_>, stats: &[Stat]) {
    let heading = theme::label();
    let y = ctx.place(BlockKind::TextLine, line_height(heading.size) + 4.0);
    let x = ctx.left();
    ctx.text_line(x, y, "Distribuição por categoria", heading);

    let total: f64 = stats.iter().map(|s| s.value.max(0.0)).sum();
    let available = ctx.width() - CHART_LABEL_WIDTH - CHART_VALUE_WIDTH;
    let style = theme::body();
    for stat in stats {
        let left = ctx.left();
        let y = ctx.place(BlockKind::ChartBar, CHART_ROW_HEIGHT);
        let label = truncate_to_width(stat.label(), style.face, style.size, CHART_LABEL_WIDTH - 6.0);
        let baseline = y + theme::baseline(style.size) + 2.0;
        let bar_x = left + CHART_LABEL_WIDTH;

        let canvas = ctx.canvas();
        canvas.text(left, baseline, &label, style);
        canvas.fill_rect(Rect::new(bar_x, y + 3.0, available, 9.0), theme::PANEL);
        let width = bar_width(stat.value, total, available);
        canvas.fill_rect(Rect::new(bar_x, y + 3.0, width, 9.0), stat.color());
        canvas.text_aligned(
            bar_x + available,
            CHART_VALUE_WIDTH,
            baseline,
            &format_stat_value(stat.value),
            theme::strong(),
            TextAlign::Right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordItem;

    fn request(totals: &[(&str, f64)], sections: &[(&str, usize)]) -> ReportRequest {
        let json = serde_json::json!({
            "periodRange": { "start": "2024-03-01", "end": "2024-03-31" },
            "generatedAt": "2024-03-15T10:30:00",
        });
        let mut request: ReportRequest = serde_json::from_value(json).unwrap();
        for (key, value) in totals {
            request.totals.insert(key.to_string(), *value);
        }
        for (key, count) in sections {
            request
                .sections
                .insert(key.to_string(), vec![RecordItem::default(); *count]);
        }
        request
    }

    #[test]
    fn known_keys_first_then_unknown_alphabetically() {
        let request = request(
            &[("zeladoria", 1.0), ("votacoes", 2.0), ("abc", 3.0), ("manutencoes", 4.0)],
            &[],
        );
        let keys: Vec<_> = collect_stats(&request).into_iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["manutencoes", "votacoes", "abc", "zeladoria"]);
    }

    #[test]
    fn capped_at_eight_cards() {
        let totals: Vec<(&str, f64)> = Category::ORDERED
            .iter()
            .map(|c| (c.key(), 1.0))
            .collect();
        let stats = collect_stats(&request(&totals, &[]));
        assert_eq!(stats.len(), MAX_STAT_CARDS);
        assert_eq!(stats[0].key, "manutencoes");
    }

    #[test]
    fn falls_back_to_section_counts() {
        let stats = collect_stats(&request(&[], &[("ocorrencias", 3), ("eventos", 0)]));
        assert_eq!(
            stats,
            vec![Stat {
                key: "ocorrencias".into(),
                value: 3.0
            }]
        );
    }

    #[test]
    fn unknown_keys_show_raw_label() {
        let stat = Stat {
            key: "zeladoria".into(),
            value: 1.0,
        };
        assert_eq!(stat.label(), "zeladoria");
    }

    #[test]
    fn stat_value_formatting() {
        assert_eq!(format_stat_value(2.0), "2");
        assert_eq!(format_stat_value(1234.0), "1.234");
        assert_eq!(format_stat_value(1_000_000.0), "1.000.000");
        assert_eq!(format_stat_value(12.5), "12,5");
        assert_eq!(format_stat_value(-3.0), "-3");
    }
}
