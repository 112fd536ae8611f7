use super::blocks::{card_header, paragraph, CARD_PADDING};
use super::SectionRenderer;
use crate::context::{BlockKind, ReportContext};
use crate::error::ReportError;
use crate::model::{Category, RecordItem};
use crate::theme;
use condo_layout::{line_height, truncate_to_width};
use condo_render_lopdf::TextAlign;
use condo_types::Rect;

/// Narrowest bar drawn for an option that received any votes.
pub const MIN_BAR_WIDTH: f32 = 2.0;
const BAR_HEIGHT: f32 = 8.0;

/// Width of a bar proportional to `value / total`.
///
/// Any positive value gets at least [`MIN_BAR_WIDTH`]. A total below `value`
/// counts as `value`, so the result never exceeds `available`.
pub fn bar_width(value: f64, total: f64, available: f32) -> f32 {
    if value <= 0.0 || available <= 0.0 {
        return 0.0;
    }
    let share = (value / total.max(value)) as f32 * available;
    share.max(MIN_BAR_WIDTH).min(available)
}

pub fn vote_bar_width(votes: u64, total: u64, available: f32) -> f32 {
    bar_width(votes as f64, total as f64, available)
}

/// Share of the total as `"45,5%"`.
pub fn vote_percentage(votes: u64, total: u64) -> String {
    let total = total.max(votes);
    let pct = if total == 0 {
        0.0
    } else {
        votes as f64 * 100.0 / total as f64
    };
    format!("{:.1}%", pct).replace('.', ",")
}

/// One block per vote: header, description, then a bar per option.
#[derive(Debug, Default)]
pub struct VotesRenderer;

impl SectionRenderer for VotesRenderer {
    fn render_records(
        &self,
        ctx: &mut ReportContext<'_>,
        category: Category,
        items: &[RecordItem],
    ) -> Result<(), ReportError> {
        for item in items {
            card_header(ctx, category.color(), item.display_title(), item.status.as_deref());
            if let Some(description) = item.description.as_deref().filter(|d| !d.trim().is_empty()) {
                paragraph(ctx, description, theme::body(), CARD_PADDING);
            }

            let total = item.vote_total();
            let summary = if item.options.is_empty() {
                "Nenhuma opção registrada".to_string()
            } else {
                format!("Total de votos: {}", total)
            };
            paragraph(ctx, &summary, theme::small(), CARD_PADDING);

            for option in &item.options {
                option_row(ctx, &option.label, option.votes, total, category);
            }
            ctx.gap(theme::SECTION_GAP);
        }
        Ok(())
    }
}

fn option_row(ctx: &mut ReportContext<'_>, label: &str, votes: u64, total: u64, category: Category) {
    let style = theme::body();
    let counts_style = theme::strong();
    let lh = line_height(style.size);
    let x = ctx.left() + CARD_PADDING;
    let available = ctx.width() - 2.0 * CARD_PADDING;

    let counts = format!("{} ({})", vote_percentage(votes, total), votes);
    let label_space = available - counts_style.measure(&counts) - 8.0;
    let label = truncate_to_width(label, style.face, style.size, label_space);

    let y = ctx.place(BlockKind::VoteOption, lh + BAR_HEIGHT + 8.0);
    ctx.text_line(x, y, &label, style);
    let baseline = y + theme::baseline(counts_style.size);
    let canvas = ctx.canvas();
    canvas.text_aligned(x, available, baseline, &counts, counts_style, TextAlign::Right);

    let bar_y = y + lh + 2.0;
    canvas.fill_rect(Rect::new(x, bar_y, available, BAR_HEIGHT), theme::PANEL);
    let width = vote_bar_width(votes, total, available);
    canvas.fill_rect(Rect::new(x, bar_y, width, BAR_HEIGHT), category.color());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_width() {
        assert_eq!(vote_bar_width(5, 10, 400.0), 200.0);
        assert_eq!(vote_bar_width(10, 10, 400.0), 400.0);
    }

    #[test]
    fn tiny_share_gets_minimum_sliver() {
        assert_eq!(vote_bar_width(1, 10_000, 400.0), MIN_BAR_WIDTH);
        assert_eq!(vote_bar_width(0, 10_000, 400.0), 0.0);
    }

    #[test]
    fn zero_total_still_shows_votes() {
        assert_eq!(vote_bar_width(0, 0, 400.0), 0.0);
        assert!(vote_bar_width(3, 0, 400.0) >= MIN_BAR_WIDTH);
        assert_eq!(vote_percentage(3, 0), "100,0%");
    }

    #[test]
    fn more_votes_never_shorter() {
        let total = 1_000;
        let widths: Vec<f32> = (0..=total)
            .step_by(7)
            .map(|v| vote_bar_width(v, total, 300.0))
            .collect();
        assert!(widths.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn never_wider_than_available() {
        // Inconsistent data: more votes than the declared total.
        assert_eq!(vote_bar_width(15, 10, 100.0), 100.0);
    }

    #[test]
    fn percentage_uses_decimal_comma() {
        assert_eq!(vote_percentage(1, 3), "33,3%");
        assert_eq!(vote_percentage(0, 0), "0,0%");
        assert_eq!(vote_percentage(10, 10), "100,0%");
    }
}
