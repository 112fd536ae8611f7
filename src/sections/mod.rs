//! Section renderers, one per record category.
//!
//! Every category is rendered through the same [`SectionRenderer`] contract.
//! A [`SectionRegistry`] maps categories to renderers; the composer walks
//! [`Category::ORDERED`] and looks each one up.

mod before_after;
mod blocks;
mod card;
mod columns;
mod media;
mod table;
mod tabular;
mod votes;

pub use columns::{columns_for, ColumnSpec, Field};
pub use tabular::TableRenderer;
pub use votes::{bar_width, vote_bar_width, vote_percentage, VotesRenderer, MIN_BAR_WIDTH};
pub use card::CardRenderer;
pub use media::draw_fitted;

use crate::context::{BlockKind, ReportContext};
use crate::error::ReportError;
use crate::model::{Category, RecordItem, SectionKind};
use crate::theme;
use condo_render_lopdf::TextStyle;
use condo_types::{Color, Rect};
use std::collections::HashMap;

/// Space kept below a title bar so it never ends a page on its own.
const KEEP_WITH_NEXT: f32 = 72.0;

pub trait SectionRenderer: Send + Sync {
    /// Draws the records of one category below its title bar.
    fn render_records(
        &self,
        ctx: &mut ReportContext<'_>,
        category: Category,
        items: &[RecordItem],
    ) -> Result<(), ReportError>;

    /// Draws the title bar followed by the records.
    fn render(
        &self,
        ctx: &mut ReportContext<'_>,
        category: Category,
        items: &[RecordItem],
    ) -> Result<(), ReportError> {
        draw_title_bar(ctx, &category.heading(items.len()), category.color());
        self.render_records(ctx, category, items)
    }
}

/// Lookup table from category to renderer.
pub struct SectionRegistry {
    renderers: HashMap<Category, Box<dyn SectionRenderer>>,
}

impl SectionRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    /// Full profile: cards, before/after pairs and vote bars where the
    /// category calls for them, tables for the rest.
    pub fn narrative() -> Self {
        let mut registry = Self::empty();
        for category in Category::ORDERED {
            let renderer: Box<dyn SectionRenderer> = match category.kind() {
                SectionKind::Card | SectionKind::Checklist => Box::new(CardRenderer::new()),
                SectionKind::BeforeAfter => Box::new(CardRenderer::with_before_after()),
                SectionKind::Votes => Box::new(VotesRenderer),
                SectionKind::Table => Box::new(TableRenderer::new()),
            };
            registry.register(category, renderer);
        }
        registry
    }

    /// Simplified profile: every category is a linked table with a caption.
    pub fn tabular() -> Self {
        let mut registry = Self::empty();
        for category in Category::ORDERED {
            registry.register(category, Box::new(TableRenderer::with_caption()));
        }
        registry
    }

    pub fn register(&mut self, category: Category, renderer: Box<dyn SectionRenderer>) {
        self.renderers.insert(category, renderer);
    }

    pub fn get(&self, category: Category) -> Option<&dyn SectionRenderer> {
        self.renderers.get(&category).map(|r| r.as_ref())
    }
}

/// Colored full-width bar with the section heading in white.
pub fn draw_title_bar(ctx: &mut ReportContext<'_>, heading: &str, color: Color) {
    ctx.ensure_space(theme::TITLE_BAR_HEIGHT + KEEP_WITH_NEXT);
    let (left, width) = (ctx.left(), ctx.width());
    let y = ctx.place(BlockKind::TitleBar, theme::TITLE_BAR_HEIGHT);
    let style = TextStyle::bold(11.0).with_color(Color::WHITE);
    let canvas = ctx.canvas();
    canvas.fill_rect(Rect::new(left, y, width, theme::TITLE_BAR_HEIGHT), color);
    canvas.text(left + 10.0, y + 16.0, heading, style);
    ctx.gap(theme::BLOCK_GAP);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_profiles_cover_every_category() {
        for registry in [SectionRegistry::narrative(), SectionRegistry::tabular()] {
            for category in Category::ORDERED {
                assert!(registry.get(category).is_some(), "{}", category);
            }
        }
        assert!(SectionRegistry::empty().get(Category::Eventos).is_none());
    }
}
