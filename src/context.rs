//! Page flow control.
//!
//! [`ReportContext`] is the explicit state threaded through the composer and
//! every section renderer: the vertical cursor, the page being drawn, the
//! finished pages and the block log. Before a block is drawn its height is
//! checked against the remaining space; when it does not fit, the current
//! page gets its footer and a fresh page is opened.

use crate::config::ReportConfig;
use crate::error::FetchError;
use crate::theme;
use condo_layout::{LayoutCursor, PageGeometry};
use condo_render_lopdf::{ImageData, PageCanvas, TextAlign, TextStyle};
use condo_traits::ResourceProvider;
use condo_types::ResourceUri;
use serde::Serialize;
use std::sync::Arc;

/// What a logged block was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BlockKind {
    Cover,
    TitleBar,
    StatCards,
    ChartBar,
    CardHeader,
    FieldRow,
    TextLine,
    Map,
    Gallery,
    TimelineEntry,
    ChecklistItem,
    BeforeAfter,
    VoteOption,
    TableHeader,
    TableRow,
    Caption,
}

/// Where one block landed. `page` is 1-based, `y` is measured from the top.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedBlock {
    pub page: usize,
    pub y: f32,
    pub height: f32,
    pub kind: BlockKind,
    /// The block is taller than the space a fresh page offers.
    pub overflow: bool,
}

const EPSILON: f32 = 0.01;

pub struct ReportContext<'a> {
    config: &'a ReportConfig,
    resources: &'a dyn ResourceProvider,
    footer_line: String,
    cursor: LayoutCursor,
    current: PageCanvas,
    footer_stamped: bool,
    finished: Vec<PageCanvas>,
    blocks: Vec<PlacedBlock>,
}

impl<'a> ReportContext<'a> {
    /// Opens the first page. `footer_line` is the left-hand footer text.
    pub fn new(
        config: &'a ReportConfig,
        resources: &'a dyn ResourceProvider,
        footer_line: String,
    ) -> Self {
        let geometry = config.layout.geometry();
        Self {
            config,
            resources,
            footer_line,
            cursor: LayoutCursor::new(geometry),
            current: PageCanvas::new(geometry.width, geometry.height),
            footer_stamped: false,
            finished: Vec::new(),
            blocks: Vec::new(),
        }
    }

    pub fn config(&self) -> &'a ReportConfig {
        self.config
    }

    pub fn geometry(&self) -> PageGeometry {
        self.cursor.geometry
    }

    pub fn left(&self) -> f32 {
        self.cursor.geometry.content_left()
    }

    pub fn width(&self) -> f32 {
        self.cursor.geometry.content_width()
    }

    pub fn y(&self) -> f32 {
        self.cursor.y
    }

    pub fn remaining(&self) -> f32 {
        self.cursor.remaining()
    }

    /// 1-based number of the page being drawn.
    pub fn page_number(&self) -> usize {
        self.cursor.page_index + 1
    }

    pub fn blocks(&self) -> &[PlacedBlock] {
        &self.blocks
    }

    pub fn canvas(&mut self) -> &mut PageCanvas {
        &mut self.current
    }

    /// Breaks the page unless `required` fits below the cursor.
    ///
    /// Returns whether a break happened. A block that does not fit even on a
    /// fresh page is left where it is; breaking would not help.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.cursor.fits(required) || self.cursor.is_at_top() {
            return false;
        }
        self.break_page();
        true
    }

    /// Reserves `height` for a block, breaking the page first when needed.
    ///
    /// Returns the top y of the reserved area; the cursor is already past it.
    pub fn place(&mut self, kind: BlockKind, height: f32) -> f32 {
        self.ensure_space(height);
        self.place_here(kind, height)
    }

    /// Reserves `height` at the cursor without a space check.
    ///
    /// For callers that paginate themselves, such as table rows.
    pub fn place_here(&mut self, kind: BlockKind, height: f32) -> f32 {
        let y = self.cursor.y;
        let limit = self.cursor.geometry.content_bottom();
        let overflow = y + height > limit + EPSILON;
        if overflow {
            log::debug!(
                "{:?} block of {:.1}pt overflows page {}",
                kind,
                height,
                self.page_number()
            );
        }
        self.blocks.push(PlacedBlock {
            page: self.page_number(),
            y,
            height,
            kind,
            overflow,
        });
        self.cursor.advance(height);
        y
    }

    /// Vertical whitespace. Never pushes the cursor past the bottom margin.
    pub fn gap(&mut self, height: f32) {
        let limit = self.cursor.geometry.content_bottom();
        self.cursor.y = (self.cursor.y + height).min(limit.max(self.cursor.y));
    }

    /// Stamps the footer on the current page and opens the next one.
    pub fn break_page(&mut self) {
        self.stamp_footer();
        let geometry = self.cursor.geometry;
        let done = std::mem::replace(
            &mut self.current,
            PageCanvas::new(geometry.width, geometry.height),
        );
        self.finished.push(done);
        self.footer_stamped = false;
        self.cursor.next_page();
        log::debug!("Opened page {}", self.page_number());
    }

    fn stamp_footer(&mut self) {
        if self.footer_stamped {
            return;
        }
        let geometry = self.cursor.geometry;
        let bottom = geometry.content_bottom();
        let rule_y = bottom + geometry.margin * 0.25;
        let baseline = bottom + geometry.margin * 0.6;
        let style = theme::small();
        let page_label = format!("Página {}", self.page_number());

        let (left, width) = (geometry.content_left(), geometry.content_width());
        let page_label_width = style.measure(&page_label);
        let footer_text = condo_layout::truncate_to_width(
            &self.footer_line,
            style.face,
            style.size,
            (width - page_label_width - 12.0).max(0.0),
        );

        let canvas = &mut self.current;
        canvas.line((left, rule_y), (left + width, rule_y), theme::RULE, 0.5);
        canvas.text(left, baseline, &footer_text, style);
        canvas.text_aligned(left, width, baseline, &page_label, style, TextAlign::Right);
        self.footer_stamped = true;
    }

    /// Loads and decodes one image through the resource provider.
    pub fn fetch_image(&self, uri: &str) -> Result<Arc<ImageData>, FetchError> {
        let uri = ResourceUri::new(uri.trim());
        if uri.is_blank() {
            return Err(FetchError::EmptyUri);
        }
        let bytes = self.resources.load(&uri)?;
        Ok(Arc::new(ImageData::decode(&bytes)?))
    }

    /// Like [`fetch_image`](Self::fetch_image) but logs and drops failures.
    pub fn load_image(&self, uri: &str, purpose: &str) -> Option<Arc<ImageData>> {
        match self.fetch_image(uri) {
            Ok(image) => Some(image),
            Err(e) => {
                log::warn!("Skipping {} image '{}': {}", purpose, uri, e);
                None
            }
        }
    }

    /// Draws one line of text whose line box starts at `top`.
    pub fn text_line(&mut self, x: f32, top: f32, text: &str, style: TextStyle) {
        self.current
            .text(x, top + theme::baseline(style.size), text, style);
    }

    /// Stamps the last footer and hands back the pages and the block log.
    pub fn finish(mut self) -> (Vec<PageCanvas>, Vec<PlacedBlock>) {
        self.stamp_footer();
        let mut pages = self.finished;
        pages.push(self.current);
        (pages, self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutSettings;
    use condo_layout::PageSize;
    use condo_traits::InMemoryResourceProvider;

    fn small_page_config() -> ReportConfig {
        ReportConfig {
            layout: LayoutSettings {
                page_size: PageSize::Custom {
                    width: 300.0,
                    height: 300.0,
                },
                margin: 50.0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn breaks_before_a_block_that_does_not_fit() {
        let config = small_page_config();
        let resources = InMemoryResourceProvider::new();
        let mut ctx = ReportContext::new(&config, &resources, "Rodapé".into());

        assert_eq!(ctx.place(BlockKind::FieldRow, 150.0), 50.0);
        assert_eq!(ctx.place(BlockKind::FieldRow, 50.0), 200.0);
        assert_eq!(ctx.page_number(), 1);

        // Page 1 is full; the next block opens page 2.
        assert_eq!(ctx.place(BlockKind::FieldRow, 10.0), 50.0);
        assert_eq!(ctx.page_number(), 2);

        let (pages, blocks) = ctx.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(blocks.iter().map(|b| b.page).collect::<Vec<_>>(), vec![1, 1, 2]);
        assert!(blocks.iter().all(|b| !b.overflow));
    }

    #[test]
    fn oversized_block_at_top_is_flagged_not_moved() {
        let config = small_page_config();
        let resources = InMemoryResourceProvider::new();
        let mut ctx = ReportContext::new(&config, &resources, String::new());

        ctx.place(BlockKind::TableRow, 500.0);
        assert_eq!(ctx.page_number(), 1);
        let (_, blocks) = ctx.finish();
        assert!(blocks[0].overflow);
    }

    #[test]
    fn gap_never_crosses_the_bottom_margin() {
        let config = small_page_config();
        let resources = InMemoryResourceProvider::new();
        let mut ctx = ReportContext::new(&config, &resources, String::new());
        ctx.gap(1000.0);
        assert_eq!(ctx.y(), 250.0);
        assert_eq!(ctx.page_number(), 1);
    }

    #[test]
    fn missing_images_are_errors_not_panics() {
        let config = ReportConfig::default();
        let resources = InMemoryResourceProvider::new()
            .with("broken.png", b"not a png".to_vec())
            .unwrap();
        let ctx = ReportContext::new(&config, &resources, String::new());

        assert!(matches!(ctx.fetch_image(" "), Err(FetchError::EmptyUri)));
        assert!(matches!(ctx.fetch_image("nope.png"), Err(FetchError::Resource(_))));
        assert!(matches!(ctx.fetch_image("broken.png"), Err(FetchError::Decode(_))));
        assert!(ctx.load_image("nope.png", "gallery").is_none());
    }
}
