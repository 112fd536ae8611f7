use super::blocks::{sub_heading, sub_heading_with, CARD_PADDING};
use crate::context::{BlockKind, ReportContext};
use crate::model::RecordItem;
use crate::theme;
use condo_layout::line_height;
use condo_render_lopdf::{ImageData, PageCanvas};
use condo_types::{Rect, Size};
use itertools::Itertools;
use std::sync::Arc;

pub const GALLERY_LIMIT: usize = 6;
const GALLERY_COLUMNS: usize = 3;
const GALLERY_GAP: f32 = 8.0;
pub const MAP_WIDTH: f32 = 260.0;
pub const MAP_HEIGHT: f32 = 130.0;

/// Draws `image` as large as fits in `frame`, centered, keeping its aspect ratio.
pub fn draw_fitted(canvas: &mut PageCanvas, frame: Rect, image: Arc<ImageData>) {
    let size = Size::new(image.width as f32, image.height as f32)
        .fit_within(Size::new(frame.width, frame.height));
    let rect = Rect::new(
        frame.x + (frame.width - size.width) / 2.0,
        frame.y + (frame.height - size.height) / 2.0,
        size.width,
        size.height,
    );
    canvas.draw_image(rect, image);
}

/// Coordinates line plus a static map snapshot when one can be fetched.
pub(super) fn map_block(ctx: &mut ReportContext<'_>, item: &RecordItem) {
    let Some((lat, lng)) = item.coordinates() else {
        return;
    };
    let heading = format!("Localização: {:.5}, {:.5}", lat, lng);
    let url = ctx.config().map_url(lat, lng);
    let Some(map) = ctx.load_image(&url, "map") else {
        sub_heading(ctx, &heading);
        return;
    };
    let block_height = MAP_HEIGHT + 4.0;
    sub_heading_with(ctx, &heading, block_height);
    let x = ctx.left() + CARD_PADDING;
    let y = ctx.place(BlockKind::Map, block_height);
    let frame = Rect::new(x, y, MAP_WIDTH, MAP_HEIGHT);
    let canvas = ctx.canvas();
    canvas.draw_image(frame, map);
    canvas.stroke_rect(frame, theme::RULE, 0.5);
}

/// Up to [`GALLERY_LIMIT`] thumbnails in rows. Images that fail to load are left out.
pub(super) fn gallery_block(ctx: &mut ReportContext<'_>, item: &RecordItem) {
    if item.images.is_empty() {
        return;
    }
    // Fetched one at a time, in draw order.
    let loaded: Vec<Arc<ImageData>> = item
        .images
        .iter()
        .take(GALLERY_LIMIT)
        .filter_map(|uri| ctx.load_image(uri, "gallery"))
        .collect();
    if loaded.is_empty() {
        return;
    }
    if item.images.len() > GALLERY_LIMIT {
        log::debug!(
            "Gallery capped at {} of {} images",
            GALLERY_LIMIT,
            item.images.len()
        );
    }

    let inner = ctx.width() - 2.0 * CARD_PADDING;
    let thumb_w = (inner - GALLERY_GAP * (GALLERY_COLUMNS - 1) as f32) / GALLERY_COLUMNS as f32;
    let thumb_h = thumb_w * 0.75;
    sub_heading_with(ctx, &format!("Fotos ({})", loaded.len()), thumb_h + GALLERY_GAP);

    for row in &loaded.into_iter().chunks(GALLERY_COLUMNS) {
        let x0 = ctx.left() + CARD_PADDING;
        let y = ctx.place(BlockKind::Gallery, thumb_h + GALLERY_GAP);
        let canvas = ctx.canvas();
        for (col, image) in row.enumerate() {
            let frame = Rect::new(x0 + col as f32 * (thumb_w + GALLERY_GAP), y, thumb_w, thumb_h);
            canvas.fill_rect(frame, theme::PANEL);
            draw_fitted(canvas, frame, image);
        }
    }
}

/// Caption line height used under media blocks.
pub(super) fn caption_height() -> f32 {
    line_height(theme::small().size)
}
