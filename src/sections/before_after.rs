use super::blocks::CARD_PADDING;
use super::media::{caption_height, draw_fitted};
use crate::context::{BlockKind, ReportContext};
use crate::model::RecordItem;
use crate::status::{GREEN, RED};
use crate::theme;
use condo_render_lopdf::TextStyle;
use condo_types::Rect;

const GUTTER: f32 = 12.0;
const PHOTO_HEIGHT: f32 = 140.0;

/// Two side-by-side photos under "ANTES" (red) and "DEPOIS" (green).
///
/// Each slot is half the card width minus the gutter. A photo that cannot
/// be loaded leaves its slot empty; the labels are always drawn.
pub(super) fn before_after_block(ctx: &mut ReportContext<'_>, item: &RecordItem) {
    if item.before_image.is_none() && item.after_image.is_none() {
        return;
    }
    let before = item
        .before_image
        .as_deref()
        .and_then(|uri| ctx.load_image(uri, "before"));
    let after = item
        .after_image
        .as_deref()
        .and_then(|uri| ctx.load_image(uri, "after"));

    let label_height = caption_height() + 4.0;
    let inner = ctx.width() - 2.0 * CARD_PADDING;
    let slot_width = (inner - GUTTER) / 2.0;
    let x0 = ctx.left() + CARD_PADDING;

    ctx.gap(4.0);
    let y = ctx.place(BlockKind::BeforeAfter, label_height + PHOTO_HEIGHT + 6.0);
    let canvas = ctx.canvas();
    let slots = [("ANTES", RED, before), ("DEPOIS", GREEN, after)];
    for (i, (label, color, image)) in slots.into_iter().enumerate() {
        let x = x0 + i as f32 * (slot_width + GUTTER);
        canvas.text(x, y + 9.0, label, TextStyle::bold(9.0).with_color(color));
        let frame = Rect::new(x, y + label_height, slot_width, PHOTO_HEIGHT);
        canvas.stroke_rect(frame, theme::RULE, 0.5);
        if let Some(image) = image {
            draw_fitted(canvas, frame, image);
        }
    }
}
