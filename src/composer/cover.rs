use crate::config::DEFAULT_ORGANIZATION_NAME;
use crate::config::ReportConfig;
use crate::context::{BlockKind, ReportContext};
use crate::model::{dates, ReportRequest};
use crate::sections::draw_fitted;
use crate::theme;
use condo_layout::{line_height, wrap_text};
use condo_render_lopdf::{TextAlign, TextStyle};
use condo_types::Rect;

const LOGO_BOX_WIDTH: f32 = 160.0;
const LOGO_BOX_HEIGHT: f32 = 90.0;

/// Override, then the request's organization name, then "Condomínio".
pub fn organization_name<'a>(config: &'a ReportConfig, request: &'a ReportRequest) -> &'a str {
    config
        .organization_override()
        .or_else(|| {
            request
                .organization
                .name
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .unwrap_or(DEFAULT_ORGANIZATION_NAME)
}

/// Draws the cover page. The cover fills the whole first page.
pub fn draw_cover(ctx: &mut ReportContext<'_>, request: &ReportRequest, organization: &str) {
    let config = ctx.config();
    let logo_uri = config
        .logo()
        .or(request.organization.logo_url.as_deref())
        .filter(|s| !s.trim().is_empty());
    let logo = logo_uri.and_then(|uri| ctx.load_image(uri, "logo"));

    let (left, width) = (ctx.left(), ctx.width());
    let height = ctx.geometry().content_height();
    let top = ctx.place(BlockKind::Cover, height);
    let mut y = top + 60.0;

    if let Some(logo) = logo {
        let frame = Rect::new(left + (width - LOGO_BOX_WIDTH) / 2.0, y, LOGO_BOX_WIDTH, LOGO_BOX_HEIGHT);
        draw_fitted(ctx.canvas(), frame, logo);
        y += LOGO_BOX_HEIGHT + 30.0;
    } else {
        y += 80.0;
    }

    y = centered_lines(ctx, y, organization, TextStyle::bold(24.0).with_color(theme::TEXT));
    if let Some(address) = request.organization.address.as_deref().filter(|a| !a.trim().is_empty()) {
        y = centered_lines(ctx, y + 4.0, address, TextStyle::regular(11.0).with_color(theme::MUTED));
    }

    y += 18.0;
    let inset = width * 0.2;
    ctx.canvas()
        .line((left + inset, y), (left + width - inset, y), theme::ACCENT, 1.5);
    y += 24.0;

    y = centered_lines(ctx, y, config.report_title(), TextStyle::bold(20.0).with_color(theme::ACCENT));
    y = centered_lines(
        ctx,
        y + 6.0,
        &request.period_range.describe(),
        TextStyle::regular(12.0).with_color(theme::TEXT),
    );
    if let Some(preparer) = config.preparer() {
        centered_lines(
            ctx,
            y + 10.0,
            &format!("Preparado por: {}", preparer),
            TextStyle::regular(11.0).with_color(theme::MUTED),
        );
    }

    let generated = format!("Gerado em: {}", dates::format_datetime(&request.generated_at));
    let style = TextStyle::regular(9.0).with_color(theme::MUTED);
    let baseline = top + height - 10.0;
    ctx.canvas()
        .text_aligned(left, width, baseline, &generated, style, TextAlign::Center);
}

/// Wrapped, centered text starting at `top`. Returns the y below it.
fn centered_lines(ctx: &mut ReportContext<'_>, top: f32, text: &str, style: TextStyle) -> f32 {
    let (left, width) = (ctx.left(), ctx.width());
    let lh = line_height(style.size);
    let mut y = top;
    for line in wrap_text(text, style.face, style.size, width) {
        let baseline = y + theme::baseline(style.size);
        ctx.canvas()
            .text_aligned(left, width, baseline, &line, style, TextAlign::Center);
        y += lh;
    }
    y
}
