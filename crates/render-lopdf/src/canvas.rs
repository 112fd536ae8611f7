use crate::encoding::to_win_ansi;
use crate::image_data::ImageData;
use condo_layout::fonts::{measure_text_width, FontFace};
use condo_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Font, size and color of a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(face: FontFace, size: f32, color: Color) -> Self {
        Self { face, size, color }
    }

    pub const fn regular(size: f32) -> Self {
        Self::new(FontFace::Regular, size, Color::BLACK)
    }

    pub const fn bold(size: f32) -> Self {
        Self::new(FontFace::Bold, size, Color::BLACK)
    }

    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn measure(&self, text: &str) -> f32 {
        measure_text_width(text, self.face, self.size)
    }
}

/// A clickable region pointing to an external URI.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    /// Region in layout coordinates (origin top-left).
    pub rect: Rect,
    pub uri: String,
}

#[derive(Debug, Clone)]
pub(crate) struct PlacedImage {
    pub name: String,
    pub image: Arc<ImageData>,
}

#[derive(Debug, Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<(FontFace, f32)>,
    fill_color: Option<Color>,
}

/// Drawing surface for one page.
///
/// All coordinates are points with the origin at the top-left corner and y
/// growing downwards; they are flipped into PDF user space when emitted.
#[derive(Debug)]
pub struct PageCanvas {
    width: f32,
    height: f32,
    content: Content,
    state: PageRenderState,
    images: Vec<PlacedImage>,
    links: Vec<LinkAnnotation>,
}

impl PageCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            images: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn links(&self) -> &[LinkAnnotation] {
        &self.links
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    fn flip_y(&self, y: f32) -> f32 {
        self.height - y
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, face: FontFace, size: f32) {
        if self.state.font != Some((face, size)) {
            self.push("Tf", vec![face.resource_name().into(), size.into()]);
            self.state.font = Some((face, size));
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            let [r, g, b] = color.to_unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, line_width: f32) {
        let [r, g, b] = color.to_unit();
        self.push("w", vec![line_width.into()]);
        self.push("RG", vec![r.into(), g.into(), b.into()]);
    }

    /// Draws one line of text with its baseline at `baseline_y`.
    pub fn text(&mut self, x: f32, baseline_y: f32, text: &str, style: TextStyle) {
        if text.trim().is_empty() {
            return;
        }
        let pdf_y = self.flip_y(baseline_y);
        self.push("BT", vec![]);
        self.set_font(style.face, style.size);
        self.set_fill_color(style.color);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    /// Draws text aligned inside the horizontal span `[x, x + width]`.
    pub fn text_aligned(
        &mut self,
        x: f32,
        width: f32,
        baseline_y: f32,
        text: &str,
        style: TextStyle,
        align: TextAlign,
    ) {
        let line_width = style.measure(text);
        let start = match align {
            TextAlign::Left => x,
            TextAlign::Right => x + width - line_width,
            TextAlign::Center => x + (width - line_width) / 2.0,
        };
        self.text(start, baseline_y, text, style);
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.set_fill_color(color);
        let y = self.flip_y(rect.bottom());
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.push("f", vec![]);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.set_stroke(color, line_width);
        let y = self.flip_y(rect.bottom());
        self.push(
            "re",
            vec![rect.x.into(), y.into(), rect.width.into(), rect.height.into()],
        );
        self.push("S", vec![]);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, line_width: f32) {
        self.set_stroke(color, line_width);
        let (y1, y2) = (self.flip_y(from.1), self.flip_y(to.1));
        self.push("m", vec![from.0.into(), y1.into()]);
        self.push("l", vec![to.0.into(), y2.into()]);
        self.push("S", vec![]);
    }

    /// Filled circle approximated with four cubic Bézier arcs.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        const KAPPA: f32 = 0.552_284_8;
        let k = radius * KAPPA;
        let cy = self.flip_y(cy);
        self.set_fill_color(color);
        self.push("m", vec![(cx + radius).into(), cy.into()]);
        let arcs = [
            [(cx + radius, cy + k), (cx + k, cy + radius), (cx, cy + radius)],
            [(cx - k, cy + radius), (cx - radius, cy + k), (cx - radius, cy)],
            [(cx - radius, cy - k), (cx - k, cy - radius), (cx, cy - radius)],
            [(cx + k, cy - radius), (cx + radius, cy - k), (cx + radius, cy)],
        ];
        for arc in arcs {
            let operands = arc
                .iter()
                .flat_map(|&(x, y)| [Object::from(x), Object::from(y)])
                .collect();
            self.push("c", operands);
        }
        self.push("f", vec![]);
    }

    /// Places `image` scaled to fill `rect`.
    pub fn draw_image(&mut self, rect: Rect, image: Arc<ImageData>) {
        let name = format!("Im{}", self.images.len() + 1);
        let y = self.flip_y(rect.bottom());
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                rect.width.into(),
                0.into(),
                0.into(),
                rect.height.into(),
                rect.x.into(),
                y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.clone().into_bytes())]);
        self.push("Q", vec![]);
        self.images.push(PlacedImage { name, image });
    }

    /// Makes `rect` a clickable link to `uri`.
    pub fn link(&mut self, rect: Rect, uri: impl Into<String>) {
        self.links.push(LinkAnnotation {
            rect,
            uri: uri.into(),
        });
    }

    pub(crate) fn into_parts(self) -> (Content, Vec<PlacedImage>, Vec<LinkAnnotation>) {
        (self.content, self.images, self.links)
    }

    /// Converts a layout rectangle into a PDF `[llx lly urx ury]` array.
    pub(crate) fn pdf_rect(&self, rect: Rect) -> Vec<Object> {
        vec![
            rect.x.into(),
            self.flip_y(rect.bottom()).into(),
            rect.right().into(),
            self.flip_y(rect.y).into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operators(canvas: PageCanvas) -> Vec<String> {
        let (content, _, _) = canvas.into_parts();
        content.operations.into_iter().map(|op| op.operator).collect()
    }

    #[test]
    fn text_is_flipped_into_pdf_space() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        canvas.text(10.0, 50.0, "Olá", TextStyle::regular(10.0));
        let (content, _, _) = canvas.into_parts();
        let td = content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        assert_eq!(td.operands[1].as_float().unwrap(), 250.0);
        let tj = content
            .operations
            .iter()
            .find(|op| op.operator == "Tj")
            .unwrap();
        assert_eq!(tj.operands[0].as_str().unwrap(), b"Ol\xe1");
    }

    #[test]
    fn blank_text_emits_nothing() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        canvas.text(10.0, 50.0, "   ", TextStyle::regular(10.0));
        assert!(operators(canvas).is_empty());
    }

    #[test]
    fn font_and_color_are_not_repeated() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        let style = TextStyle::bold(12.0).with_color(Color::rgb(200, 0, 0));
        canvas.text(10.0, 50.0, "um", style);
        canvas.text(10.0, 70.0, "dois", style);
        let ops = operators(canvas);
        assert_eq!(ops.iter().filter(|o| *o == "Tf").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "rg").count(), 1);
        assert_eq!(ops.iter().filter(|o| *o == "Tj").count(), 2);
    }

    #[test]
    fn right_alignment_ends_at_span_edge() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        let style = TextStyle::regular(10.0);
        canvas.text_aligned(0.0, 100.0, 20.0, "ab", style, TextAlign::Right);
        let (content, _, _) = canvas.into_parts();
        let td = content
            .operations
            .iter()
            .find(|op| op.operator == "Td")
            .unwrap();
        let x = td.operands[0].as_float().unwrap();
        assert!((x - (100.0 - style.measure("ab"))).abs() < 0.001);
    }

    #[test]
    fn images_get_sequential_names() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        let image = Arc::new(ImageData::from_rgb(1, 1, &[0, 0, 0]).unwrap());
        canvas.draw_image(Rect::new(0.0, 0.0, 10.0, 10.0), image.clone());
        canvas.draw_image(Rect::new(20.0, 0.0, 10.0, 10.0), image);
        assert_eq!(canvas.image_count(), 2);
        let (_, images, _) = canvas.into_parts();
        assert_eq!(images[1].name, "Im2");
    }

    #[test]
    fn link_rect_converts_to_pdf_space() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        let rect = Rect::new(10.0, 20.0, 50.0, 15.0);
        canvas.link(rect, "http://localhost:3000/dashboard/manutencoes");
        assert_eq!(canvas.links().len(), 1);
        let pdf = canvas.pdf_rect(rect);
        let values: Vec<f32> = pdf.iter().map(|o| o.as_float().unwrap()).collect();
        assert_eq!(values, vec![10.0, 265.0, 60.0, 280.0]);
    }

    #[test]
    fn circle_is_four_curves() {
        let mut canvas = PageCanvas::new(200.0, 300.0);
        canvas.fill_circle(50.0, 50.0, 3.0, Color::BLACK);
        let ops = operators(canvas);
        assert_eq!(ops.iter().filter(|o| *o == "c").count(), 4);
        assert_eq!(ops.last().map(String::as_str), Some("f"));
    }
}
