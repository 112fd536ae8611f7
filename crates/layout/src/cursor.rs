use crate::algorithms::pagination::{check_child_fit, BreakAnalysis};
use crate::config::PageGeometry;

/// Vertical write position on the active page.
///
/// The cursor only knows geometry; deciding what happens on a break (footer
/// stamping, opening the next page) belongs to whoever owns the pages.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    pub page_index: usize,
    pub y: f32,
    pub geometry: PageGeometry,
}

impl LayoutCursor {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            page_index: 0,
            y: geometry.content_top(),
            geometry,
        }
    }

    pub fn check(&self, required_height: f32) -> BreakAnalysis {
        check_child_fit(self.y, required_height, self.geometry.content_bottom())
    }

    pub fn fits(&self, required_height: f32) -> bool {
        !self.check(required_height).should_break
    }

    pub fn remaining(&self) -> f32 {
        self.check(0.0).remaining_height
    }

    pub fn advance(&mut self, height: f32) {
        self.y += height;
    }

    /// Moves to the top of the next page.
    pub fn next_page(&mut self) {
        self.page_index += 1;
        self.y = self.geometry.content_top();
    }

    pub fn is_at_top(&self) -> bool {
        (self.y - self.geometry.content_top()).abs() < f32::EPSILON
    }
}
