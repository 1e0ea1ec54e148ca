//! Headless outer scroll and page root views.

use std::rc::Rc;

use stackscroll_foundation::{same_view, ScrollHost, StackView, ViewHandle};
use stackscroll_ui_graphics::{Point, Rect, Size};

/// Outer scroll surface that clamps its offset to the scrollable range,
/// like a real scroll view without bouncing.
pub struct HeadlessScroll {
    viewport: Size,
    offset: Point,
    content_size: Size,
    subviews: Vec<ViewHandle>,
    delegate_bound: bool,
}

impl HeadlessScroll {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            offset: Point::ZERO,
            content_size: Size::ZERO,
            subviews: Vec::new(),
            delegate_bound: false,
        }
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_size.height - self.viewport.height).max(0.0)
    }

    /// Scrolls by `dy`, returning whether the offset moved.
    pub fn scroll_by(&mut self, dy: f32) -> bool {
        let target = (self.offset.y + dy).clamp(0.0, self.max_offset());
        let moved = target != self.offset.y;
        self.offset = Point::new(0.0, target);
        moved
    }

    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.offset.y = self.offset.y.min(self.max_offset());
    }

    pub fn subview_count(&self) -> usize {
        self.subviews.len()
    }

    pub fn delegate_bound(&self) -> bool {
        self.delegate_bound
    }
}

impl ScrollHost for HeadlessScroll {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.offset.y = self.offset.y.min(self.max_offset());
    }

    fn attach(&mut self, view: &ViewHandle) {
        if !self.subviews.iter().any(|v| same_view(v, view)) {
            self.subviews.push(Rc::clone(view));
        }
    }

    fn detach(&mut self, view: &ViewHandle) {
        self.subviews.retain(|v| !same_view(v, view));
    }

    fn bind_delegate(&mut self) {
        self.delegate_bound = true;
    }
}

/// Root view of a demo page.
#[derive(Debug, Default)]
pub struct PageView {
    frame: Rect,
    height_constraint: Option<f32>,
}

impl PageView {
    pub fn with_height_constraint(height: f32) -> Self {
        Self {
            frame: Rect::ZERO,
            height_constraint: Some(height),
        }
    }
}

impl StackView for PageView {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn height_constraint(&self) -> Option<f32> {
        self.height_constraint
    }
}
