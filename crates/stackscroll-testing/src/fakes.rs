//! In-memory stand-ins for the host toolkit.
//!
//! The fakes record what the coordinator does to them so tests can assert on
//! frames, offsets and attachment order without a real UI.

use std::cell::RefCell;
use std::rc::Rc;

use stackscroll_foundation::{InnerScrollView, ScrollHost, StackView, ViewHandle};
use stackscroll_ui_graphics::{Point, Rect, Size};

/// Stable identity of a view handle, usable for comparisons in assertions.
pub fn view_key(view: &ViewHandle) -> usize {
    Rc::as_ptr(view).cast::<()>() as usize
}

/// Something the coordinator did to the fake host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    Attached(usize),
    Detached(usize),
    ContentSizeSet,
}

/// Outer scroll surface.
#[derive(Debug, Default)]
pub struct FakeScrollHost {
    viewport: Size,
    offset: Point,
    content_size: Size,
    attached: Vec<usize>,
    events: Vec<HostEvent>,
    delegate_bound: bool,
}

impl FakeScrollHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn shared(viewport: Size) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(viewport)))
    }

    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Moves the scroll position, as a user drag would.
    pub fn scroll_to(&mut self, y: f32) {
        self.offset = Point::new(0.0, y);
    }

    pub fn attached(&self) -> &[usize] {
        &self.attached
    }

    pub fn is_attached(&self, view: &ViewHandle) -> bool {
        self.attached.contains(&view_key(view))
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn delegate_bound(&self) -> bool {
        self.delegate_bound
    }
}

impl ScrollHost for FakeScrollHost {
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
        self.events.push(HostEvent::ContentSizeSet);
    }

    fn attach(&mut self, view: &ViewHandle) {
        let key = view_key(view);
        if !self.attached.contains(&key) {
            self.attached.push(key);
            self.events.push(HostEvent::Attached(key));
        }
    }

    fn detach(&mut self, view: &ViewHandle) {
        let key = view_key(view);
        if let Some(position) = self.attached.iter().position(|k| *k == key) {
            self.attached.remove(position);
            self.events.push(HostEvent::Detached(key));
        }
    }

    fn bind_delegate(&mut self) {
        self.delegate_bound = true;
    }
}

/// Root view of a child page.
#[derive(Debug, Default, Clone)]
pub struct FakeView {
    pub frame: Rect,
    pub height_constraint: Option<f32>,
}

impl FakeView {
    pub fn with_frame_height(height: f32) -> Self {
        Self {
            frame: Rect::new(0.0, 0.0, 0.0, height),
            height_constraint: None,
        }
    }

    pub fn with_height_constraint(height: f32) -> Self {
        Self {
            frame: Rect::ZERO,
            height_constraint: Some(height),
        }
    }
}

impl StackView for FakeView {
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

/// Inner list of a child page.
#[derive(Debug, Clone)]
pub struct FakeScrollView {
    pub content_size: Size,
    pub frame: Rect,
    pub content_offset: Point,
    pub scroll_enabled: bool,
    /// Number of frame assignments received.
    pub frame_updates: usize,
}

impl FakeScrollView {
    pub fn new(content_size: Size) -> Self {
        Self {
            content_size,
            frame: Rect::ZERO,
            content_offset: Point::ZERO,
            scroll_enabled: true,
            frame_updates: 0,
        }
    }

    /// A list of `rows` rows of `row_height` each.
    pub fn rows(width: f32, rows: usize, row_height: f32) -> Self {
        Self::new(Size::new(width, rows as f32 * row_height))
    }

    /// Rows whose top lies inside the current frame, assuming uniform rows.
    ///
    /// Mirrors what a recycling list would keep alive.
    pub fn visible_rows(&self, row_height: f32) -> std::ops::Range<usize> {
        if self.frame.is_empty() || row_height <= 0.0 {
            return 0..0;
        }
        let first = (self.content_offset.y.max(0.0) / row_height).floor() as usize;
        let end = ((self.content_offset.y + self.frame.height) / row_height).ceil() as usize;
        let total = (self.content_size.height / row_height).ceil() as usize;
        first.min(total)..end.min(total)
    }
}

impl InnerScrollView for FakeScrollView {
    fn content_size(&self) -> Size {
        self.content_size
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.frame_updates += 1;
    }

    fn content_offset(&self) -> Point {
        self.content_offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.content_offset = offset;
    }

    fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}
