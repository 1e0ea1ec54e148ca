//! List page: a table of uniform rows whose scrolling the stack drives.
//!
//! The table only keeps cells for rows intersecting its frame, so a list
//! scrolled out of view holds no cells at all.

use std::cell::RefCell;
use std::ops::Range;
use std::rc::Rc;

use stackscroll_foundation::{InnerScrollView, ItemAppearance, StackContainable, ViewHandle};
use stackscroll_ui_graphics::{EdgeInsets, Point, Rect, Size};

use crate::host::PageView;

pub const DEFAULT_ROW_COUNT: usize = 20;
pub const ROW_HEIGHT: f32 = 60.0;

/// Space kept above and below the table inside its page.
pub fn list_insets() -> EdgeInsets {
    EdgeInsets::from_components(0.0, 50.0, 0.0, 50.0)
}

#[derive(Debug)]
pub struct TableView {
    rows: usize,
    row_height: f32,
    frame: Rect,
    offset: Point,
    scroll_enabled: bool,
    live_rows: Range<usize>,
    /// Highest number of cells alive at once.
    peak_cells: usize,
}

impl TableView {
    pub fn new(rows: usize, row_height: f32) -> Self {
        Self {
            rows,
            row_height,
            frame: Rect::ZERO,
            offset: Point::ZERO,
            scroll_enabled: true,
            live_rows: 0..0,
            peak_cells: 0,
        }
    }

    pub fn live_rows(&self) -> Range<usize> {
        self.live_rows.clone()
    }

    pub fn peak_cells(&self) -> usize {
        self.peak_cells
    }

    pub fn title_for_row(row: usize) -> String {
        format!("Cell {row}")
    }

    fn reload_visible_rows(&mut self) {
        self.live_rows = if self.frame.is_empty() {
            0..0
        } else {
            let first = (self.offset.y.max(0.0) / self.row_height).floor() as usize;
            let end = ((self.offset.y + self.frame.height) / self.row_height).ceil() as usize;
            first.min(self.rows)..end.min(self.rows)
        };
        self.peak_cells = self.peak_cells.max(self.live_rows.len());
    }
}

impl InnerScrollView for TableView {
    fn content_size(&self) -> Size {
        Size::new(self.frame.width, self.rows as f32 * self.row_height)
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.reload_visible_rows();
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.offset = offset;
        self.reload_visible_rows();
    }

    fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}

pub struct ContainerList {
    title: String,
    root: Rc<RefCell<PageView>>,
    table: Rc<RefCell<TableView>>,
}

impl ContainerList {
    pub fn create(title: impl Into<String>) -> Rc<Self> {
        Self::with_rows(title, DEFAULT_ROW_COUNT)
    }

    pub fn with_rows(title: impl Into<String>, rows: usize) -> Rc<Self> {
        Rc::new(Self {
            title: title.into(),
            root: Rc::new(RefCell::new(PageView::default())),
            table: Rc::new(RefCell::new(TableView::new(rows, ROW_HEIGHT))),
        })
    }

    pub fn table(&self) -> &Rc<RefCell<TableView>> {
        &self.table
    }
}

impl StackContainable for ContainerList {
    fn view(&self) -> ViewHandle {
        self.root.clone()
    }

    fn preferred_appearance_in_stack(&self) -> ItemAppearance {
        ItemAppearance::scrollable(self.table.clone(), list_insets())
    }

    fn name(&self) -> &str {
        &self.title
    }
}

/// Plain page with a fixed height, like a header or a banner.
pub struct BannerPage {
    title: String,
    root: Rc<RefCell<PageView>>,
}

impl BannerPage {
    pub fn new(title: impl Into<String>, height: f32) -> Rc<Self> {
        Rc::new(Self {
            title: title.into(),
            root: Rc::new(RefCell::new(PageView::with_height_constraint(height))),
        })
    }
}

impl StackContainable for BannerPage {
    fn view(&self) -> ViewHandle {
        self.root.clone()
    }

    fn name(&self) -> &str {
        &self.title
    }
}
