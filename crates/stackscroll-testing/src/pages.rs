//! Child pages built from the fakes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use stackscroll_foundation::{ItemAppearance, StackContainable, ViewHandle};
use stackscroll_ui_graphics::{EdgeInsets, Size};

use crate::fakes::{FakeScrollView, FakeView};

/// Page without inner scrolling. Its height comes from the default
/// appearance resolution.
pub struct FixedPage {
    name: String,
    root: Rc<RefCell<FakeView>>,
    preferred_content_size: Size,
    left_stack: Cell<usize>,
}

impl FixedPage {
    /// Page declaring `height` as its preferred content height.
    pub fn new(name: impl Into<String>, height: f32) -> Rc<Self> {
        Self::with_view(name, FakeView::default(), Size::new(0.0, height))
    }

    /// Page whose height is resolved from `view` and `preferred_content_size`.
    pub fn with_view(
        name: impl Into<String>,
        view: FakeView,
        preferred_content_size: Size,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            root: Rc::new(RefCell::new(view)),
            preferred_content_size,
            left_stack: Cell::new(0),
        })
    }

    pub fn root(&self) -> &Rc<RefCell<FakeView>> {
        &self.root
    }

    /// How many times the page was torn down from a stack.
    pub fn times_left_stack(&self) -> usize {
        self.left_stack.get()
    }
}

impl StackContainable for FixedPage {
    fn view(&self) -> ViewHandle {
        self.root.clone()
    }

    fn preferred_content_size(&self) -> Size {
        self.preferred_content_size
    }

    fn did_leave_stack(&self) {
        self.left_stack.set(self.left_stack.get() + 1);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Page hosting a list whose scrolling the stack drives.
pub struct ListPage {
    name: String,
    root: Rc<RefCell<FakeView>>,
    list: Rc<RefCell<FakeScrollView>>,
    insets: EdgeInsets,
    left_stack: Cell<usize>,
}

impl ListPage {
    pub fn new(name: impl Into<String>, list: FakeScrollView, insets: EdgeInsets) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            root: Rc::new(RefCell::new(FakeView::default())),
            list: Rc::new(RefCell::new(list)),
            insets,
            left_stack: Cell::new(0),
        })
    }

    /// List page with `content_height` of content.
    pub fn with_content_height(
        name: impl Into<String>,
        content_height: f32,
        insets: EdgeInsets,
    ) -> Rc<Self> {
        Self::new(
            name,
            FakeScrollView::new(Size::new(0.0, content_height)),
            insets,
        )
    }

    pub fn root(&self) -> &Rc<RefCell<FakeView>> {
        &self.root
    }

    pub fn list(&self) -> &Rc<RefCell<FakeScrollView>> {
        &self.list
    }

    pub fn times_left_stack(&self) -> usize {
        self.left_stack.get()
    }
}

impl StackContainable for ListPage {
    fn view(&self) -> ViewHandle {
        self.root.clone()
    }

    fn preferred_appearance_in_stack(&self) -> ItemAppearance {
        ItemAppearance::scrollable(self.list.clone(), self.insets)
    }

    fn did_leave_stack(&self) {
        self.left_stack.set(self.left_stack.get() + 1);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
