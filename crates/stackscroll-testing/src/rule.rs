//! Harness wiring a coordinator to a fake outer scroll.

use std::cell::Ref;
use std::cell::RefCell;
use std::rc::Rc;

use stackscroll_foundation::{ScrollingStackController, StackConfig, StackContainable};
use stackscroll_ui_graphics::{Rect, Size};

use crate::fakes::FakeScrollHost;

/// Owns a coordinator bound to a [`FakeScrollHost`] and forwards the host
/// notifications a real toolkit would send.
pub struct StackTestRule {
    host: Rc<RefCell<FakeScrollHost>>,
    controller: ScrollingStackController,
}

impl StackTestRule {
    pub fn new(viewport: Size) -> Self {
        Self::with_config(viewport, StackConfig::default())
    }

    pub fn with_config(viewport: Size, config: StackConfig) -> Self {
        let host = FakeScrollHost::shared(viewport);
        let mut controller = ScrollingStackController::with_config(config);
        controller.bind_scroll_view(host.clone());
        controller
            .view_will_appear()
            .expect("scroll view was just bound");
        Self { host, controller }
    }

    pub fn set_pages(&mut self, pages: Vec<Rc<dyn StackContainable>>) {
        self.controller
            .set_view_controllers(pages)
            .expect("set pages");
    }

    /// Scrolls the outer surface to `y` and notifies the coordinator.
    pub fn scroll_to(&mut self, y: f32) {
        self.host.borrow_mut().scroll_to(y);
        self.controller
            .scroll_view_did_scroll()
            .expect("scroll notification");
    }

    /// Resizes the outer viewport and notifies the coordinator.
    pub fn resize(&mut self, viewport: Size) {
        self.host.borrow_mut().set_viewport_size(viewport);
        self.controller
            .view_did_layout_subviews()
            .expect("layout notification");
    }

    pub fn controller(&self) -> &ScrollingStackController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ScrollingStackController {
        &mut self.controller
    }

    pub fn host(&self) -> Ref<'_, FakeScrollHost> {
        self.host.borrow()
    }

    pub fn clear_host_events(&mut self) {
        self.host.borrow_mut().clear_events();
    }

    /// Ideal slots in stack order.
    pub fn slots(&self) -> Vec<Rect> {
        self.controller.items().iter().map(|item| item.rect()).collect()
    }

    pub fn visible_rect(&self) -> Rect {
        self.controller.visible_rect().expect("visible rect")
    }
}
