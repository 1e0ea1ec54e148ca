//! Coordinator stacking child pages inside a single outer scroll.
//!
//! Two passes keep the stack consistent:
//!
//! - **Layout** assigns every child its ideal slot, stacked top to bottom, and
//!   sizes the outer content to fit. It runs whenever the children are
//!   replaced or the outer bounds change.
//! - **Scroll adaptation** runs on every outer scroll notification. Each
//!   scrollable child gets an inner frame clipped to the visible part of its
//!   slot and an inner offset that continues the outer scroll into its
//!   content. Fixed-height children are left exactly as laid out.
//!
//! Inner scroll input is always disabled; the coordinator is the only driver
//! of inner offsets.

use std::rc::Rc;

use stackscroll_ui_graphics::{Rect, Size};

use super::appearance::ItemAppearance;
use super::containable::StackContainable;
use super::projection::{project_inner_scroll, InnerProjection};
use super::stack_item::StackItem;
use super::view::ScrollHostHandle;
use crate::config::StackConfig;
use crate::error::StackError;

#[derive(Default)]
pub struct ScrollingStackController {
    /// Outer scroll surface, bound by the host before the stack appears.
    scroll_view: Option<ScrollHostHandle>,
    items: Vec<StackItem>,
    config: StackConfig,
}

impl ScrollingStackController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StackConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Connects the outer scroll surface.
    pub fn bind_scroll_view(&mut self, scroll_view: ScrollHostHandle) {
        self.scroll_view = Some(scroll_view);
    }

    pub fn scroll_view(&self) -> Result<&ScrollHostHandle, StackError> {
        self.scroll_view
            .as_ref()
            .ok_or(StackError::ScrollViewNotBound)
    }

    /// Starts listening to the outer scroll.
    ///
    /// Fails when no scroll surface was bound; the stack cannot work without
    /// one.
    pub fn view_will_appear(&mut self) -> Result<(), StackError> {
        self.scroll_view()?.borrow_mut().bind_delegate();
        Ok(())
    }

    /// Replaces every child of the stack.
    ///
    /// Current children are detached first, then the new children are
    /// recorded with their appearance and laid out.
    pub fn set_view_controllers(
        &mut self,
        controllers: Vec<Rc<dyn StackContainable>>,
    ) -> Result<(), StackError> {
        let scroll_view = Rc::clone(self.scroll_view()?);
        self.remove_all_view_controllers(&scroll_view);
        self.items = controllers.into_iter().map(StackItem::new).collect();
        self.relayout_items()
    }

    /// Children in stack order, top first.
    pub fn view_controllers(&self) -> Vec<Rc<dyn StackContainable>> {
        self.items
            .iter()
            .map(|item| Rc::clone(&item.controller))
            .collect()
    }

    pub fn items(&self) -> &[StackItem] {
        &self.items
    }

    fn remove_all_view_controllers(&mut self, scroll_view: &ScrollHostHandle) {
        if !self.items.is_empty() {
            log::debug!("Tearing down {} stacked children", self.items.len());
        }
        for item in self.items.drain(..) {
            scroll_view.borrow_mut().detach(&item.controller.view());
            item.controller.did_leave_stack();
        }
    }

    /// Host notification: the outer bounds changed.
    pub fn view_did_layout_subviews(&mut self) -> Result<(), StackError> {
        self.relayout_items()
    }

    /// Host notification: the outer scroll moved.
    pub fn scroll_view_did_scroll(&self) -> Result<(), StackError> {
        self.adjust_content_on_scroll()
    }

    /// Visible portion of the outer content.
    pub fn visible_rect(&self) -> Result<Rect, StackError> {
        let scroll_view = self.scroll_view()?.borrow();
        Ok(Rect::from_size(scroll_view.viewport_size())
            .translate(0.0, scroll_view.content_offset().y))
    }

    pub fn content_size(&self) -> Result<Size, StackError> {
        Ok(self.scroll_view()?.borrow().content_size())
    }

    /// Computes the ideal slot of every child and sizes the outer content.
    pub fn relayout_items(&mut self) -> Result<(), StackError> {
        let scroll_view = Rc::clone(self.scroll_view()?);
        let width = scroll_view.borrow().viewport_size().width;
        let mut offset_y = 0.0;

        for item in &mut self.items {
            let height = item.appearance.slot_height();
            item.rect = Rect::new(0.0, offset_y, width, height);

            let view = item.controller.view();
            // Scrollable children are adjusted right below.
            view.borrow_mut().set_frame(item.rect);
            scroll_view.borrow_mut().attach(&view);

            offset_y += height;
        }

        scroll_view
            .borrow_mut()
            .set_content_size(Size::new(width, offset_y));
        log::debug!(
            "Laid out {} stacked children, content height {}",
            self.items.len(),
            offset_y
        );

        self.adjust_content_on_scroll()
    }

    /// Reprojects the outer scroll onto every scrollable child.
    pub fn adjust_content_on_scroll(&self) -> Result<(), StackError> {
        let visible_rect = self.visible_rect()?;

        for item in &self.items {
            let ItemAppearance::Scrollable { view, insets } = &item.appearance else {
                continue;
            };

            let mut inner = view.borrow_mut();
            if inner.is_scroll_enabled() {
                inner.set_scroll_enabled(false);
            }

            let projection = project_inner_scroll(
                item.rect,
                *insets,
                inner.content_size().height,
                visible_rect,
                &self.config,
            );
            inner.set_frame(projection.frame);
            if let Some(offset) = projection.content_offset {
                inner.set_content_offset(offset);
            }
        }

        log::trace!("Adjusted stack for visible rect {:?}", visible_rect);
        Ok(())
    }

    /// Projection the next adaptation pass would apply to the child at
    /// `index`. `None` for fixed-height children and out of range indices.
    pub fn projection_at(&self, index: usize) -> Result<Option<InnerProjection>, StackError> {
        let visible_rect = self.visible_rect()?;
        let Some(item) = self.items.get(index) else {
            return Ok(None);
        };

        Ok(match &item.appearance {
            ItemAppearance::Scrollable { view, insets } => Some(project_inner_scroll(
                item.rect,
                *insets,
                view.borrow().content_size().height,
                visible_rect,
                &self.config,
            )),
            ItemAppearance::FixedHeight(_) => None,
        })
    }
}
