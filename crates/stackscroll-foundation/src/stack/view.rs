//! Collaborator surfaces driven by the stack coordinator.
//!
//! The coordinator never owns real views. It talks to whatever the host
//! toolkit provides through these traits, holding shared handles so that the
//! child, the host and the coordinator all observe the same view.

use std::cell::RefCell;
use std::rc::Rc;

use stackscroll_ui_graphics::{Point, Rect, Size};

/// Shared handle to a child's root renderable.
pub type ViewHandle = Rc<RefCell<dyn StackView>>;

/// Shared handle to a child's inner scrollable region.
pub type ScrollViewHandle = Rc<RefCell<dyn InnerScrollView>>;

/// Shared handle to the outer scroll surface.
pub type ScrollHostHandle = Rc<RefCell<dyn ScrollHost>>;

/// Root renderable of a stacked child.
pub trait StackView {
    /// Current frame in the outer scroll's content coordinates.
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    /// Explicit height constraint declared on the view, if any.
    fn height_constraint(&self) -> Option<f32> {
        None
    }
}

/// Inner scrollable region of a child (a list, a table, ...).
///
/// Frame coordinates are relative to the child's root view.
pub trait InnerScrollView {
    /// Size of the full scrollable content.
    fn content_size(&self) -> Size;

    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    fn content_offset(&self) -> Point;

    fn set_content_offset(&mut self, offset: Point);

    fn is_scroll_enabled(&self) -> bool;

    /// Toggles the region's own scroll input.
    fn set_scroll_enabled(&mut self, enabled: bool);
}

/// The single real scroll surface the user interacts with.
pub trait ScrollHost {
    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Current scroll position.
    fn content_offset(&self) -> Point;

    fn content_size(&self) -> Size;

    fn set_content_size(&mut self, size: Size);

    /// Adds a child view to the scrolled content. Attaching a view that is
    /// already attached must leave a single attachment.
    fn attach(&mut self, view: &ViewHandle);

    /// Removes a child view from the scrolled content.
    fn detach(&mut self, view: &ViewHandle);

    /// Called once the coordinator starts listening to scroll notifications.
    fn bind_delegate(&mut self) {}
}

/// Identity comparison for shared view handles.
pub fn same_view(a: &ViewHandle, b: &ViewHandle) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
