//! Record binding a managed child to its appearance and ideal slot.

use std::fmt;
use std::rc::Rc;

use stackscroll_ui_graphics::Rect;

use super::appearance::ItemAppearance;
use super::containable::StackContainable;

/// One stacked child.
///
/// `rect` is the ideal slot: the place the child would occupy if every child
/// were rendered at full height. It is not the frame of a scrollable child's
/// inner view, which the coordinator clips to the visible region.
pub struct StackItem {
    pub(crate) controller: Rc<dyn StackContainable>,
    pub(crate) appearance: ItemAppearance,
    pub(crate) rect: Rect,
}

impl StackItem {
    /// Captures the child's appearance once.
    pub fn new(controller: Rc<dyn StackContainable>) -> Self {
        let appearance = controller.preferred_appearance_in_stack();
        Self {
            controller,
            appearance,
            rect: Rect::ZERO,
        }
    }

    pub fn controller(&self) -> &Rc<dyn StackContainable> {
        &self.controller
    }

    pub fn appearance(&self) -> &ItemAppearance {
        &self.appearance
    }

    /// Ideal slot computed by the last layout pass.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl fmt::Debug for StackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackItem")
            .field("controller", &self.controller.name())
            .field("appearance", &self.appearance)
            .field("rect", &self.rect)
            .finish()
    }
}
