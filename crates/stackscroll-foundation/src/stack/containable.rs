use stackscroll_ui_graphics::Size;

use super::appearance::{resolve_fixed_appearance, ItemAppearance};
use super::view::ViewHandle;

/// A child page that can live inside a [`ScrollingStackController`].
///
/// Implementors expose their root view directly, so the coordinator can
/// attach and detach it without knowing the concrete child type.
///
/// [`ScrollingStackController`]: super::ScrollingStackController
pub trait StackContainable {
    /// Root view placed into the outer scroll.
    fn view(&self) -> ViewHandle;

    /// Preferred size of the child's content, if it declares one.
    fn preferred_content_size(&self) -> Size {
        Size::ZERO
    }

    /// How the child appears when stacked.
    ///
    /// Children hosting a list or other scrollable region override this to
    /// return [`ItemAppearance::Scrollable`]. The default is a fixed-height
    /// slot resolved by [`resolve_fixed_appearance`].
    fn preferred_appearance_in_stack(&self) -> ItemAppearance {
        resolve_fixed_appearance(self.name(), &self.view(), self.preferred_content_size())
    }

    /// Called after the child's view has been detached during teardown.
    fn did_leave_stack(&self) {}

    /// Human readable name used in diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
