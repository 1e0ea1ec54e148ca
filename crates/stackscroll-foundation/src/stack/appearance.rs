//! How a child occupies its slot in the stack.

use std::fmt;
use std::rc::Rc;

use stackscroll_ui_graphics::{EdgeInsets, Size};

use super::view::{ScrollViewHandle, ViewHandle};

/// Appearance a child declares once when it enters the stack.
#[derive(Clone)]
pub enum ItemAppearance {
    /// Static vertical extent. The child is laid out as-is and never
    /// reprojected while the outer scroll moves.
    FixedHeight(f32),
    /// The child hosts an inner scrollable region whose frame and offset are
    /// driven by the coordinator. `insets` reserve space above and below the
    /// inner content inside the slot.
    Scrollable {
        view: ScrollViewHandle,
        insets: EdgeInsets,
    },
}

impl ItemAppearance {
    pub fn scrollable(view: ScrollViewHandle, insets: EdgeInsets) -> Self {
        Self::Scrollable { view, insets }
    }

    /// Height of the slot, reading the inner content height fresh.
    pub fn slot_height(&self) -> f32 {
        match self {
            Self::FixedHeight(height) => *height,
            Self::Scrollable { view, insets } => {
                view.borrow().content_size().height + insets.vertical_sum()
            }
        }
    }

    pub fn is_scrollable(&self) -> bool {
        matches!(self, Self::Scrollable { .. })
    }

    pub fn scroll_view(&self) -> Option<&ScrollViewHandle> {
        match self {
            Self::Scrollable { view, .. } => Some(view),
            Self::FixedHeight(_) => None,
        }
    }
}

impl fmt::Debug for ItemAppearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FixedHeight(height) => f.debug_tuple("FixedHeight").field(height).finish(),
            Self::Scrollable { view, insets } => f
                .debug_struct("Scrollable")
                .field("view", &Rc::as_ptr(view).cast::<()>())
                .field("insets", insets)
                .finish(),
        }
    }
}

/// Resolves the fixed height of a child that did not declare an appearance.
///
/// Candidates are tried in order: the root view's explicit height constraint,
/// the child's preferred content size, then the root view's current frame.
/// The first positive value wins. When none is positive the child gets a
/// zero-height slot and a warning is logged.
pub fn resolve_fixed_appearance(
    name: &str,
    view: &ViewHandle,
    preferred_content_size: Size,
) -> ItemAppearance {
    let (constraint, frame_height) = {
        let view = view.borrow();
        (view.height_constraint(), view.frame().height)
    };

    let height = [
        constraint.unwrap_or(0.0),
        preferred_content_size.height,
        frame_height,
    ]
    .into_iter()
    .find(|height| *height > 0.0);

    match height {
        Some(height) => ItemAppearance::FixedHeight(height),
        None => {
            log::warn!("{name} does not specify a valid height when contained in stack");
            ItemAppearance::FixedHeight(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::view::{InnerScrollView, StackView};
    use stackscroll_ui_graphics::{Point, Rect};
    use std::cell::RefCell;

    struct PlainView {
        frame: Rect,
        constraint: Option<f32>,
    }

    impl StackView for PlainView {
        fn frame(&self) -> Rect {
            self.frame
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame = frame;
        }

        fn height_constraint(&self) -> Option<f32> {
            self.constraint
        }
    }

    struct List {
        content: Size,
    }

    impl InnerScrollView for List {
        fn content_size(&self) -> Size {
            self.content
        }
        fn frame(&self) -> Rect {
            Rect::ZERO
        }
        fn set_frame(&mut self, _frame: Rect) {}
        fn content_offset(&self) -> Point {
            Point::ZERO
        }
        fn set_content_offset(&mut self, _offset: Point) {}
        fn is_scroll_enabled(&self) -> bool {
            true
        }
        fn set_scroll_enabled(&mut self, _enabled: bool) {}
    }

    fn view(frame_height: f32, constraint: Option<f32>) -> ViewHandle {
        Rc::new(RefCell::new(PlainView {
            frame: Rect::new(0.0, 0.0, 320.0, frame_height),
            constraint,
        }))
    }

    fn height_of(appearance: &ItemAppearance) -> f32 {
        match appearance {
            ItemAppearance::FixedHeight(height) => *height,
            other => panic!("expected fixed height, got {other:?}"),
        }
    }

    #[test]
    fn constraint_takes_priority() {
        let appearance =
            resolve_fixed_appearance("header", &view(80.0, Some(44.0)), Size::new(0.0, 60.0));
        assert_eq!(height_of(&appearance), 44.0);
    }

    #[test]
    fn preferred_size_used_without_constraint() {
        let appearance =
            resolve_fixed_appearance("header", &view(80.0, None), Size::new(0.0, 60.0));
        assert_eq!(height_of(&appearance), 60.0);
    }

    #[test]
    fn frame_height_is_last_resort() {
        let appearance = resolve_fixed_appearance("header", &view(80.0, Some(0.0)), Size::ZERO);
        assert_eq!(height_of(&appearance), 80.0);
    }

    #[test]
    fn falls_back_to_zero_height() {
        let appearance = resolve_fixed_appearance("empty", &view(0.0, None), Size::ZERO);
        assert_eq!(height_of(&appearance), 0.0);
    }

    #[test]
    fn negative_candidates_are_skipped() {
        let appearance =
            resolve_fixed_appearance("odd", &view(30.0, Some(-10.0)), Size::new(0.0, -5.0));
        assert_eq!(height_of(&appearance), 30.0);
    }

    #[test]
    fn scrollable_slot_height_includes_insets() {
        let list: ScrollViewHandle = Rc::new(RefCell::new(List {
            content: Size::new(320.0, 500.0),
        }));
        let appearance = ItemAppearance::scrollable(list, EdgeInsets::vertical(10.0));

        assert!(appearance.is_scrollable());
        assert_eq!(appearance.slot_height(), 520.0);
    }
}
