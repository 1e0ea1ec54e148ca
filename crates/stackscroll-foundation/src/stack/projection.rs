//! Reprojection of the outer scroll onto a scrollable child.
//!
//! The outer scroll is the only real scroll surface. For each scrollable child
//! the visible part of its slot is mapped to an inner frame (in the child's
//! own coordinates) and an inner content offset, which together look like the
//! outer scroll continuing into the child's content.

use stackscroll_ui_graphics::{EdgeInsets, Point, Rect, Size};

use crate::config::StackConfig;

/// Where a scrollable child stands relative to the outer viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InnerScrollPhase {
    /// The slot does not intersect the viewport. The inner view has no area
    /// and may drop its rendered content.
    Hidden,
    /// The slot's top is above the viewport. The inner view sticks to the
    /// viewport top and scrolls its content.
    Pinned,
    /// The inner content's top is inside the viewport. The inner view is
    /// revealed from its own top with a zero offset.
    Leading,
}

/// Frame and offset to apply to a scrollable child's inner view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InnerProjection {
    pub phase: InnerScrollPhase,
    /// Frame relative to the child's root view.
    pub frame: Rect,
    /// Inner offset, `None` when the current offset should be left alone.
    pub content_offset: Option<Point>,
}

impl InnerProjection {
    fn hidden() -> Self {
        Self {
            phase: InnerScrollPhase::Hidden,
            frame: Rect::ZERO,
            content_offset: None,
        }
    }
}

/// Computes the inner frame and offset of one scrollable child.
///
/// * `slot` - ideal rect of the child in outer content coordinates
/// * `insets` - padding reserved around the inner content inside the slot
/// * `content_height` - current height of the inner content
/// * `visible_rect` - outer viewport translated to the outer offset
pub fn project_inner_scroll(
    slot: Rect,
    insets: EdgeInsets,
    content_height: f32,
    visible_rect: Rect,
    config: &StackConfig,
) -> InnerProjection {
    let item_visible = visible_rect.intersection(&slot);
    if item_visible.height == 0.0 {
        return InnerProjection::hidden();
    }

    let outer_offset_y = visible_rect.min_y();
    let viewport = visible_rect.size();

    if outer_offset_y > slot.min_y() + config.pin_threshold.resolve(&insets) {
        let inner_offset_y = outer_offset_y - slot.min_y() - insets.top;
        let visible_inner_height = content_height - inner_offset_y;

        let size = if visible_inner_height < viewport.height {
            // Running out of content: shrink towards the content's end.
            Size::new(
                viewport.width,
                visible_inner_height.min(item_visible.height).max(0.0),
            )
        } else {
            item_visible.size()
        };

        InnerProjection {
            phase: InnerScrollPhase::Pinned,
            frame: Rect::from_origin_size(Point::new(0.0, inner_offset_y + insets.top), size),
            content_offset: Some(Point::new(0.0, inner_offset_y)),
        }
    } else {
        let offset_into_viewport = (slot.min_y() + insets.top) - outer_offset_y;
        let mut visible_height = viewport.height - offset_into_viewport;
        if config.clamp_leading_to_content {
            visible_height = visible_height.min(content_height).max(0.0);
        }

        InnerProjection {
            phase: InnerScrollPhase::Leading,
            frame: Rect::new(0.0, insets.top, viewport.width, visible_height),
            content_offset: Some(Point::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PinThreshold;

    const WIDTH: f32 = 320.0;
    const VIEWPORT_HEIGHT: f32 = 300.0;

    fn viewport_at(offset_y: f32) -> Rect {
        Rect::new(0.0, offset_y, WIDTH, VIEWPORT_HEIGHT)
    }

    fn list_slot(y: f32) -> Rect {
        // 500 of content with 10 above and 10 below.
        Rect::new(0.0, y, WIDTH, 520.0)
    }

    fn project(slot: Rect, offset_y: f32) -> InnerProjection {
        project_inner_scroll(
            slot,
            EdgeInsets::vertical(10.0),
            500.0,
            viewport_at(offset_y),
            &StackConfig::default(),
        )
    }

    #[test]
    fn leading_at_top_of_stack() {
        let projection = project(list_slot(0.0), 0.0);

        assert_eq!(projection.phase, InnerScrollPhase::Leading);
        assert_eq!(projection.frame, Rect::new(0.0, 10.0, WIDTH, 290.0));
        assert_eq!(projection.content_offset, Some(Point::ZERO));
    }

    #[test]
    fn pinned_once_scrolled_past_top_inset() {
        let projection = project(list_slot(0.0), 100.0);

        assert_eq!(projection.phase, InnerScrollPhase::Pinned);
        assert_eq!(projection.frame, Rect::new(0.0, 100.0, WIDTH, 300.0));
        assert_eq!(projection.content_offset, Some(Point::new(0.0, 90.0)));
    }

    #[test]
    fn pinned_child_shrinks_near_content_end() {
        let projection = project(list_slot(0.0), 300.0);

        assert_eq!(projection.phase, InnerScrollPhase::Pinned);
        // 500 - 290 of content left, the slot still shows 220.
        assert_eq!(projection.frame, Rect::new(0.0, 300.0, WIDTH, 210.0));
        assert_eq!(projection.content_offset, Some(Point::new(0.0, 290.0)));
    }

    #[test]
    fn pinned_child_inside_bottom_inset_has_no_height() {
        let projection = project(list_slot(0.0), 515.0);

        assert_eq!(projection.phase, InnerScrollPhase::Pinned);
        assert_eq!(projection.frame.height, 0.0);
    }

    #[test]
    fn leading_child_partially_below_viewport() {
        let projection = project(list_slot(200.0), 0.0);

        assert_eq!(projection.phase, InnerScrollPhase::Leading);
        // Inner content starts 210 into the viewport.
        assert_eq!(projection.frame, Rect::new(0.0, 10.0, WIDTH, 90.0));
    }

    #[test]
    fn leading_frame_clamped_to_short_content() {
        let projection = project_inner_scroll(
            Rect::new(0.0, 0.0, WIDTH, 100.0),
            EdgeInsets::vertical(10.0),
            80.0,
            viewport_at(0.0),
            &StackConfig::default(),
        );

        assert_eq!(projection.frame, Rect::new(0.0, 10.0, WIDTH, 80.0));
    }

    #[test]
    fn unclamped_leading_frame_fills_viewport() {
        let config = StackConfig::default().with_clamp_leading_to_content(false);
        let projection = project_inner_scroll(
            Rect::new(0.0, 0.0, WIDTH, 100.0),
            EdgeInsets::vertical(10.0),
            80.0,
            viewport_at(0.0),
            &config,
        );

        assert_eq!(projection.frame, Rect::new(0.0, 10.0, WIDTH, 290.0));
    }

    #[test]
    fn hidden_above_and_below() {
        let above = project(list_slot(0.0), 600.0);
        let below = project(list_slot(400.0), 0.0);
        let touching = project(list_slot(300.0), 0.0);

        for projection in [above, below, touching] {
            assert_eq!(projection.phase, InnerScrollPhase::Hidden);
            assert_eq!(projection.frame.area(), 0.0);
            assert_eq!(projection.content_offset, None);
        }
    }

    #[test]
    fn bottom_inset_threshold_pins_earlier_with_asymmetric_insets() {
        let insets = EdgeInsets::from_components(0.0, 50.0, 0.0, 20.0);
        let slot = Rect::new(0.0, 0.0, WIDTH, 570.0);

        let top = project_inner_scroll(slot, insets, 500.0, viewport_at(30.0), &StackConfig::default());
        let bottom = project_inner_scroll(
            slot,
            insets,
            500.0,
            viewport_at(30.0),
            &StackConfig::default().with_pin_threshold(PinThreshold::BottomInset),
        );

        assert_eq!(top.phase, InnerScrollPhase::Leading);
        assert_eq!(top.frame, Rect::new(0.0, 50.0, WIDTH, 280.0));
        // The older boundary pins while the content top is still on screen,
        // producing a negative inner offset.
        assert_eq!(bottom.phase, InnerScrollPhase::Pinned);
        assert_eq!(bottom.content_offset, Some(Point::new(0.0, -20.0)));
    }

    #[test]
    fn projection_is_deterministic() {
        let first = project(list_slot(120.0), 250.0);
        let second = project(list_slot(120.0), 250.0);
        assert_eq!(first, second);
    }
}
