//! Assertion utilities for stack tests.

use stackscroll_foundation::StackItem;
use stackscroll_ui_graphics::Rect;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert that slots are stacked back to back from zero and that the outer
/// content height is their total.
pub fn assert_contiguous_layout(items: &[StackItem], content_height: f32) {
    let mut expected_y = 0.0;
    for (index, item) in items.iter().enumerate() {
        let rect = item.rect();
        assert_approx_eq(rect.y, expected_y, 1e-3, &format!("slot {index} top"));
        expected_y += rect.height;
    }
    assert_approx_eq(content_height, expected_y, 1e-3, "content height");
}

/// Assert that a frame covers no area.
pub fn assert_no_area(frame: Rect, msg: &str) {
    assert!(
        frame.area() == 0.0,
        "{}: expected an empty frame, got {:?}",
        msg,
        frame
    );
}
