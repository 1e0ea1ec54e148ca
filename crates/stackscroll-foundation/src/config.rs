//! Tunables for the stack coordinator.

use stackscroll_ui_graphics::EdgeInsets;

/// Which inset decides when a scrollable child pins to the viewport top.
///
/// The child pins once the outer offset passes `slot.min_y + threshold`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinThreshold {
    /// Pin as soon as the inner content's top edge leaves the viewport.
    #[default]
    TopInset,
    /// Compare against the bottom inset instead. Identical to `TopInset` for
    /// symmetric insets; kept for hosts that depend on the older boundary.
    BottomInset,
}

impl PinThreshold {
    pub fn resolve(self, insets: &EdgeInsets) -> f32 {
        match self {
            Self::TopInset => insets.top,
            Self::BottomInset => insets.bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    pub pin_threshold: PinThreshold,
    /// Keep a leading inner frame from growing past the inner content.
    pub clamp_leading_to_content: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            pin_threshold: PinThreshold::TopInset,
            clamp_leading_to_content: true,
        }
    }
}

impl StackConfig {
    pub fn with_pin_threshold(mut self, pin_threshold: PinThreshold) -> Self {
        self.pin_threshold = pin_threshold;
        self
    }

    pub fn with_clamp_leading_to_content(mut self, clamp: bool) -> Self {
        self.clamp_leading_to_content = clamp;
        self
    }
}
