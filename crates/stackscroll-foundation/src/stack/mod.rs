//! Vertical stack of child pages sharing a single outer scroll.

mod appearance;
mod containable;
mod controller;
mod projection;
mod stack_item;
mod view;

pub use appearance::{resolve_fixed_appearance, ItemAppearance};
pub use containable::StackContainable;
pub use controller::ScrollingStackController;
pub use projection::{project_inner_scroll, InnerProjection, InnerScrollPhase};
pub use stack_item::StackItem;
pub use view::{
    same_view, InnerScrollView, ScrollHost, ScrollHostHandle, ScrollViewHandle, StackView,
    ViewHandle,
};
