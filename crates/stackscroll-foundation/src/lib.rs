//! Stacked pages, one scroll, for Stackscroll
//!
//! This crate contains the stack coordinator that lays child pages out one
//! below the other inside a single outer scroll and drives the inner scroll
//! of list-like children from the outer scroll position.

pub mod config;
pub mod error;
pub mod stack;

pub use config::{PinThreshold, StackConfig};
pub use error::StackError;
pub use stack::*;

pub mod prelude {
    pub use crate::config::{PinThreshold, StackConfig};
    pub use crate::error::StackError;
    pub use crate::stack::{
        InnerScrollPhase, InnerScrollView, ItemAppearance, ScrollHost, ScrollingStackController,
        StackContainable, StackView, ViewHandle,
    };
    pub use stackscroll_ui_graphics::prelude::*;
}
