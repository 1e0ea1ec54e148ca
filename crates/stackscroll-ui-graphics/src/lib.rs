//! Pure math/data for stack layout in Stackscroll
//!
//! This crate contains the geometry primitives shared by the stack
//! coordinator, its collaborators and the test doubles.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
