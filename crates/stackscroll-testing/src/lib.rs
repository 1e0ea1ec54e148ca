//! Testing utilities and harness for Stackscroll

pub mod assertions;
pub mod fakes;
pub mod pages;
pub mod rule;

pub use fakes::*;
pub use pages::*;
pub use rule::StackTestRule;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::fakes::*;
    pub use crate::pages::*;
    pub use crate::rule::StackTestRule;
}
