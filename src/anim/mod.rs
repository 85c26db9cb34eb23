//! Animation runtime: easing curves, animatable values, and the transition
//! registry.

pub mod easing;
pub mod transition;
pub mod value;

pub use easing::Easing;
pub use transition::{AnimProperty, Animator};
pub use value::StyleValue;
