pub mod pinch;
pub mod touch;

pub use pinch::PinchTracker;
pub use touch::{Gesture, TouchTracker};
