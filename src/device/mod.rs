pub mod gesture_bridge;

pub use gesture_bridge::{GestureMotionBridge, RunningBridge};
