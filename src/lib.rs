//! Gesture Motion Bridge library.
//!
//! Tracks which directional gesture is active and mirrors it onto four
//! mutually-exclusive motion sensors, driven by HTTP trigger requests.

pub mod config;
pub mod device;
pub mod error;
pub mod gesture;
pub mod input;
pub mod sensors;
pub mod tracker;

pub use device::{GestureMotionBridge, RunningBridge};
pub use gesture::Gesture;
pub use tracker::{GestureTracker, SensorState, Transition};
