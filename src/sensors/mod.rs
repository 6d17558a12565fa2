//! Host-facing motion sensors.
//!
//! Each directional gesture is mirrored onto one boolean "motion detected"
//! capability. The bridge only talks to the [`MotionCapability`] trait, so a
//! host can plug in its own sensor objects; [`MotionSensor`] is the default
//! implementation that forwards every write through a state pusher.

pub mod gesture_sensors;
pub mod motion_sensor;

pub use gesture_sensors::GestureSensors;
pub use motion_sensor::MotionSensor;

use std::sync::Arc;

/// Callback that pushes a new value to the host.
pub type StatePusher = Arc<dyn Fn(bool) + Send + Sync>;

/// Motion sensor surface seen by the bridge.
///
/// `read` backs the host's attribute reads. `write` is invoked by the bridge
/// for every transition of the sensor's gesture and must push the value to
/// the host.
pub trait MotionCapability: Send + Sync {
    fn read(&self) -> bool;

    fn write(&self, detected: bool);
}

