//! Default motion sensor capability.
//!
//! Provides thread-safe shared state for one gesture's "motion detected"
//! flag. Reads come from the host, writes come from the bridge and are
//! pushed to the host through the registered [`StatePusher`].

use super::{MotionCapability, StatePusher};
use crate::gesture::Gesture;
use crate::tracker::SensorState;
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Fixed prefix of the per-gesture subtype identifier. The gesture's index
/// in [`Gesture::DIRECTIONS`] is appended to it.
pub const SUBTYPE_PREFIX: &str = "7e760131-9120-4dd4-a76a-a105aabbeb52";

/// Thread-safe motion sensor for a single directional gesture.
///
/// Every write is pushed to the host, including writes that re-assert the
/// current value.
pub struct MotionSensor {
    gesture: Gesture,
    name: String,
    subtype: String,
    state: AtomicBool,
    pusher: RwLock<Option<StatePusher>>,
}

impl MotionSensor {
    /// `idx` is the gesture's position in [`Gesture::DIRECTIONS`].
    fn new(group_name: &str, idx: usize, initial: bool) -> Self {
        let gesture = Gesture::DIRECTIONS[idx];
        Self {
            gesture,
            name: format!("{} {} sensor", group_name, gesture),
            subtype: format!("{}{}", SUBTYPE_PREFIX, idx),
            state: AtomicBool::new(initial),
            pusher: RwLock::new(None),
        }
    }

    /// One sensor per directional gesture, initialized from `state`.
    pub fn for_gestures(group_name: &str, state: &SensorState) -> [Arc<MotionSensor>; 4] {
        std::array::from_fn(|idx| {
            let initial = state.get(Gesture::DIRECTIONS[idx]);
            Arc::new(MotionSensor::new(group_name, idx, initial))
        })
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Display name, e.g. `"Hallway up sensor"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stable identifier distinguishing the four sensors of a group.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Register the callback that pushes values to the host.
    pub fn set_state_pusher(&self, pusher: StatePusher) {
        *self.pusher.write() = Some(pusher);
    }
}

impl MotionCapability for MotionSensor {
    fn read(&self) -> bool {
        self.state.load(Ordering::SeqCst)
    }

    fn write(&self, detected: bool) {
        self.state.store(detected, Ordering::SeqCst);
        debug!("[Sensor] setting {} sensor to {}", self.gesture, detected);
        let pusher = self.pusher.read().clone();
        if let Some(pusher) = pusher {
            pusher(detected);
        }
    }
}
