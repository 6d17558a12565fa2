//! The four motion capabilities of a sensor group, keyed by gesture.

use super::{MotionCapability, MotionSensor};
use crate::gesture::Gesture;
use crate::tracker::{SensorState, Transition};
use std::sync::Arc;

/// Capability handles for `Up`, `Right`, `Down` and `Left`, stored in
/// [`Gesture::DIRECTIONS`] order.
#[derive(Clone)]
pub struct GestureSensors {
    sensors: [Arc<dyn MotionCapability>; 4],
}

impl GestureSensors {
    /// Wrap host-provided capabilities, given in [`Gesture::DIRECTIONS`] order.
    pub fn new(sensors: [Arc<dyn MotionCapability>; 4]) -> Self {
        Self { sensors }
    }

    /// Default [`MotionSensor`]s for `group_name`, initialized from `state`.
    pub fn motion(group_name: &str, state: &SensorState) -> Self {
        Self::from_motion_sensors(&MotionSensor::for_gestures(group_name, state))
    }

    pub fn from_motion_sensors(sensors: &[Arc<MotionSensor>; 4]) -> Self {
        Self::new(sensors.clone().map(|sensor| sensor as Arc<dyn MotionCapability>))
    }

    /// Capability of a directional gesture. `Gesture::None` has none.
    pub fn get(&self, gesture: Gesture) -> Option<&Arc<dyn MotionCapability>> {
        gesture.index().map(|idx| &self.sensors[idx])
    }

    /// `(gesture, capability)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Gesture, &Arc<dyn MotionCapability>)> {
        Gesture::DIRECTIONS.into_iter().zip(self.sensors.iter())
    }

    /// Write each transition to its gesture's capability, in order.
    pub fn apply(&self, transitions: &[Transition]) {
        for transition in transitions {
            if let Some(sensor) = self.get(transition.gesture) {
                sensor.write(transition.active);
            }
        }
    }

    /// Read every capability back.
    pub fn snapshot(&self) -> SensorState {
        SensorState::from_flags(self.sensors.each_ref().map(|sensor| sensor.read()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    /// Capability that records every write it receives.
    #[derive(Default)]
    struct RecordingSensor {
        writes: Mutex<Vec<bool>>,
    }

    impl MotionCapability for RecordingSensor {
        fn read(&self) -> bool {
            self.writes.lock().last().copied().unwrap_or(false)
        }

        fn write(&self, detected: bool) {
            self.writes.lock().push(detected);
        }
    }

    fn recording() -> ([Arc<RecordingSensor>; 4], GestureSensors) {
        let recorders: [Arc<RecordingSensor>; 4] = Default::default();
        let sensors = GestureSensors::new(
            recorders
                .clone()
                .map(|r| r as Arc<dyn MotionCapability>),
        );
        (recorders, sensors)
    }

    #[test]
    fn test_apply_writes_in_order() {
        let (recorders, sensors) = recording();
        sensors.apply(&[
            Transition::deactivate(Gesture::Up),
            Transition::activate(Gesture::Left),
        ]);

        assert_eq!(*recorders[0].writes.lock(), vec![false]);
        assert!(recorders[1].writes.lock().is_empty());
        assert!(recorders[2].writes.lock().is_empty());
        assert_eq!(*recorders[3].writes.lock(), vec![true]);

        let snapshot = sensors.snapshot();
        assert_eq!(snapshot.active(), Some(Gesture::Left));
    }

    #[test]
    fn test_none_has_no_capability() {
        let (recorders, sensors) = recording();
        assert!(sensors.get(Gesture::None).is_none());

        sensors.apply(&[Transition::activate(Gesture::None)]);
        assert!(recorders.iter().all(|r| r.writes.lock().is_empty()));
    }

    #[test]
    fn test_motion_sensors_start_from_state() {
        let sensors = GestureSensors::motion("Desk", &SensorState::with_active(Gesture::Down));
        let order: Vec<_> = sensors.iter().map(|(gesture, _)| gesture).collect();
        assert_eq!(order, Gesture::DIRECTIONS.to_vec());
        assert_eq!(sensors.snapshot(), SensorState::with_active(Gesture::Down));
    }
}
