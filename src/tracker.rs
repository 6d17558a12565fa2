//! Mutually-exclusive gesture state.
//!
//! The tracker remembers the last triggered gesture. Every directional
//! gesture has a derived "motion detected" flag which is `true` only for
//! that last gesture, so at most one flag is ever set.

use crate::gesture::Gesture;
use log::{debug, warn};

/// One sensor flag changing as the result of a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub gesture: Gesture,
    pub active: bool,
}

impl Transition {
    pub fn activate(gesture: Gesture) -> Self {
        Self {
            gesture,
            active: true,
        }
    }

    pub fn deactivate(gesture: Gesture) -> Self {
        Self {
            gesture,
            active: false,
        }
    }
}

/// Motion flag of each directional gesture, indexed in
/// [`Gesture::DIRECTIONS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorState {
    flags: [bool; 4],
}

impl SensorState {
    /// State where only `active` is set. `Gesture::None` clears every flag.
    pub fn with_active(active: Gesture) -> Self {
        Self {
            flags: Gesture::DIRECTIONS.map(|gesture| gesture == active),
        }
    }

    /// Build a state from raw flags, e.g. read back from host sensors.
    pub fn from_flags(flags: [bool; 4]) -> Self {
        Self { flags }
    }

    /// Flag for `gesture`. `Gesture::None` has no flag and reads `false`.
    pub fn get(&self, gesture: Gesture) -> bool {
        gesture.index().is_some_and(|idx| self.flags[idx])
    }

    /// The first gesture whose flag is set.
    pub fn active(&self) -> Option<Gesture> {
        self.iter().find(|(_, active)| *active).map(|(gesture, _)| gesture)
    }

    /// Number of set flags. Never more than one for tracker-derived state.
    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|flag| **flag).count()
    }

    /// `(gesture, flag)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Gesture, bool)> + '_ {
        Gesture::DIRECTIONS.into_iter().zip(self.flags.iter().copied())
    }
}

/// Tracks which gesture is currently active.
#[derive(Debug, Default)]
pub struct GestureTracker {
    last_gesture: Gesture,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_gesture(&self) -> Gesture {
        self.last_gesture
    }

    /// Record `gesture` as the active one and return the sensor transitions.
    ///
    /// The previous gesture is deactivated first when it differs from the new
    /// one. Re-triggering the active gesture emits its activation again
    /// without a deactivation. `Gesture::None` is not a trigger and yields no
    /// transitions.
    pub fn trigger(&mut self, gesture: Gesture) -> Vec<Transition> {
        if !gesture.is_direction() {
            warn!("[Tracker] Ignoring trigger without a direction");
            return Vec::new();
        }

        let mut transitions = Vec::with_capacity(2);
        let previous = self.last_gesture;
        if previous.is_direction() && previous != gesture {
            transitions.push(Transition::deactivate(previous));
        }

        self.last_gesture = gesture;
        transitions.push(Transition::activate(gesture));

        debug!("[Tracker] {} -> {}", previous, gesture);
        transitions
    }

    /// Current flag of every directional gesture.
    pub fn current_state(&self) -> SensorState {
        SensorState::with_active(self.last_gesture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_has_nothing_active() {
        let tracker = GestureTracker::new();
        assert_eq!(tracker.last_gesture(), Gesture::None);

        let state = tracker.current_state();
        assert_eq!(state.active(), None);
        assert_eq!(state.active_count(), 0);
        for gesture in Gesture::DIRECTIONS {
            assert!(!state.get(gesture));
        }
    }

    #[test]
    fn test_first_trigger_only_activates() {
        let mut tracker = GestureTracker::new();
        let transitions = tracker.trigger(Gesture::Right);
        assert_eq!(transitions, vec![Transition::activate(Gesture::Right)]);
        assert_eq!(tracker.last_gesture(), Gesture::Right);
        assert_eq!(tracker.current_state().active(), Some(Gesture::Right));
    }

    #[test]
    fn test_new_gesture_deactivates_previous_first() {
        let mut tracker = GestureTracker::new();
        tracker.trigger(Gesture::Up);

        let transitions = tracker.trigger(Gesture::Left);
        assert_eq!(
            transitions,
            vec![
                Transition::deactivate(Gesture::Up),
                Transition::activate(Gesture::Left),
            ]
        );

        let state = tracker.current_state();
        assert!(!state.get(Gesture::Up));
        assert!(state.get(Gesture::Left));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_repeat_trigger_reasserts_activation() {
        let mut tracker = GestureTracker::new();
        tracker.trigger(Gesture::Down);

        let transitions = tracker.trigger(Gesture::Down);
        assert_eq!(transitions, vec![Transition::activate(Gesture::Down)]);
        assert_eq!(tracker.current_state().active(), Some(Gesture::Down));
    }

    #[test]
    fn test_none_is_not_a_trigger() {
        let mut tracker = GestureTracker::new();
        tracker.trigger(Gesture::Up);

        assert!(tracker.trigger(Gesture::None).is_empty());
        assert_eq!(tracker.last_gesture(), Gesture::Up);
    }

    #[test]
    fn test_query_is_stable_without_trigger() {
        let mut tracker = GestureTracker::new();
        tracker.trigger(Gesture::Left);
        assert_eq!(tracker.current_state(), tracker.current_state());
    }

    #[test]
    fn test_sensor_state_helpers() {
        let state = SensorState::from_flags([false, true, false, true]);
        assert_eq!(state.active(), Some(Gesture::Right));
        assert_eq!(state.active_count(), 2);
        assert!(!state.get(Gesture::None));

        let pairs: Vec<_> = SensorState::with_active(Gesture::Down).iter().collect();
        assert_eq!(
            pairs,
            vec![
                (Gesture::Up, false),
                (Gesture::Right, false),
                (Gesture::Down, true),
                (Gesture::Left, false),
            ]
        );
        assert_eq!(SensorState::with_active(Gesture::None), SensorState::default());
    }
}
