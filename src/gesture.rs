//! Directional gesture identifiers.
//!
//! A gesture is one of four directions, plus the `None` sentinel used as the
//! "nothing active" state of the tracker. The lowercase string forms are the
//! values carried by the HTTP trigger (`action=up`, `action=left`, ...).

use strum::Display;

/// Gesture reported by the trigger source.
///
/// `None` is only ever a state value. It is never produced by the HTTP
/// decoder and has no sensor attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Gesture {
    #[default]
    None,
    Up,
    Right,
    Down,
    Left,
}

impl Gesture {
    /// Directional gestures in enumeration order.
    ///
    /// This order decides which gesture wins when a request target matches
    /// more than one, and it fixes the index of each sensor.
    pub const DIRECTIONS: [Gesture; 4] = [
        Gesture::Up,
        Gesture::Right,
        Gesture::Down,
        Gesture::Left,
    ];

    /// Returns true for the four directional gestures.
    pub fn is_direction(self) -> bool {
        self != Gesture::None
    }

    /// Position of this gesture in [`Gesture::DIRECTIONS`].
    pub fn index(self) -> Option<usize> {
        match self {
            Gesture::None => None,
            Gesture::Up => Some(0),
            Gesture::Right => Some(1),
            Gesture::Down => Some(2),
            Gesture::Left => Some(3),
        }
    }

    /// Substring the HTTP decoder looks for in a request target.
    pub fn action_pattern(self) -> &'static str {
        match self {
            Gesture::None => "action=none",
            Gesture::Up => "action=up",
            Gesture::Right => "action=right",
            Gesture::Down => "action=down",
            Gesture::Left => "action=left",
        }
    }
}
