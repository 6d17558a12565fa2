use crate::gesture::Gesture;

/// Find the gesture named by a request target.
///
/// Checks each directional gesture in enumeration order for an
/// `action=<gesture>` substring anywhere in `target`, path included. The
/// first gesture in that order wins, regardless of where it appears in the
/// string.
pub fn decode_gesture(target: &str) -> Option<Gesture> {
    Gesture::DIRECTIONS
        .into_iter()
        .find(|gesture| target.contains(gesture.action_pattern()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_parameter() {
        assert_eq!(decode_gesture("/?action=up"), Some(Gesture::Up));
        assert_eq!(decode_gesture("/trigger?action=right"), Some(Gesture::Right));
        assert_eq!(decode_gesture("/?device=1&action=down"), Some(Gesture::Down));
        assert_eq!(decode_gesture("/?action=left&x=2"), Some(Gesture::Left));
    }

    #[test]
    fn test_enumeration_order_wins() {
        assert_eq!(decode_gesture("/?action=left&action=up"), Some(Gesture::Up));
        assert_eq!(
            decode_gesture("/?action=down&action=right"),
            Some(Gesture::Right)
        );
    }

    #[test]
    fn test_substring_match_outside_query() {
        assert_eq!(decode_gesture("/hooks/action=left"), Some(Gesture::Left));
        assert_eq!(decode_gesture("/?reaction=upward"), Some(Gesture::Up));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(decode_gesture("/"), None);
        assert_eq!(decode_gesture(""), None);
        assert_eq!(decode_gesture("/?action=none"), None);
        assert_eq!(decode_gesture("/?action=UP"), None);
        assert_eq!(decode_gesture("/?gesture=up"), None);
    }
}
