use crate::sensor::SensorReading;

/// One discrete movement command per tick. The boundary clamp in the motion
/// model makes the no-op implicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

/// Maps a sensor reading to a movement action. First matching rule wins; the
/// branch order is load-bearing because the flags are not mutually
/// exclusive. Lateral escape is preferred over retreat, and the immediate
/// side zones are consulted before the diagonal front zones.
pub fn decide(reading: SensorReading) -> Action {
    if !reading.front {
        Action::Up
    } else if !reading.left {
        Action::Left
    } else if !reading.right {
        Action::Right
    } else if !reading.left_front {
        Action::Left
    } else if !reading.right_front {
        Action::Right
    } else {
        Action::Down
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn reading(
        front: bool,
        left_front: bool,
        right_front: bool,
        left: bool,
        right: bool,
    ) -> SensorReading {
        SensorReading {
            front,
            left_front,
            right_front,
            left,
            right,
        }
    }

    #[rstest]
    #[case(false, false, false, false)]
    #[case(false, false, false, true)]
    #[case(false, false, true, false)]
    #[case(false, false, true, true)]
    #[case(false, true, false, false)]
    #[case(false, true, false, true)]
    #[case(false, true, true, false)]
    #[case(false, true, true, true)]
    #[case(true, false, false, false)]
    #[case(true, false, false, true)]
    #[case(true, false, true, false)]
    #[case(true, false, true, true)]
    #[case(true, true, false, false)]
    #[case(true, true, false, true)]
    #[case(true, true, true, false)]
    #[case(true, true, true, true)]
    fn a_clear_front_always_means_up(
        #[case] left_front: bool,
        #[case] right_front: bool,
        #[case] left: bool,
        #[case] right: bool,
    ) {
        let reading = reading(false, left_front, right_front, left, right);
        assert_eq!(decide(reading), Action::Up);
    }

    // Every combination of the other four flags with the front zone blocked,
    // in (left, right, left_front, right_front) order.
    #[rstest]
    #[case(false, false, false, false, Action::Left)]
    #[case(false, false, false, true, Action::Left)]
    #[case(false, false, true, false, Action::Left)]
    #[case(false, false, true, true, Action::Left)]
    #[case(false, true, false, false, Action::Left)]
    #[case(false, true, false, true, Action::Left)]
    #[case(false, true, true, false, Action::Left)]
    #[case(false, true, true, true, Action::Left)]
    #[case(true, false, false, false, Action::Right)]
    #[case(true, false, false, true, Action::Right)]
    #[case(true, false, true, false, Action::Right)]
    #[case(true, false, true, true, Action::Right)]
    #[case(true, true, false, false, Action::Left)]
    #[case(true, true, false, true, Action::Left)]
    #[case(true, true, true, false, Action::Right)]
    #[case(true, true, true, true, Action::Down)]
    fn a_blocked_front_follows_the_priority_chain(
        #[case] left: bool,
        #[case] right: bool,
        #[case] left_front: bool,
        #[case] right_front: bool,
        #[case] expected: Action,
    ) {
        let reading = reading(true, left_front, right_front, left, right);
        assert_eq!(decide(reading), expected);
    }
}
