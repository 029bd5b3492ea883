use crate::config::SimConfig;
use crate::geometry::{overlaps_x, overlaps_y, Position};
use crate::obstacle::Obstacle;
use crate::vehicle::Vehicle;

/// One tick's proximity flags. Recomputed from scratch every tick; the flags
/// are independent and not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReading {
    pub front: bool,
    pub left_front: bool,
    pub right_front: bool,
    pub left: bool,
    pub right: bool,
}

/// Evaluates the five sensor zones against every obstacle and OR-reduces the
/// results. Pure: no state survives between ticks, and obstacle order cannot
/// change the outcome.
///
/// The detection bands are unclamped at the world border; only the drawn
/// segments from [`sensor_lines`] clamp.
pub fn sense(vehicle: &Vehicle, obstacles: &[Obstacle]) -> SensorReading {
    let mut reading = SensorReading::default();
    let v = &vehicle.rect;
    let range = vehicle.sensor_range;

    for obstacle in obstacles {
        let o = &obstacle.rect;

        // Vertical band reaching `range` above the vehicle; the obstacle must
        // sit strictly above the vehicle's top edge.
        let in_front_band = o.bottom() > v.y - range && o.y < v.y;
        // Horizontal reach `range` past the vehicle's left or right edge.
        let reaches_left = o.right() > v.x - range && o.x < v.x;
        let reaches_right = v.right() + range > o.x && v.right() < o.right();

        if overlaps_x(v, o) && in_front_band {
            reading.front = true;
        }
        if in_front_band {
            if reaches_left {
                reading.left_front = true;
            }
            if reaches_right {
                reading.right_front = true;
            }
        }
        if overlaps_y(v, o) {
            if reaches_left {
                reading.left = true;
            }
            if reaches_right {
                reading.right = true;
            }
        }
    }

    reading
}

/// Endpoints of the five drawn sensor segments, in the order front,
/// left-front, right-front, left, right. The clamp to the world bounds here
/// is cosmetic only and never feeds back into [`sense`].
pub fn sensor_lines(vehicle: &Vehicle, config: &SimConfig) -> [(Position, Position); 5] {
    let v = &vehicle.rect;
    let range = vehicle.sensor_range;
    [
        (
            Position {
                x: v.x + v.width / 2,
                y: v.y,
            },
            Position {
                x: v.x + v.width / 2,
                y: (v.y - range).max(0),
            },
        ),
        (
            Position { x: v.x, y: v.y },
            Position {
                x: (v.x - range).max(0),
                y: (v.y - range).max(0),
            },
        ),
        (
            Position {
                x: v.right(),
                y: v.y,
            },
            Position {
                x: (v.right() + range).min(config.width),
                y: (v.y - range).max(0),
            },
        ),
        (
            Position {
                x: v.x,
                y: v.y + v.height / 2,
            },
            Position {
                x: (v.x - range).max(0),
                y: v.y + v.height / 2,
            },
        ),
        (
            Position {
                x: v.right(),
                y: v.y + v.height / 2,
            },
            Position {
                x: (v.right() + range).min(config.width),
                y: v.y + v.height / 2,
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::VehicleColor;

    fn vehicle_at(x: i32, y: i32) -> Vehicle {
        Vehicle::new(x, y, VehicleColor::Green)
    }

    #[test]
    fn empty_world_reads_all_clear() {
        let reading = sense(&vehicle_at(300, 500), &[]);
        assert_eq!(reading, SensorReading::default());
    }

    #[test]
    fn obstacle_dead_ahead_trips_only_the_front_zone() {
        let vehicle = vehicle_at(300, 500);
        let obstacles = vec![Obstacle::new(300, 420, 40, 40, 0, 0)];
        let reading = sense(&vehicle, &obstacles);
        assert!(reading.front);
        assert!(!reading.left_front);
        assert!(!reading.right_front);
        assert!(!reading.left);
        assert!(!reading.right);
    }

    #[test]
    fn side_obstacles_trip_the_lateral_zones() {
        let vehicle = vehicle_at(300, 500);

        // Beside and slightly below the vehicle's top edge, so the front band
        // stays silent.
        let left_neighbor = vec![Obstacle::new(250, 505, 40, 40, 0, 0)];
        let reading = sense(&vehicle, &left_neighbor);
        assert_eq!(
            reading,
            SensorReading {
                left: true,
                ..SensorReading::default()
            }
        );

        let right_neighbor = vec![Obstacle::new(350, 505, 40, 40, 0, 0)];
        let reading = sense(&vehicle, &right_neighbor);
        assert_eq!(
            reading,
            SensorReading {
                right: true,
                ..SensorReading::default()
            }
        );
    }

    #[test]
    fn diagonal_obstacle_trips_the_front_corner_zone() {
        let vehicle = vehicle_at(300, 500);
        // Above and to the left, outside the vehicle's own horizontal span.
        let obstacles = vec![Obstacle::new(220, 430, 40, 40, 0, 0)];
        let reading = sense(&vehicle, &obstacles);
        assert!(reading.left_front);
        assert!(!reading.front);
        assert!(!reading.left);
    }

    #[test]
    fn sensing_is_pure_and_order_independent() {
        let vehicle = vehicle_at(300, 500);
        let a = Obstacle::new(300, 420, 40, 40, 2, 0);
        let b = Obstacle::new(250, 505, 40, 40, 0, 2);

        let forward = sense(&vehicle, &[a.clone(), b.clone()]);
        let reversed = sense(&vehicle, &[b.clone(), a.clone()]);
        assert_eq!(forward, reversed);

        // Same inputs twice, same reading.
        assert_eq!(forward, sense(&vehicle, &[a, b]));
    }

    #[test]
    fn detection_band_is_not_clamped_at_the_world_edge() {
        let config = SimConfig::default();
        // An obstacle mid-bounce, entirely left of x = 0. The detection band
        // extends past the border and still sees it ...
        let vehicle = vehicle_at(10, 500);
        let obstacles = vec![Obstacle::new(-60, 505, 50, 40, -2, 0)];
        let reading = sense(&vehicle, &obstacles);
        assert!(reading.left);

        // ... while the drawn left segment stops at the border.
        let lines = sensor_lines(&vehicle, &config);
        assert_eq!(lines[3].0, Position { x: 10, y: 530 });
        assert_eq!(lines[3].1, Position { x: 0, y: 530 });
    }

    #[test]
    fn drawn_segments_clamp_to_the_world() {
        let config = SimConfig::default();
        let vehicle = vehicle_at(760, 50);
        let lines = sensor_lines(&vehicle, &config);

        // Front reaches the top border.
        assert_eq!(lines[0].0, Position { x: 780, y: 50 });
        assert_eq!(lines[0].1, Position { x: 780, y: 0 });
        // Right-front reaches the top-right corner region.
        assert_eq!(lines[2].1, Position { x: 800, y: 0 });
        // Right stops at the right border.
        assert_eq!(lines[4].0, Position { x: 800, y: 80 });
        assert_eq!(lines[4].1, Position { x: 800, y: 80 });
    }
}
