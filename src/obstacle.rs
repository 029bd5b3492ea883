use rand::Rng;

use crate::config::SimConfig;
use crate::geometry::Rect;

/// A drifting rectangular obstacle that bounces off the world bounds.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub rect: Rect,
    pub vx: i32,
    pub vy: i32,
}

impl Obstacle {
    pub fn new(x: i32, y: i32, width: i32, height: i32, vx: i32, vy: i32) -> Self {
        Obstacle {
            rect: Rect::new(x, y, width, height),
            vx,
            vy,
        }
    }

    /// Moves first, then reflects each velocity component whose post-move
    /// bounds left the world. An obstacle can therefore sit outside the
    /// world for one tick before its velocity flips.
    pub fn advance(&mut self, config: &SimConfig) {
        self.rect.x += self.vx;
        self.rect.y += self.vy;
        if self.rect.x < 0 || self.rect.right() > config.width {
            self.vx = -self.vx;
        }
        if self.rect.y < 0 || self.rect.bottom() > config.height {
            self.vy = -self.vy;
        }
    }
}

/// The default course: two horizontal drifters and one tall vertical one,
/// spread across the lanes.
pub fn fixed_layout() -> Vec<Obstacle> {
    vec![
        Obstacle::new(200, 150, 100, 50, 2, 0),
        Obstacle::new(400, 300, 150, 50, 0, 2),
        Obstacle::new(600, 100, 50, 200, -2, 0),
    ]
}

/// A fresh three-obstacle course with random poses, each drifting along a
/// single axis.
pub fn random_layout(config: &SimConfig, rng: &mut impl Rng) -> Vec<Obstacle> {
    (0..3)
        .map(|_| {
            let width = rng.gen_range(40..160).min(config.width - 1).max(1);
            let height = rng.gen_range(40..160).min(config.height - 1).max(1);
            let x = rng.gen_range(0..config.width - width);
            let y = rng.gen_range(0..config.height - height);
            let speed = rng.gen_range(1..4);
            match rng.gen_range(0..4) {
                0 => Obstacle::new(x, y, width, height, speed, 0),
                1 => Obstacle::new(x, y, width, height, -speed, 0),
                2 => Obstacle::new(x, y, width, height, 0, speed),
                _ => Obstacle::new(x, y, width, height, 0, -speed),
            }
        })
        .collect()
}
