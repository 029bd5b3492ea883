use crate::config::SimConfig;
use crate::geometry::{Position, Rect};
use crate::policy::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleColor {
    Green,
    Blue,
}

/// An autonomous vehicle. Position state is mutated in place each tick; the
/// recorded path grows by one entry per tick and is only read back by the
/// post-run plot, never by the simulation.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub rect: Rect,
    pub color: VehicleColor,
    pub step: i32,
    pub sensor_range: i32,
    pub path: Vec<Position>,
}

impl Vehicle {
    pub const WIDTH: i32 = 40;
    pub const HEIGHT: i32 = 60;
    pub const STEP: i32 = 5;
    pub const SENSOR_RANGE: i32 = 100;

    pub fn new(x: i32, y: i32, color: VehicleColor) -> Self {
        Vehicle {
            rect: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            color,
            step: Self::STEP,
            sensor_range: Self::SENSOR_RANGE,
            path: Vec::new(),
        }
    }

    /// Applies one movement action. A move that would leave the world is a
    /// silent no-op for this tick, not an error.
    pub fn apply(&mut self, action: Action, config: &SimConfig) {
        match action {
            Action::Up if self.rect.y - self.step > 0 => {
                self.rect.y -= self.step;
            }
            Action::Down if self.rect.y + self.step + self.rect.height < config.height => {
                self.rect.y += self.step;
            }
            Action::Left if self.rect.x - self.step > 0 => {
                self.rect.x -= self.step;
            }
            Action::Right if self.rect.x + self.step + self.rect.width < config.width => {
                self.rect.x += self.step;
            }
            _ => {}
        }
    }

    pub fn position(&self) -> Position {
        self.rect.top_left()
    }

    pub fn record_position(&mut self) {
        self.path.push(self.position());
    }
}
