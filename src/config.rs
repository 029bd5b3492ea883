use std::time::Duration;

use thiserror::Error;

/// World and loop configuration, checked once at startup. The per-tick logic
/// assumes a well-formed world and never re-validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub lane_count: i32,
    pub tick_rate: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("world size must be positive, got {width}x{height}")]
    DegenerateWorld { width: i32, height: i32 },
    #[error("lane count must be positive, got {0}")]
    NoLanes(i32),
    #[error("tick rate must be positive")]
    ZeroTickRate,
    #[error("vehicle at ({x}, {y}) has degenerate size, step or sensor range")]
    InvalidVehicle { x: i32, y: i32 },
    #[error("obstacle at ({x}, {y}) has degenerate size")]
    InvalidObstacle { x: i32, y: i32 },
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: 800,
            height: 600,
            lane_count: 4,
            tick_rate: 30,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::DegenerateWorld {
                width: self.width,
                height: self.height,
            });
        }
        if self.lane_count <= 0 {
            return Err(ConfigError::NoLanes(self.lane_count));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }

    pub fn lane_width(&self) -> i32 {
        self.width / self.lane_count
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(1000 / self.tick_rate as u64)
    }
}
