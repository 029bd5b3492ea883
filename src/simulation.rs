use rand::Rng;

use crate::config::{ConfigError, SimConfig};
use crate::obstacle::{self, Obstacle};
use crate::policy;
use crate::sensor;
use crate::stats::RunStats;
use crate::vehicle::{Vehicle, VehicleColor};

/// Owns the whole world: both vehicles, the obstacle set and the run
/// counters. Everything is updated sequentially inside [`Simulation::step`].
pub struct Simulation {
    pub config: SimConfig,
    pub vehicles: Vec<Vehicle>,
    pub obstacles: Vec<Obstacle>,
    pub stats: RunStats,
}

impl Simulation {
    /// The standard two-vehicle run against the default obstacle course.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lane_width = config.lane_width();
        let vehicles = vec![
            Vehicle::new(
                2 * lane_width - lane_width / 2,
                config.height - 100,
                VehicleColor::Green,
            ),
            Vehicle::new(
                3 * lane_width - lane_width / 2,
                config.height - 150,
                VehicleColor::Blue,
            ),
        ];
        Self::with_actors(config, vehicles, obstacle::fixed_layout())
    }

    pub fn with_actors(
        config: SimConfig,
        vehicles: Vec<Vehicle>,
        obstacles: Vec<Obstacle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        for vehicle in &vehicles {
            if vehicle.rect.width <= 0
                || vehicle.rect.height <= 0
                || vehicle.step <= 0
                || vehicle.sensor_range < 0
            {
                return Err(ConfigError::InvalidVehicle {
                    x: vehicle.rect.x,
                    y: vehicle.rect.y,
                });
            }
        }
        for obstacle in &obstacles {
            if obstacle.rect.width <= 0 || obstacle.rect.height <= 0 {
                return Err(ConfigError::InvalidObstacle {
                    x: obstacle.rect.x,
                    y: obstacle.rect.y,
                });
            }
        }
        Ok(Simulation {
            config,
            vehicles,
            obstacles,
            stats: RunStats::new(),
        })
    }

    /// One tick. Every vehicle senses against the obstacle positions from the
    /// start of the tick and never against the other vehicle, then the
    /// obstacles advance, then each vehicle's position is recorded. A tick
    /// always runs to completion.
    pub fn step(&mut self) {
        for i in 0..self.vehicles.len() {
            let reading = sensor::sense(&self.vehicles[i], &self.obstacles);
            let action = policy::decide(reading);
            self.vehicles[i].apply(action, &self.config);
            self.stats.record_action(action);
        }

        for obstacle in &mut self.obstacles {
            obstacle.advance(&self.config);
        }

        for vehicle in &mut self.vehicles {
            vehicle.record_position();
        }
        self.stats.record_tick();
    }

    /// Swaps the whole obstacle set for a random course. Safe between ticks
    /// only; the count stays fixed within a tick.
    pub fn shuffle_obstacles(&mut self, rng: &mut impl Rng) {
        self.obstacles = obstacle::random_layout(&self.config, rng);
    }
}
