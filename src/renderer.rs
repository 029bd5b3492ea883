use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::config::SimConfig;
use crate::obstacle::Obstacle;
use crate::sensor;
use crate::simulation::Simulation;
use crate::vehicle::{Vehicle, VehicleColor};

pub struct Renderer;

impl Renderer {
    pub fn render_frame(canvas: &mut Canvas<Window>, sim: &Simulation) -> Result<(), String> {
        Self::render_road(canvas, &sim.config)?;
        for obstacle in &sim.obstacles {
            Self::render_obstacle(canvas, obstacle)?;
        }
        for vehicle in &sim.vehicles {
            Self::render_vehicle(canvas, vehicle)?;
            Self::render_sensors(canvas, vehicle, &sim.config)?;
        }
        canvas.present();
        Ok(())
    }

    fn render_road(canvas: &mut Canvas<Window>, config: &SimConfig) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(169, 169, 169)); // Asphalt gray
        canvas.clear();

        // Lane separator lines
        canvas.set_draw_color(Color::RGB(255, 255, 255));
        for i in 1..config.lane_count {
            let x = i * config.lane_width();
            canvas.fill_rect(Rect::new(x - 1, 0, 2, config.height as u32))?;
        }

        Ok(())
    }

    fn render_vehicle(canvas: &mut Canvas<Window>, vehicle: &Vehicle) -> Result<(), String> {
        canvas.set_draw_color(vehicle_color(vehicle.color));
        canvas.fill_rect(to_sdl_rect(&vehicle.rect))?;
        Ok(())
    }

    fn render_obstacle(canvas: &mut Canvas<Window>, obstacle: &Obstacle) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(255, 0, 0));
        canvas.fill_rect(to_sdl_rect(&obstacle.rect))?;
        Ok(())
    }

    // The drawn segments are clamped to the window; detection itself is not.
    fn render_sensors(
        canvas: &mut Canvas<Window>,
        vehicle: &Vehicle,
        config: &SimConfig,
    ) -> Result<(), String> {
        canvas.set_draw_color(Color::RGB(0, 0, 255));
        for (start, end) in sensor::sensor_lines(vehicle, config) {
            canvas.draw_line(Point::new(start.x, start.y), Point::new(end.x, end.y))?;
        }
        Ok(())
    }
}

pub fn vehicle_color(color: VehicleColor) -> Color {
    match color {
        VehicleColor::Green => Color::RGB(0, 255, 0),
        VehicleColor::Blue => Color::RGB(0, 0, 255),
    }
}

fn to_sdl_rect(rect: &crate::geometry::Rect) -> Rect {
    Rect::new(rect.x, rect.y, rect.width as u32, rect.height as u32)
}
