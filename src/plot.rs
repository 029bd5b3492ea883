use std::time::Duration;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;
use sdl2::EventPump;

use crate::renderer::vehicle_color;
use crate::simulation::Simulation;
use crate::vehicle::Vehicle;

const GRID_SPACING: i32 = 100;

/// Post-run path plot, reusing the simulation window. Blocks until the
/// window is closed or Escape is pressed.
pub fn show(
    canvas: &mut Canvas<Window>,
    event_pump: &mut EventPump,
    sim: &Simulation,
) -> Result<(), String> {
    if sim.vehicles.iter().all(|vehicle| vehicle.path.is_empty()) {
        log::warn!("no ticks were executed, skipping the path plot");
        return Ok(());
    }

    log::info!("showing recorded vehicle paths, close the window to exit");
    loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(()),
                _ => {}
            }
        }

        render(canvas, sim)?;
        std::thread::sleep(Duration::from_millis(33));
    }
}

fn render(canvas: &mut Canvas<Window>, sim: &Simulation) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(255, 255, 255));
    canvas.clear();

    render_grid(canvas, sim)?;
    for vehicle in &sim.vehicles {
        render_path(canvas, vehicle)?;
    }

    canvas.present();
    Ok(())
}

// Plot coordinates match world coordinates one-to-one, so the plotted paths
// line up with where the vehicles actually drove on screen.
fn render_grid(canvas: &mut Canvas<Window>, sim: &Simulation) -> Result<(), String> {
    canvas.set_draw_color(Color::RGB(220, 220, 220));

    let mut x = GRID_SPACING;
    while x < sim.config.width {
        canvas.draw_line(Point::new(x, 0), Point::new(x, sim.config.height))?;
        x += GRID_SPACING;
    }

    let mut y = GRID_SPACING;
    while y < sim.config.height {
        canvas.draw_line(Point::new(0, y), Point::new(sim.config.width, y))?;
        y += GRID_SPACING;
    }

    Ok(())
}

fn render_path(canvas: &mut Canvas<Window>, vehicle: &Vehicle) -> Result<(), String> {
    if vehicle.path.len() < 2 {
        return Ok(());
    }

    canvas.set_draw_color(vehicle_color(vehicle.color));
    let points: Vec<Point> = vehicle
        .path
        .iter()
        .map(|position| Point::new(position.x, position.y))
        .collect();
    canvas.draw_lines(points.as_slice())?;

    Ok(())
}
