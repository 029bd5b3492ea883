use std::time::Instant;

use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::config::SimConfig;
use crate::plot;
use crate::renderer::Renderer;
use crate::simulation::Simulation;

pub fn run() -> Result<(), String> {
    let config = SimConfig::default();
    let mut sim = Simulation::new(config).map_err(|e| e.to_string())?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let window = video_subsystem
        .window(
            "Autonomous Vehicle Obstacle Avoidance",
            config.width as u32,
            config.height as u32,
        )
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let mut event_pump = sdl_context.event_pump()?;
    let frame_duration = config.frame_duration();
    let mut running = true;

    log::info!(
        "simulation started: {} vehicles, {} obstacles, {} ticks/s",
        sim.vehicles.len(),
        sim.obstacles.len(),
        config.tick_rate
    );

    while running {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => running = false,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    repeat: false,
                    ..
                } => {
                    sim.shuffle_obstacles(&mut rand::thread_rng());
                    log::info!("obstacle layout regenerated");
                }
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => sim.stats.log_progress(),
                _ => {}
            }
        }

        sim.step();
        Renderer::render_frame(&mut canvas, &sim)?;

        // Periodic heartbeat, once a minute at the default rate
        if sim.stats.ticks % (config.tick_rate as u64 * 60) == 0 {
            sim.stats.log_progress();
        }

        let frame_time = frame_start.elapsed();
        if frame_time < frame_duration {
            std::thread::sleep(frame_duration - frame_time);
        }
    }

    sim.stats.display();

    // Hand the recorded paths to the post-run plot view
    plot::show(&mut canvas, &mut event_pump, &sim)
}
