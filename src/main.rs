mod app;
mod config;
mod geometry;
mod obstacle;
mod plot;
mod policy;
mod renderer;
mod sensor;
mod simulation;
mod stats;
mod vehicle;

fn main() {
    env_logger::init();
    log::info!("auto_avoid starting up");

    if let Err(e) = app::run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}
