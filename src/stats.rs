use std::time::Instant;

use crate::policy::Action;

/// Running counters for one simulation run, displayed when the loop exits.
pub struct RunStats {
    pub ticks: u64,
    moves_up: u64,
    moves_down: u64,
    moves_left: u64,
    moves_right: u64,
    started: Instant,
}

impl RunStats {
    pub fn new() -> Self {
        RunStats {
            ticks: 0,
            moves_up: 0,
            moves_down: 0,
            moves_left: 0,
            moves_right: 0,
            started: Instant::now(),
        }
    }

    pub fn record_tick(&mut self) {
        self.ticks += 1;
    }

    pub fn record_action(&mut self, action: Action) {
        match action {
            Action::Up => self.moves_up += 1,
            Action::Down => self.moves_down += 1,
            Action::Left => self.moves_left += 1,
            Action::Right => self.moves_right += 1,
        }
    }

    /// Count of lateral or backward moves, i.e. ticks where some vehicle was
    /// dodging instead of proceeding.
    pub fn evasions(&self) -> u64 {
        self.moves_down + self.moves_left + self.moves_right
    }

    pub fn log_progress(&self) {
        log::info!(
            "tick {}: up {} / left {} / right {} / down {}",
            self.ticks,
            self.moves_up,
            self.moves_left,
            self.moves_right,
            self.moves_down
        );
    }

    pub fn display(&self) {
        let elapsed_sec = self.started.elapsed().as_secs_f32();

        println!("\n╔══════════════════════════════════════════╗");
        println!("║               RUN SUMMARY                ║");
        println!("╠══════════════════════════════════════════╣");
        println!("║ Duration: {:>12.1}s                   ║", elapsed_sec);
        println!("║ Ticks: {:<16}                  ║", self.ticks);
        println!("╠══════════════════════════════════════════╣");
        println!("║ Forward moves: {:<10}                ║", self.moves_up);
        println!("║ Left dodges: {:<12}                ║", self.moves_left);
        println!("║ Right dodges: {:<11}                ║", self.moves_right);
        println!("║ Retreats: {:<15}                ║", self.moves_down);
        println!("║ Total evasions: {:<9}                ║", self.evasions());
        println!("╚══════════════════════════════════════════╝");
    }
}
